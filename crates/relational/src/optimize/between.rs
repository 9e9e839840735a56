// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Result, Type, Value, value::logic};

use super::Folder;
use crate::row::{BetweenExpression, RowExpression, SpecialForm};

impl Folder<'_> {
	/// A constant value can be ruled out by either bound alone, so an unknown
	/// or failing other bound does not keep the range alive.
	pub(super) fn between(&mut self, form: BetweenExpression) -> Result<RowExpression> {
		let value = self.fold(*form.value)?;
		let min = self.fold(*form.min)?;
		let max = self.fold(*form.max)?;

		if value.is_null_constant() {
			return Ok(RowExpression::null(Type::Boolean));
		}

		if let Some(target) = value.as_constant() {
			let lower = min.as_constant().and_then(|min| compare(&form.less_than_or_equal, min, target));
			let upper = max.as_constant().and_then(|max| compare(&form.less_than_or_equal, target, max));

			match (lower, upper) {
				(Some(Some(false)), _) | (_, Some(Some(false))) => {
					return Ok(RowExpression::constant(false, Type::Boolean));
				}
				(Some(lower), Some(upper)) => {
					return Ok(RowExpression::constant(Value::from(logic::and(lower, upper)), Type::Boolean));
				}
				_ => {}
			}
		}

		Ok(SpecialForm::Between(BetweenExpression {
			value: Box::new(value),
			min: Box::new(min),
			max: Box::new(max),
			less_than_or_equal: form.less_than_or_equal,
		})
		.into())
	}
}

/// `None` when the comparison failed; otherwise the three-valued outcome.
fn compare(less_than_or_equal: &ResolvedFunction, left: &Value, right: &Value) -> Option<Option<bool>> {
	less_than_or_equal.invoke(&[left.clone(), right.clone()]).ok().map(|result| result.as_bool())
}
