// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexSet;
use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Result, Type, Value};
use tracing::{debug, trace};

use super::Folder;
use crate::row::{InExpression, RowExpression, SpecialForm};

impl Folder<'_> {
	/// With a constant value the list is decided in order until an element
	/// is not a constant. Elements already ruled out are dropped. From the
	/// first undecided element on nothing is compared, the elements are only
	/// folded into the residual.
	pub(super) fn in_list(&mut self, form: InExpression) -> Result<RowExpression> {
		let value = self.fold(*form.value)?;

		let Some(target) = value.as_constant().cloned() else {
			let list = self.fold_all(form.list)?;
			return Ok(Self::membership(value, list, form.equal, form.hash_code, form.indeterminate));
		};

		if target.is_null() {
			return Ok(RowExpression::null(Type::Boolean));
		}

		let mut list = Vec::with_capacity(form.list.len());
		let mut seen_null = false;
		let mut decided = true;

		for element in form.list {
			let element = self.fold(element)?;
			if !decided {
				list.push(element);
				continue;
			}

			if let Some(candidate) = element.as_constant() {
				match form.equal.invoke(&[target.clone(), candidate.clone()]) {
					Ok(Value::Boolean(true)) => {
						trace!(%candidate, "in list matched");
						return Ok(RowExpression::constant(true, Type::Boolean));
					}
					Ok(Value::Boolean(false)) => {
						trace!(%candidate, "in list element ruled out");
						continue;
					}
					Ok(_) => seen_null = true,
					Err(err) => {
						debug!(code = err.code(), "in list element left undecided");
						decided = false;
					}
				}
			} else {
				decided = false;
			}
			list.push(element);
		}

		if decided {
			let result = if seen_null {
				Value::Null
			} else {
				Value::Boolean(false)
			};
			return Ok(RowExpression::constant(result, Type::Boolean));
		}

		Ok(Self::membership(value, list, form.equal, form.hash_code, form.indeterminate))
	}

	fn membership(
		value: RowExpression,
		list: Vec<RowExpression>,
		equal: ResolvedFunction,
		hash_code: ResolvedFunction,
		indeterminate: ResolvedFunction,
	) -> RowExpression {
		let mut list = distinct_constants(list);

		if list.len() == 1 {
			if let Some(element) = list.pop() {
				return RowExpression::call(equal, [value, element]);
			}
		}

		SpecialForm::In(InExpression {
			value: Box::new(value),
			list,
			equal,
			hash_code,
			indeterminate,
		})
		.into()
	}
}

/// Drops repeated constants, keeping the first occurrence. Non-constant
/// elements are kept as they are.
fn distinct_constants(list: Vec<RowExpression>) -> Vec<RowExpression> {
	let mut seen = IndexSet::new();
	list.into_iter()
		.filter(|element| match element.as_constant() {
			Some(value) => seen.insert(value.clone()),
			None => true,
		})
		.collect()
}
