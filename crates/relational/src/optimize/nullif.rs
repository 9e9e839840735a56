// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Result, Value};
use tracing::debug;

use super::Folder;
use crate::row::{NullIfExpression, RowExpression, SpecialForm};

impl Folder<'_> {
	pub(super) fn null_if(&mut self, form: NullIfExpression) -> Result<RowExpression> {
		let first = self.fold(*form.first)?;
		let second = self.fold(*form.second)?;

		if first.is_null_constant() {
			return Ok(RowExpression::null(form.ty));
		}

		if let (Some(left), Some(right)) = (first.as_constant(), second.as_constant()) {
			if right.is_null() {
				return first.retag(form.ty);
			}
			match null_if_equal(&form.equal, form.first_coercion.as_ref(), form.second_coercion.as_ref(), left, right)
			{
				Ok(Some(true)) => return Ok(RowExpression::null(form.ty)),
				Ok(_) => return first.retag(form.ty),
				Err(err) => debug!(code = err.code(), "nullif left undecided"),
			}
		}

		Ok(SpecialForm::NullIf(NullIfExpression {
			first: Box::new(first),
			second: Box::new(second),
			ty: form.ty,
			equal: form.equal,
			first_coercion: form.first_coercion,
			second_coercion: form.second_coercion,
		})
		.into())
	}
}

/// Compares both sides in the argument type of `equal`.
pub(super) fn null_if_equal(
	equal: &ResolvedFunction,
	first_coercion: Option<&ResolvedFunction>,
	second_coercion: Option<&ResolvedFunction>,
	first: &Value,
	second: &Value,
) -> Result<Option<bool>> {
	let coerce = |coercion: Option<&ResolvedFunction>, value: &Value| match coercion {
		Some(coercion) => coercion.invoke(&[value.clone()]),
		None => Ok(value.clone()),
	};
	let first = coerce(first_coercion, first)?;
	let second = coerce(second_coercion, second)?;
	Ok(equal.invoke(&[first, second])?.as_bool())
}
