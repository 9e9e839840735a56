// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Type};

use super::{
	ConstantExpression, InputReferenceExpression, RowExpression, SpecialForm, VariableReferenceExpression,
};
use crate::error::ExpressionError;

impl RowExpression {
	/// Changes the declared type of this node for a type-only coercion. The
	/// children are kept as they are. Calls keep the return type of their
	/// function and boolean forms stay boolean; a lambda cannot be retyped.
	pub fn retag(self, ty: Type) -> Result<RowExpression> {
		Ok(match self {
			RowExpression::Constant(constant) => RowExpression::Constant(ConstantExpression {
				value: constant.value,
				ty,
			}),
			RowExpression::InputReference(reference) => RowExpression::InputReference(InputReferenceExpression {
				field: reference.field,
				ty,
			}),
			RowExpression::VariableReference(reference) => {
				RowExpression::VariableReference(VariableReferenceExpression {
					name: reference.name,
					ty,
				})
			}
			RowExpression::Call(call) => RowExpression::Call(call),
			RowExpression::Special(form) => RowExpression::Special(form.retag(ty)),
			RowExpression::Lambda(lambda) => {
				let expression = RowExpression::Lambda(lambda).to_string();
				return Err(ExpressionError::UnsupportedRetag {
					expression,
					ty,
				}
				.into());
			}
		})
	}
}

impl SpecialForm {
	fn retag(self, ty: Type) -> SpecialForm {
		match self {
			SpecialForm::If(mut form) => {
				form.ty = ty;
				SpecialForm::If(form)
			}
			SpecialForm::Switch(mut form) => {
				form.ty = ty;
				SpecialForm::Switch(form)
			}
			SpecialForm::Coalesce(mut form) => {
				form.ty = ty;
				SpecialForm::Coalesce(form)
			}
			SpecialForm::NullIf(mut form) => {
				form.ty = ty;
				SpecialForm::NullIf(form)
			}
			SpecialForm::Dereference(mut form) => {
				form.ty = ty;
				SpecialForm::Dereference(form)
			}
			SpecialForm::RowConstructor(mut form) => {
				form.ty = ty;
				SpecialForm::RowConstructor(form)
			}
			SpecialForm::Bind(mut form) => {
				form.ty = ty;
				SpecialForm::Bind(form)
			}
			boolean => boolean,
		}
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_type::Value;

	use super::*;
	use crate::row::{CoalesceExpression, LambdaDefinitionExpression};

	#[test]
	fn test_retag_null_constant() {
		let retagged = RowExpression::null(Type::Unknown).retag(Type::Int8).unwrap();
		assert_eq!(retagged, RowExpression::constant(Value::Null, Type::Int8));
	}

	#[test]
	fn test_retag_reference() {
		let retagged = RowExpression::input(3, Type::Unknown).retag(Type::Utf8).unwrap();
		assert_eq!(retagged, RowExpression::input(3, Type::Utf8));
	}

	#[test]
	fn test_retag_special_form_keeps_children() {
		let coalesce = RowExpression::Special(SpecialForm::Coalesce(CoalesceExpression {
			operands: vec![RowExpression::null(Type::Unknown), RowExpression::null(Type::Unknown)],
			ty: Type::Unknown,
		}));
		let retagged = coalesce.retag(Type::Int4).unwrap();
		assert_eq!(retagged.ty(), Type::Int4);
		let RowExpression::Special(SpecialForm::Coalesce(retagged)) = retagged else {
			panic!("expected coalesce");
		};
		assert_eq!(retagged.operands[0].ty(), Type::Unknown);
	}

	#[test]
	fn test_retag_lambda_fails() {
		let lambda = RowExpression::Lambda(LambdaDefinitionExpression {
			parameters: vec![],
			body: Box::new(RowExpression::constant(1, Type::Int4)),
		});
		assert_eq!(lambda.retag(Type::Int8).unwrap_err().code, "EXPRESSION_004");
	}
}
