// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The lowered expression tree handed to the execution backend. Every node
//! carries its type; trees are never mutated, only rebuilt.

use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Type, Value};

mod display;
mod retag;
mod special;

pub use special::{
	AndExpression, BetweenExpression, BindExpression, CoalesceExpression, DereferenceExpression, Form,
	IfExpression, InExpression, IsNullExpression, NullIfExpression, OrExpression, RowConstructorExpression,
	SpecialForm, SwitchExpression, WhenClause,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowExpression {
	Constant(ConstantExpression),

	InputReference(InputReferenceExpression),

	VariableReference(VariableReferenceExpression),

	Call(CallExpression),

	Special(SpecialForm),

	Lambda(LambdaDefinitionExpression),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantExpression {
	pub value: Value,
	pub ty: Type,
}

/// A value read from a fixed evaluation channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputReferenceExpression {
	pub field: usize,
	pub ty: Type,
}

/// A symbol without a channel, e.g. a lambda parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableReferenceExpression {
	pub name: String,
	pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallExpression {
	pub function: ResolvedFunction,
	pub arguments: Vec<RowExpression>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LambdaParameter {
	pub name: String,
	pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LambdaDefinitionExpression {
	pub parameters: Vec<LambdaParameter>,
	pub body: Box<RowExpression>,
}

impl LambdaDefinitionExpression {
	pub fn ty(&self) -> Type {
		Type::function(self.parameters.iter().map(|p| p.ty.clone()), self.body.ty())
	}
}

impl RowExpression {
	pub fn constant(value: impl Into<Value>, ty: Type) -> Self {
		RowExpression::Constant(ConstantExpression {
			value: value.into(),
			ty,
		})
	}

	pub fn null(ty: Type) -> Self {
		Self::constant(Value::Null, ty)
	}

	pub fn input(field: usize, ty: Type) -> Self {
		RowExpression::InputReference(InputReferenceExpression {
			field,
			ty,
		})
	}

	pub fn variable(name: impl Into<String>, ty: Type) -> Self {
		RowExpression::VariableReference(VariableReferenceExpression {
			name: name.into(),
			ty,
		})
	}

	pub fn call(function: ResolvedFunction, arguments: impl IntoIterator<Item = RowExpression>) -> Self {
		RowExpression::Call(CallExpression {
			function,
			arguments: arguments.into_iter().collect(),
		})
	}

	pub fn ty(&self) -> Type {
		match self {
			RowExpression::Constant(constant) => constant.ty.clone(),
			RowExpression::InputReference(reference) => reference.ty.clone(),
			RowExpression::VariableReference(reference) => reference.ty.clone(),
			RowExpression::Call(call) => call.function.return_type().clone(),
			RowExpression::Special(form) => form.ty(),
			RowExpression::Lambda(lambda) => lambda.ty(),
		}
	}

	pub fn as_constant(&self) -> Option<&Value> {
		match self {
			RowExpression::Constant(constant) => Some(&constant.value),
			_ => None,
		}
	}

	pub fn is_constant(&self) -> bool {
		matches!(self, RowExpression::Constant(_))
	}

	pub fn is_null_constant(&self) -> bool {
		matches!(self, RowExpression::Constant(ConstantExpression { value: Value::Null, .. }))
	}
}

impl From<SpecialForm> for RowExpression {
	fn from(form: SpecialForm) -> Self {
		RowExpression::Special(form)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_lambda_type() {
		let lambda = LambdaDefinitionExpression {
			parameters: vec![LambdaParameter {
				name: "x".to_string(),
				ty: Type::Int8,
			}],
			body: Box::new(RowExpression::variable("x", Type::Int8)),
		};
		assert_eq!(RowExpression::Lambda(lambda).ty(), Type::function([Type::Int8], Type::Int8));
	}

	#[test]
	fn test_null_constant() {
		let null = RowExpression::null(Type::Utf8);
		assert!(null.is_null_constant());
		assert_eq!(null.ty(), Type::Utf8);
		assert!(!RowExpression::constant(1, Type::Int4).is_null_constant());
	}
}
