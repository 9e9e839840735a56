// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Type, Value};

use super::RowExpression;

/// The tag of a special form, as understood by the execution backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Form {
	And,
	Or,
	If,
	Switch,
	When,
	Coalesce,
	In,
	IsNull,
	NullIf,
	Between,
	Dereference,
	RowConstructor,
	Bind,
}

impl Display for Form {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Form::And => "AND",
			Form::Or => "OR",
			Form::If => "IF",
			Form::Switch => "SWITCH",
			Form::When => "WHEN",
			Form::Coalesce => "COALESCE",
			Form::In => "IN",
			Form::IsNull => "IS_NULL",
			Form::NullIf => "NULL_IF",
			Form::Between => "BETWEEN",
			Form::Dereference => "DEREFERENCE",
			Form::RowConstructor => "ROW_CONSTRUCTOR",
			Form::Bind => "BIND",
		})
	}
}

/// Control flow and polymorphic equality constructs that are not plain calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpecialForm {
	And(AndExpression),
	Or(OrExpression),
	If(IfExpression),
	Switch(SwitchExpression),
	Coalesce(CoalesceExpression),
	In(InExpression),
	IsNull(IsNullExpression),
	NullIf(NullIfExpression),
	Between(BetweenExpression),
	Dereference(DereferenceExpression),
	RowConstructor(RowConstructorExpression),
	Bind(BindExpression),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AndExpression {
	pub terms: Vec<RowExpression>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrExpression {
	pub terms: Vec<RowExpression>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IfExpression {
	pub condition: Box<RowExpression>,
	pub then: Box<RowExpression>,
	pub otherwise: Box<RowExpression>,
	pub ty: Type,
}

/// One `WHEN operand THEN result` arm of a switch. `equal` compares the
/// switch operand with this arm's operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhenClause {
	pub operand: RowExpression,
	pub result: RowExpression,
	pub equal: ResolvedFunction,
}

impl WhenClause {
	pub fn form(&self) -> Form {
		Form::When
	}

	pub fn arguments(&self) -> Vec<&RowExpression> {
		vec![&self.operand, &self.result]
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchExpression {
	pub operand: Box<RowExpression>,
	pub clauses: Vec<WhenClause>,
	pub default: Box<RowExpression>,
	pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoalesceExpression {
	pub operands: Vec<RowExpression>,
	pub ty: Type,
}

/// Membership test. `hash_code` and `indeterminate` allow the backend to
/// probe a hash set instead of scanning the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InExpression {
	pub value: Box<RowExpression>,
	pub list: Vec<RowExpression>,
	pub equal: ResolvedFunction,
	pub hash_code: ResolvedFunction,
	pub indeterminate: ResolvedFunction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IsNullExpression {
	pub value: Box<RowExpression>,
}

/// `NULLIF(first, second)`. Both sides are converted to the argument type of
/// `equal` before comparing; a missing coercion means the type already matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullIfExpression {
	pub first: Box<RowExpression>,
	pub second: Box<RowExpression>,
	pub ty: Type,
	pub equal: ResolvedFunction,
	pub first_coercion: Option<ResolvedFunction>,
	pub second_coercion: Option<ResolvedFunction>,
}

/// `value BETWEEN min AND max`, checked as `min <= value AND value <= max`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BetweenExpression {
	pub value: Box<RowExpression>,
	pub min: Box<RowExpression>,
	pub max: Box<RowExpression>,
	pub less_than_or_equal: ResolvedFunction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DereferenceExpression {
	pub base: Box<RowExpression>,
	/// 0-based field position, an integer constant
	pub index: Box<RowExpression>,
	pub ty: Type,
}

impl DereferenceExpression {
	pub fn field_index(&self) -> Option<usize> {
		match self.index.as_constant()? {
			Value::Int4(index) => usize::try_from(*index).ok(),
			Value::Int8(index) => usize::try_from(*index).ok(),
			_ => None,
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowConstructorExpression {
	pub fields: Vec<RowExpression>,
	pub ty: Type,
}

/// Partial application: `values` are bound to the leading parameters of `function`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindExpression {
	pub values: Vec<RowExpression>,
	pub function: Box<RowExpression>,
	pub ty: Type,
}

impl SpecialForm {
	pub fn form(&self) -> Form {
		match self {
			SpecialForm::And(_) => Form::And,
			SpecialForm::Or(_) => Form::Or,
			SpecialForm::If(_) => Form::If,
			SpecialForm::Switch(_) => Form::Switch,
			SpecialForm::Coalesce(_) => Form::Coalesce,
			SpecialForm::In(_) => Form::In,
			SpecialForm::IsNull(_) => Form::IsNull,
			SpecialForm::NullIf(_) => Form::NullIf,
			SpecialForm::Between(_) => Form::Between,
			SpecialForm::Dereference(_) => Form::Dereference,
			SpecialForm::RowConstructor(_) => Form::RowConstructor,
			SpecialForm::Bind(_) => Form::Bind,
		}
	}

	pub fn ty(&self) -> Type {
		match self {
			SpecialForm::And(_)
			| SpecialForm::Or(_)
			| SpecialForm::In(_)
			| SpecialForm::IsNull(_)
			| SpecialForm::Between(_) => Type::Boolean,
			SpecialForm::If(form) => form.ty.clone(),
			SpecialForm::Switch(form) => form.ty.clone(),
			SpecialForm::Coalesce(form) => form.ty.clone(),
			SpecialForm::NullIf(form) => form.ty.clone(),
			SpecialForm::Dereference(form) => form.ty.clone(),
			SpecialForm::RowConstructor(form) => form.ty.clone(),
			SpecialForm::Bind(form) => form.ty.clone(),
		}
	}

	/// The operands in backend order. A switch lists its operand, then each
	/// clause's operand and result, then the default.
	pub fn arguments(&self) -> Vec<&RowExpression> {
		match self {
			SpecialForm::And(form) => form.terms.iter().collect(),
			SpecialForm::Or(form) => form.terms.iter().collect(),
			SpecialForm::If(form) => vec![form.condition.as_ref(), form.then.as_ref(), form.otherwise.as_ref()],
			SpecialForm::Switch(form) => {
				let mut result = vec![form.operand.as_ref()];
				for clause in &form.clauses {
					result.extend(clause.arguments());
				}
				result.push(form.default.as_ref());
				result
			}
			SpecialForm::Coalesce(form) => form.operands.iter().collect(),
			SpecialForm::In(form) => std::iter::once(form.value.as_ref()).chain(form.list.iter()).collect(),
			SpecialForm::IsNull(form) => vec![form.value.as_ref()],
			SpecialForm::NullIf(form) => vec![form.first.as_ref(), form.second.as_ref()],
			SpecialForm::Between(form) => vec![form.value.as_ref(), form.min.as_ref(), form.max.as_ref()],
			SpecialForm::Dereference(form) => vec![form.base.as_ref(), form.index.as_ref()],
			SpecialForm::RowConstructor(form) => form.fields.iter().collect(),
			SpecialForm::Bind(form) => form.values.iter().chain(std::iter::once(form.function.as_ref())).collect(),
		}
	}

	/// Functions resolved ahead of time for the backend to call.
	pub fn function_dependencies(&self) -> Vec<&ResolvedFunction> {
		match self {
			SpecialForm::Switch(form) => form.clauses.iter().map(|clause| &clause.equal).collect(),
			SpecialForm::In(form) => vec![&form.equal, &form.hash_code, &form.indeterminate],
			SpecialForm::NullIf(form) => {
				let mut result = vec![&form.equal];
				result.extend(form.first_coercion.iter());
				result.extend(form.second_coercion.iter());
				result
			}
			SpecialForm::Between(form) => vec![&form.less_than_or_equal],
			_ => vec![],
		}
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_function::{FunctionCatalog, OperatorType, StandardCatalog};

	use super::*;

	#[test]
	fn test_switch_arguments_are_flattened() {
		let catalog = StandardCatalog::new();
		let equal = catalog.resolve_operator(OperatorType::Equal, &[Type::Int4, Type::Int4]).unwrap();
		let switch = SpecialForm::Switch(SwitchExpression {
			operand: Box::new(RowExpression::variable("x", Type::Int4)),
			clauses: vec![WhenClause {
				operand: RowExpression::constant(1, Type::Int4),
				result: RowExpression::constant("one", Type::Utf8),
				equal: equal.clone(),
			}],
			default: Box::new(RowExpression::null(Type::Utf8)),
			ty: Type::Utf8,
		});

		assert_eq!(switch.form(), Form::Switch);
		assert_eq!(switch.ty(), Type::Utf8);
		assert_eq!(switch.arguments().len(), 4);
		assert_eq!(switch.function_dependencies(), vec![&equal]);
	}

	#[test]
	fn test_boolean_forms() {
		let is_null = SpecialForm::IsNull(IsNullExpression {
			value: Box::new(RowExpression::variable("x", Type::Utf8)),
		});
		assert_eq!(is_null.ty(), Type::Boolean);
		assert_eq!(is_null.form().to_string(), "IS_NULL");
		assert!(is_null.function_dependencies().is_empty());
	}

	#[test]
	fn test_dereference_index() {
		let dereference = DereferenceExpression {
			base: Box::new(RowExpression::variable("r", Type::Row(vec![Type::Int4, Type::Utf8]))),
			index: Box::new(RowExpression::constant(1, Type::Int4)),
			ty: Type::Utf8,
		};
		assert_eq!(dereference.field_index(), Some(1));
	}
}
