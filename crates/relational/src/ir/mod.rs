// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The analyzed, type-correct scalar expression tree the translator consumes.

use std::fmt::{Display, Formatter};

use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Type, Value};

mod display;

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
	Constant(ConstantExpression),

	Reference(ReferenceExpression),

	Comparison(ComparisonExpression),

	Arithmetic(ArithmeticExpression),

	Negation(NegationExpression),

	Logical(LogicalExpression),

	Not(NotExpression),

	Cast(CastExpression),

	Case(CaseExpression),

	Switch(SwitchExpression),

	Coalesce(CoalesceExpression),

	In(InExpression),

	IsNull(IsNullExpression),

	NullIf(NullIfExpression),

	Between(BetweenExpression),

	FieldReference(FieldReferenceExpression),

	Row(TupleExpression),

	Lambda(LambdaExpression),

	Bind(BindExpression),

	Call(CallExpression),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstantExpression {
	pub value: Value,
	pub ty: Type,
}

/// A named symbol; becomes an input channel when the slot layout knows it.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceExpression {
	pub name: String,
	pub ty: Type,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComparisonOperator {
	Equal,
	NotEqual,
	LessThan,
	LessThanOrEqual,
	GreaterThan,
	GreaterThanOrEqual,
	IsDistinctFrom,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonExpression {
	pub operator: ComparisonOperator,
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticOperator {
	Add,
	Subtract,
	Multiply,
	Divide,
	Modulus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArithmeticExpression {
	pub operator: ArithmeticOperator,
	pub left: Box<Expression>,
	pub right: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NegationExpression {
	pub expression: Box<Expression>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalOperator {
	And,
	Or,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogicalExpression {
	pub operator: LogicalOperator,
	pub terms: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotExpression {
	pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CastExpression {
	pub expression: Box<Expression>,
	pub to: Type,
	/// `TRY_CAST`: a failed conversion yields NULL
	pub safe: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhenClause {
	pub operand: Expression,
	pub result: Expression,
}

/// `CASE WHEN condition THEN result ... [ELSE default] END`
#[derive(Clone, Debug, PartialEq)]
pub struct CaseExpression {
	pub clauses: Vec<WhenClause>,
	pub default: Option<Box<Expression>>,
}

/// `CASE operand WHEN value THEN result ... [ELSE default] END`
#[derive(Clone, Debug, PartialEq)]
pub struct SwitchExpression {
	pub operand: Box<Expression>,
	pub clauses: Vec<WhenClause>,
	pub default: Option<Box<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoalesceExpression {
	pub operands: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InExpression {
	pub value: Box<Expression>,
	pub list: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IsNullExpression {
	pub expression: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullIfExpression {
	pub first: Box<Expression>,
	pub second: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BetweenExpression {
	pub value: Box<Expression>,
	pub min: Box<Expression>,
	pub max: Box<Expression>,
}

/// Access to the 0-based `index`th field of a row.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldReferenceExpression {
	pub base: Box<Expression>,
	pub index: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TupleExpression {
	pub fields: Vec<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LambdaParameter {
	pub name: String,
	pub ty: Type,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LambdaExpression {
	pub parameters: Vec<LambdaParameter>,
	pub body: Box<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BindExpression {
	pub values: Vec<Expression>,
	pub function: Box<Expression>,
}

/// A call of a function the analyzer already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpression {
	pub function: ResolvedFunction,
	pub arguments: Vec<Expression>,
}

fn common_type<'a>(types: impl IntoIterator<Item = &'a Expression>) -> Type {
	types.into_iter().map(Expression::ty).fold(Type::Unknown, |acc, ty| Type::promote(&acc, &ty).unwrap_or(acc))
}

impl Expression {
	/// The type the analyzer assigned to this expression.
	pub fn ty(&self) -> Type {
		match self {
			Expression::Constant(constant) => constant.ty.clone(),
			Expression::Reference(reference) => reference.ty.clone(),
			Expression::Comparison(_)
			| Expression::Logical(_)
			| Expression::Not(_)
			| Expression::In(_)
			| Expression::IsNull(_)
			| Expression::Between(_) => Type::Boolean,
			Expression::Arithmetic(arithmetic) => {
				let left = arithmetic.left.ty();
				let right = arithmetic.right.ty();
				Type::promote(&left, &right).unwrap_or(left)
			}
			Expression::Negation(negation) => negation.expression.ty(),
			Expression::Cast(cast) => cast.to.clone(),
			Expression::Case(case) => common_type(
				case.clauses.iter().map(|clause| &clause.result).chain(case.default.as_deref()),
			),
			Expression::Switch(switch) => common_type(
				switch.clauses.iter().map(|clause| &clause.result).chain(switch.default.as_deref()),
			),
			Expression::Coalesce(coalesce) => common_type(&coalesce.operands),
			Expression::NullIf(null_if) => null_if.first.ty(),
			Expression::FieldReference(field) => field.base.ty().field(field.index).cloned().unwrap_or(Type::Unknown),
			Expression::Row(row) => Type::Row(row.fields.iter().map(Expression::ty).collect()),
			Expression::Lambda(lambda) => {
				Type::function(lambda.parameters.iter().map(|p| p.ty.clone()), lambda.body.ty())
			}
			Expression::Bind(bind) => match bind.function.ty() {
				Type::Function {
					parameters,
					result,
				} => Type::Function {
					parameters: parameters.into_iter().skip(bind.values.len()).collect(),
					result,
				},
				other => other,
			},
			Expression::Call(call) => call.function.return_type().clone(),
		}
	}
}

impl Display for ComparisonOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ComparisonOperator::Equal => "=",
			ComparisonOperator::NotEqual => "<>",
			ComparisonOperator::LessThan => "<",
			ComparisonOperator::LessThanOrEqual => "<=",
			ComparisonOperator::GreaterThan => ">",
			ComparisonOperator::GreaterThanOrEqual => ">=",
			ComparisonOperator::IsDistinctFrom => "IS DISTINCT FROM",
		})
	}
}

impl Display for ArithmeticOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ArithmeticOperator::Add => "+",
			ArithmeticOperator::Subtract => "-",
			ArithmeticOperator::Multiply => "*",
			ArithmeticOperator::Divide => "/",
			ArithmeticOperator::Modulus => "%",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn constant(value: impl Into<Value>, ty: Type) -> Expression {
		Expression::Constant(ConstantExpression {
			value: value.into(),
			ty,
		})
	}

	#[test]
	fn test_arithmetic_type_is_promoted() {
		let expression = Expression::Arithmetic(ArithmeticExpression {
			operator: ArithmeticOperator::Add,
			left: Box::new(constant(1, Type::Int4)),
			right: Box::new(constant(2i64, Type::Int8)),
		});
		assert_eq!(expression.ty(), Type::Int8);
	}

	#[test]
	fn test_case_type_skips_null_branches() {
		let expression = Expression::Case(CaseExpression {
			clauses: vec![WhenClause {
				operand: constant(true, Type::Boolean),
				result: constant(Value::Null, Type::Unknown),
			}],
			default: Some(Box::new(constant("a", Type::Utf8))),
		});
		assert_eq!(expression.ty(), Type::Utf8);
	}

	#[test]
	fn test_field_reference_type() {
		let expression = Expression::FieldReference(FieldReferenceExpression {
			base: Box::new(Expression::Row(TupleExpression {
				fields: vec![constant(1, Type::Int4), constant("a", Type::Utf8)],
			})),
			index: 1,
		});
		assert_eq!(expression.ty(), Type::Utf8);
	}

	#[test]
	fn test_bind_consumes_leading_parameters() {
		let expression = Expression::Bind(BindExpression {
			values: vec![constant(1, Type::Int4)],
			function: Box::new(Expression::Lambda(LambdaExpression {
				parameters: vec![
					LambdaParameter {
						name: "a".to_string(),
						ty: Type::Int4,
					},
					LambdaParameter {
						name: "b".to_string(),
						ty: Type::Int8,
					},
				],
				body: Box::new(constant(true, Type::Boolean)),
			})),
		});
		assert_eq!(expression.ty(), Type::function([Type::Int8], Type::Boolean));
	}
}
