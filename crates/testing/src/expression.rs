// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Terse builders for source expressions.

use rowexpr_function::ResolvedFunction;
use rowexpr_relational::ir::{
	ArithmeticExpression, ArithmeticOperator, BetweenExpression, BindExpression, CallExpression, CaseExpression,
	CastExpression, CoalesceExpression, ComparisonExpression, ComparisonOperator, ConstantExpression, Expression,
	FieldReferenceExpression, InExpression, IsNullExpression, LambdaExpression, LambdaParameter, LogicalExpression,
	LogicalOperator, NegationExpression, NotExpression, NullIfExpression, ReferenceExpression, SwitchExpression,
	TupleExpression, WhenClause,
};
use rowexpr_type::{Type, Value};

pub fn constant(value: impl Into<Value>, ty: Type) -> Expression {
	Expression::Constant(ConstantExpression {
		value: value.into(),
		ty,
	})
}

pub fn int(value: i32) -> Expression {
	constant(value, Type::Int4)
}

pub fn bigint(value: i64) -> Expression {
	constant(value, Type::Int8)
}

pub fn double(value: f64) -> Expression {
	constant(value, Type::Float8)
}

pub fn text(value: &str) -> Expression {
	constant(value, Type::Utf8)
}

pub fn boolean(value: bool) -> Expression {
	constant(value, Type::Boolean)
}

/// An untyped NULL literal.
pub fn null() -> Expression {
	constant(Value::Null, Type::Unknown)
}

pub fn typed_null(ty: Type) -> Expression {
	constant(Value::Null, ty)
}

pub fn reference(name: &str, ty: Type) -> Expression {
	Expression::Reference(ReferenceExpression {
		name: name.to_string(),
		ty,
	})
}

pub fn bound_value() -> Expression {
	reference("bound_value", Type::Int4)
}

pub fn unbound_value() -> Expression {
	reference("unbound_value", Type::Int4)
}

fn comparison(operator: ComparisonOperator, left: Expression, right: Expression) -> Expression {
	Expression::Comparison(ComparisonExpression {
		operator,
		left: Box::new(left),
		right: Box::new(right),
	})
}

pub fn eq(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::Equal, left, right)
}

pub fn ne(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::NotEqual, left, right)
}

pub fn lt(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::LessThan, left, right)
}

pub fn le(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::LessThanOrEqual, left, right)
}

pub fn gt(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::GreaterThan, left, right)
}

pub fn ge(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::GreaterThanOrEqual, left, right)
}

pub fn distinct_from(left: Expression, right: Expression) -> Expression {
	comparison(ComparisonOperator::IsDistinctFrom, left, right)
}

fn arithmetic(operator: ArithmeticOperator, left: Expression, right: Expression) -> Expression {
	Expression::Arithmetic(ArithmeticExpression {
		operator,
		left: Box::new(left),
		right: Box::new(right),
	})
}

pub fn add(left: Expression, right: Expression) -> Expression {
	arithmetic(ArithmeticOperator::Add, left, right)
}

pub fn sub(left: Expression, right: Expression) -> Expression {
	arithmetic(ArithmeticOperator::Subtract, left, right)
}

pub fn mul(left: Expression, right: Expression) -> Expression {
	arithmetic(ArithmeticOperator::Multiply, left, right)
}

pub fn div(left: Expression, right: Expression) -> Expression {
	arithmetic(ArithmeticOperator::Divide, left, right)
}

pub fn rem(left: Expression, right: Expression) -> Expression {
	arithmetic(ArithmeticOperator::Modulus, left, right)
}

pub fn neg(expression: Expression) -> Expression {
	Expression::Negation(NegationExpression {
		expression: Box::new(expression),
	})
}

pub fn and(terms: impl IntoIterator<Item = Expression>) -> Expression {
	Expression::Logical(LogicalExpression {
		operator: LogicalOperator::And,
		terms: terms.into_iter().collect(),
	})
}

pub fn or(terms: impl IntoIterator<Item = Expression>) -> Expression {
	Expression::Logical(LogicalExpression {
		operator: LogicalOperator::Or,
		terms: terms.into_iter().collect(),
	})
}

pub fn not(expression: Expression) -> Expression {
	Expression::Not(NotExpression {
		expression: Box::new(expression),
	})
}

pub fn cast(expression: Expression, to: Type) -> Expression {
	Expression::Cast(CastExpression {
		expression: Box::new(expression),
		to,
		safe: false,
	})
}

pub fn try_cast(expression: Expression, to: Type) -> Expression {
	Expression::Cast(CastExpression {
		expression: Box::new(expression),
		to,
		safe: true,
	})
}

pub fn when(operand: Expression, result: Expression) -> WhenClause {
	WhenClause {
		operand,
		result,
	}
}

pub fn case(clauses: impl IntoIterator<Item = WhenClause>, default: Option<Expression>) -> Expression {
	Expression::Case(CaseExpression {
		clauses: clauses.into_iter().collect(),
		default: default.map(Box::new),
	})
}

pub fn switch(
	operand: Expression,
	clauses: impl IntoIterator<Item = WhenClause>,
	default: Option<Expression>,
) -> Expression {
	Expression::Switch(SwitchExpression {
		operand: Box::new(operand),
		clauses: clauses.into_iter().collect(),
		default: default.map(Box::new),
	})
}

pub fn coalesce(operands: impl IntoIterator<Item = Expression>) -> Expression {
	Expression::Coalesce(CoalesceExpression {
		operands: operands.into_iter().collect(),
	})
}

pub fn in_list(value: Expression, list: impl IntoIterator<Item = Expression>) -> Expression {
	Expression::In(InExpression {
		value: Box::new(value),
		list: list.into_iter().collect(),
	})
}

pub fn is_null(expression: Expression) -> Expression {
	Expression::IsNull(IsNullExpression {
		expression: Box::new(expression),
	})
}

pub fn null_if(first: Expression, second: Expression) -> Expression {
	Expression::NullIf(NullIfExpression {
		first: Box::new(first),
		second: Box::new(second),
	})
}

pub fn between(value: Expression, min: Expression, max: Expression) -> Expression {
	Expression::Between(BetweenExpression {
		value: Box::new(value),
		min: Box::new(min),
		max: Box::new(max),
	})
}

pub fn field(base: Expression, index: usize) -> Expression {
	Expression::FieldReference(FieldReferenceExpression {
		base: Box::new(base),
		index,
	})
}

pub fn row(fields: impl IntoIterator<Item = Expression>) -> Expression {
	Expression::Row(TupleExpression {
		fields: fields.into_iter().collect(),
	})
}

pub fn lambda(parameters: impl IntoIterator<Item = (&'static str, Type)>, body: Expression) -> Expression {
	Expression::Lambda(LambdaExpression {
		parameters: parameters
			.into_iter()
			.map(|(name, ty)| LambdaParameter {
				name: name.to_string(),
				ty,
			})
			.collect(),
		body: Box::new(body),
	})
}

pub fn bind(values: impl IntoIterator<Item = Expression>, function: Expression) -> Expression {
	Expression::Bind(BindExpression {
		values: values.into_iter().collect(),
		function: Box::new(function),
	})
}

pub fn call(function: ResolvedFunction, arguments: impl IntoIterator<Item = Expression>) -> Expression {
	Expression::Call(CallExpression {
		function,
		arguments: arguments.into_iter().collect(),
	})
}
