// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Result};

use rowexpr_type::Value;

use super::{Expression, LogicalOperator, WhenClause};

fn join(items: &[Expression]) -> String {
	items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn write_clauses(f: &mut Formatter<'_>, clauses: &[WhenClause], default: Option<&Expression>) -> Result {
	for clause in clauses {
		write!(f, " WHEN {} THEN {}", clause.operand, clause.result)?;
	}
	if let Some(default) = default {
		write!(f, " ELSE {}", default)?;
	}
	f.write_str(" END")
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match self {
			Expression::Constant(constant) => match &constant.value {
				Value::Utf8(value) => write!(f, "'{}'", value),
				value => Display::fmt(value, f),
			},
			Expression::Reference(reference) => f.write_str(&reference.name),
			Expression::Comparison(comparison) => {
				write!(f, "({} {} {})", comparison.left, comparison.operator, comparison.right)
			}
			Expression::Arithmetic(arithmetic) => {
				write!(f, "({} {} {})", arithmetic.left, arithmetic.operator, arithmetic.right)
			}
			Expression::Negation(negation) => write!(f, "(-{})", negation.expression),
			Expression::Logical(logical) => {
				let operator = match logical.operator {
					LogicalOperator::And => " AND ",
					LogicalOperator::Or => " OR ",
				};
				let terms = logical.terms.iter().map(ToString::to_string).collect::<Vec<_>>();
				write!(f, "({})", terms.join(operator))
			}
			Expression::Not(not) => write!(f, "(NOT {})", not.expression),
			Expression::Cast(cast) => {
				let name = if cast.safe {
					"TRY_CAST"
				} else {
					"CAST"
				};
				write!(f, "{}({} AS {})", name, cast.expression, cast.to)
			}
			Expression::Case(case) => {
				f.write_str("CASE")?;
				write_clauses(f, &case.clauses, case.default.as_deref())
			}
			Expression::Switch(switch) => {
				write!(f, "CASE {}", switch.operand)?;
				write_clauses(f, &switch.clauses, switch.default.as_deref())
			}
			Expression::Coalesce(coalesce) => write!(f, "COALESCE({})", join(&coalesce.operands)),
			Expression::In(in_list) => write!(f, "({} IN ({}))", in_list.value, join(&in_list.list)),
			Expression::IsNull(is_null) => write!(f, "({} IS NULL)", is_null.expression),
			Expression::NullIf(null_if) => write!(f, "NULLIF({}, {})", null_if.first, null_if.second),
			Expression::Between(between) => {
				write!(f, "({} BETWEEN {} AND {})", between.value, between.min, between.max)
			}
			Expression::FieldReference(field) => write!(f, "{}[{}]", field.base, field.index),
			Expression::Row(row) => write!(f, "ROW({})", join(&row.fields)),
			Expression::Lambda(lambda) => {
				let parameters = lambda.parameters.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
				write!(f, "({}) -> {}", parameters.join(", "), lambda.body)
			}
			Expression::Bind(bind) => write!(f, "BIND({}, {})", join(&bind.values), bind.function),
			Expression::Call(call) => write!(f, "{}({})", call.function, join(&call.arguments)),
		}
	}
}
