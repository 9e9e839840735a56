// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter, Result};

use rowexpr_type::Value;

use super::{RowExpression, SpecialForm, WhenClause};

fn write_list<'a>(f: &mut Formatter<'_>, items: impl IntoIterator<Item = &'a RowExpression>) -> Result {
	for (idx, item) in items.into_iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		Display::fmt(item, f)?;
	}
	Ok(())
}

impl Display for RowExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		match self {
			RowExpression::Constant(constant) => match &constant.value {
				Value::Utf8(value) => write!(f, "'{}'", value),
				value => Display::fmt(value, f),
			},
			RowExpression::InputReference(reference) => write!(f, "#{}", reference.field),
			RowExpression::VariableReference(reference) => f.write_str(&reference.name),
			RowExpression::Call(call) => {
				write!(f, "{}(", call.function)?;
				write_list(f, &call.arguments)?;
				f.write_str(")")
			}
			RowExpression::Special(form) => Display::fmt(form, f),
			RowExpression::Lambda(lambda) => {
				f.write_str("(")?;
				for (idx, parameter) in lambda.parameters.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					f.write_str(&parameter.name)?;
				}
				write!(f, ") -> {}", lambda.body)
			}
		}
	}
}

impl Display for WhenClause {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(f, "WHEN({}, {})", self.operand, self.result)
	}
}

impl Display for SpecialForm {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		write!(f, "{}(", self.form())?;
		match self {
			SpecialForm::Switch(switch) => {
				Display::fmt(&switch.operand, f)?;
				for clause in &switch.clauses {
					write!(f, ", {}", clause)?;
				}
				write!(f, ", {}", switch.default)?;
			}
			other => write_list(f, other.arguments())?,
		}
		f.write_str(")")
	}
}
