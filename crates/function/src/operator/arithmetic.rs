// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Type, TypeError, Value, internal_error, return_error};

use super::{as_f64, as_i64, numeric_type};
use crate::OperatorType;

fn overflow(operation: &'static str, ty: Type) -> rowexpr_type::Error {
	TypeError::NumericOverflow {
		operation,
		ty,
	}
	.into()
}

fn operation_name(operator: OperatorType) -> &'static str {
	match operator {
		OperatorType::Add => "addition",
		OperatorType::Subtract => "subtraction",
		OperatorType::Multiply => "multiplication",
		OperatorType::Divide => "division",
		OperatorType::Modulus => "modulus",
		OperatorType::Negation => "negation",
		_ => "operation",
	}
}

fn apply_integer(operator: OperatorType, left: i64, right: i64) -> Result<Option<i64>> {
	Ok(match operator {
		OperatorType::Add => left.checked_add(right),
		OperatorType::Subtract => left.checked_sub(right),
		OperatorType::Multiply => left.checked_mul(right),
		OperatorType::Divide => {
			if right == 0 {
				return_error!(TypeError::DivisionByZero);
			}
			left.checked_div(right)
		}
		OperatorType::Modulus => {
			if right == 0 {
				return_error!(TypeError::DivisionByZero);
			}
			left.checked_rem(right)
		}
		other => return Err(internal_error!("{} is not an arithmetic operator", other)),
	})
}

fn apply_float(operator: OperatorType, left: f64, right: f64) -> Result<f64> {
	Ok(match operator {
		OperatorType::Add => left + right,
		OperatorType::Subtract => left - right,
		OperatorType::Multiply => left * right,
		OperatorType::Divide => left / right,
		OperatorType::Modulus => left % right,
		other => return Err(internal_error!("{} is not an arithmetic operator", other)),
	})
}

/// Applies a binary arithmetic operator in the common type of both operands.
/// Integer results are range checked against that type.
pub fn binary(operator: OperatorType, left: &Value, right: &Value) -> Result<Value> {
	if left.is_null() || right.is_null() {
		return Ok(Value::Null);
	}

	let ty = numeric_type(left, right)
		.ok_or_else(|| internal_error!("{} applied to {} and {}", operator, left.get_type(), right.get_type()))?;

	match ty {
		Type::Int4 | Type::Int8 => {
			let (Some(l), Some(r)) = (as_i64(left), as_i64(right)) else {
				return Err(internal_error!("integer operands expected"));
			};
			let result = apply_integer(operator, l, r)?
				.ok_or_else(|| overflow(operation_name(operator), ty.clone()))?;
			if ty == Type::Int4 {
				i32::try_from(result).map(Value::Int4).map_err(|_| overflow(operation_name(operator), ty))
			} else {
				Ok(Value::Int8(result))
			}
		}
		_ => {
			let (Some(l), Some(r)) = (as_f64(left), as_f64(right)) else {
				return Err(internal_error!("numeric operands expected"));
			};
			Ok(Value::float8(apply_float(operator, l, r)?))
		}
	}
}

pub fn negate(value: &Value) -> Result<Value> {
	match value {
		Value::Null => Ok(Value::Null),
		Value::Int4(v) => v.checked_neg().map(Value::Int4).ok_or_else(|| overflow("negation", Type::Int4)),
		Value::Int8(v) => v.checked_neg().map(Value::Int8).ok_or_else(|| overflow("negation", Type::Int8)),
		Value::Float8(v) => Ok(Value::float8(-v.value())),
		other => Err(internal_error!("negation applied to {}", other.get_type())),
	}
}

pub(crate) fn operator(operator: OperatorType) -> impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static {
	move |args: &[Value]| binary(operator, &args[0], &args[1])
}

pub(crate) fn negation_operator(args: &[Value]) -> Result<Value> {
	negate(&args[0])
}
