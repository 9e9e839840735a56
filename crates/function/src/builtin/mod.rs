// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Type, Value, internal_error};

use crate::{FunctionName, ResolvedFunction, Signature};

pub fn not(args: &[Value]) -> Result<Value> {
	match &args[0] {
		Value::Boolean(v) => Ok(Value::bool(!v)),
		other => Err(internal_error!("not applied to {}", other.get_type())),
	}
}

pub fn abs(args: &[Value]) -> Result<Value> {
	match &args[0] {
		Value::Int4(v) => v.checked_abs().map(Value::Int4).ok_or_else(|| {
			rowexpr_type::TypeError::NumericOverflow {
				operation: "abs",
				ty: Type::Int4,
			}
			.into()
		}),
		Value::Int8(v) => v.checked_abs().map(Value::Int8).ok_or_else(|| {
			rowexpr_type::TypeError::NumericOverflow {
				operation: "abs",
				ty: Type::Int8,
			}
			.into()
		}),
		Value::Float8(v) => Ok(Value::float8(v.value().abs())),
		other => Err(internal_error!("abs applied to {}", other.get_type())),
	}
}

pub fn random(_args: &[Value]) -> Result<Value> {
	Ok(Value::float8(rand::random::<f64>()))
}

fn builtin(name: &str, argument_types: impl IntoIterator<Item = Type>, return_type: Type) -> Signature {
	Signature::new(FunctionName::Builtin(name.to_string()), argument_types, return_type)
}

/// The scalar functions every standard catalog starts with.
pub fn standard() -> Vec<ResolvedFunction> {
	let mut functions = vec![ResolvedFunction::from_fn(builtin("not", [Type::Boolean], Type::Boolean), not)];

	for ty in [Type::Int4, Type::Int8, Type::Float8] {
		functions.push(ResolvedFunction::from_fn(builtin("abs", [ty.clone()], ty), abs));
	}

	functions.push(ResolvedFunction::from_fn(builtin("random", [], Type::Float8), random).non_deterministic());
	functions
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not() {
		assert_eq!(not(&[Value::bool(true)]).unwrap(), Value::bool(false));
	}

	#[test]
	fn test_abs() {
		assert_eq!(abs(&[Value::int4(-3)]).unwrap(), Value::int4(3));
		assert_eq!(abs(&[Value::float8(-1.5)]).unwrap(), Value::float8(1.5));
		assert_eq!(abs(&[Value::int4(i32::MIN)]).unwrap_err().code, "ARITHMETIC_002");
	}

	#[test]
	fn test_random_is_non_deterministic() {
		let random = standard().into_iter().find(|f| f.name() == &FunctionName::Builtin("random".to_string())).unwrap();
		assert!(!random.is_deterministic());
		let value = random.invoke(&[]).unwrap();
		let Value::Float8(v) = value else {
			panic!("expected a double, got {value:?}");
		};
		assert!((0.0..1.0).contains(&v.value()));
	}
}
