// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Type, TypeError, Value};

fn invalid(value: &Value, to: &Type) -> rowexpr_type::Error {
	TypeError::InvalidCast {
		value: value.to_string(),
		from: value.get_type(),
		to: to.clone(),
	}
	.into()
}

fn out_of_range(to: &Type) -> rowexpr_type::Error {
	TypeError::NumericOverflow {
		operation: "cast",
		ty: to.clone(),
	}
	.into()
}

/// Whether a conversion from `from` to `to` exists.
pub fn can_cast(from: &Type, to: &Type) -> bool {
	if from == to || from.is_unknown() {
		return true;
	}
	let scalar = |ty: &Type| ty.is_number() || ty.is_bool() || ty.is_utf8();
	match (from, to) {
		(Type::Row(from), Type::Row(to)) => {
			from.len() == to.len() && from.iter().zip(to.iter()).all(|(f, t)| can_cast(f, t))
		}
		_ => scalar(from) && scalar(to),
	}
}

fn float_to_integer(value: &Value, v: f64, to: &Type) -> Result<i64> {
	if !v.is_finite() {
		return Err(invalid(value, to));
	}
	let rounded = v.round();
	if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
		return Err(out_of_range(to));
	}
	Ok(rounded as i64)
}

fn to_integer(value: &Value, to: &Type) -> Result<i64> {
	match value {
		Value::Boolean(v) => Ok(*v as i64),
		Value::Int4(v) => Ok(*v as i64),
		Value::Int8(v) => Ok(*v),
		Value::Float8(v) => float_to_integer(value, v.value(), to),
		Value::Utf8(v) => v.trim().parse::<i64>().map_err(|_| invalid(value, to)),
		_ => Err(invalid(value, to)),
	}
}

/// Converts a value to `to`. NULL converts to NULL of any type.
pub fn cast(value: &Value, to: &Type) -> Result<Value> {
	if value.is_null() {
		return Ok(Value::Null);
	}
	match to {
		Type::Unknown => Err(invalid(value, to)),
		Type::Boolean => match value {
			Value::Boolean(v) => Ok(Value::bool(*v)),
			Value::Int4(v) => Ok(Value::bool(*v != 0)),
			Value::Int8(v) => Ok(Value::bool(*v != 0)),
			Value::Float8(v) => Ok(Value::bool(v.value() != 0.0)),
			Value::Utf8(v) => match v.trim().to_ascii_lowercase().as_str() {
				"true" | "t" | "1" => Ok(Value::bool(true)),
				"false" | "f" | "0" => Ok(Value::bool(false)),
				_ => Err(invalid(value, to)),
			},
			_ => Err(invalid(value, to)),
		},
		Type::Int4 => {
			let v = to_integer(value, to)?;
			i32::try_from(v).map(Value::Int4).map_err(|_| out_of_range(to))
		}
		Type::Int8 => to_integer(value, to).map(Value::Int8),
		Type::Float8 => match value {
			Value::Boolean(v) => Ok(Value::float8(if *v {
				1.0
			} else {
				0.0
			})),
			Value::Int4(v) => Ok(Value::float8(*v as f64)),
			Value::Int8(v) => Ok(Value::float8(*v as f64)),
			Value::Float8(v) => Ok(Value::Float8(*v)),
			Value::Utf8(v) => v.trim().parse::<f64>().map(Value::float8).map_err(|_| invalid(value, to)),
			_ => Err(invalid(value, to)),
		},
		Type::Utf8 => match value {
			Value::Row(_) => Err(invalid(value, to)),
			other => Ok(Value::utf8(other.to_string())),
		},
		Type::Row(types) => match value {
			Value::Row(fields) if fields.len() == types.len() => fields
				.iter()
				.zip(types.iter())
				.map(|(field, ty)| cast(field, ty))
				.collect::<Result<Vec<_>>>()
				.map(Value::Row),
			_ => Err(invalid(value, to)),
		},
		Type::Function {
			..
		} => Err(invalid(value, to)),
	}
}

/// Like `cast`, but a failed conversion yields NULL.
pub fn try_cast(value: &Value, to: &Type) -> Value {
	cast(value, to).unwrap_or(Value::Null)
}
