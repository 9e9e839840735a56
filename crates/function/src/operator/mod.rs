// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Type, Value};

pub mod arithmetic;
pub mod compare;
pub mod hash;

pub(crate) fn as_i64(value: &Value) -> Option<i64> {
	match value {
		Value::Int4(v) => Some(*v as i64),
		Value::Int8(v) => Some(*v),
		_ => None,
	}
}

pub(crate) fn as_f64(value: &Value) -> Option<f64> {
	match value {
		Value::Int4(v) => Some(*v as f64),
		Value::Int8(v) => Some(*v as f64),
		Value::Float8(v) => Some(v.value()),
		_ => None,
	}
}

/// The promoted numeric type two values are combined in.
pub(crate) fn numeric_type(left: &Value, right: &Value) -> Option<Type> {
	let left = left.get_type();
	let right = right.get_type();
	if !left.is_number() || !right.is_number() {
		return None;
	}
	Type::promote(&left, &right)
}
