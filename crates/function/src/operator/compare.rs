// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use rowexpr_type::{Result, Value};

use super::{as_f64, as_i64, numeric_type};

/// Orders two non-NULL values. Numbers compare after widening to their common
/// type; values of unrelated types are incomparable.
fn compare_scalar(left: &Value, right: &Value) -> Option<Ordering> {
	match (left, right) {
		(Value::Boolean(l), Value::Boolean(r)) => Some(l.cmp(r)),
		(Value::Utf8(l), Value::Utf8(r)) => Some(l.cmp(r)),
		_ => {
			let ty = numeric_type(left, right)?;
			if ty.is_integer() {
				Some(as_i64(left)?.cmp(&as_i64(right)?))
			} else {
				as_f64(left)?.partial_cmp(&as_f64(right)?)
			}
		}
	}
}

/// SQL equality. `None` is UNKNOWN: either side is NULL, or a row holds a NULL
/// field in a position that decides the outcome.
pub fn equal(left: &Value, right: &Value) -> Option<bool> {
	match (left, right) {
		(Value::Null, _) | (_, Value::Null) => None,
		(Value::Row(l), Value::Row(r)) => {
			if l.len() != r.len() {
				return Some(false);
			}
			let mut unknown = false;
			for (l, r) in l.iter().zip(r.iter()) {
				match equal(l, r) {
					Some(false) => return Some(false),
					None => unknown = true,
					Some(true) => {}
				}
			}
			if unknown {
				None
			} else {
				Some(true)
			}
		}
		_ => Some(compare_scalar(left, right) == Some(Ordering::Equal)),
	}
}

/// SQL ordering. Rows compare field by field; the first NULL reached before
/// the order is decided makes the result UNKNOWN.
pub fn compare(left: &Value, right: &Value) -> Option<Ordering> {
	match (left, right) {
		(Value::Null, _) | (_, Value::Null) => None,
		(Value::Row(l), Value::Row(r)) => {
			for (l, r) in l.iter().zip(r.iter()) {
				match compare(l, r)? {
					Ordering::Equal => continue,
					ordering => return Some(ordering),
				}
			}
			Some(l.len().cmp(&r.len()))
		}
		_ => compare_scalar(left, right),
	}
}

/// NULL-total inequality: two NULLs are not distinct, a NULL and a non-NULL are.
pub fn is_distinct_from(left: &Value, right: &Value) -> bool {
	match (left, right) {
		(Value::Null, Value::Null) => false,
		(Value::Null, _) | (_, Value::Null) => true,
		(Value::Row(l), Value::Row(r)) => {
			l.len() != r.len() || l.iter().zip(r.iter()).any(|(l, r)| is_distinct_from(l, r))
		}
		_ => compare_scalar(left, right) != Some(Ordering::Equal),
	}
}

pub(crate) fn equal_operator(args: &[Value]) -> Result<Value> {
	Ok(equal(&args[0], &args[1]).into())
}

pub(crate) fn less_than_operator(args: &[Value]) -> Result<Value> {
	Ok(compare(&args[0], &args[1]).map(|ordering| ordering == Ordering::Less).into())
}

pub(crate) fn less_than_or_equal_operator(args: &[Value]) -> Result<Value> {
	Ok(compare(&args[0], &args[1]).map(|ordering| ordering != Ordering::Greater).into())
}

pub(crate) fn is_distinct_from_operator(args: &[Value]) -> Result<Value> {
	Ok(Value::bool(is_distinct_from(&args[0], &args[1])))
}
