// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Value, internal_error};
use xxhash_rust::xxh3::xxh3_64;

/// Integers hash in their widest representation so values that compare
/// equal across integer types land in the same bucket.
fn normalize(value: &Value) -> Value {
	match value {
		Value::Int4(v) => Value::Int8(*v as i64),
		Value::Row(fields) => Value::Row(fields.iter().map(normalize).collect()),
		other => other.clone(),
	}
}

pub fn hash_code(value: &Value) -> Result<i64> {
	let bytes = postcard::to_allocvec(&normalize(value))
		.map_err(|err| internal_error!("failed to encode value for hashing: {}", err))?;
	Ok(xxh3_64(&bytes) as i64)
}

/// A value is indeterminate when it is NULL or a row with an indeterminate field.
pub fn indeterminate(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::Row(fields) => fields.iter().any(indeterminate),
		_ => false,
	}
}

pub(crate) fn hash_code_operator(args: &[Value]) -> Result<Value> {
	hash_code(&args[0]).map(Value::Int8)
}

pub(crate) fn indeterminate_operator(args: &[Value]) -> Result<Value> {
	Ok(Value::bool(indeterminate(&args[0])))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_equal_integers_hash_alike() {
		assert_eq!(hash_code(&Value::int4(42)).unwrap(), hash_code(&Value::int8(42)).unwrap());
		assert_ne!(hash_code(&Value::int4(42)).unwrap(), hash_code(&Value::int4(43)).unwrap());
	}

	#[test]
	fn test_indeterminate() {
		assert!(indeterminate(&Value::Null));
		assert!(indeterminate(&Value::row([Value::int4(1), Value::Null])));
		assert!(!indeterminate(&Value::row([Value::int4(1)])));
		assert_eq!(indeterminate_operator(&[Value::Null]).unwrap(), Value::bool(true));
	}
}
