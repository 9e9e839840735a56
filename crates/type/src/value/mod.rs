// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod logic;
mod ordered_f64;
mod r#type;

pub use ordered_f64::{OrderedF64, OrderedFloatError};
pub use r#type::Type;

/// A SQL value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// The SQL NULL; its type is carried by the expression holding it
	Null,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// A composite value with positional fields
	Row(Vec<Value>),
}

impl Value {
	pub fn null() -> Self {
		Value::Null
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	/// NaN has no total order and becomes NULL.
	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Null)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn row(fields: impl IntoIterator<Item = Value>) -> Self {
		Value::Row(fields.into_iter().collect())
	}
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Reads a SQL boolean. `None` covers both NULL and non-boolean values.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}

	pub fn field(&self, index: usize) -> Option<&Value> {
		match self {
			Value::Row(fields) => fields.get(index),
			_ => None,
		}
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Null => Type::Unknown,
			Value::Boolean(_) => Type::Boolean,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::Row(fields) => Type::Row(fields.iter().map(Value::get_type).collect()),
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => f.write_str("NULL"),
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Row(fields) => {
				f.write_str("(")?;
				for (idx, field) in fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(field, f)?;
				}
				f.write_str(")")
			}
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Boolean(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int4(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int8(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::float8(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Utf8(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Utf8(v)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Null)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_nan_becomes_null() {
		assert_eq!(Value::float8(f64::NAN), Value::Null);
	}

	#[test]
	fn test_display() {
		assert_eq!(Value::int4(1234).to_string(), "1234");
		assert_eq!(Value::bool(true).to_string(), "true");
		assert_eq!(Value::Null.to_string(), "NULL");
		assert_eq!(Value::row([Value::int4(1), Value::utf8("a"), Value::Null]).to_string(), "(1, a, NULL)");
	}

	#[test]
	fn test_row_type_follows_fields() {
		let row = Value::row([Value::int8(1), Value::utf8("a")]);
		assert_eq!(row.get_type(), Type::Row(vec![Type::Int8, Type::Utf8]));
		assert_eq!(row.field(1), Some(&Value::utf8("a")));
		assert_eq!(row.field(2), None);
	}

	#[test]
	fn test_option_into_value() {
		assert_eq!(Value::from(None::<i32>), Value::Null);
		assert_eq!(Value::from(Some(3i64)), Value::Int8(3));
	}
}
