// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All SQL types an expression can carry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// The type of an untyped NULL literal
	Unknown,
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text.
	Utf8,
	/// A composite with positional, typed fields
	Row(Vec<Type>),
	/// The type of a lambda: parameter types and result type
	Function {
		parameters: Vec<Type>,
		result: Box<Type>,
	},
}

impl Type {
	pub fn function(parameters: impl IntoIterator<Item = Type>, result: Type) -> Self {
		Type::Function {
			parameters: parameters.into_iter().collect(),
			result: Box::new(result),
		}
	}

	pub fn is_unknown(&self) -> bool {
		matches!(self, Type::Unknown)
	}

	pub fn is_bool(&self) -> bool {
		matches!(self, Type::Boolean)
	}

	pub fn is_number(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8 | Type::Float8)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_row(&self) -> bool {
		matches!(self, Type::Row(_))
	}

	/// The type of the 0-based field `index` of a row type.
	pub fn field(&self, index: usize) -> Option<&Type> {
		match self {
			Type::Row(fields) => fields.get(index),
			_ => None,
		}
	}

	fn numeric_rank(&self) -> Option<u8> {
		match self {
			Type::Int4 => Some(1),
			Type::Int8 => Some(2),
			Type::Float8 => Some(3),
			_ => None,
		}
	}

	/// The common super type two operands are coerced to before they are
	/// compared or combined. Numbers widen along integer, bigint, double.
	pub fn promote(left: &Type, right: &Type) -> Option<Type> {
		if left == right {
			return Some(left.clone());
		}
		match (left, right) {
			(Type::Unknown, other) | (other, Type::Unknown) => Some(other.clone()),
			(Type::Row(l), Type::Row(r)) if l.len() == r.len() => l
				.iter()
				.zip(r.iter())
				.map(|(l, r)| Type::promote(l, r))
				.collect::<Option<Vec<_>>>()
				.map(Type::Row),
			_ => {
				let l = left.numeric_rank()?;
				let r = right.numeric_rank()?;
				Some(if l >= r {
					left.clone()
				} else {
					right.clone()
				})
			}
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Unknown => f.write_str("unknown"),
			Type::Boolean => f.write_str("boolean"),
			Type::Int4 => f.write_str("integer"),
			Type::Int8 => f.write_str("bigint"),
			Type::Float8 => f.write_str("double"),
			Type::Utf8 => f.write_str("varchar"),
			Type::Row(fields) => {
				f.write_str("row(")?;
				for (idx, field) in fields.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					Display::fmt(field, f)?;
				}
				f.write_str(")")
			}
			Type::Function {
				parameters,
				result,
			} => {
				f.write_str("function(")?;
				for parameter in parameters {
					write!(f, "{}, ", parameter)?;
				}
				write!(f, "{})", result)
			}
		}
	}
}
