// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Three-valued boolean logic. `None` stands for NULL.

pub fn and(left: Option<bool>, right: Option<bool>) -> Option<bool> {
	match (left, right) {
		(Some(false), _) | (_, Some(false)) => Some(false),
		(Some(true), Some(true)) => Some(true),
		_ => None,
	}
}

pub fn or(left: Option<bool>, right: Option<bool>) -> Option<bool> {
	match (left, right) {
		(Some(true), _) | (_, Some(true)) => Some(true),
		(Some(false), Some(false)) => Some(false),
		_ => None,
	}
}

pub fn not(value: Option<bool>) -> Option<bool> {
	value.map(|v| !v)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_and() {
		assert_eq!(and(None, Some(false)), Some(false));
		assert_eq!(and(None, Some(true)), None);
		assert_eq!(and(Some(true), Some(true)), Some(true));
	}

	#[test]
	fn test_or() {
		assert_eq!(or(None, Some(true)), Some(true));
		assert_eq!(or(None, Some(false)), None);
		assert_eq!(or(Some(false), Some(false)), Some(false));
	}

	#[test]
	fn test_not() {
		assert_eq!(not(None), None);
		assert_eq!(not(Some(true)), Some(false));
	}
}
