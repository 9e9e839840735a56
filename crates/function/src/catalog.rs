// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Type};

use crate::{OperatorType, ResolvedFunction};

/// Resolves operators, functions and coercions to concrete implementations.
pub trait FunctionCatalog: Send + Sync {
	fn resolve_operator(&self, operator: OperatorType, argument_types: &[Type]) -> Result<ResolvedFunction>;

	fn resolve_builtin_function(&self, name: &str, argument_types: &[Type]) -> Result<ResolvedFunction>;

	fn get_coercion(&self, from: &Type, to: &Type) -> Result<ResolvedFunction>;

	/// Like `get_coercion`, but the returned function yields NULL where the
	/// plain coercion would fail.
	fn get_try_coercion(&self, from: &Type, to: &Type) -> Result<ResolvedFunction>;
}

pub trait TypeCoercion: Send + Sync {
	/// True when a value of `from` is already a valid value of `to` and only
	/// the declared type changes.
	fn is_type_only_coercion(&self, from: &Type, to: &Type) -> bool;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTypeCoercion;

impl TypeCoercion for StandardTypeCoercion {
	fn is_type_only_coercion(&self, from: &Type, to: &Type) -> bool {
		from == to || from.is_unknown()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_type_only() {
		let coercion = StandardTypeCoercion;
		assert!(coercion.is_type_only_coercion(&Type::Int4, &Type::Int4));
		assert!(coercion.is_type_only_coercion(&Type::Unknown, &Type::Utf8));
		assert!(!coercion.is_type_only_coercion(&Type::Int4, &Type::Int8));
		assert!(!coercion.is_type_only_coercion(&Type::Int4, &Type::Utf8));
	}
}
