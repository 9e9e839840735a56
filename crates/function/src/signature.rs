// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt,
	fmt::{Debug, Display, Formatter},
	sync::Arc,
};

use rowexpr_type::{Result, Type, Value};

use crate::{ScalarFunction, error::FunctionError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperatorType {
	Add,
	Subtract,
	Multiply,
	Divide,
	Modulus,
	Negation,
	Equal,
	LessThan,
	LessThanOrEqual,
	IsDistinctFrom,
	HashCode,
	Indeterminate,
}

impl OperatorType {
	pub fn mangled_name(&self) -> &'static str {
		match self {
			OperatorType::Add => "$operator$add",
			OperatorType::Subtract => "$operator$subtract",
			OperatorType::Multiply => "$operator$multiply",
			OperatorType::Divide => "$operator$divide",
			OperatorType::Modulus => "$operator$modulus",
			OperatorType::Negation => "$operator$negation",
			OperatorType::Equal => "$operator$equal",
			OperatorType::LessThan => "$operator$less_than",
			OperatorType::LessThanOrEqual => "$operator$less_than_or_equal",
			OperatorType::IsDistinctFrom => "$operator$is_distinct_from",
			OperatorType::HashCode => "$operator$hash_code",
			OperatorType::Indeterminate => "$operator$indeterminate",
		}
	}

	pub fn arity(&self) -> usize {
		match self {
			OperatorType::Negation | OperatorType::HashCode | OperatorType::Indeterminate => 1,
			_ => 2,
		}
	}

	pub fn is_comparison(&self) -> bool {
		matches!(
			self,
			OperatorType::Equal
				| OperatorType::LessThan | OperatorType::LessThanOrEqual
				| OperatorType::IsDistinctFrom
		)
	}

	pub fn is_arithmetic(&self) -> bool {
		matches!(
			self,
			OperatorType::Add
				| OperatorType::Subtract | OperatorType::Multiply
				| OperatorType::Divide | OperatorType::Modulus
		)
	}
}

impl Display for OperatorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.mangled_name())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionName {
	Operator(OperatorType),
	/// A value conversion; `safe` marks the variant that yields NULL instead of failing
	Cast {
		safe: bool,
	},
	Builtin(String),
}

impl Display for FunctionName {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			FunctionName::Operator(operator) => Display::fmt(operator, f),
			FunctionName::Cast {
				safe: false,
			} => f.write_str("$operator$cast"),
			FunctionName::Cast {
				safe: true,
			} => f.write_str("try_cast"),
			FunctionName::Builtin(name) => f.write_str(name),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
	pub name: FunctionName,
	pub argument_types: Vec<Type>,
	pub return_type: Type,
}

impl Signature {
	pub fn new(name: FunctionName, argument_types: impl IntoIterator<Item = Type>, return_type: Type) -> Self {
		Self {
			name,
			argument_types: argument_types.into_iter().collect(),
			return_type,
		}
	}

	pub fn operator(operator: OperatorType, argument_types: impl IntoIterator<Item = Type>, return_type: Type) -> Self {
		Self::new(FunctionName::Operator(operator), argument_types, return_type)
	}

	pub fn is_cast(&self) -> bool {
		matches!(self.name, FunctionName::Cast { .. })
	}
}

impl Display for Signature {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}(", self.name)?;
		for (idx, ty) in self.argument_types.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			Display::fmt(ty, f)?;
		}
		write!(f, "):{}", self.return_type)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NullHandling {
	/// Any NULL argument makes the result NULL without running the implementation
	ReturnsNullOnNull,
	CalledOnNullInput,
}

/// A signature bound to its implementation.
#[derive(Clone)]
pub struct ResolvedFunction {
	signature: Signature,
	deterministic: bool,
	null_handling: NullHandling,
	implementation: Arc<dyn ScalarFunction>,
}

impl ResolvedFunction {
	pub fn new(signature: Signature, implementation: impl ScalarFunction + 'static) -> Self {
		Self {
			signature,
			deterministic: true,
			null_handling: NullHandling::ReturnsNullOnNull,
			implementation: Arc::new(implementation),
		}
	}

	pub fn from_fn<F>(signature: Signature, implementation: F) -> Self
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		Self::new(signature, implementation)
	}

	pub fn non_deterministic(mut self) -> Self {
		self.deterministic = false;
		self
	}

	pub fn called_on_null_input(mut self) -> Self {
		self.null_handling = NullHandling::CalledOnNullInput;
		self
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	pub fn name(&self) -> &FunctionName {
		&self.signature.name
	}

	pub fn return_type(&self) -> &Type {
		&self.signature.return_type
	}

	pub fn argument_types(&self) -> &[Type] {
		&self.signature.argument_types
	}

	pub fn is_deterministic(&self) -> bool {
		self.deterministic
	}

	pub fn null_handling(&self) -> NullHandling {
		self.null_handling
	}

	pub fn invoke(&self, args: &[Value]) -> Result<Value> {
		if args.len() != self.signature.argument_types.len() {
			return Err(FunctionError::ArityMismatch {
				function: self.signature.name.to_string(),
				expected: self.signature.argument_types.len(),
				actual: args.len(),
			}
			.into());
		}

		if self.null_handling == NullHandling::ReturnsNullOnNull && args.iter().any(Value::is_null) {
			return Ok(Value::Null);
		}

		self.implementation.invoke(args)
	}
}

impl PartialEq for ResolvedFunction {
	fn eq(&self, other: &Self) -> bool {
		self.signature == other.signature
			&& self.deterministic == other.deterministic
			&& self.null_handling == other.null_handling
	}
}

impl Eq for ResolvedFunction {}

impl Debug for ResolvedFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResolvedFunction")
			.field("signature", &self.signature)
			.field("deterministic", &self.deterministic)
			.field("null_handling", &self.null_handling)
			.finish()
	}
}

impl Display for ResolvedFunction {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.signature.name, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn first(args: &[Value]) -> Result<Value> {
		Ok(args[0].clone())
	}

	#[test]
	fn test_null_short_circuit() {
		let function = ResolvedFunction::new(
			Signature::new(FunctionName::Builtin("first".to_string()), [Type::Int4], Type::Int4),
			first,
		);
		assert_eq!(function.invoke(&[Value::Null]).unwrap(), Value::Null);
		assert_eq!(function.invoke(&[Value::int4(3)]).unwrap(), Value::int4(3));
	}

	#[test]
	fn test_called_on_null_input() {
		let function = ResolvedFunction::from_fn(
			Signature::new(FunctionName::Builtin("first".to_string()), [Type::Int4], Type::Int4),
			|_| Ok(Value::bool(true)),
		)
		.called_on_null_input();
		assert_eq!(function.invoke(&[Value::Null]).unwrap(), Value::bool(true));
	}

	#[test]
	fn test_arity_mismatch() {
		let function = ResolvedFunction::new(
			Signature::new(FunctionName::Builtin("first".to_string()), [Type::Int4], Type::Int4),
			first,
		);
		let err = function.invoke(&[]).unwrap_err();
		assert_eq!(err.code, "FUNCTION_004");
	}

	#[test]
	fn test_signature_display() {
		let signature = Signature::operator(OperatorType::Equal, [Type::Int8, Type::Int8], Type::Boolean);
		assert_eq!(signature.to_string(), "$operator$equal(bigint, bigint):boolean");
	}

	#[test]
	fn test_equality_ignores_implementation() {
		let signature = Signature::new(FunctionName::Builtin("f".to_string()), [], Type::Float8);
		let left = ResolvedFunction::from_fn(signature.clone(), |_| Ok(Value::float8(1.0)));
		let right = ResolvedFunction::from_fn(signature, |_| Ok(Value::float8(2.0)));
		assert_eq!(left, right);
		assert_ne!(left.clone(), right.non_deterministic());
	}
}
