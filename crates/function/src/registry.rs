// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use rowexpr_type::{Result, Type, Value};
use tracing::{instrument, trace};

use crate::{
	FunctionCatalog, FunctionError, FunctionName, OperatorType, ResolvedFunction, Signature, builtin, cast,
	operator::{arithmetic, compare, hash},
};

/// A catalog of the built-in operators, coercions and scalar functions.
/// Further functions can be registered by name; overloads are told apart by
/// their argument types.
pub struct StandardCatalog {
	functions: HashMap<String, Vec<ResolvedFunction>>,
}

impl Default for StandardCatalog {
	fn default() -> Self {
		Self::new()
	}
}

impl StandardCatalog {
	pub fn new() -> Self {
		let mut result = Self::empty();
		for function in builtin::standard() {
			result.register(function);
		}
		result
	}

	pub fn empty() -> Self {
		Self {
			functions: HashMap::new(),
		}
	}

	pub fn register(&mut self, function: ResolvedFunction) {
		let name = function.name().to_string();
		let overloads = self.functions.entry(name).or_default();
		overloads.retain(|existing| existing.argument_types() != function.argument_types());
		overloads.push(function);
	}

	pub fn register_scalar<F>(&mut self, signature: Signature, implementation: F)
	where
		F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
	{
		self.register(ResolvedFunction::from_fn(signature, implementation));
	}

	fn not_found(operator: OperatorType, argument_types: &[Type]) -> rowexpr_type::Error {
		FunctionError::OperatorNotFound {
			operator,
			argument_types: argument_types.to_vec(),
		}
		.into()
	}

	fn common_type(operator: OperatorType, argument_types: &[Type]) -> Result<Type> {
		let [left, right] = argument_types else {
			return Err(Self::not_found(operator, argument_types));
		};
		Type::promote(left, right).ok_or_else(|| Self::not_found(operator, argument_types))
	}
}

impl FunctionCatalog for StandardCatalog {
	#[instrument(name = "function::catalog::resolve_operator", level = "trace", skip(self))]
	fn resolve_operator(&self, operator: OperatorType, argument_types: &[Type]) -> Result<ResolvedFunction> {
		if argument_types.len() != operator.arity() {
			return Err(FunctionError::ArityMismatch {
				function: operator.to_string(),
				expected: operator.arity(),
				actual: argument_types.len(),
			}
			.into());
		}

		let result = match operator {
			OperatorType::Equal | OperatorType::LessThan | OperatorType::LessThanOrEqual => {
				let ty = Self::common_type(operator, argument_types)?;
				let signature = Signature::operator(operator, [ty.clone(), ty], Type::Boolean);
				match operator {
					OperatorType::Equal => ResolvedFunction::from_fn(signature, compare::equal_operator),
					OperatorType::LessThan => {
						ResolvedFunction::from_fn(signature, compare::less_than_operator)
					}
					_ => ResolvedFunction::from_fn(signature, compare::less_than_or_equal_operator),
				}
			}
			OperatorType::IsDistinctFrom => {
				let ty = Self::common_type(operator, argument_types)?;
				let signature = Signature::operator(operator, [ty.clone(), ty], Type::Boolean);
				ResolvedFunction::from_fn(signature, compare::is_distinct_from_operator).called_on_null_input()
			}
			OperatorType::Add
			| OperatorType::Subtract
			| OperatorType::Multiply
			| OperatorType::Divide
			| OperatorType::Modulus => {
				let ty = Self::common_type(operator, argument_types)?;
				if !ty.is_number() {
					return Err(Self::not_found(operator, argument_types));
				}
				let signature = Signature::operator(operator, [ty.clone(), ty.clone()], ty);
				ResolvedFunction::from_fn(signature, arithmetic::operator(operator))
			}
			OperatorType::Negation => {
				let ty = argument_types[0].clone();
				if !ty.is_number() {
					return Err(Self::not_found(operator, argument_types));
				}
				ResolvedFunction::from_fn(
					Signature::operator(operator, [ty.clone()], ty),
					arithmetic::negation_operator,
				)
			}
			OperatorType::HashCode => ResolvedFunction::from_fn(
				Signature::operator(operator, [argument_types[0].clone()], Type::Int8),
				hash::hash_code_operator,
			),
			OperatorType::Indeterminate => ResolvedFunction::from_fn(
				Signature::operator(operator, [argument_types[0].clone()], Type::Boolean),
				hash::indeterminate_operator,
			)
			.called_on_null_input(),
		};

		trace!(signature = %result.signature(), "resolved operator");
		Ok(result)
	}

	#[instrument(name = "function::catalog::resolve_builtin_function", level = "trace", skip(self))]
	fn resolve_builtin_function(&self, name: &str, argument_types: &[Type]) -> Result<ResolvedFunction> {
		let overloads = self.functions.get(name).map(Vec::as_slice).unwrap_or_default();

		let exact = overloads.iter().find(|function| function.argument_types() == argument_types);
		let coercible = || {
			overloads.iter().find(|function| {
				function.argument_types().len() == argument_types.len()
					&& function
						.argument_types()
						.iter()
						.zip(argument_types)
						.all(|(expected, actual)| {
							actual.is_unknown()
								|| Type::promote(expected, actual).as_ref() == Some(expected)
						})
			})
		};

		exact.or_else(coercible).cloned().ok_or_else(|| {
			FunctionError::FunctionNotFound {
				name: name.to_string(),
				argument_types: argument_types.to_vec(),
			}
			.into()
		})
	}

	#[instrument(name = "function::catalog::get_coercion", level = "trace", skip(self))]
	fn get_coercion(&self, from: &Type, to: &Type) -> Result<ResolvedFunction> {
		if !cast::can_cast(from, to) {
			return Err(FunctionError::CoercionNotFound {
				from: from.clone(),
				to: to.clone(),
			}
			.into());
		}
		let target = to.clone();
		Ok(ResolvedFunction::from_fn(
			Signature::new(
				FunctionName::Cast {
					safe: false,
				},
				[from.clone()],
				to.clone(),
			),
			move |args| cast::cast(&args[0], &target),
		))
	}

	#[instrument(name = "function::catalog::get_try_coercion", level = "trace", skip(self))]
	fn get_try_coercion(&self, from: &Type, to: &Type) -> Result<ResolvedFunction> {
		if !cast::can_cast(from, to) {
			return Err(FunctionError::CoercionNotFound {
				from: from.clone(),
				to: to.clone(),
			}
			.into());
		}
		let target = to.clone();
		Ok(ResolvedFunction::from_fn(
			Signature::new(
				FunctionName::Cast {
					safe: true,
				},
				[from.clone()],
				to.clone(),
			),
			move |args| Ok(cast::try_cast(&args[0], &target)),
		))
	}
}
