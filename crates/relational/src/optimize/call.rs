// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::{FunctionName, OperatorType};
use rowexpr_type::{Result, Type};
use tracing::{debug, trace};

use super::Folder;
use crate::row::{CallExpression, IsNullExpression, RowExpression, SpecialForm};

impl Folder<'_> {
	pub(super) fn call(&mut self, call: CallExpression) -> Result<RowExpression> {
		let mut arguments = self.fold_all(call.arguments)?;
		let function = call.function;

		if matches!(function.name(), FunctionName::Operator(OperatorType::IsDistinctFrom)) {
			if let Some(other) = Self::distinct_from_null(&mut arguments) {
				trace!(%other, "distinct from null");
				let not = self.catalog.resolve_builtin_function("not", &[Type::Boolean])?;
				let is_null = SpecialForm::IsNull(IsNullExpression {
					value: Box::new(other),
				});
				return Ok(RowExpression::call(not, [is_null.into()]));
			}
		}

		if function.signature().is_cast() && arguments.len() == 1 && arguments[0].ty() == *function.return_type() {
			if let Some(argument) = arguments.pop() {
				return Ok(argument);
			}
		}

		if function.is_deterministic() {
			let values = arguments.iter().map(|argument| argument.as_constant().cloned()).collect::<Option<Vec<_>>>();
			if let Some(values) = values {
				match function.invoke(&values) {
					Ok(value) => return Ok(RowExpression::constant(value, function.return_type().clone())),
					Err(err) => debug!(%function, code = err.code(), "constant call left unfolded"),
				}
			}
		}

		Ok(RowExpression::call(function, arguments))
	}

	/// `x IS DISTINCT FROM NULL` is `NOT(x IS NULL)` when `x` is not constant.
	fn distinct_from_null(arguments: &mut Vec<RowExpression>) -> Option<RowExpression> {
		let other = match arguments.as_slice() {
			[left, right] if left.is_null_constant() && !right.is_constant() => 1,
			[left, right] if right.is_null_constant() && !left.is_constant() => 0,
			_ => return None,
		};
		Some(arguments.swap_remove(other))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	};

	use rowexpr_function::{FunctionCatalog, ResolvedFunction, Signature, StandardCatalog};
	use rowexpr_type::Value;

	use super::*;
	use crate::optimize::{ExpressionOptimizer, NoBindings};

	fn add(catalog: &StandardCatalog, left: RowExpression, right: RowExpression) -> RowExpression {
		let function = catalog.resolve_operator(OperatorType::Add, &[left.ty(), right.ty()]).unwrap();
		RowExpression::call(function, [left, right])
	}

	#[test]
	fn test_constant_arguments_fold() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let expression = add(&catalog, RowExpression::constant(1, Type::Int4), RowExpression::constant(2, Type::Int4));
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), RowExpression::constant(3, Type::Int4));
	}

	#[test]
	fn test_failing_call_is_kept() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let divide = catalog.resolve_operator(OperatorType::Divide, &[Type::Int4, Type::Int4]).unwrap();
		let expression = RowExpression::call(
			divide,
			[RowExpression::constant(1, Type::Int4), RowExpression::constant(0, Type::Int4)],
		);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), expression);
	}

	#[test]
	fn test_non_deterministic_call_is_never_invoked() {
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();

		let mut catalog = StandardCatalog::new();
		catalog.register(
			ResolvedFunction::from_fn(
				Signature::new(FunctionName::Builtin("next".to_string()), Vec::<Type>::new(), Type::Int8),
				move |_| Ok(Value::Int8(counter.fetch_add(1, Ordering::SeqCst) as i64)),
			)
			.non_deterministic(),
		);
		let next = catalog.resolve_builtin_function("next", &[]).unwrap();
		let expression = add(&catalog, RowExpression::call(next.clone(), vec![]), RowExpression::call(next, vec![]));

		let optimizer = ExpressionOptimizer::new(&catalog);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), expression);
		assert_eq!(calls.load(Ordering::SeqCst), 0);

		assert_eq!(optimizer.evaluate(&expression, &NoBindings).unwrap(), Value::Int8(1));
		assert_eq!(calls.load(Ordering::SeqCst), 2);
	}

	#[test]
	fn test_identity_cast_collapses() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let cast = catalog.get_coercion(&Type::Int8, &Type::Int8).unwrap();
		let expression = RowExpression::call(cast, [RowExpression::variable("x", Type::Int8)]);
		assert_eq!(
			optimizer.optimize(&expression, &NoBindings).unwrap(),
			RowExpression::variable("x", Type::Int8)
		);
	}

	#[test]
	fn test_distinct_from_null_becomes_not_is_null() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let distinct = catalog.resolve_operator(OperatorType::IsDistinctFrom, &[Type::Int8, Type::Int8]).unwrap();
		let expression = RowExpression::call(
			distinct,
			[RowExpression::variable("x", Type::Int8), RowExpression::null(Type::Int8)],
		);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap().to_string(), "not(IS_NULL(x))");
	}
}
