// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::ResolvedFunction;
use rowexpr_type::{Result, TypeError, Value, value::logic};

use super::{SymbolResolver, nullif::null_if_equal};
use crate::{
	error::ExpressionError,
	row::{RowExpression, SpecialForm},
};

/// Runs a residual to completion. Control flow is honored at runtime, so
/// only the taken path is evaluated and only its errors are raised.
pub(super) struct Interpreter<'a> {
	resolver: &'a dyn SymbolResolver,
}

impl<'a> Interpreter<'a> {
	pub(super) fn new(resolver: &'a dyn SymbolResolver) -> Self {
		Self {
			resolver,
		}
	}

	pub(super) fn evaluate(&self, expression: &RowExpression) -> Result<Value> {
		match expression {
			RowExpression::Constant(constant) => Ok(constant.value.clone()),
			RowExpression::InputReference(reference) => {
				self.resolver.resolve_input(reference.field, &reference.ty).ok_or_else(|| {
					ExpressionError::UnresolvedInput {
						field: reference.field,
						ty: reference.ty.clone(),
					}
					.into()
				})
			}
			RowExpression::VariableReference(reference) => {
				self.resolver.resolve_variable(&reference.name, &reference.ty).ok_or_else(|| {
					ExpressionError::UnresolvedSymbol {
						name: reference.name.clone(),
						ty: reference.ty.clone(),
					}
					.into()
				})
			}
			RowExpression::Call(call) => {
				let arguments = self.evaluate_all(&call.arguments)?;
				call.function.invoke(&arguments)
			}
			RowExpression::Special(form) => self.special(form),
			RowExpression::Lambda(_) => Err(not_constant(expression)),
		}
	}

	fn evaluate_all(&self, expressions: &[RowExpression]) -> Result<Vec<Value>> {
		expressions.iter().map(|expression| self.evaluate(expression)).collect()
	}

	fn truth(&self, expression: &RowExpression) -> Result<Option<bool>> {
		Ok(self.evaluate(expression)?.as_bool())
	}

	fn special(&self, form: &SpecialForm) -> Result<Value> {
		match form {
			SpecialForm::And(and) => {
				let mut result = Some(true);
				for term in &and.terms {
					result = logic::and(result, self.truth(term)?);
					if result == Some(false) {
						break;
					}
				}
				Ok(result.into())
			}
			SpecialForm::Or(or) => {
				let mut result = Some(false);
				for term in &or.terms {
					result = logic::or(result, self.truth(term)?);
					if result == Some(true) {
						break;
					}
				}
				Ok(result.into())
			}
			SpecialForm::If(form) => match self.truth(&form.condition)? {
				Some(true) => self.evaluate(&form.then),
				_ => self.evaluate(&form.otherwise),
			},
			SpecialForm::Switch(form) => {
				let operand = self.evaluate(&form.operand)?;
				if !operand.is_null() {
					for clause in &form.clauses {
						let candidate = self.evaluate(&clause.operand)?;
						if matches(&clause.equal, &operand, candidate)? == Some(true) {
							return self.evaluate(&clause.result);
						}
					}
				}
				self.evaluate(&form.default)
			}
			SpecialForm::Coalesce(form) => {
				for operand in &form.operands {
					let value = self.evaluate(operand)?;
					if !value.is_null() {
						return Ok(value);
					}
				}
				Ok(Value::Null)
			}
			SpecialForm::In(form) => {
				let value = self.evaluate(&form.value)?;
				if value.is_null() {
					return Ok(Value::Null);
				}
				let mut seen_null = false;
				for element in &form.list {
					let candidate = self.evaluate(element)?;
					match matches(&form.equal, &value, candidate)? {
						Some(true) => return Ok(Value::Boolean(true)),
						Some(false) => {}
						None => seen_null = true,
					}
				}
				Ok(if seen_null {
					Value::Null
				} else {
					Value::Boolean(false)
				})
			}
			SpecialForm::IsNull(form) => Ok(Value::Boolean(self.evaluate(&form.value)?.is_null())),
			SpecialForm::NullIf(form) => {
				let first = self.evaluate(&form.first)?;
				let second = self.evaluate(&form.second)?;
				if first.is_null() || second.is_null() {
					return Ok(first);
				}
				let equal = null_if_equal(
					&form.equal,
					form.first_coercion.as_ref(),
					form.second_coercion.as_ref(),
					&first,
					&second,
				)?;
				Ok(if equal == Some(true) {
					Value::Null
				} else {
					first
				})
			}
			SpecialForm::Between(form) => {
				let value = self.evaluate(&form.value)?;
				let min = self.evaluate(&form.min)?;
				let max = self.evaluate(&form.max)?;
				if value.is_null() {
					return Ok(Value::Null);
				}
				let lower = form.less_than_or_equal.invoke(&[min, value.clone()])?.as_bool();
				let upper = form.less_than_or_equal.invoke(&[value, max])?.as_bool();
				Ok(logic::and(lower, upper).into())
			}
			SpecialForm::Dereference(dereference) => {
				let base = self.evaluate(&dereference.base)?;
				let Some(index) = dereference.field_index() else {
					return Err(not_constant(&dereference.index));
				};
				match &base {
					Value::Null => Ok(Value::Null),
					Value::Row(fields) => fields.get(index).cloned().ok_or_else(|| {
						TypeError::FieldIndexOutOfBounds {
							index: index as i64,
							width: fields.len(),
						}
						.into()
					}),
					_ => Err(not_constant(&dereference.base)),
				}
			}
			SpecialForm::RowConstructor(row) => Ok(Value::Row(self.evaluate_all(&row.fields)?)),
			SpecialForm::Bind(_) => Err(not_constant(&RowExpression::Special(form.clone()))),
		}
	}
}

fn matches(equal: &ResolvedFunction, operand: &Value, candidate: Value) -> Result<Option<bool>> {
	Ok(equal.invoke(&[operand.clone(), candidate])?.as_bool())
}

fn not_constant(expression: &RowExpression) -> rowexpr_type::Error {
	ExpressionError::NotConstant {
		expression: expression.to_string(),
	}
	.into()
}

#[cfg(test)]
mod tests {
	use rowexpr_function::{FunctionCatalog, OperatorType, StandardCatalog};
	use rowexpr_type::Type;

	use super::*;
	use crate::{
		optimize::{Bindings, ExpressionOptimizer, NoBindings},
		row::IfExpression,
	};

	#[test]
	fn test_unbound_symbol_is_an_error() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let err = optimizer.evaluate(&RowExpression::variable("x", Type::Int4), &NoBindings).unwrap_err();
		assert_eq!(err.code(), "EXPRESSION_001");

		let err = optimizer.evaluate(&RowExpression::input(0, Type::Int4), &NoBindings).unwrap_err();
		assert_eq!(err.code(), "EXPRESSION_002");
	}

	#[test]
	fn test_error_in_taken_guard_is_raised() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let divide = catalog.resolve_operator(OperatorType::Divide, &[Type::Int4, Type::Int4]).unwrap();
		let equal = catalog.resolve_operator(OperatorType::Equal, &[Type::Int4, Type::Int4]).unwrap();
		let guard = RowExpression::call(
			equal,
			[
				RowExpression::call(divide, [RowExpression::constant(1, Type::Int4), RowExpression::variable("x", Type::Int4)]),
				RowExpression::constant(1, Type::Int4),
			],
		);
		let expression: RowExpression = SpecialForm::If(IfExpression {
			condition: Box::new(guard),
			then: Box::new(RowExpression::constant(1, Type::Int4)),
			otherwise: Box::new(RowExpression::constant(2, Type::Int4)),
			ty: Type::Int4,
		})
		.into();

		let err = optimizer.evaluate(&expression, &Bindings::new().with_variable("x", 0)).unwrap_err();
		assert_eq!(err.code(), "ARITHMETIC_001");
		assert_eq!(optimizer.evaluate(&expression, &Bindings::new().with_variable("x", 1)).unwrap(), Value::Int4(1));
	}
}
