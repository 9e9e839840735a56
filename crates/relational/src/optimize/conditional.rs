// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Value};
use tracing::{debug, trace};

use super::Folder;
use crate::row::{IfExpression, RowExpression, SpecialForm, SwitchExpression, WhenClause};

impl Folder<'_> {
	pub(super) fn if_(&mut self, form: IfExpression) -> Result<RowExpression> {
		let condition = self.fold(*form.condition)?;

		match condition.as_constant() {
			Some(Value::Boolean(true)) => self.fold(*form.then),
			Some(Value::Boolean(false)) | Some(Value::Null) => self.fold(*form.otherwise),
			_ => Ok(SpecialForm::If(IfExpression {
				condition: Box::new(condition),
				then: Box::new(self.fold(*form.then)?),
				otherwise: Box::new(self.fold(*form.otherwise)?),
				ty: form.ty,
			})
			.into()),
		}
	}

	/// Clauses are decided in order. A matching clause ends the scan: it is
	/// the result when nothing before it is left undecided, otherwise it
	/// becomes the default of the residual.
	pub(super) fn switch(&mut self, form: SwitchExpression) -> Result<RowExpression> {
		let operand = self.fold(*form.operand)?;
		if operand.is_null_constant() {
			return self.fold(*form.default);
		}

		let mut clauses = Vec::with_capacity(form.clauses.len());
		let mut matched = None;

		for clause in form.clauses {
			let guard = self.fold(clause.operand)?;

			if let (Some(value), Some(candidate)) = (operand.as_constant(), guard.as_constant()) {
				match clause.equal.invoke(&[value.clone(), candidate.clone()]) {
					Ok(Value::Boolean(true)) => {
						trace!(%candidate, "switch clause matched");
						matched = Some(self.fold(clause.result)?);
						break;
					}
					Ok(_) => continue,
					Err(err) => debug!(code = err.code(), "switch clause left undecided"),
				}
			}

			clauses.push(WhenClause {
				operand: guard,
				result: self.fold(clause.result)?,
				equal: clause.equal,
			});
		}

		let default = match matched {
			Some(result) => result,
			None => self.fold(*form.default)?,
		};

		if clauses.is_empty() {
			return Ok(default);
		}

		Ok(SpecialForm::Switch(SwitchExpression {
			operand: Box::new(operand),
			clauses,
			default: Box::new(default),
			ty: form.ty,
		})
		.into())
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_function::{FunctionCatalog, OperatorType, StandardCatalog};
	use rowexpr_type::Type;

	use super::*;
	use crate::optimize::{ExpressionOptimizer, NoBindings};

	fn divide_by_zero(catalog: &StandardCatalog) -> RowExpression {
		let divide = catalog.resolve_operator(OperatorType::Divide, &[Type::Int4, Type::Int4]).unwrap();
		RowExpression::call(divide, [RowExpression::constant(1, Type::Int4), RowExpression::constant(0, Type::Int4)])
	}

	fn if_(condition: RowExpression, then: RowExpression, otherwise: RowExpression) -> RowExpression {
		let ty = then.ty();
		SpecialForm::If(IfExpression {
			condition: Box::new(condition),
			then: Box::new(then),
			otherwise: Box::new(otherwise),
			ty,
		})
		.into()
	}

	#[test]
	fn test_if_discards_dead_branch() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let one = RowExpression::constant(1, Type::Int4);
		let expression = if_(RowExpression::constant(true, Type::Boolean), one.clone(), divide_by_zero(&catalog));
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), one);

		let expression = if_(RowExpression::null(Type::Boolean), divide_by_zero(&catalog), one.clone());
		assert_eq!(optimizer.evaluate(&expression, &NoBindings).unwrap(), Value::Int4(1));
	}

	#[test]
	fn test_if_with_symbolic_condition_is_kept() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let expression = if_(
			RowExpression::variable("c", Type::Boolean),
			RowExpression::constant(1, Type::Int4),
			divide_by_zero(&catalog),
		);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), expression);
	}

	#[test]
	fn test_switch_match_after_undecided_clause_becomes_default() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);
		let equal = catalog.resolve_operator(OperatorType::Equal, &[Type::Int4, Type::Int4]).unwrap();

		let clause = |operand: RowExpression, result: i32| WhenClause {
			operand,
			result: RowExpression::constant(result, Type::Int4),
			equal: equal.clone(),
		};
		let switch = |clauses: Vec<WhenClause>, default: i32| -> RowExpression {
			SpecialForm::Switch(SwitchExpression {
				operand: Box::new(RowExpression::constant(1, Type::Int4)),
				clauses,
				default: Box::new(RowExpression::constant(default, Type::Int4)),
				ty: Type::Int4,
			})
			.into()
		};

		let expression = switch(
			vec![
				clause(RowExpression::constant(2, Type::Int4), 2),
				clause(divide_by_zero(&catalog), 3),
				clause(RowExpression::constant(1, Type::Int4), 4),
				clause(RowExpression::constant(5, Type::Int4), 5),
			],
			6,
		);
		let expected = switch(vec![clause(divide_by_zero(&catalog), 3)], 4);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), expected);
	}
}
