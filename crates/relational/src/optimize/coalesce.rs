// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Value};

use super::Folder;
use crate::row::{CoalesceExpression, ConstantExpression, RowExpression, SpecialForm};

impl Folder<'_> {
	pub(super) fn coalesce(&mut self, form: CoalesceExpression) -> Result<RowExpression> {
		let mut operands = Vec::with_capacity(form.operands.len());

		for operand in form.operands {
			let operand = self.fold(operand)?;
			if push_operand(&mut operands, operand) {
				break;
			}
		}

		if operands.len() > 1 {
			return Ok(SpecialForm::Coalesce(CoalesceExpression {
				operands,
				ty: form.ty,
			})
			.into());
		}

		Ok(operands.pop().unwrap_or_else(|| RowExpression::null(form.ty)))
	}
}

/// Appends a folded operand and reports whether the list is now closed by a
/// non-null constant. Nested residual coalesces are spliced in.
fn push_operand(operands: &mut Vec<RowExpression>, operand: RowExpression) -> bool {
	match operand {
		RowExpression::Constant(ConstantExpression {
			value: Value::Null,
			..
		}) => false,
		RowExpression::Constant(_) => {
			operands.push(operand);
			true
		}
		RowExpression::Special(SpecialForm::Coalesce(nested)) => {
			for operand in nested.operands {
				if push_operand(operands, operand) {
					return true;
				}
			}
			false
		}
		operand => {
			operands.push(operand);
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_function::{FunctionCatalog, OperatorType, StandardCatalog};
	use rowexpr_type::Type;

	use super::*;
	use crate::optimize::{ExpressionOptimizer, NoBindings};

	fn coalesce(operands: impl IntoIterator<Item = RowExpression>) -> RowExpression {
		SpecialForm::Coalesce(CoalesceExpression {
			operands: operands.into_iter().collect(),
			ty: Type::Int4,
		})
		.into()
	}

	fn divide_by_zero(catalog: &StandardCatalog) -> RowExpression {
		let divide = catalog.resolve_operator(OperatorType::Divide, &[Type::Int4, Type::Int4]).unwrap();
		RowExpression::call(divide, [RowExpression::constant(1, Type::Int4), RowExpression::constant(0, Type::Int4)])
	}

	#[test]
	fn test_first_constant_closes_the_list() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);
		let one = RowExpression::constant(1, Type::Int4);

		let expression = coalesce([one.clone(), divide_by_zero(&catalog)]);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), one);

		let expression = coalesce([divide_by_zero(&catalog), one.clone()]);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), expression);
		assert!(optimizer.evaluate(&expression, &NoBindings).is_err());
	}

	#[test]
	fn test_nulls_dropped_and_duplicates_kept() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);
		let x = RowExpression::variable("x", Type::Int4);

		let expression = coalesce([RowExpression::null(Type::Int4), x.clone(), x.clone()]);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), coalesce([x.clone(), x.clone()]));

		let expression = coalesce([RowExpression::null(Type::Int4), x.clone(), RowExpression::null(Type::Int4)]);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), x);

		let expression = coalesce([RowExpression::null(Type::Int4)]);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), RowExpression::null(Type::Int4));
	}

	#[test]
	fn test_nested_coalesce_is_spliced() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);
		let x = RowExpression::variable("x", Type::Int4);
		let y = RowExpression::variable("y", Type::Int4);

		let expression = coalesce([x.clone(), coalesce([y.clone(), RowExpression::constant(2, Type::Int4)]), y.clone()]);
		assert_eq!(
			optimizer.optimize(&expression, &NoBindings).unwrap(),
			coalesce([x, y, RowExpression::constant(2, Type::Int4)])
		);
	}
}
