// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::OperatorType;
use rowexpr_type::{Result, Type};

use super::Translator;
use crate::{
	ir::{ArithmeticExpression, ArithmeticOperator, ComparisonExpression, ComparisonOperator, NegationExpression},
	row::RowExpression,
};

impl Translator<'_> {
	/// Comparisons reach the backend in terms of `=`, `<`, `<=` and
	/// `IS DISTINCT FROM` only. The others swap operands or negate.
	pub(super) fn comparison(&self, comparison: &ComparisonExpression) -> Result<RowExpression> {
		let left = self.lower(&comparison.left)?;
		let right = self.lower(&comparison.right)?;

		match comparison.operator {
			ComparisonOperator::Equal => self.operator(OperatorType::Equal, left, right),
			ComparisonOperator::LessThan => self.operator(OperatorType::LessThan, left, right),
			ComparisonOperator::LessThanOrEqual => self.operator(OperatorType::LessThanOrEqual, left, right),
			ComparisonOperator::IsDistinctFrom => self.operator(OperatorType::IsDistinctFrom, left, right),
			ComparisonOperator::GreaterThan => self.operator(OperatorType::LessThan, right, left),
			ComparisonOperator::GreaterThanOrEqual => self.operator(OperatorType::LessThanOrEqual, right, left),
			ComparisonOperator::NotEqual => {
				let equal = self.operator(OperatorType::Equal, left, right)?;
				self.not(equal)
			}
		}
	}

	pub(super) fn arithmetic(&self, arithmetic: &ArithmeticExpression) -> Result<RowExpression> {
		let operator = match arithmetic.operator {
			ArithmeticOperator::Add => OperatorType::Add,
			ArithmeticOperator::Subtract => OperatorType::Subtract,
			ArithmeticOperator::Multiply => OperatorType::Multiply,
			ArithmeticOperator::Divide => OperatorType::Divide,
			ArithmeticOperator::Modulus => OperatorType::Modulus,
		};
		let left = self.lower(&arithmetic.left)?;
		let right = self.lower(&arithmetic.right)?;
		self.operator(operator, left, right)
	}

	pub(super) fn negation(&self, negation: &NegationExpression) -> Result<RowExpression> {
		let value = self.lower(&negation.expression)?;
		let function = self.catalog.resolve_operator(OperatorType::Negation, &[value.ty()])?;
		Ok(RowExpression::call(function, [value]))
	}

	pub(super) fn not(&self, value: RowExpression) -> Result<RowExpression> {
		let function = self.catalog.resolve_builtin_function("not", &[Type::Boolean])?;
		Ok(RowExpression::call(function, [value]))
	}

	fn operator(&self, operator: OperatorType, left: RowExpression, right: RowExpression) -> Result<RowExpression> {
		let function = self.catalog.resolve_operator(operator, &[left.ty(), right.ty()])?;
		Ok(RowExpression::call(function, [left, right]))
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_function::{FunctionCatalog, StandardCatalog, StandardTypeCoercion};
	use rowexpr_type::Value;

	use super::*;
	use crate::{
		ir::{ConstantExpression, Expression, ReferenceExpression},
		translate::NoSlots,
	};

	fn compare(operator: ComparisonOperator) -> Expression {
		Expression::Comparison(ComparisonExpression {
			operator,
			left: Box::new(Expression::Reference(ReferenceExpression {
				name: "a".to_string(),
				ty: Type::Int8,
			})),
			right: Box::new(Expression::Constant(ConstantExpression {
				value: Value::Int8(5),
				ty: Type::Int8,
			})),
		})
	}

	#[test]
	fn test_greater_than_swaps_operands() {
		let catalog = StandardCatalog::new();
		let translator = Translator::new(&catalog, &StandardTypeCoercion, &NoSlots);

		let less_than = catalog.resolve_operator(OperatorType::LessThan, &[Type::Int8, Type::Int8]).unwrap();
		let expected = RowExpression::call(
			less_than,
			[RowExpression::constant(5i64, Type::Int8), RowExpression::variable("a", Type::Int8)],
		);
		assert_eq!(translator.translate(&compare(ComparisonOperator::GreaterThan)).unwrap(), expected);
	}

	#[test]
	fn test_greater_than_or_equal_swaps_operands() {
		let catalog = StandardCatalog::new();
		let translator = Translator::new(&catalog, &StandardTypeCoercion, &NoSlots);

		let result = translator.translate(&compare(ComparisonOperator::GreaterThanOrEqual)).unwrap();
		assert_eq!(result.to_string(), "$operator$less_than_or_equal(5, a)");
	}

	#[test]
	fn test_not_equal_negates_equal() {
		let catalog = StandardCatalog::new();
		let translator = Translator::new(&catalog, &StandardTypeCoercion, &NoSlots);

		let result = translator.translate(&compare(ComparisonOperator::NotEqual)).unwrap();
		assert_eq!(result.to_string(), "not($operator$equal(a, 5))");
		assert_eq!(result.ty(), Type::Boolean);
	}

	#[test]
	fn test_is_distinct_from_passes_through() {
		let catalog = StandardCatalog::new();
		let translator = Translator::new(&catalog, &StandardTypeCoercion, &NoSlots);

		let result = translator.translate(&compare(ComparisonOperator::IsDistinctFrom)).unwrap();
		assert_eq!(result.to_string(), "$operator$is_distinct_from(a, 5)");
	}
}
