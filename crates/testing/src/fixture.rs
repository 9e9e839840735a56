// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::{StandardCatalog, StandardTypeCoercion};
use rowexpr_relational::{Bindings, ExpressionOptimizer, NoSlots, RowExpression, Translator, ir::Expression};
use rowexpr_type::{Result, Value};

pub fn catalog() -> StandardCatalog {
	StandardCatalog::new()
}

/// `bound_value` is 1234; every other symbol stays symbolic.
pub fn symbols() -> Bindings {
	Bindings::new().with_variable("bound_value", 1234)
}

pub fn translate(expression: &Expression) -> RowExpression {
	let catalog = catalog();
	Translator::new(&catalog, &StandardTypeCoercion, &NoSlots)
		.translate(expression)
		.unwrap_or_else(|err| panic!("failed to translate {}:\n{}", expression, err))
}

pub fn optimize_row(expression: &RowExpression) -> RowExpression {
	let catalog = catalog();
	ExpressionOptimizer::new(&catalog)
		.optimize(expression, &symbols())
		.unwrap_or_else(|err| panic!("failed to optimize {}:\n{}", expression, err))
}

pub fn optimize(expression: &Expression) -> RowExpression {
	optimize_row(&translate(expression))
}

pub fn evaluate(expression: &Expression) -> Result<Value> {
	let catalog = catalog();
	ExpressionOptimizer::new(&catalog).evaluate(&translate(expression), &symbols())
}

/// Both sides are lowered and folded. Constants compare by value only, so a
/// literal of a narrower type can stand in for the expected result.
pub fn assert_optimized_eq(actual: &Expression, expected: &Expression) {
	let optimized = optimize(actual);
	let wanted = optimize(expected);

	match (optimized.as_constant(), wanted.as_constant()) {
		(Some(left), Some(right)) => {
			assert_eq!(left, right, "{} folded to {}, expected {}", actual, optimized, wanted)
		}
		_ => assert_eq!(optimized, wanted, "{} folded to {}, expected {}", actual, optimized, wanted),
	}
}

pub fn assert_evaluates_to(expression: &Expression, expected: impl Into<Value>) {
	let expected = expected.into();
	match evaluate(expression) {
		Ok(value) => assert_eq!(value, expected, "{} evaluated to {}, expected {}", expression, value, expected),
		Err(err) => panic!("{} failed to evaluate:\n{}", expression, err),
	}
}
