// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Syntax-directed lowering of the source expression tree into row expressions.

use rowexpr_function::{FunctionCatalog, TypeCoercion};
use rowexpr_type::Result;
use tracing::instrument;

use crate::{
	ir::{Expression, LogicalExpression, LogicalOperator},
	row::{AndExpression, IsNullExpression, OrExpression, RowExpression, SpecialForm},
};

mod cast;
mod comparison;
mod conditional;
mod layout;
mod special;

pub use layout::{NoSlots, SlotLayout};

pub struct Translator<'a> {
	catalog: &'a dyn FunctionCatalog,
	coercion: &'a dyn TypeCoercion,
	layout: &'a dyn SlotLayout,
}

impl<'a> Translator<'a> {
	pub fn new(catalog: &'a dyn FunctionCatalog, coercion: &'a dyn TypeCoercion, layout: &'a dyn SlotLayout) -> Self {
		Self {
			catalog,
			coercion,
			layout,
		}
	}

	#[instrument(name = "relational::translate", level = "trace", skip(self, expression), fields(expression = %expression))]
	pub fn translate(&self, expression: &Expression) -> Result<RowExpression> {
		self.lower(expression)
	}

	fn lower(&self, expression: &Expression) -> Result<RowExpression> {
		match expression {
			Expression::Constant(constant) => Ok(RowExpression::constant(constant.value.clone(), constant.ty.clone())),
			Expression::Reference(reference) => Ok(match self.layout.lookup(&reference.name) {
				Some(field) => RowExpression::input(field, reference.ty.clone()),
				None => RowExpression::variable(reference.name.clone(), reference.ty.clone()),
			}),
			Expression::Comparison(comparison) => self.comparison(comparison),
			Expression::Arithmetic(arithmetic) => self.arithmetic(arithmetic),
			Expression::Negation(negation) => self.negation(negation),
			Expression::Logical(logical) => self.logical(logical),
			Expression::Not(not) => {
				let value = self.lower(&not.expression)?;
				self.not(value)
			}
			Expression::Cast(cast) => self.cast(cast),
			Expression::Case(case) => self.case(case, expression.ty()),
			Expression::Switch(switch) => self.switch(switch, expression.ty()),
			Expression::Coalesce(coalesce) => self.coalesce(coalesce, expression.ty()),
			Expression::In(in_list) => self.in_list(in_list),
			Expression::IsNull(is_null) => Ok(SpecialForm::IsNull(IsNullExpression {
				value: Box::new(self.lower(&is_null.expression)?),
			})
			.into()),
			Expression::NullIf(null_if) => self.null_if(null_if),
			Expression::Between(between) => self.between(between),
			Expression::FieldReference(field) => self.field_reference(field, expression.ty()),
			Expression::Row(row) => self.row(row),
			Expression::Lambda(lambda) => self.lambda(lambda),
			Expression::Bind(bind) => self.bind(bind, expression.ty()),
			Expression::Call(call) => Ok(RowExpression::call(call.function.clone(), self.lower_all(&call.arguments)?)),
		}
	}

	fn lower_all(&self, expressions: &[Expression]) -> Result<Vec<RowExpression>> {
		expressions.iter().map(|expression| self.lower(expression)).collect()
	}

	fn logical(&self, logical: &LogicalExpression) -> Result<RowExpression> {
		let terms = self.lower_all(&logical.terms)?;
		Ok(match logical.operator {
			LogicalOperator::And => SpecialForm::And(AndExpression {
				terms,
			}),
			LogicalOperator::Or => SpecialForm::Or(OrExpression {
				terms,
			}),
		}
		.into())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use rowexpr_function::{StandardCatalog, StandardTypeCoercion};
	use rowexpr_type::{Type, Value};

	use super::*;
	use crate::ir::{ConstantExpression, ReferenceExpression};

	fn reference(name: &str, ty: Type) -> Expression {
		Expression::Reference(ReferenceExpression {
			name: name.to_string(),
			ty,
		})
	}

	#[test]
	fn test_reference_uses_slot_when_known() {
		let catalog = StandardCatalog::new();
		let layout = HashMap::from([("a".to_string(), 3usize)]);
		let translator = Translator::new(&catalog, &StandardTypeCoercion, &layout);

		assert_eq!(translator.translate(&reference("a", Type::Int8)).unwrap(), RowExpression::input(3, Type::Int8));
		assert_eq!(
			translator.translate(&reference("b", Type::Int8)).unwrap(),
			RowExpression::variable("b", Type::Int8)
		);
	}

	#[test]
	fn test_logical_is_tagged_not_folded() {
		let catalog = StandardCatalog::new();
		let translator = Translator::new(&catalog, &StandardTypeCoercion, &NoSlots);
		let expression = Expression::Logical(LogicalExpression {
			operator: LogicalOperator::Or,
			terms: vec![
				Expression::Constant(ConstantExpression {
					value: Value::Boolean(true),
					ty: Type::Boolean,
				}),
				reference("b", Type::Boolean),
			],
		});

		let result = translator.translate(&expression).unwrap();
		assert_eq!(result.to_string(), "OR(true, b)");
		assert_eq!(result.ty(), Type::Boolean);
	}
}
