// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Type, Value};
use tracing::trace;

use super::Folder;
use crate::row::{AndExpression, OrExpression, RowExpression, SpecialForm};

enum Connective {
	Constant(Value),
	Single(RowExpression),
	Terms(Vec<RowExpression>),
}

impl Folder<'_> {
	pub(super) fn and(&mut self, form: AndExpression) -> Result<RowExpression> {
		Ok(match self.connective(form.terms, false)? {
			Connective::Constant(value) => RowExpression::constant(value, Type::Boolean),
			Connective::Single(term) => term,
			Connective::Terms(terms) => SpecialForm::And(AndExpression {
				terms,
			})
			.into(),
		})
	}

	pub(super) fn or(&mut self, form: OrExpression) -> Result<RowExpression> {
		Ok(match self.connective(form.terms, true)? {
			Connective::Constant(value) => RowExpression::constant(value, Type::Boolean),
			Connective::Single(term) => term,
			Connective::Terms(terms) => SpecialForm::Or(OrExpression {
				terms,
			})
			.into(),
		})
	}

	/// `dominant` decides the connective on its own: FALSE for AND, TRUE for
	/// OR. Terms after it are never folded, and residual terms before it are
	/// discarded too, even failing ones: `AND(1/0 = 1, FALSE)` is FALSE.
	fn connective(&mut self, terms: Vec<RowExpression>, dominant: bool) -> Result<Connective> {
		let mut remaining = Vec::with_capacity(terms.len());
		let mut seen_null = false;

		for term in terms {
			let term = self.fold(term)?;
			match term.as_constant() {
				Some(Value::Boolean(value)) if *value == dominant => {
					trace!(dominant, "connective short circuit");
					return Ok(Connective::Constant(Value::Boolean(dominant)));
				}
				Some(Value::Boolean(_)) => {}
				Some(Value::Null) => {
					if !seen_null {
						seen_null = true;
						remaining.push(term);
					}
				}
				_ => remaining.push(term),
			}
		}

		if remaining.iter().all(RowExpression::is_null_constant) {
			return Ok(Connective::Constant(if seen_null {
				Value::Null
			} else {
				Value::Boolean(!dominant)
			}));
		}

		if remaining.len() == 1 {
			if let Some(term) = remaining.pop() {
				return Ok(Connective::Single(term));
			}
		}

		Ok(Connective::Terms(remaining))
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_function::StandardCatalog;

	use super::*;
	use crate::optimize::{ExpressionOptimizer, NoBindings};

	fn and(terms: impl IntoIterator<Item = RowExpression>) -> RowExpression {
		SpecialForm::And(AndExpression {
			terms: terms.into_iter().collect(),
		})
		.into()
	}

	fn or(terms: impl IntoIterator<Item = RowExpression>) -> RowExpression {
		SpecialForm::Or(OrExpression {
			terms: terms.into_iter().collect(),
		})
		.into()
	}

	fn boolean(value: impl Into<Value>) -> RowExpression {
		RowExpression::constant(value, Type::Boolean)
	}

	fn x() -> RowExpression {
		RowExpression::variable("x", Type::Boolean)
	}

	#[test]
	fn test_three_valued_tables() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);
		let optimize = |expression: RowExpression| optimizer.optimize(&expression, &NoBindings).unwrap();

		assert_eq!(optimize(and([boolean(true), boolean(Value::Null)])), boolean(Value::Null));
		assert_eq!(optimize(and([boolean(false), boolean(Value::Null)])), boolean(false));
		assert_eq!(optimize(or([boolean(true), boolean(Value::Null)])), boolean(true));
		assert_eq!(optimize(or([boolean(false), boolean(Value::Null)])), boolean(Value::Null));
		assert_eq!(optimize(and([boolean(true), boolean(true)])), boolean(true));
		assert_eq!(optimize(or([boolean(false), boolean(false)])), boolean(false));
	}

	#[test]
	fn test_neutral_terms_are_dropped() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);
		let optimize = |expression: RowExpression| optimizer.optimize(&expression, &NoBindings).unwrap();

		assert_eq!(optimize(and([boolean(true), x()])), x());
		assert_eq!(optimize(or([x(), boolean(false)])), x());
		assert_eq!(optimize(and([x(), boolean(false)])), boolean(false));
		assert_eq!(optimize(or([x(), boolean(Value::Null), boolean(Value::Null)])), or([x(), boolean(Value::Null)]));
	}
}
