// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::{FunctionCatalog, TypeCoercion};
use rowexpr_type::Result;
use tracing::instrument;

use crate::{
	config::LoweringConfig,
	ir::Expression,
	optimize::{ExpressionOptimizer, NoBindings},
	row::RowExpression,
	translate::{SlotLayout, Translator},
};

/// Lowers source expressions against a fixed catalog and coercion oracle.
pub struct Lowering<'a> {
	catalog: &'a dyn FunctionCatalog,
	coercion: &'a dyn TypeCoercion,
	config: LoweringConfig,
}

impl<'a> Lowering<'a> {
	pub fn new(catalog: &'a dyn FunctionCatalog, coercion: &'a dyn TypeCoercion, config: LoweringConfig) -> Self {
		Self {
			catalog,
			coercion,
			config,
		}
	}

	pub fn config(&self) -> &LoweringConfig {
		&self.config
	}

	#[instrument(name = "relational::lowering::translate", level = "debug", skip(self, expression, layout), fields(optimize = self.config.optimize))]
	pub fn translate(&self, expression: &Expression, layout: &dyn SlotLayout) -> Result<RowExpression> {
		let translated = Translator::new(self.catalog, self.coercion, layout).translate(expression)?;
		if !self.config.optimize {
			return Ok(translated);
		}
		ExpressionOptimizer::new(self.catalog).optimize(&translated, &NoBindings)
	}
}
