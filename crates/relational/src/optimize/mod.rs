// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Partial evaluation of row expressions. Constant subtrees are folded under
//! SQL three-valued logic; a subtree is only evaluated when the runtime
//! control flow would reach it, so errors on dead paths never surface.

use rowexpr_function::FunctionCatalog;
use rowexpr_type::{Result, Type, Value};
use tracing::instrument;

use crate::row::{BindExpression, IsNullExpression, LambdaDefinitionExpression, RowExpression, SpecialForm};

mod between;
mod call;
mod coalesce;
mod conditional;
mod evaluate;
mod logical;
mod membership;
mod nullif;
mod resolver;
mod row;

pub use resolver::{Bindings, NoBindings, SymbolResolver};

pub struct ExpressionOptimizer<'a> {
	catalog: &'a dyn FunctionCatalog,
}

impl<'a> ExpressionOptimizer<'a> {
	pub fn new(catalog: &'a dyn FunctionCatalog) -> Self {
		Self {
			catalog,
		}
	}

	/// Folds everything that can be folded without taking a dead path. The
	/// result may still reference unresolved symbols and failing calls.
	#[instrument(name = "relational::optimize", level = "trace", skip(self, expression, resolver), fields(expression = %expression))]
	pub fn optimize(&self, expression: &RowExpression, resolver: &dyn SymbolResolver) -> Result<RowExpression> {
		Folder::new(self.catalog, resolver).fold(expression.clone())
	}

	/// Reduces the expression to a value. Every symbol on the taken path must
	/// be resolvable and any runtime error on that path is returned.
	#[instrument(name = "relational::evaluate", level = "debug", skip(self, expression, resolver), fields(expression = %expression))]
	pub fn evaluate(&self, expression: &RowExpression, resolver: &dyn SymbolResolver) -> Result<Value> {
		let residual = self.optimize(expression, resolver)?;
		evaluate::Interpreter::new(resolver).evaluate(&residual)
	}
}

struct Folder<'a> {
	catalog: &'a dyn FunctionCatalog,
	resolver: &'a dyn SymbolResolver,
	/// lambda parameters in scope
	shadowed: Vec<String>,
}

impl<'a> Folder<'a> {
	fn new(catalog: &'a dyn FunctionCatalog, resolver: &'a dyn SymbolResolver) -> Self {
		Self {
			catalog,
			resolver,
			shadowed: vec![],
		}
	}

	fn fold(&mut self, expression: RowExpression) -> Result<RowExpression> {
		match expression {
			RowExpression::Constant(constant) => Ok(RowExpression::Constant(constant)),
			RowExpression::InputReference(reference) => {
				Ok(match self.resolver.resolve_input(reference.field, &reference.ty) {
					Some(value) => RowExpression::constant(value, reference.ty),
					None => RowExpression::InputReference(reference),
				})
			}
			RowExpression::VariableReference(reference) => {
				if self.shadowed.contains(&reference.name) {
					return Ok(RowExpression::VariableReference(reference));
				}
				Ok(match self.resolver.resolve_variable(&reference.name, &reference.ty) {
					Some(value) => RowExpression::constant(value, reference.ty),
					None => RowExpression::VariableReference(reference),
				})
			}
			RowExpression::Call(call) => self.call(call),
			RowExpression::Special(form) => self.special(form),
			RowExpression::Lambda(lambda) => self.lambda(lambda),
		}
	}

	fn fold_all(&mut self, expressions: Vec<RowExpression>) -> Result<Vec<RowExpression>> {
		expressions.into_iter().map(|expression| self.fold(expression)).collect()
	}

	fn special(&mut self, form: SpecialForm) -> Result<RowExpression> {
		match form {
			SpecialForm::And(form) => self.and(form),
			SpecialForm::Or(form) => self.or(form),
			SpecialForm::If(form) => self.if_(form),
			SpecialForm::Switch(form) => self.switch(form),
			SpecialForm::Coalesce(form) => self.coalesce(form),
			SpecialForm::In(form) => self.in_list(form),
			SpecialForm::IsNull(form) => {
				let value = self.fold(*form.value)?;
				Ok(match value.as_constant() {
					Some(constant) => RowExpression::constant(constant.is_null(), Type::Boolean),
					None => SpecialForm::IsNull(IsNullExpression {
						value: Box::new(value),
					})
					.into(),
				})
			}
			SpecialForm::NullIf(form) => self.null_if(form),
			SpecialForm::Between(form) => self.between(form),
			SpecialForm::Dereference(form) => self.dereference(form),
			SpecialForm::RowConstructor(form) => self.row_constructor(form),
			// a bound lambda is a function value and stays as it is
			SpecialForm::Bind(form) => Ok(SpecialForm::Bind(BindExpression {
				values: self.fold_all(form.values)?,
				function: Box::new(self.fold(*form.function)?),
				ty: form.ty,
			})
			.into()),
		}
	}

	fn lambda(&mut self, lambda: LambdaDefinitionExpression) -> Result<RowExpression> {
		let depth = self.shadowed.len();
		self.shadowed.extend(lambda.parameters.iter().map(|parameter| parameter.name.clone()));
		let body = self.fold(*lambda.body);
		self.shadowed.truncate(depth);

		Ok(RowExpression::Lambda(LambdaDefinitionExpression {
			parameters: lambda.parameters,
			body: Box::new(body?),
		}))
	}
}
