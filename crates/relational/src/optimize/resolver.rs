// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use rowexpr_type::{Type, Value};

/// Supplies known values for symbols. Returning `None` leaves the symbol
/// symbolic in the residual.
pub trait SymbolResolver {
	fn resolve_variable(&self, name: &str, ty: &Type) -> Option<Value>;

	fn resolve_input(&self, field: usize, ty: &Type) -> Option<Value> {
		let _ = (field, ty);
		None
	}
}

/// Leaves every symbol symbolic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBindings;

impl SymbolResolver for NoBindings {
	fn resolve_variable(&self, _name: &str, _ty: &Type) -> Option<Value> {
		None
	}
}

#[derive(Clone, Debug, Default)]
pub struct Bindings {
	variables: HashMap<String, Value>,
	inputs: HashMap<usize, Value>,
}

impl Bindings {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.bind_variable(name, value);
		self
	}

	pub fn with_input(mut self, field: usize, value: impl Into<Value>) -> Self {
		self.bind_input(field, value);
		self
	}

	pub fn bind_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
		self.variables.insert(name.into(), value.into());
	}

	pub fn bind_input(&mut self, field: usize, value: impl Into<Value>) {
		self.inputs.insert(field, value.into());
	}
}

impl SymbolResolver for Bindings {
	fn resolve_variable(&self, name: &str, _ty: &Type) -> Option<Value> {
		self.variables.get(name).cloned()
	}

	fn resolve_input(&self, field: usize, _ty: &Type) -> Option<Value> {
		self.inputs.get(&field).cloned()
	}
}

impl<F> SymbolResolver for F
where
	F: Fn(&str, &Type) -> Option<Value>,
{
	fn resolve_variable(&self, name: &str, ty: &Type) -> Option<Value> {
		self(name, ty)
	}
}
