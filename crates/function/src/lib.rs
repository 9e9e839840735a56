// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Value};

pub mod builtin;
mod catalog;
pub mod cast;
pub mod error;
pub mod operator;
mod registry;
mod signature;

pub use catalog::{FunctionCatalog, StandardTypeCoercion, TypeCoercion};
pub use error::FunctionError;
pub use registry::StandardCatalog;
pub use signature::{FunctionName, NullHandling, OperatorType, ResolvedFunction, Signature};

/// A callable scalar implementation. Arguments arrive already evaluated and
/// in the order of the resolved signature.
pub trait ScalarFunction: Send + Sync {
	fn invoke(&self, args: &[Value]) -> Result<Value>;
}

impl<F> ScalarFunction for F
where
	F: Fn(&[Value]) -> Result<Value> + Send + Sync,
{
	fn invoke(&self, args: &[Value]) -> Result<Value> {
		self(args)
	}
}
