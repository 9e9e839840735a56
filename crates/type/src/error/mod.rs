// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

use serde::{Deserialize, Serialize};

mod diagnostic;
pub mod render;

use render::DefaultRenderer;

use crate::value::Type;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn code(&self) -> &str {
		self.0.code.as_str()
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}

impl From<TypeError> for Error {
	fn from(err: TypeError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Runtime failures raised while evaluating scalar operations on values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
	#[error("division by zero")]
	DivisionByZero,

	#[error("{operation} overflows {ty}")]
	NumericOverflow {
		operation: &'static str,
		ty: Type,
	},

	#[error("cannot cast {value} from {from} to {to}")]
	InvalidCast {
		value: String,
		from: Type,
		to: Type,
	},

	#[error("field index {index} is out of bounds for a row of {width} fields")]
	FieldIndexOutOfBounds {
		index: i64,
		width: usize,
	},
}

/// Builds an internal error diagnostic that records where it was raised.
pub fn internal_with_context(reason: impl Into<String>, file: &str, line: u32, module_path: &str) -> Diagnostic {
	let reason = reason.into();
	Diagnostic {
		code: "INTERNAL_ERROR".to_string(),
		message: format!("Internal error: {}", reason),
		label: Some(format!("internal invariant violated at {}:{}", file, line)),
		help: Some("This is a bug in expression lowering, please report it".to_string()),
		notes: vec![format!("Module: {}", module_path)],
		cause: None,
	}
}

#[macro_export]
macro_rules! internal_error {
	($reason:expr) => {
		$crate::error::Error($crate::error::internal_with_context($reason, file!(), line!(), module_path!()))
	};
	($fmt:expr, $($arg:tt)*) => {
		$crate::error::Error($crate::error::internal_with_context(
			format!($fmt, $($arg)*),
			file!(),
			line!(),
			module_path!(),
		))
	};
}

#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error::Error($crate::error::IntoDiagnostic::into_diagnostic($diagnostic)))
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_error_derefs_to_diagnostic() {
		let err: Error = TypeError::DivisionByZero.into();
		assert_eq!(err.code, "ARITHMETIC_001");
		assert_eq!(err.code(), "ARITHMETIC_001");
	}

	#[test]
	fn test_internal_error_macro_captures_location() {
		let err = internal_error!("unexpected {}", "state");
		assert_eq!(err.code, "INTERNAL_ERROR");
		assert!(err.message.contains("unexpected state"));
		assert!(err.label.as_deref().unwrap().contains("mod.rs"));
	}

	#[test]
	fn test_return_error() {
		fn fails() -> crate::Result<()> {
			return_error!(TypeError::DivisionByZero)
		}
		assert_eq!(fails().unwrap_err().code, "ARITHMETIC_001");
	}
}
