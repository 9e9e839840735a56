// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Diagnostic, Error, IntoDiagnostic, Type};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpressionError {
	#[error("symbol {name} of type {ty} has no value")]
	UnresolvedSymbol {
		name: String,
		ty: Type,
	},

	#[error("input #{field} of type {ty} has no value")]
	UnresolvedInput {
		field: usize,
		ty: Type,
	},

	#[error("expression {expression} does not reduce to a value")]
	NotConstant {
		expression: String,
	},

	#[error("cannot change the type of {expression} to {ty}")]
	UnsupportedRetag {
		expression: String,
		ty: Type,
	},
}

impl IntoDiagnostic for ExpressionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		let (code, label, help) = match &self {
			ExpressionError::UnresolvedSymbol {
				name,
				..
			} => (
				"EXPRESSION_001",
				Some(format!("{} is not bound", name)),
				Some("bind every symbol before evaluating, or optimize instead".to_string()),
			),
			ExpressionError::UnresolvedInput {
				field,
				..
			} => (
				"EXPRESSION_002",
				Some(format!("input channel {} is not bound", field)),
				Some("bind every input before evaluating, or optimize instead".to_string()),
			),
			ExpressionError::NotConstant {
				..
			} => ("EXPRESSION_003", None, None),
			ExpressionError::UnsupportedRetag {
				..
			} => (
				"EXPRESSION_004",
				Some("lambda types are derived from their signature".to_string()),
				None,
			),
		};

		Diagnostic {
			code: code.to_string(),
			message,
			label,
			help,
			notes: vec![],
			cause: None,
		}
	}
}

impl From<ExpressionError> for Error {
	fn from(err: ExpressionError) -> Self {
		Error(err.into_diagnostic())
	}
}
