// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Diagnostic, Error, IntoDiagnostic, Type};

use crate::OperatorType;

fn render_types(types: &[Type]) -> String {
	types.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FunctionError {
	#[error("operator {operator} is not defined for ({})", render_types(.argument_types))]
	OperatorNotFound {
		operator: OperatorType,
		argument_types: Vec<Type>,
	},

	#[error("function {name} is not defined for ({})", render_types(.argument_types))]
	FunctionNotFound {
		name: String,
		argument_types: Vec<Type>,
	},

	#[error("no coercion from {from} to {to}")]
	CoercionNotFound {
		from: Type,
		to: Type,
	},

	#[error("function {function} expects {expected} arguments, got {actual}")]
	ArityMismatch {
		function: String,
		expected: usize,
		actual: usize,
	},
}

impl IntoDiagnostic for FunctionError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			FunctionError::OperatorNotFound {
				operator,
				..
			} => Diagnostic {
				code: "FUNCTION_001".to_string(),
				message,
				label: Some(format!("no matching signature for {}", operator)),
				help: Some("check the operand types, they must share a common super type".to_string()),
				notes: vec![],
				cause: None,
			},
			FunctionError::FunctionNotFound {
				name,
				..
			} => Diagnostic {
				code: "FUNCTION_002".to_string(),
				message,
				label: Some(format!("unknown function {}", name)),
				help: None,
				notes: vec![],
				cause: None,
			},
			FunctionError::CoercionNotFound {
				..
			} => Diagnostic {
				code: "FUNCTION_003".to_string(),
				message,
				label: None,
				help: Some("cast through an intermediate type such as varchar".to_string()),
				notes: vec![],
				cause: None,
			},
			FunctionError::ArityMismatch {
				expected,
				..
			} => Diagnostic {
				code: "FUNCTION_004".to_string(),
				message,
				label: Some(format!("expected {} arguments", expected)),
				help: None,
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<FunctionError> for Error {
	fn from(err: FunctionError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_operator_not_found_message() {
		let err = FunctionError::OperatorNotFound {
			operator: OperatorType::Add,
			argument_types: vec![Type::Utf8, Type::Boolean],
		};
		assert_eq!(err.to_string(), "operator $operator$add is not defined for (varchar, boolean)");
		assert_eq!(err.into_diagnostic().code, "FUNCTION_001");
	}
}
