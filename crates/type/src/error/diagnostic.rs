// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic, TypeError};

impl IntoDiagnostic for TypeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			TypeError::DivisionByZero => Diagnostic {
				code: "ARITHMETIC_001".to_string(),
				message,
				label: Some("divisor evaluates to zero".to_string()),
				help: Some("guard the divisor, for example with NULLIF(divisor, 0)".to_string()),
				notes: vec![],
				cause: None,
			},
			TypeError::NumericOverflow {
				ty,
				..
			} => Diagnostic {
				code: "ARITHMETIC_002".to_string(),
				message,
				label: Some(format!("result does not fit into {}", ty)),
				help: Some("cast the operands to a wider numeric type".to_string()),
				notes: vec![],
				cause: None,
			},
			TypeError::InvalidCast {
				to,
				..
			} => Diagnostic {
				code: "CAST_001".to_string(),
				message,
				label: Some(format!("value is not a valid {}", to)),
				help: Some("use TRY_CAST to produce NULL instead of failing".to_string()),
				notes: vec![],
				cause: None,
			},
			TypeError::FieldIndexOutOfBounds {
				width,
				..
			} => Diagnostic {
				code: "ROW_001".to_string(),
				message,
				label: None,
				help: Some(format!("field indexes are 0-based and must be below {}", width)),
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Type;

	#[test]
	fn test_codes() {
		assert_eq!(TypeError::DivisionByZero.into_diagnostic().code, "ARITHMETIC_001");
		assert_eq!(
			TypeError::NumericOverflow {
				operation: "addition",
				ty: Type::Int4
			}
			.into_diagnostic()
			.code,
			"ARITHMETIC_002"
		);
		let cast = TypeError::InvalidCast {
			value: "abc".to_string(),
			from: Type::Utf8,
			to: Type::Int4,
		}
		.into_diagnostic();
		assert_eq!(cast.code, "CAST_001");
		assert_eq!(cast.message, "cannot cast abc from varchar to integer");
	}
}
