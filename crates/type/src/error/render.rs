// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::Diagnostic;

pub trait DiagnosticRenderer {
	fn render(&self, diagnostic: &Diagnostic) -> String;
}

pub struct DefaultRenderer;

impl DiagnosticRenderer for DefaultRenderer {
	fn render(&self, d: &Diagnostic) -> String {
		let mut output = String::new();
		self.render_into(&mut output, d, 0);
		output
	}
}

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		DefaultRenderer.render(diagnostic)
	}

	fn render_into(&self, output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);
		let _ = writeln!(output, "{}error[{}]: {}", indent, d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{}  = {}", indent, label);
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "{}help: {}", indent, help);
		}

		for note in &d.notes {
			let _ = writeln!(output, "{}note: {}", indent, note);
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "{}caused by:", indent);
			self.render_into(output, cause, depth + 1);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_with_cause() {
		let diagnostic = Diagnostic {
			code: "FUNCTION_001".to_string(),
			message: "outer".to_string(),
			help: Some("try again".to_string()),
			cause: Some(Box::new(Diagnostic {
				code: "ARITHMETIC_001".to_string(),
				message: "division by zero".to_string(),
				..Default::default()
			})),
			..Default::default()
		};

		let rendered = DefaultRenderer::render_string(&diagnostic);
		assert!(rendered.starts_with("error[FUNCTION_001]: outer\n"));
		assert!(rendered.contains("help: try again"));
		assert!(rendered.contains("caused by:\n  error[ARITHMETIC_001]: division by zero"));
	}
}
