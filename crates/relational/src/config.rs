// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

/// Configuration for lowering source expressions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoweringConfig {
	/// Run constant folding over every lowered expression, leaving all
	/// symbols symbolic
	pub optimize: bool,
}

impl LoweringConfig {
	pub fn new(optimize: bool) -> Self {
		Self {
			optimize,
		}
	}

	pub fn optimized() -> Self {
		Self::new(true)
	}
}
