// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

/// Maps a symbol to the evaluation channel that carries its value.
pub trait SlotLayout {
	fn lookup(&self, name: &str) -> Option<usize>;
}

/// A layout without channels; every symbol stays a variable.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSlots;

impl SlotLayout for NoSlots {
	fn lookup(&self, _name: &str) -> Option<usize> {
		None
	}
}

impl SlotLayout for HashMap<String, usize> {
	fn lookup(&self, name: &str) -> Option<usize> {
		self.get(name).copied()
	}
}
