// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod config;
pub mod error;
pub mod ir;
mod lowering;
pub mod optimize;
pub mod row;
pub mod translate;

pub use config::LoweringConfig;
pub use error::ExpressionError;
pub use lowering::Lowering;
pub use optimize::{Bindings, ExpressionOptimizer, NoBindings, SymbolResolver};
pub use row::RowExpression;
pub use translate::{NoSlots, SlotLayout, Translator};
