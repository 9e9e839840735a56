// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub mod expression;
mod fixture;

pub use fixture::{
	assert_evaluates_to, assert_optimized_eq, catalog, evaluate, optimize, optimize_row, symbols, translate,
};

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_logging() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
		)
		.with_test_writer()
		.try_init();
}
