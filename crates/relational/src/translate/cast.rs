// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::Result;
use tracing::trace;

use super::Translator;
use crate::{ir::CastExpression, row::RowExpression};

impl Translator<'_> {
	pub(super) fn cast(&self, cast: &CastExpression) -> Result<RowExpression> {
		let value = self.lower(&cast.expression)?;
		let from = value.ty();

		if self.coercion.is_type_only_coercion(&from, &cast.to) {
			trace!(%from, to = %cast.to, "type only coercion");
			return value.retag(cast.to.clone());
		}

		let function = if cast.safe {
			self.catalog.get_try_coercion(&from, &cast.to)?
		} else {
			self.catalog.get_coercion(&from, &cast.to)?
		};
		Ok(RowExpression::call(function, [value]))
	}
}
