// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_type::{Result, Value};
use tracing::debug;

use super::Folder;
use crate::row::{DereferenceExpression, RowConstructorExpression, RowExpression, SpecialForm};

impl Folder<'_> {
	pub(super) fn row_constructor(&mut self, form: RowConstructorExpression) -> Result<RowExpression> {
		let fields = self.fold_all(form.fields)?;

		let values = fields.iter().map(|field| field.as_constant().cloned()).collect::<Option<Vec<_>>>();
		if let Some(values) = values {
			return Ok(RowExpression::constant(Value::Row(values), form.ty));
		}

		Ok(SpecialForm::RowConstructor(RowConstructorExpression {
			fields,
			ty: form.ty,
		})
		.into())
	}

	/// A constant NULL field of a row constructor is selected without
	/// touching its siblings.
	pub(super) fn dereference(&mut self, form: DereferenceExpression) -> Result<RowExpression> {
		let form = DereferenceExpression {
			base: Box::new(self.fold(*form.base)?),
			index: Box::new(self.fold(*form.index)?),
			ty: form.ty,
		};

		let Some(index) = form.field_index() else {
			return Ok(SpecialForm::Dereference(form).into());
		};

		match form.base.as_ref() {
			RowExpression::Constant(constant) if constant.value.is_null() => Ok(RowExpression::null(form.ty)),
			RowExpression::Constant(constant) => match constant.value.field(index) {
				Some(value) => Ok(RowExpression::constant(value.clone(), form.ty)),
				None => {
					debug!(index, "dereference out of bounds left unfolded");
					Ok(SpecialForm::Dereference(form).into())
				}
			},
			RowExpression::Special(SpecialForm::RowConstructor(row))
				if row.fields.get(index).is_some_and(RowExpression::is_null_constant) =>
			{
				Ok(RowExpression::null(form.ty))
			}
			_ => Ok(SpecialForm::Dereference(form).into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use rowexpr_function::{FunctionCatalog, OperatorType, StandardCatalog};
	use rowexpr_type::Type;

	use super::*;
	use crate::optimize::{ExpressionOptimizer, NoBindings};

	fn row(fields: Vec<RowExpression>) -> RowExpression {
		let ty = Type::Row(fields.iter().map(RowExpression::ty).collect());
		SpecialForm::RowConstructor(RowConstructorExpression {
			fields,
			ty,
		})
		.into()
	}

	fn dereference(base: RowExpression, index: i32) -> RowExpression {
		let ty = base.ty().field(index as usize).cloned().unwrap();
		SpecialForm::Dereference(DereferenceExpression {
			base: Box::new(base),
			index: Box::new(RowExpression::constant(index, Type::Int4)),
			ty,
		})
		.into()
	}

	fn divide_by_zero(catalog: &StandardCatalog) -> RowExpression {
		let divide = catalog.resolve_operator(OperatorType::Divide, &[Type::Int4, Type::Int4]).unwrap();
		RowExpression::call(divide, [RowExpression::constant(0, Type::Int4), RowExpression::constant(0, Type::Int4)])
	}

	#[test]
	fn test_constant_row_dereference() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let base = row(vec![
			RowExpression::constant(1, Type::Int4),
			RowExpression::constant("a", Type::Utf8),
			RowExpression::constant(true, Type::Boolean),
		]);
		let expression = dereference(base, 2);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), RowExpression::constant(true, Type::Boolean));
	}

	#[test]
	fn test_nested_dereference() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let inner = row(vec![RowExpression::constant(1, Type::Int4), RowExpression::constant(2i64, Type::Int8)]);
		let outer = row(vec![inner, RowExpression::constant("a", Type::Utf8)]);
		let expression = dereference(dereference(outer, 0), 1);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), RowExpression::constant(2i64, Type::Int8));
	}

	#[test]
	fn test_null_field_skips_failing_sibling() {
		let catalog = StandardCatalog::new();
		let optimizer = ExpressionOptimizer::new(&catalog);

		let base = row(vec![divide_by_zero(&catalog), RowExpression::null(Type::Int4)]);
		let expression = dereference(base.clone(), 1);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), RowExpression::null(Type::Int4));

		let base = row(vec![divide_by_zero(&catalog), RowExpression::constant(1, Type::Int4)]);
		let expression = dereference(base, 1);
		assert_eq!(optimizer.optimize(&expression, &NoBindings).unwrap(), expression);
	}
}
