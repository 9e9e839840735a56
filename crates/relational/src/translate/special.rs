// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::OperatorType;
use rowexpr_type::{Result, Type, TypeError, Value};

use super::Translator;
use crate::{
	ir,
	row::{
		BetweenExpression, BindExpression, DereferenceExpression, InExpression, LambdaDefinitionExpression,
		LambdaParameter, RowConstructorExpression, RowExpression, SpecialForm,
	},
};

impl Translator<'_> {
	/// Equality, hashing and indeterminacy are resolved for the value type so
	/// the backend may probe a hash set instead of scanning.
	pub(super) fn in_list(&self, in_list: &ir::InExpression) -> Result<RowExpression> {
		let value = self.lower(&in_list.value)?;
		let list = self.lower_all(&in_list.list)?;
		let ty = value.ty();

		let equal = self.catalog.resolve_operator(OperatorType::Equal, &[ty.clone(), ty.clone()])?;
		let hash_code = self.catalog.resolve_operator(OperatorType::HashCode, &[ty.clone()])?;
		let indeterminate = self.catalog.resolve_operator(OperatorType::Indeterminate, &[ty])?;

		Ok(SpecialForm::In(InExpression {
			value: Box::new(value),
			list,
			equal,
			hash_code,
			indeterminate,
		})
		.into())
	}

	pub(super) fn between(&self, between: &ir::BetweenExpression) -> Result<RowExpression> {
		let value = self.lower(&between.value)?;
		let min = self.lower(&between.min)?;
		let max = self.lower(&between.max)?;

		let less_than_or_equal =
			self.catalog.resolve_operator(OperatorType::LessThanOrEqual, &[value.ty(), max.ty()])?;

		Ok(SpecialForm::Between(BetweenExpression {
			value: Box::new(value),
			min: Box::new(min),
			max: Box::new(max),
			less_than_or_equal,
		})
		.into())
	}

	pub(super) fn field_reference(&self, field: &ir::FieldReferenceExpression, ty: Type) -> Result<RowExpression> {
		let base = self.lower(&field.base)?;
		let index = i32::try_from(field.index).map_err(|_| TypeError::FieldIndexOutOfBounds {
			index: field.index as i64,
			width: match base.ty() {
				Type::Row(fields) => fields.len(),
				_ => 0,
			},
		})?;

		Ok(SpecialForm::Dereference(DereferenceExpression {
			base: Box::new(base),
			index: Box::new(RowExpression::constant(Value::Int4(index), Type::Int4)),
			ty,
		})
		.into())
	}

	pub(super) fn row(&self, row: &ir::TupleExpression) -> Result<RowExpression> {
		let fields = self.lower_all(&row.fields)?;
		let ty = Type::Row(fields.iter().map(RowExpression::ty).collect());
		Ok(SpecialForm::RowConstructor(RowConstructorExpression {
			fields,
			ty,
		})
		.into())
	}

	pub(super) fn lambda(&self, lambda: &ir::LambdaExpression) -> Result<RowExpression> {
		Ok(RowExpression::Lambda(LambdaDefinitionExpression {
			parameters: lambda
				.parameters
				.iter()
				.map(|parameter| LambdaParameter {
					name: parameter.name.clone(),
					ty: parameter.ty.clone(),
				})
				.collect(),
			body: Box::new(self.lower(&lambda.body)?),
		}))
	}

	/// Captured values travel as leading operands, so the lambda does not
	/// depend on where it ends up in the tree.
	pub(super) fn bind(&self, bind: &ir::BindExpression, ty: Type) -> Result<RowExpression> {
		Ok(SpecialForm::Bind(BindExpression {
			values: self.lower_all(&bind.values)?,
			function: Box::new(self.lower(&bind.function)?),
			ty,
		})
		.into())
	}
}
