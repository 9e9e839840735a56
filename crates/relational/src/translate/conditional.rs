// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowexpr_function::{OperatorType, ResolvedFunction};
use rowexpr_type::{Result, Type};

use super::Translator;
use crate::{
	ir,
	row::{
		CoalesceExpression, IfExpression, NullIfExpression, RowExpression, SpecialForm, SwitchExpression,
		WhenClause,
	},
};

impl Translator<'_> {
	fn default_branch(&self, default: Option<&ir::Expression>, ty: &Type) -> Result<RowExpression> {
		match default {
			Some(default) => self.lower(default),
			None => Ok(RowExpression::null(ty.clone())),
		}
	}

	/// A searched case becomes a chain of IFs, built from the last clause
	/// backwards so the first clause ends up outermost.
	pub(super) fn case(&self, case: &ir::CaseExpression, ty: Type) -> Result<RowExpression> {
		let mut result = self.default_branch(case.default.as_deref(), &ty)?;

		for clause in case.clauses.iter().rev() {
			result = SpecialForm::If(IfExpression {
				condition: Box::new(self.lower(&clause.operand)?),
				then: Box::new(self.lower(&clause.result)?),
				otherwise: Box::new(result),
				ty: ty.clone(),
			})
			.into();
		}

		Ok(result)
	}

	pub(super) fn switch(&self, switch: &ir::SwitchExpression, ty: Type) -> Result<RowExpression> {
		let operand = self.lower(&switch.operand)?;
		let operand_type = operand.ty();

		let mut clauses = Vec::with_capacity(switch.clauses.len());
		for clause in &switch.clauses {
			let guard = self.lower(&clause.operand)?;
			let equal = self.catalog.resolve_operator(OperatorType::Equal, &[operand_type.clone(), guard.ty()])?;
			clauses.push(WhenClause {
				operand: guard,
				result: self.lower(&clause.result)?,
				equal,
			});
		}

		let default = self.default_branch(switch.default.as_deref(), &ty)?;

		Ok(SpecialForm::Switch(SwitchExpression {
			operand: Box::new(operand),
			clauses,
			default: Box::new(default),
			ty,
		})
		.into())
	}

	pub(super) fn coalesce(&self, coalesce: &ir::CoalesceExpression, ty: Type) -> Result<RowExpression> {
		Ok(SpecialForm::Coalesce(CoalesceExpression {
			operands: self.lower_all(&coalesce.operands)?,
			ty,
		})
		.into())
	}

	/// The comparison runs in the argument type of the resolved equality,
	/// while the result keeps the type of the first operand.
	pub(super) fn null_if(&self, null_if: &ir::NullIfExpression) -> Result<RowExpression> {
		let first = self.lower(&null_if.first)?;
		let second = self.lower(&null_if.second)?;
		let first_type = first.ty();
		let second_type = second.ty();

		let equal = self.catalog.resolve_operator(OperatorType::Equal, &[first_type.clone(), second_type.clone()])?;
		let first_coercion = self.coercion_to(&first_type, equal.argument_types().first())?;
		let second_coercion = self.coercion_to(&second_type, equal.argument_types().get(1))?;

		Ok(SpecialForm::NullIf(NullIfExpression {
			first: Box::new(first),
			second: Box::new(second),
			ty: first_type,
			equal,
			first_coercion,
			second_coercion,
		})
		.into())
	}

	fn coercion_to(&self, from: &Type, to: Option<&Type>) -> Result<Option<ResolvedFunction>> {
		match to {
			Some(to) if to != from => Ok(Some(self.catalog.get_coercion(from, to)?)),
			_ => Ok(None),
		}
	}
}
