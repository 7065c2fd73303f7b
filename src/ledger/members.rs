// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

//! Family member repository.
//!
//! Wraps the entity store for [`FamilyMember`] records: applies creation
//! defaults (income `0.00`, first palette color) and validates names and
//! incomes. Deleting a member does not touch its expenses.

use rust_decimal::Decimal;

use crate::ledger::money;
use crate::ledger::store::{EntityStore, Keyed};
use crate::ledger::{LedgerError, LedgerResult};
use crate::models::{FamilyMember, FamilyMemberPatch, NewFamilyMember, AVATAR_COLORS};

impl Keyed for FamilyMember {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Default)]
pub struct MemberStore {
    store: EntityStore<FamilyMember>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a member, filling in income and avatar color defaults.
    pub fn create(&mut self, new: NewFamilyMember) -> LedgerResult<FamilyMember> {
        let name = match new.name {
            Some(name) if !name.trim().is_empty() => name,
            Some(_) => return Err(LedgerError::Validation("name must not be empty".into())),
            None => return Err(LedgerError::Validation("name is required".into())),
        };
        let income = match new.income.as_deref() {
            Some(raw) => parsed_income(raw)?,
            None => money::zero(),
        };
        let avatar_color = new
            .avatar_color
            .unwrap_or_else(|| AVATAR_COLORS[0].to_string());

        Ok(self.store.insert_with(|id| FamilyMember {
            id,
            name,
            income,
            avatar_color,
        }))
    }

    /// All members; order unspecified.
    pub fn list(&self) -> Vec<FamilyMember> {
        self.store.list()
    }

    pub fn get(&self, id: &str) -> Option<FamilyMember> {
        self.store.get(id)
    }

    /// Merge the supplied fields onto an existing member. Every field is
    /// validated before any of them is applied, so a rejected patch leaves
    /// the record untouched. The identifier is immutable.
    pub fn update(&mut self, id: &str, patch: FamilyMemberPatch) -> LedgerResult<FamilyMember> {
        if let Some(name) = &patch.name {
            if name.trim().is_empty() {
                return Err(LedgerError::Validation("name must not be empty".into()));
            }
        }
        let income = patch.income.as_deref().map(parsed_income).transpose()?;

        self.store
            .modify(id, |member| {
                if let Some(name) = patch.name {
                    member.name = name;
                }
                if let Some(income) = income {
                    member.income = income;
                }
                if let Some(color) = patch.avatar_color {
                    member.avatar_color = color;
                }
            })
            .ok_or(LedgerError::NotFound("Family member"))
    }

    /// Remove a member. `true` iff one existed. Expenses referencing the
    /// member are left in place.
    pub fn delete(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }
}

fn parsed_income(raw: &str) -> LedgerResult<Decimal> {
    let income = money::parse(raw).ok_or_else(|| {
        LedgerError::Validation(format!("income must be a decimal amount, got {raw:?}"))
    })?;
    if income < Decimal::ZERO {
        return Err(LedgerError::Validation(
            "income must not be negative".into(),
        ));
    }
    Ok(money::round_to_cents(income))
}
