// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

//! Expense repository.
//!
//! Wraps the entity store for [`Expense`] records: normalizes amounts to two
//! fraction digits, parses dates (defaulting to the creation time), and
//! returns reads newest-first. The member reference is fixed at creation and
//! never checked against the member store.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

use crate::ledger::money;
use crate::ledger::store::{EntityStore, Keyed};
use crate::ledger::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseCategory, ExpensePatch, NewExpense};

impl Keyed for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Default)]
pub struct ExpenseStore {
    store: EntityStore<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expense. The amount is rounded to cents, the date parsed
    /// from text or defaulted to now.
    pub fn create(&mut self, new: NewExpense) -> LedgerResult<Expense> {
        let member_id = match new.member_id {
            Some(member_id) if !member_id.trim().is_empty() => member_id,
            _ => return Err(LedgerError::Validation("memberId is required".into())),
        };
        let category = match new.category.as_deref() {
            Some(label) => parsed_category(label)?,
            None => return Err(LedgerError::Validation("category is required".into())),
        };
        let amount = match new.amount.as_deref() {
            Some(raw) => parsed_amount(raw)?,
            None => return Err(LedgerError::Validation("amount is required".into())),
        };
        let description = match new.description {
            Some(description) if !description.trim().is_empty() => description,
            _ => return Err(LedgerError::Validation("description is required".into())),
        };
        let date = match new.date.as_deref() {
            Some(raw) => parsed_date(raw)?,
            None => Utc::now(),
        };

        Ok(self.store.insert_with(|id| Expense {
            id,
            member_id,
            category,
            amount,
            description,
            date,
        }))
    }

    /// All expenses, newest first. The ordering is a presentation rule of
    /// this layer; equal dates keep no particular relative order.
    pub fn list(&self) -> Vec<Expense> {
        let mut expenses = self.store.list();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    pub fn get(&self, id: &str) -> Option<Expense> {
        self.store.get(id)
    }

    /// Merge the supplied fields onto an existing expense, re-normalizing
    /// amount and date. Validation covers the whole patch before anything is
    /// applied. The identifier and member reference are immutable.
    pub fn update(&mut self, id: &str, patch: ExpensePatch) -> LedgerResult<Expense> {
        let category = patch.category.as_deref().map(parsed_category).transpose()?;
        let amount = patch.amount.as_deref().map(parsed_amount).transpose()?;
        if let Some(description) = &patch.description {
            if description.trim().is_empty() {
                return Err(LedgerError::Validation(
                    "description must not be empty".into(),
                ));
            }
        }
        let date = patch.date.as_deref().map(parsed_date).transpose()?;

        self.store
            .modify(id, |expense| {
                if let Some(category) = category {
                    expense.category = category;
                }
                if let Some(amount) = amount {
                    expense.amount = amount;
                }
                if let Some(description) = patch.description {
                    expense.description = description;
                }
                if let Some(date) = date {
                    expense.date = date;
                }
            })
            .ok_or(LedgerError::NotFound("Expense"))
    }

    /// Remove an expense. `true` iff one existed.
    pub fn delete(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }
}

fn parsed_category(label: &str) -> LedgerResult<ExpenseCategory> {
    ExpenseCategory::parse(label)
        .ok_or_else(|| LedgerError::Validation(format!("unknown category {label:?}")))
}

fn parsed_amount(raw: &str) -> LedgerResult<Decimal> {
    let amount = money::parse(raw).ok_or_else(|| {
        LedgerError::Validation(format!("amount must be a decimal amount, got {raw:?}"))
    })?;
    let amount = money::round_to_cents(amount);
    if amount <= Decimal::ZERO {
        return Err(LedgerError::Validation("amount must be positive".into()));
    }
    Ok(amount)
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` timestamp, or a bare
/// `YYYY-MM-DD` calendar date (midnight UTC).
fn parsed_date(raw: &str) -> LedgerResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(date.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(LedgerError::Validation(format!(
        "date must be a timestamp or calendar date, got {raw:?}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_expense(member_id: &str, amount: &str, date: Option<&str>) -> NewExpense {
        NewExpense {
            member_id: Some(member_id.to_string()),
            category: Some("Food & Dining".to_string()),
            amount: Some(amount.to_string()),
            description: Some("Groceries".to_string()),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn create_then_get_round_trips() {
        let mut expenses = ExpenseStore::new();
        let created = expenses
            .create(new_expense("m-1", "45.50", Some("2024-01-15")))
            .unwrap();

        assert_eq!(expenses.get(&created.id), Some(created));
    }

    #[test]
    fn create_normalizes_amount() {
        let mut expenses = ExpenseStore::new();

        let created = expenses
            .create(new_expense("m-1", "45.5", None))
            .unwrap();
        assert_eq!(created.amount.to_string(), "45.50");

        let rounded = expenses
            .create(new_expense("m-1", "12.345", None))
            .unwrap();
        assert_eq!(rounded.amount.to_string(), "12.35");
    }

    #[test]
    fn create_defaults_date_to_now() {
        let mut expenses = ExpenseStore::new();
        let before = Utc::now();
        let created = expenses.create(new_expense("m-1", "10.00", None)).unwrap();
        let after = Utc::now();

        assert!(created.date >= before && created.date <= after);
    }

    #[test]
    fn create_parses_supported_date_forms() {
        let mut expenses = ExpenseStore::new();

        let bare = expenses
            .create(new_expense("m-1", "1.00", Some("2024-01-15")))
            .unwrap();
        assert_eq!(bare.date.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        let naive = expenses
            .create(new_expense("m-1", "1.00", Some("2024-01-15T10:30:00")))
            .unwrap();
        assert_eq!(naive.date.to_rfc3339(), "2024-01-15T10:30:00+00:00");

        let rfc = expenses
            .create(new_expense("m-1", "1.00", Some("2024-01-15T10:30:00+02:00")))
            .unwrap();
        assert_eq!(rfc.date.to_rfc3339(), "2024-01-15T08:30:00+00:00");
    }

    #[test]
    fn create_rejects_invalid_payloads() {
        let mut expenses = ExpenseStore::new();

        let cases = [
            NewExpense {
                member_id: None,
                ..new_expense("m-1", "10.00", None)
            },
            NewExpense {
                member_id: Some("  ".into()),
                ..new_expense("m-1", "10.00", None)
            },
            NewExpense {
                category: Some("Groceries".into()),
                ..new_expense("m-1", "10.00", None)
            },
            NewExpense {
                category: None,
                ..new_expense("m-1", "10.00", None)
            },
            new_expense("m-1", "0", None),
            new_expense("m-1", "-5.00", None),
            new_expense("m-1", "abc", None),
            // rounds to 0.00, which is not positive
            new_expense("m-1", "0.004", None),
            NewExpense {
                description: Some("".into()),
                ..new_expense("m-1", "10.00", None)
            },
            NewExpense {
                description: None,
                ..new_expense("m-1", "10.00", None)
            },
            new_expense("m-1", "10.00", Some("January 15th")),
        ];

        for case in cases {
            let err = expenses.create(case.clone()).unwrap_err();
            assert!(matches!(err, LedgerError::Validation(_)), "case {case:?}");
        }
        assert!(expenses.list().is_empty());
    }

    #[test]
    fn list_is_sorted_by_date_descending() {
        let mut expenses = ExpenseStore::new();
        expenses
            .create(new_expense("m-1", "1.00", Some("2024-01-10")))
            .unwrap();
        expenses
            .create(new_expense("m-1", "2.00", Some("2024-03-01")))
            .unwrap();
        expenses
            .create(new_expense("m-1", "3.00", Some("2024-02-20")))
            .unwrap();

        let dates: Vec<_> = expenses.list().into_iter().map(|e| e.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
        assert_eq!(dates.len(), 3);
    }

    #[test]
    fn update_renormalizes_and_preserves_identity() {
        let mut expenses = ExpenseStore::new();
        let created = expenses
            .create(new_expense("m-1", "45.50", Some("2024-01-15")))
            .unwrap();

        let updated = expenses
            .update(
                &created.id,
                ExpensePatch {
                    category: Some("Utilities".into()),
                    amount: Some("99.9".into()),
                    description: Some("Electricity".into()),
                    date: Some("2024-02-01".into()),
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.member_id, created.member_id);
        assert_eq!(updated.category, ExpenseCategory::Utilities);
        assert_eq!(updated.amount.to_string(), "99.90");
        assert_eq!(updated.description, "Electricity");
        assert_eq!(updated.date.to_rfc3339(), "2024-02-01T00:00:00+00:00");
    }

    #[test]
    fn update_validates_before_resolving_the_id() {
        let mut expenses = ExpenseStore::new();

        // Unknown id plus a bad field: the bad field wins.
        let err = expenses
            .update(
                "missing",
                ExpensePatch {
                    amount: Some("abc".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));

        let err = expenses.update("missing", ExpensePatch::default()).unwrap_err();
        assert_eq!(err, LedgerError::NotFound("Expense"));
    }

    #[test]
    fn rejected_patch_is_not_partially_applied() {
        let mut expenses = ExpenseStore::new();
        let created = expenses
            .create(new_expense("m-1", "45.50", Some("2024-01-15")))
            .unwrap();

        let err = expenses
            .update(
                &created.id,
                ExpensePatch {
                    description: Some("Electricity".into()),
                    category: Some("No Such Category".into()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::Validation(_)));

        let unchanged = expenses.get(&created.id).unwrap();
        assert_eq!(unchanged.description, "Groceries");
        assert_eq!(unchanged.category, ExpenseCategory::FoodAndDining);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut expenses = ExpenseStore::new();
        let created = expenses
            .create(new_expense("m-1", "45.50", None))
            .unwrap();

        assert!(expenses.delete(&created.id));
        assert_eq!(expenses.get(&created.id), None);
        assert!(!expenses.delete(&created.id));
    }
}
