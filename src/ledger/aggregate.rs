// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

//! Derived budget views.
//!
//! Stateless pure functions over repository snapshots. Each HTTP call
//! re-reads the stores, so the views always reflect the latest committed
//! state. All arithmetic stays in [`rust_decimal::Decimal`]; sums of
//! two-fraction-digit values are exact.

use rust_decimal::Decimal;

use crate::models::{BudgetSummary, CategoryTotal, Expense, FamilyMember, MemberTotal};

/// Household-wide income/expense summary.
///
/// `percentage` is the share of income spent, rounded to four decimal
/// places; it is `0` (not an error) when there is no income. Orphaned
/// expenses still count toward `total_expenses`.
pub fn budget_summary(members: &[FamilyMember], expenses: &[Expense]) -> BudgetSummary {
    let total_income: Decimal = members.iter().map(|member| member.income).sum();
    let total_expenses: Decimal = expenses.iter().map(|expense| expense.amount).sum();
    let percentage = if total_income > Decimal::ZERO {
        (total_expenses / total_income * Decimal::ONE_HUNDRED).round_dp(4)
    } else {
        Decimal::ZERO
    };

    BudgetSummary {
        total_income,
        total_expenses,
        remaining: total_income - total_expenses,
        percentage,
    }
}

/// Spending per category, in order of first appearance in the input.
/// Categories with no expenses are omitted, not zero-filled.
pub fn totals_by_category(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match totals
            .iter_mut()
            .find(|entry| entry.category == expense.category)
        {
            Some(entry) => {
                entry.total += expense.amount;
                entry.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category,
                total: expense.amount,
                count: 1,
            }),
        }
    }
    totals
}

/// Spending per existing member, zero-expense members included. Expenses
/// whose member no longer exists are counted nowhere in this view.
pub fn totals_by_member(members: &[FamilyMember], expenses: &[Expense]) -> Vec<MemberTotal> {
    members
        .iter()
        .map(|member| {
            let mut total = Decimal::ZERO;
            let mut count = 0;
            for expense in expenses.iter().filter(|e| e.member_id == member.id) {
                total += expense.amount;
                count += 1;
            }
            MemberTotal {
                member_id: member.id.clone(),
                member_name: member.name.clone(),
                income: member.income,
                expenses: total,
                transaction_count: count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{ExpenseStore, MemberStore};
    use crate::models::{ExpenseCategory, NewExpense, NewFamilyMember};
    use std::str::FromStr;

    fn member(members: &mut MemberStore, name: &str, income: &str) -> FamilyMember {
        members
            .create(NewFamilyMember {
                name: Some(name.to_string()),
                income: Some(income.to_string()),
                ..Default::default()
            })
            .unwrap()
    }

    fn expense(
        expenses: &mut ExpenseStore,
        member_id: &str,
        category: &str,
        amount: &str,
    ) -> Expense {
        expenses
            .create(NewExpense {
                member_id: Some(member_id.to_string()),
                category: Some(category.to_string()),
                amount: Some(amount.to_string()),
                description: Some("test".to_string()),
                date: Some("2024-01-15".to_string()),
            })
            .unwrap()
    }

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn concrete_scenario() {
        let mut members = MemberStore::new();
        let mut expenses = ExpenseStore::new();
        let alex = member(&mut members, "Alex", "3000.00");
        expense(&mut expenses, &alex.id, "Food & Dining", "45.50");

        let summary = budget_summary(&members.list(), &expenses.list());
        assert_eq!(summary.total_income, dec("3000"));
        assert_eq!(summary.total_expenses, dec("45.5"));
        assert_eq!(summary.remaining, dec("2954.5"));
        assert_eq!(summary.percentage, dec("1.5167"));

        let by_category = totals_by_category(&expenses.list());
        assert_eq!(
            by_category,
            vec![CategoryTotal {
                category: ExpenseCategory::FoodAndDining,
                total: dec("45.5"),
                count: 1,
            }]
        );
    }

    #[test]
    fn budget_identity_holds() {
        let mut members = MemberStore::new();
        let mut expenses = ExpenseStore::new();
        let a = member(&mut members, "A", "1200.00");
        let b = member(&mut members, "B", "833.33");
        expense(&mut expenses, &a.id, "Housing", "600.10");
        expense(&mut expenses, &b.id, "Utilities", "0.01");
        expense(&mut expenses, "ghost", "Other", "99.99");

        let summary = budget_summary(&members.list(), &expenses.list());
        assert_eq!(
            summary.remaining,
            summary.total_income - summary.total_expenses
        );
    }

    #[test]
    fn category_totals_sum_to_total_expenses() {
        let mut members = MemberStore::new();
        let mut expenses = ExpenseStore::new();
        let a = member(&mut members, "A", "1000.00");
        expense(&mut expenses, &a.id, "Housing", "600.00");
        expense(&mut expenses, &a.id, "Housing", "25.25");
        expense(&mut expenses, &a.id, "Shopping", "14.99");
        expense(&mut expenses, "ghost", "Savings", "50.00");

        let summary = budget_summary(&members.list(), &expenses.list());
        let by_category = totals_by_category(&expenses.list());
        let category_sum: Decimal = by_category.iter().map(|entry| entry.total).sum();
        assert_eq!(category_sum, summary.total_expenses);

        let counts: usize = by_category.iter().map(|entry| entry.count).sum();
        assert_eq!(counts, 4);
        assert_eq!(by_category.len(), 3);
    }

    #[test]
    fn zero_income_yields_zero_percentage() {
        let mut expenses = ExpenseStore::new();
        expense(&mut expenses, "m-1", "Other", "10.00");

        let summary = budget_summary(&[], &expenses.list());
        assert_eq!(summary.percentage, Decimal::ZERO);
        assert_eq!(summary.remaining, dec("-10"));
    }

    #[test]
    fn by_member_includes_members_without_expenses() {
        let mut members = MemberStore::new();
        let mut expenses = ExpenseStore::new();
        let spender = member(&mut members, "Spender", "2000.00");
        member(&mut members, "Saver", "1500.00");
        expense(&mut expenses, &spender.id, "Entertainment", "80.00");
        expense(&mut expenses, &spender.id, "Entertainment", "20.00");

        let mut totals = totals_by_member(&members.list(), &expenses.list());
        totals.sort_by(|a, b| a.member_name.cmp(&b.member_name));

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].member_name, "Saver");
        assert_eq!(totals[0].expenses, Decimal::ZERO);
        assert_eq!(totals[0].transaction_count, 0);
        assert_eq!(totals[1].expenses, dec("100"));
        assert_eq!(totals[1].transaction_count, 2);
    }

    #[test]
    fn orphan_scenario() {
        let mut members = MemberStore::new();
        let mut expenses = ExpenseStore::new();
        let m = member(&mut members, "M", "1000.00");
        let e = expense(&mut expenses, &m.id, "Food & Dining", "45.50");

        assert!(members.delete(&m.id));

        // The member and its expense vanish from the by-member view...
        let totals = totals_by_member(&members.list(), &expenses.list());
        assert!(totals.is_empty());

        // ...but the expense itself survives and still counts elsewhere.
        assert_eq!(expenses.get(&e.id), Some(e));
        let summary = budget_summary(&members.list(), &expenses.list());
        assert_eq!(summary.total_expenses, dec("45.5"));
    }

    #[test]
    fn category_totals_follow_first_appearance_order() {
        let mut expenses = ExpenseStore::new();
        // Dates chosen so the newest-first listing interleaves categories.
        for (amount, category, date) in [
            ("1.00", "Housing", "2024-01-01"),
            ("2.00", "Shopping", "2024-01-03"),
            ("3.00", "Housing", "2024-01-02"),
        ] {
            expenses
                .create(NewExpense {
                    member_id: Some("m-1".into()),
                    category: Some(category.into()),
                    amount: Some(amount.into()),
                    description: Some("test".into()),
                    date: Some(date.into()),
                })
                .unwrap();
        }

        let by_category = totals_by_category(&expenses.list());
        assert_eq!(by_category[0].category, ExpenseCategory::Shopping);
        assert_eq!(by_category[1].category, ExpenseCategory::Housing);
        assert_eq!(by_category[1].total, dec("4"));
        assert_eq!(by_category[1].count, 2);
    }
}
