// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

//! # API Data Models
//!
//! This module defines the ledger records and the request/response data
//! structures used by the REST API. All types derive `Serialize`,
//! `Deserialize`, and `ToSchema` for automatic JSON handling and OpenAPI
//! documentation.
//!
//! ## Money Representation
//!
//! Incomes and expense amounts are [`rust_decimal::Decimal`] values held at
//! exactly two fraction digits. On the wire they appear as decimal strings
//! (`"45.50"`), never as binary floats, so repeated edits cannot accumulate
//! rounding drift. The aggregation views ([`BudgetSummary`],
//! [`CategoryTotal`], [`MemberTotal`]) are the one exception: they serialize
//! their derived figures as JSON numbers.
//!
//! ## Model Categories
//!
//! - **Family Members**: household participants that expenses are attributed to
//! - **Expenses**: dated, categorized, attributed outflows
//! - **Aggregations**: derived budget views, recomputed on every read

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Expense Categories
// =============================================================================

/// Closed set of expense categories.
///
/// Every stored expense carries exactly one of these labels; payloads naming
/// anything else are rejected at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    #[serde(rename = "Food & Dining")]
    FoodAndDining,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Insurance,
    Savings,
    Other,
}

impl ExpenseCategory {
    /// Every category, in the order the API lists them.
    pub const ALL: [ExpenseCategory; 12] = [
        ExpenseCategory::Housing,
        ExpenseCategory::Transportation,
        ExpenseCategory::FoodAndDining,
        ExpenseCategory::Utilities,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Education,
        ExpenseCategory::PersonalCare,
        ExpenseCategory::Insurance,
        ExpenseCategory::Savings,
        ExpenseCategory::Other,
    ];

    /// The wire label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Transportation => "Transportation",
            ExpenseCategory::FoodAndDining => "Food & Dining",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::PersonalCare => "Personal Care",
            ExpenseCategory::Insurance => "Insurance",
            ExpenseCategory::Savings => "Savings",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Resolve a wire label back to its category, if it is in the set.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Avatar color palette; new members default to the first entry.
pub const AVATAR_COLORS: [&str; 8] = [
    "#0ea5e9", // Sky blue
    "#8b5cf6", // Violet
    "#ec4899", // Pink
    "#f59e0b", // Amber
    "#10b981", // Emerald
    "#6366f1", // Indigo
    "#f97316", // Orange
    "#14b8a6", // Teal
];

// =============================================================================
// Family Member Models
// =============================================================================

/// A household participant with an income and an identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    /// Unique identifier, immutable once created.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Monthly income, non-negative, two fraction digits.
    #[schema(value_type = String, example = "2500.00")]
    pub income: Decimal,
    /// Color token used for the member's avatar.
    pub avatar_color: String,
}

/// Request to register a new family member.
///
/// All fields are optional at the schema level; the member store enforces the
/// required ones so that every rejection surfaces as a validation failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewFamilyMember {
    /// Display name (required, non-empty).
    pub name: Option<String>,
    /// Monthly income as a decimal string. Defaults to `"0.00"`.
    pub income: Option<String>,
    /// Avatar color token. Defaults to the first palette entry.
    pub avatar_color: Option<String>,
}

/// Partial update of a family member. The identifier is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberPatch {
    /// Replacement display name (non-empty when present).
    pub name: Option<String>,
    /// Replacement income as a decimal string.
    pub income: Option<String>,
    /// Replacement avatar color token.
    pub avatar_color: Option<String>,
}

// =============================================================================
// Expense Models
// =============================================================================

/// A single dated, categorized, attributed monetary outflow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, immutable once created.
    pub id: String,
    /// The member this expense is attributed to. Not revisable, and not
    /// checked against the member store at write time.
    pub member_id: String,
    /// One of the closed category set.
    pub category: ExpenseCategory,
    /// Positive amount, two fraction digits.
    #[schema(value_type = String, example = "45.50")]
    pub amount: Decimal,
    /// Free-text description.
    pub description: String,
    /// When the expense occurred.
    pub date: DateTime<Utc>,
}

/// Request to record a new expense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    /// Identifier of the member the expense belongs to (required).
    pub member_id: Option<String>,
    /// Category label (required, must be in the closed set).
    pub category: Option<String>,
    /// Amount as a positive decimal string (required).
    pub amount: Option<String>,
    /// Description (required, non-empty).
    pub description: Option<String>,
    /// Date as RFC 3339, `YYYY-MM-DDTHH:MM:SS`, or `YYYY-MM-DD`.
    /// Defaults to the creation time.
    pub date: Option<String>,
}

/// Partial update of an expense.
///
/// Deliberately has no member field: ownership is fixed at creation, and an
/// unknown `memberId` key in the payload is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePatch {
    /// Replacement category label.
    pub category: Option<String>,
    /// Replacement amount as a positive decimal string.
    pub amount: Option<String>,
    /// Replacement description (non-empty when present).
    pub description: Option<String>,
    /// Replacement date.
    pub date: Option<String>,
}

// =============================================================================
// Aggregation Models
// =============================================================================

/// Snapshot of the household budget.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of all members' incomes.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_income: Decimal,
    /// Sum of all expense amounts, orphaned expenses included.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`, exactly.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub remaining: Decimal,
    /// Share of income spent, in percent; `0` when there is no income.
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub percentage: Decimal,
}

/// Per-category spending totals. Categories without expenses are omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub count: usize,
}

/// Per-member spending totals. Every existing member gets an entry, even with
/// zero expenses; expenses whose member no longer exists appear nowhere here.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemberTotal {
    pub member_id: String,
    pub member_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub expenses: Decimal,
    pub transaction_count: usize,
}
