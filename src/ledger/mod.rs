// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

//! # Ledger Module
//!
//! The in-process ledger: a keyed store of family members and expenses plus
//! the aggregation logic that derives budget views from it.
//!
//! ## Layout
//!
//! - [`store`] - generic keyed container shared by both repositories
//! - [`members`] - family member repository (defaults, validation)
//! - [`expenses`] - expense repository (normalization, date-descending reads)
//! - [`aggregate`] - pure functions deriving summary/category/member views
//! - [`money`] - decimal parsing and two-fraction-digit normalization
//!
//! ## Important Notes
//!
//! - The ledger exists only in process memory; a restart empties it.
//! - Every read hands out clones. Mutation goes through repository methods,
//!   which validate the full payload before applying any of it.
//! - Expenses reference members by id only. Deleting a member leaves its
//!   expenses in place (see the aggregation rules in [`aggregate`]).

pub mod aggregate;
pub mod expenses;
pub mod members;
pub mod money;
pub mod store;

pub use expenses::ExpenseStore;
pub use members::MemberStore;
pub use store::{EntityStore, Keyed};

use thiserror::Error;

/// Failure of a ledger operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The payload failed a schema rule; nothing was applied.
    #[error("{0}")]
    Validation(String),
    /// The identifier does not resolve in the target repository.
    #[error("{0} not found")]
    NotFound(&'static str),
}

pub type LedgerResult<T> = Result<T, LedgerError>;
