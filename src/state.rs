// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::ledger::{ExpenseStore, MemberStore};

/// Shared application state: one lock per repository, held for the duration
/// of a single call. There is no cross-repository transaction; the
/// aggregation endpoints join independently taken snapshots.
#[derive(Clone, Default)]
pub struct AppState {
    pub members: Arc<RwLock<MemberStore>>,
    pub expenses: Arc<RwLock<ExpenseStore>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
