// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

use axum::{extract::State, Json};

use crate::{
    error::ApiError,
    ledger::aggregate,
    models::{BudgetSummary, ExpenseCategory},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Budget",
    responses((status = 200, body = [ExpenseCategory]))
)]
pub async fn list_categories() -> Json<Vec<ExpenseCategory>> {
    Json(ExpenseCategory::ALL.to_vec())
}

#[utoipa::path(
    get,
    path = "/api/budget/summary",
    tag = "Budget",
    responses((status = 200, body = BudgetSummary))
)]
pub async fn budget_summary(
    State(state): State<AppState>,
) -> Result<Json<BudgetSummary>, ApiError> {
    let members = state.members.read().await.list();
    let expenses = state.expenses.read().await.list();
    Ok(Json(aggregate::budget_summary(&members, &expenses)))
}
