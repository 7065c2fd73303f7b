// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    ledger::aggregate,
    models::{CategoryTotal, Expense, ExpensePatch, MemberTotal, NewExpense},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Expenses",
    responses((status = 200, description = "All expenses, newest first", body = [Expense]))
)]
pub async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>, ApiError> {
    let expenses = state.expenses.read().await;
    Ok(Json(expenses.list()))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = NewExpense,
    tag = "Expenses",
    responses(
        (status = 201, body = Expense),
        (status = 400, description = "Validation failure")
    )
)]
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<NewExpense>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let mut expenses = state.expenses.write().await;
    let expense = expenses.create(request)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    get,
    path = "/api/expenses/by-category",
    tag = "Expenses",
    responses((status = 200, body = [CategoryTotal]))
)]
pub async fn expenses_by_category(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryTotal>>, ApiError> {
    let expenses = state.expenses.read().await.list();
    Ok(Json(aggregate::totals_by_category(&expenses)))
}

#[utoipa::path(
    get,
    path = "/api/expenses/by-member",
    tag = "Expenses",
    responses((status = 200, body = [MemberTotal]))
)]
pub async fn expenses_by_member(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberTotal>>, ApiError> {
    let members = state.members.read().await.list();
    let expenses = state.expenses.read().await.list();
    Ok(Json(aggregate::totals_by_member(&members, &expenses)))
}

#[utoipa::path(
    get,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "Identifier of the expense")
    ),
    tag = "Expenses",
    responses(
        (status = 200, body = Expense),
        (status = 404, description = "Unknown expense")
    )
)]
pub async fn get_expense(
    Path(expense_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Expense>, ApiError> {
    let expenses = state.expenses.read().await;
    expenses
        .get(&expense_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Expense not found"))
}

#[utoipa::path(
    patch,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "Identifier of the expense to update")
    ),
    request_body = ExpensePatch,
    tag = "Expenses",
    responses(
        (status = 200, body = Expense),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Unknown expense")
    )
)]
pub async fn update_expense(
    Path(expense_id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<ExpensePatch>,
) -> Result<Json<Expense>, ApiError> {
    let mut expenses = state.expenses.write().await;
    let expense = expenses.update(&expense_id, patch)?;
    Ok(Json(expense))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    params(
        ("expense_id" = String, Path, description = "Identifier of the expense to delete")
    ),
    tag = "Expenses",
    responses(
        (status = 204),
        (status = 404, description = "Unknown expense")
    )
)]
pub async fn delete_expense(
    Path(expense_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut expenses = state.expenses.write().await;
    if expenses.delete(&expense_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Expense not found"))
    }
}
