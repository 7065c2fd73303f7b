// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Homeledger Contributors

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        BudgetSummary, CategoryTotal, Expense, ExpenseCategory, ExpensePatch, FamilyMember,
        FamilyMemberPatch, MemberTotal, NewExpense, NewFamilyMember,
    },
    state::AppState,
};

pub mod budget;
pub mod expenses;
pub mod health;
pub mod members;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/categories", get(budget::list_categories))
        .route("/budget/summary", get(budget::budget_summary))
        .route(
            "/family-members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/family-members/{member_id}",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        .route(
            "/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route("/expenses/by-category", get(expenses::expenses_by_category))
        .route("/expenses/by-member", get(expenses::expenses_by_member))
        .route(
            "/expenses/{expense_id}",
            get(expenses::get_expense)
                .patch(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health::liveness))
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness,
        budget::list_categories,
        budget::budget_summary,
        members::list_members,
        members::create_member,
        members::get_member,
        members::update_member,
        members::delete_member,
        expenses::list_expenses,
        expenses::create_expense,
        expenses::expenses_by_category,
        expenses::expenses_by_member,
        expenses::get_expense,
        expenses::update_expense,
        expenses::delete_expense
    ),
    components(
        schemas(
            ExpenseCategory,
            FamilyMember,
            NewFamilyMember,
            FamilyMemberPatch,
            Expense,
            NewExpense,
            ExpensePatch,
            BudgetSummary,
            CategoryTotal,
            MemberTotal
        )
    ),
    tags(
        (name = "Health", description = "Service probes"),
        (name = "Budget", description = "Categories and budget summary"),
        (name = "Family Members", description = "Family member management"),
        (name = "Expenses", description = "Expense tracking and aggregation")
    )
)]
struct ApiDoc;
