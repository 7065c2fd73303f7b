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
    models::{FamilyMember, FamilyMemberPatch, NewFamilyMember},
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/family-members",
    tag = "Family Members",
    responses((status = 200, body = [FamilyMember]))
)]
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<FamilyMember>>, ApiError> {
    let members = state.members.read().await;
    Ok(Json(members.list()))
}

#[utoipa::path(
    post,
    path = "/api/family-members",
    request_body = NewFamilyMember,
    tag = "Family Members",
    responses(
        (status = 201, body = FamilyMember),
        (status = 400, description = "Validation failure")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    Json(request): Json<NewFamilyMember>,
) -> Result<(StatusCode, Json<FamilyMember>), ApiError> {
    let mut members = state.members.write().await;
    let member = members.create(request)?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    get,
    path = "/api/family-members/{member_id}",
    params(
        ("member_id" = String, Path, description = "Identifier of the family member")
    ),
    tag = "Family Members",
    responses(
        (status = 200, body = FamilyMember),
        (status = 404, description = "Unknown member")
    )
)]
pub async fn get_member(
    Path(member_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<FamilyMember>, ApiError> {
    let members = state.members.read().await;
    members
        .get(&member_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Family member not found"))
}

#[utoipa::path(
    patch,
    path = "/api/family-members/{member_id}",
    params(
        ("member_id" = String, Path, description = "Identifier of the family member to update")
    ),
    request_body = FamilyMemberPatch,
    tag = "Family Members",
    responses(
        (status = 200, body = FamilyMember),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Unknown member")
    )
)]
pub async fn update_member(
    Path(member_id): Path<String>,
    State(state): State<AppState>,
    Json(patch): Json<FamilyMemberPatch>,
) -> Result<Json<FamilyMember>, ApiError> {
    let mut members = state.members.write().await;
    let member = members.update(&member_id, patch)?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/api/family-members/{member_id}",
    params(
        ("member_id" = String, Path, description = "Identifier of the family member to delete")
    ),
    tag = "Family Members",
    responses(
        (status = 204),
        (status = 404, description = "Unknown member")
    )
)]
pub async fn delete_member(
    Path(member_id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let mut members = state.members.write().await;
    if members.delete(&member_id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Family member not found"))
    }
}
