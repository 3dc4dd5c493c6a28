//! Membership handlers
//!
//! Endpoints for group member management.

use axum::{
    extract::{Path, State},
    Json,
};
use study_service::dto::MemberResponse;
use study_service::MembershipService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// List group members with display names (members only)
///
/// GET /study-groups/{group_id}/members
pub async fn list_members(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = MembershipService::new(state.service_context());
    let members = service.list_members(group_id, auth.user_id).await?;
    Ok(Json(members))
}

/// Leave a group
///
/// DELETE /study-groups/{group_id}/members
pub async fn leave_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<NoContent> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = MembershipService::new(state.service_context());
    service.leave_group(group_id, auth.user_id).await?;
    Ok(NoContent)
}

/// Remove a member from the group (owner only)
///
/// DELETE /study-groups/{group_id}/members/{member_id}
pub async fn remove_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((group_id, member_id)): Path<(String, String)>,
) -> ApiResult<NoContent> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;
    let member_id = member_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid member_id format"))?;

    let service = MembershipService::new(state.service_context());
    service
        .remove_member(group_id, member_id, auth.user_id)
        .await?;
    Ok(NoContent)
}
