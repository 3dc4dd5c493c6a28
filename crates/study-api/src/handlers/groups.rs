//! Study group handlers
//!
//! Endpoints for study group management.

use axum::{
    extract::{Path, State},
    Json,
};
use study_service::dto::{
    CreateGroupRequest, CreatedGroupResponse, GroupResponse, UpdateGroupRequest,
};
use study_service::GroupService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new study group, optionally bundling an initial meeting
///
/// POST /study-groups
pub async fn create_group(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateGroupRequest>,
) -> ApiResult<Created<Json<CreatedGroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let response = service.create_group(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's groups with member counts
///
/// GET /study-groups
pub async fn list_groups(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GroupResponse>>> {
    let service = GroupService::new(state.service_context());
    let groups = service.groups_for_user(auth.user_id).await?;
    Ok(Json(groups))
}

/// Get group detail with member count
///
/// GET /study-groups/{group_id}
pub async fn get_group(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<Json<GroupResponse>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = GroupService::new(state.service_context());
    let response = service.get_group(group_id).await?;
    Ok(Json(response))
}

/// Update group settings (owner only)
///
/// PUT /study-groups/{group_id}
pub async fn update_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateGroupRequest>,
) -> ApiResult<Json<GroupResponse>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = GroupService::new(state.service_context());
    let response = service.update_group(group_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a group and everything attached to it (owner only)
///
/// DELETE /study-groups/{group_id}
pub async fn delete_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<NoContent> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = GroupService::new(state.service_context());
    service.delete_group(group_id, auth.user_id).await?;
    Ok(NoContent)
}
