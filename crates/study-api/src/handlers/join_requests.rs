//! Join workflow handlers
//!
//! Endpoints for joining groups and resolving join requests.

use axum::{
    extract::{Path, State},
    Json,
};
use study_core::JoinDecision;
use study_service::dto::{JoinOutcomeResponse, JoinRequestResponse};
use study_service::MembershipService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Join a group; private groups get a pending request instead of a seat
///
/// POST /study-groups/{group_id}/join
pub async fn join_group(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<Json<JoinOutcomeResponse>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = MembershipService::new(state.service_context());
    let outcome = service.join_group(group_id, auth.user_id).await?;
    Ok(Json(outcome))
}

/// Explicitly open a join request, regardless of the privacy flag
///
/// POST /study-groups/{group_id}/request-join
pub async fn request_join(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<Created<Json<JoinRequestResponse>>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = MembershipService::new(state.service_context());
    let response = service.request_join(group_id, auth.user_id).await?;
    Ok(Created(Json(response)))
}

/// List the caller's pending join requests, newest first
///
/// GET /study-groups/join-requests
pub async fn my_pending_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<JoinRequestResponse>>> {
    let service = MembershipService::new(state.service_context());
    let requests = service.pending_for_user(auth.user_id).await?;
    Ok(Json(requests))
}

/// List pending requests against a group (owner only), oldest first
///
/// GET /study-groups/{group_id}/join-requests
pub async fn group_pending_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
) -> ApiResult<Json<Vec<JoinRequestResponse>>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = MembershipService::new(state.service_context());
    let requests = service.pending_for_group(group_id, auth.user_id).await?;
    Ok(Json(requests))
}

/// Approve a pending join request (owner only)
///
/// POST /study-groups/{group_id}/join-requests/{request_id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((group_id, request_id)): Path<(String, String)>,
) -> ApiResult<Json<JoinRequestResponse>> {
    resolve(state, auth, group_id, request_id, JoinDecision::Approve).await
}

/// Reject a pending join request (owner only)
///
/// POST /study-groups/{group_id}/join-requests/{request_id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((group_id, request_id)): Path<(String, String)>,
) -> ApiResult<Json<JoinRequestResponse>> {
    resolve(state, auth, group_id, request_id, JoinDecision::Reject).await
}

async fn resolve(
    state: AppState,
    auth: AuthUser,
    group_id: String,
    request_id: String,
    decision: JoinDecision,
) -> ApiResult<Json<JoinRequestResponse>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;
    let request_id = request_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid request_id format"))?;

    let service = MembershipService::new(state.service_context());
    let response = service
        .resolve_request(group_id, request_id, decision, auth.user_id)
        .await?;
    Ok(Json(response))
}
