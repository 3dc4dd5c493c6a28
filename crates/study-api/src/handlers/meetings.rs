//! Meeting handlers

use axum::{
    extract::{Path, State},
    Json,
};
use study_service::dto::{CreateMeetingRequest, MeetingResponse, UpdateMeetingRequest};
use study_service::MeetingService;

use crate::extractors::{AuthUser, MeetingView, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List a group's meetings, optionally filtered to upcoming or past
///
/// GET /study-groups/{group_id}/meetings?view=upcoming|past
pub async fn group_meetings(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(group_id): Path<String>,
    view: MeetingView,
) -> ApiResult<Json<Vec<MeetingResponse>>> {
    let group_id = group_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid group_id format"))?;

    let service = MeetingService::new(state.service_context());
    let meetings = service
        .group_meetings(group_id, auth.user_id, view.0)
        .await?;
    Ok(Json(meetings))
}

/// Schedule a meeting in one of the caller's groups
///
/// POST /meetings
pub async fn create_meeting(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMeetingRequest>,
) -> ApiResult<Created<Json<MeetingResponse>>> {
    let service = MeetingService::new(state.service_context());
    let meeting = service.create_meeting(auth.user_id, request).await?;
    Ok(Created(Json(meeting)))
}

/// Fetch a single meeting with its tags
///
/// GET /meetings/{meeting_id}
pub async fn get_meeting(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(meeting_id): Path<String>,
) -> ApiResult<Json<MeetingResponse>> {
    let meeting_id = meeting_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid meeting_id format"))?;

    let service = MeetingService::new(state.service_context());
    let meeting = service.get_meeting(meeting_id).await?;
    Ok(Json(meeting))
}

/// Replace a meeting's details and schedule (creator or group owner)
///
/// PUT /meetings/{meeting_id}
pub async fn update_meeting(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(meeting_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMeetingRequest>,
) -> ApiResult<Json<MeetingResponse>> {
    let meeting_id = meeting_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid meeting_id format"))?;

    let service = MeetingService::new(state.service_context());
    let meeting = service
        .update_meeting(meeting_id, auth.user_id, request)
        .await?;
    Ok(Json(meeting))
}

/// Delete a meeting (creator or group owner)
///
/// DELETE /meetings/{meeting_id}
pub async fn delete_meeting(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(meeting_id): Path<String>,
) -> ApiResult<NoContent> {
    let meeting_id = meeting_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid meeting_id format"))?;

    let service = MeetingService::new(state.service_context());
    service.delete_meeting(meeting_id, auth.user_id).await?;
    Ok(NoContent)
}
