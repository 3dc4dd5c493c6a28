//! Notification inbox handlers

use axum::{
    extract::{Path, State},
    Json,
};
use study_service::dto::NotificationResponse;
use study_service::NotificationService;

use crate::extractors::{AuthUser, InboxPagination};
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// List the caller's notifications, newest first with cursor pagination
///
/// GET /notifications?limit=20&before={id}
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: InboxPagination,
) -> ApiResult<Json<Vec<NotificationResponse>>> {
    let service = NotificationService::new(state.service_context());
    let notifications = service.list(auth.user_id, pagination.0).await?;
    Ok(Json(notifications))
}

/// Mark one of the caller's notifications as read
///
/// PUT /notifications/{notification_id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<Json<NotificationResponse>> {
    let notification_id = notification_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification_id format"))?;

    let service = NotificationService::new(state.service_context());
    let notification = service.mark_read(notification_id, auth.user_id).await?;
    Ok(Json(notification))
}

/// Delete one of the caller's notifications
///
/// DELETE /notifications/{notification_id}
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<NoContent> {
    let notification_id = notification_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid notification_id format"))?;

    let service = NotificationService::new(state.service_context());
    service.delete(notification_id, auth.user_id).await?;
    Ok(NoContent)
}
