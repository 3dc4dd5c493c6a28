//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{groups, health, join_requests, meetings, members, notifications};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(study_group_routes())
        .merge(meeting_routes())
        .merge(notification_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Study group routes, including membership and the join workflow
fn study_group_routes() -> Router<AppState> {
    Router::new()
        // Group CRUD
        .route("/study-groups", post(groups::create_group))
        .route("/study-groups", get(groups::list_groups))
        .route("/study-groups/:group_id", get(groups::get_group))
        .route("/study-groups/:group_id", put(groups::update_group))
        .route("/study-groups/:group_id", delete(groups::delete_group))
        // Joining
        .route("/study-groups/:group_id/join", post(join_requests::join_group))
        .route("/study-groups/:group_id/request-join", post(join_requests::request_join))
        // Join requests (the static segment wins over :group_id)
        .route("/study-groups/join-requests", get(join_requests::my_pending_requests))
        .route("/study-groups/:group_id/join-requests", get(join_requests::group_pending_requests))
        .route(
            "/study-groups/:group_id/join-requests/:request_id/approve",
            post(join_requests::approve_request),
        )
        .route(
            "/study-groups/:group_id/join-requests/:request_id/reject",
            post(join_requests::reject_request),
        )
        // Membership
        .route("/study-groups/:group_id/members", get(members::list_members))
        .route("/study-groups/:group_id/members", delete(members::leave_group))
        .route("/study-groups/:group_id/members/:member_id", delete(members::remove_member))
        // Group meetings
        .route("/study-groups/:group_id/meetings", get(meetings::group_meetings))
}

/// Meeting routes
fn meeting_routes() -> Router<AppState> {
    Router::new()
        .route("/meetings", post(meetings::create_meeting))
        .route("/meetings/:meeting_id", get(meetings::get_meeting))
        .route("/meetings/:meeting_id", put(meetings::update_meeting))
        .route("/meetings/:meeting_id", delete(meetings::delete_meeting))
}

/// Notification routes
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(notifications::list_notifications))
        .route("/notifications/:notification_id/read", put(notifications::mark_notification_read))
        .route("/notifications/:notification_id", delete(notifications::delete_notification))
}
