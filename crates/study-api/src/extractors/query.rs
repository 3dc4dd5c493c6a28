//! Query string extractors
//!
//! Typed extraction of the meeting agenda view and the notification inbox
//! cursor from query parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use study_core::{Id, TimeFrame};
use study_service::dto::InboxQuery;

use crate::response::ApiError;

/// Raw agenda view query parameter
#[derive(Debug, Deserialize)]
pub struct MeetingViewParams {
    /// Optional agenda filter: "upcoming" or "past"
    #[serde(default)]
    pub view: Option<String>,
}

/// Parsed agenda view filter
///
/// Absent means the full meeting list in storage order; present applies the
/// server-side agenda partition.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingView(pub Option<TimeFrame>);

impl TryFrom<MeetingViewParams> for MeetingView {
    type Error = ApiError;

    fn try_from(params: MeetingViewParams) -> Result<Self, Self::Error> {
        let view = params
            .view
            .map(|s| {
                s.parse::<TimeFrame>()
                    .map_err(|_| ApiError::invalid_query("view must be 'upcoming' or 'past'"))
            })
            .transpose()?;

        Ok(MeetingView(view))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MeetingView
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<MeetingViewParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        MeetingView::try_from(params)
    }
}

/// Raw inbox query parameters
#[derive(Debug, Deserialize)]
pub struct InboxParams {
    /// Maximum number of notifications to return
    #[serde(default)]
    pub limit: Option<i64>,
    /// Return notifications with ids strictly below this cursor
    #[serde(default)]
    pub before: Option<String>,
}

/// Parsed inbox pagination
#[derive(Debug, Clone, Copy)]
pub struct InboxPagination(pub InboxQuery);

impl TryFrom<InboxParams> for InboxPagination {
    type Error = ApiError;

    fn try_from(params: InboxParams) -> Result<Self, Self::Error> {
        let before = params
            .before
            .map(|s| {
                s.parse::<Id>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'before' cursor format"))
            })
            .transpose()?;

        Ok(InboxPagination(InboxQuery {
            limit: params.limit,
            before,
        }))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for InboxPagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<InboxParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        InboxPagination::try_from(params)
    }
}
