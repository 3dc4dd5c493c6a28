//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and query parsing.

mod auth;
mod query;
mod validated;

pub use auth::AuthUser;
pub use query::{InboxPagination, InboxParams, MeetingView, MeetingViewParams};
pub use validated::ValidatedJson;
