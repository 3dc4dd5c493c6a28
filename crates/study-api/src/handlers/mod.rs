//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod groups;
pub mod health;
pub mod join_requests;
pub mod meetings;
pub mod members;
pub mod notifications;
