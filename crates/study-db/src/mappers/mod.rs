//! Entity to model mappers
//!
//! This module provides conversions between domain entities (study-core) and database models.
//! - `From<Model> for Entity` / `TryFrom<Model> for Entity`: convert rows to domain objects
//! - `ScheduleColumns`: Flatten the meeting schedule enum for database binds

mod group;
mod join_request;
mod meeting;
mod membership;
mod notification;
mod user;

pub use meeting::ScheduleColumns;
