//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use study_core::error::DomainError;
use study_core::value_objects::Id;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_fk_violation<F>(e: SqlxError, on_fk: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_fk();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "group not found" error
pub fn group_not_found(id: Id) -> DomainError {
    DomainError::GroupNotFound(id)
}

/// Create a "meeting not found" error
pub fn meeting_not_found(id: Id) -> DomainError {
    DomainError::MeetingNotFound(id)
}

/// Create a "member not found" error
pub fn member_not_found() -> DomainError {
    DomainError::MemberNotFound
}

/// Create a "notification not found" error
pub fn notification_not_found(id: Id) -> DomainError {
    DomainError::NotificationNotFound(id)
}
