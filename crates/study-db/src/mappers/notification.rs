//! Notification entity <-> model mapper

use study_core::entities::{Notification, NotificationStatus};
use study_core::error::DomainError;
use study_core::value_objects::Id;

use crate::models::NotificationModel;

fn parse_status(id: i64, status: &str) -> Result<NotificationStatus, DomainError> {
    match status {
        "unread" => Ok(NotificationStatus::Unread),
        "read" => Ok(NotificationStatus::Read),
        other => Err(DomainError::DatabaseError(format!(
            "notification {id} has unknown status {other:?}"
        ))),
    }
}

/// Convert NotificationModel to Notification entity
impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        let status = parse_status(model.id, &model.status)?;
        Ok(Notification {
            id: Id::new(model.id),
            user_id: Id::new(model.user_id),
            message: model.message,
            status,
            request_id: model.request_id.map(Id::new),
            created_at: model.created_at,
        })
    }
}
