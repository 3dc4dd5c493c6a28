//! Join request entity <-> model mapper

use study_core::entities::{JoinRequest, JoinRequestStatus};
use study_core::error::DomainError;
use study_core::value_objects::Id;

use crate::models::JoinRequestModel;

fn parse_status(id: i64, status: &str) -> Result<JoinRequestStatus, DomainError> {
    match status {
        "pending" => Ok(JoinRequestStatus::Pending),
        "approved" => Ok(JoinRequestStatus::Approved),
        "rejected" => Ok(JoinRequestStatus::Rejected),
        other => Err(DomainError::DatabaseError(format!(
            "join request {id} has unknown status {other:?}"
        ))),
    }
}

/// Convert JoinRequestModel to JoinRequest entity
impl TryFrom<JoinRequestModel> for JoinRequest {
    type Error = DomainError;

    fn try_from(model: JoinRequestModel) -> Result<Self, Self::Error> {
        let status = parse_status(model.id, &model.status)?;
        Ok(JoinRequest {
            id: Id::new(model.id),
            group_id: Id::new(model.group_id),
            user_id: Id::new(model.user_id),
            status,
            created_at: model.created_at,
            resolved_at: model.resolved_at,
        })
    }
}
