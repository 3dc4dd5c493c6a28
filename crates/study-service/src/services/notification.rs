//! Notification service
//!
//! The persisted inbox: listing, marking read, and deleting. Rows are
//! created by the join-request workflow and cleaned up when requests
//! resolve, so this service only ever reads and removes.

use study_core::{DomainError, Id, NotificationQuery, NotificationStatus};
use tracing::{info, instrument};

use crate::dto::{InboxQuery, NotificationResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The caller's inbox, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user_id: Id,
        query: InboxQuery,
    ) -> ServiceResult<Vec<NotificationResponse>> {
        let query = NotificationQuery {
            limit: query.limit.unwrap_or(50).clamp(1, 100),
            before: query.before,
        };

        let notifications = self
            .ctx
            .notification_repo()
            .find_by_user(user_id, query)
            .await?;

        Ok(notifications.iter().map(NotificationResponse::from).collect())
    }

    /// Mark a notification read; callers can only touch their own rows
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        notification_id: Id,
        user_id: Id,
    ) -> ServiceResult<NotificationResponse> {
        let mut notification = self
            .ctx
            .notification_repo()
            .find_by_id(notification_id)
            .await?
            .filter(|n| n.user_id == user_id)
            .ok_or(DomainError::NotificationNotFound(notification_id))?;

        self.ctx.notification_repo().mark_read(notification_id).await?;

        notification.status = NotificationStatus::Read;
        Ok(NotificationResponse::from(notification))
    }

    /// Delete a notification; callers can only touch their own rows
    #[instrument(skip(self))]
    pub async fn delete(&self, notification_id: Id, user_id: Id) -> ServiceResult<()> {
        let _notification = self
            .ctx
            .notification_repo()
            .find_by_id(notification_id)
            .await?
            .filter(|n| n.user_id == user_id)
            .ok_or(DomainError::NotificationNotFound(notification_id))?;

        self.ctx.notification_repo().delete(notification_id).await?;

        info!(notification_id = %notification_id, user_id = %user_id, "Notification deleted");

        Ok(())
    }
}
