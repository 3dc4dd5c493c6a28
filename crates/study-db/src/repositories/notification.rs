//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use study_core::entities::{NewNotification, Notification};
use study_core::traits::{NotificationQuery, NotificationRepository, RepoResult};
use study_core::value_objects::Id;

use crate::models::NotificationModel;

use super::error::{map_db_error, notification_not_found};

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Notification>> {
        let result = sqlx::query_as::<_, NotificationModel>(
            r#"
            SELECT id, user_id, message, status, request_id, created_at
            FROM notifications
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Notification::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_user(
        &self,
        user_id: Id,
        query: NotificationQuery,
    ) -> RepoResult<Vec<Notification>> {
        let limit = query.limit.clamp(1, 100);

        let results = match query.before {
            Some(before) => {
                sqlx::query_as::<_, NotificationModel>(
                    r#"
                    SELECT id, user_id, message, status, request_id, created_at
                    FROM notifications
                    WHERE user_id = $1 AND id < $2
                    ORDER BY id DESC
                    LIMIT $3
                    "#,
                )
                .bind(user_id.into_inner())
                .bind(before.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, NotificationModel>(
                    r#"
                    SELECT id, user_id, message, status, request_id, created_at
                    FROM notifications
                    WHERE user_id = $1
                    ORDER BY id DESC
                    LIMIT $2
                    "#,
                )
                .bind(user_id.into_inner())
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self, notification), fields(user_id = %notification.user_id))]
    async fn create(&self, notification: &NewNotification) -> RepoResult<Notification> {
        let model = sqlx::query_as::<_, NotificationModel>(
            r#"
            INSERT INTO notifications (user_id, message, request_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, message, status, request_id, created_at
            "#,
        )
        .bind(notification.user_id.into_inner())
        .bind(&notification.message)
        .bind(notification.request_id.map(Id::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Notification::try_from(model)
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE notifications SET status = 'read' WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM notifications WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(notification_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_for_request(&self, request_id: Id) -> RepoResult<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM notifications WHERE request_id = $1
            "#,
        )
        .bind(request_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
