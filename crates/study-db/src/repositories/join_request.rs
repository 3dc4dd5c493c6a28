//! PostgreSQL implementation of JoinRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use study_core::entities::{JoinRequest, JoinRequestStatus};
use study_core::error::DomainError;
use study_core::traits::{JoinRequestRepository, RepoResult};
use study_core::value_objects::Id;

use crate::models::JoinRequestModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of JoinRequestRepository
#[derive(Clone)]
pub struct PgJoinRequestRepository {
    pool: PgPool,
}

impl PgJoinRequestRepository {
    /// Create a new PgJoinRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JoinRequestRepository for PgJoinRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<JoinRequest>> {
        let result = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            SELECT id, group_id, user_id, status, created_at, resolved_at
            FROM join_requests
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(JoinRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending(&self, group_id: Id, user_id: Id) -> RepoResult<Option<JoinRequest>> {
        let result = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            SELECT id, group_id, user_id, status, created_at, resolved_at
            FROM join_requests
            WHERE group_id = $1 AND user_id = $2 AND status = 'pending'
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(JoinRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn pending_for_user(&self, user_id: Id) -> RepoResult<Vec<JoinRequest>> {
        let results = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            SELECT id, group_id, user_id, status, created_at, resolved_at
            FROM join_requests
            WHERE user_id = $1 AND status = 'pending'
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(JoinRequest::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn pending_for_group(&self, group_id: Id) -> RepoResult<Vec<JoinRequest>> {
        let results = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            SELECT id, group_id, user_id, status, created_at, resolved_at
            FROM join_requests
            WHERE group_id = $1 AND status = 'pending'
            ORDER BY created_at
            "#,
        )
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(JoinRequest::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, group_id: Id, user_id: Id) -> RepoResult<JoinRequest> {
        let model = sqlx::query_as::<_, JoinRequestModel>(
            r#"
            INSERT INTO join_requests (group_id, user_id)
            VALUES ($1, $2)
            RETURNING id, group_id, user_id, status, created_at, resolved_at
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateRequest))?;

        JoinRequest::try_from(model)
    }

    #[instrument(skip(self))]
    async fn mark_resolved(&self, id: Id, status: JoinRequestStatus) -> RepoResult<bool> {
        // Guarded transition: only a still-pending row is updated, so two
        // concurrent resolutions cannot both report success
        let result = sqlx::query(
            r#"
            UPDATE join_requests
            SET status = $2, resolved_at = NOW()
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
