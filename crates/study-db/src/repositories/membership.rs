//! PostgreSQL implementation of MembershipRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use study_core::entities::GroupMember;
use study_core::error::DomainError;
use study_core::traits::{MembershipRepository, RepoResult};
use study_core::value_objects::Id;

use crate::models::GroupMemberModel;

use super::error::{group_not_found, map_db_error, map_unique_violation, member_not_found};

/// PostgreSQL implementation of MembershipRepository
#[derive(Clone)]
pub struct PgMembershipRepository {
    pool: PgPool,
}

impl PgMembershipRepository {
    /// Create a new PgMembershipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for PgMembershipRepository {
    #[instrument(skip(self))]
    async fn find(&self, group_id: Id, user_id: Id) -> RepoResult<Option<GroupMember>> {
        let result = sqlx::query_as::<_, GroupMemberModel>(
            r#"
            SELECT group_id, user_id, joined_at
            FROM group_members
            WHERE group_id = $1 AND user_id = $2
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GroupMember::from))
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: Id) -> RepoResult<Vec<GroupMember>> {
        let results = sqlx::query_as::<_, GroupMemberModel>(
            r#"
            SELECT group_id, user_id, joined_at
            FROM group_members
            WHERE group_id = $1
            ORDER BY joined_at
            "#,
        )
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(GroupMember::from).collect())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, group_id: Id, user_id: Id) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM group_members WHERE group_id = $1 AND user_id = $2)
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn count_by_group(&self, group_id: Id) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM group_members WHERE group_id = $1
            "#,
        )
        .bind(group_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn insert(&self, group_id: Id, user_id: Id) -> RepoResult<GroupMember> {
        let model = sqlx::query_as::<_, GroupMemberModel>(
            r#"
            INSERT INTO group_members (group_id, user_id)
            VALUES ($1, $2)
            RETURNING group_id, user_id, joined_at
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        Ok(GroupMember::from(model))
    }

    #[instrument(skip(self))]
    async fn join_within_capacity(&self, group_id: Id, user_id: Id) -> RepoResult<GroupMember> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the group row so concurrent joins serialize on the count check
        let capacity = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT max_capacity FROM study_groups WHERE id = $1 FOR UPDATE
            "#,
        )
        .bind(group_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| group_not_found(group_id))?;

        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM group_members WHERE group_id = $1
            "#,
        )
        .bind(group_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if count >= i64::from(capacity) {
            return Err(DomainError::GroupFull);
        }

        let model = sqlx::query_as::<_, GroupMemberModel>(
            r#"
            INSERT INTO group_members (group_id, user_id)
            VALUES ($1, $2)
            RETURNING group_id, user_id, joined_at
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyMember))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(GroupMember::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, group_id: Id, user_id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM group_members WHERE group_id = $1 AND user_id = $2
            "#,
        )
        .bind(group_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found());
        }

        Ok(())
    }
}
