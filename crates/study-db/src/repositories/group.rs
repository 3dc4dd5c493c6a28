//! PostgreSQL implementation of GroupRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use study_core::entities::{NewMeeting, NewStudyGroup, StudyGroup};
use study_core::traits::{CreatedGroup, GroupRepository, RepoResult};
use study_core::value_objects::Id;

use crate::models::StudyGroupModel;

use super::error::{group_not_found, map_db_error};
use super::meeting::insert_meeting;

/// PostgreSQL implementation of GroupRepository
#[derive(Clone)]
pub struct PgGroupRepository {
    pool: PgPool,
}

impl PgGroupRepository {
    /// Create a new PgGroupRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupRepository for PgGroupRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<StudyGroup>> {
        let result = sqlx::query_as::<_, StudyGroupModel>(
            r#"
            SELECT id, name, description, course_code, owner_id, university_id,
                   max_capacity, is_private, created_at, updated_at
            FROM study_groups
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(StudyGroup::from))
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, user_id: Id) -> RepoResult<Vec<StudyGroup>> {
        let results = sqlx::query_as::<_, StudyGroupModel>(
            r#"
            SELECT g.id, g.name, g.description, g.course_code, g.owner_id, g.university_id,
                   g.max_capacity, g.is_private, g.created_at, g.updated_at
            FROM study_groups g
            JOIN group_members gm ON gm.group_id = g.id
            WHERE gm.user_id = $1
            ORDER BY gm.joined_at DESC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(StudyGroup::from).collect())
    }

    #[instrument(skip(self, group, initial_meeting), fields(name = %group.name))]
    async fn create(
        &self,
        group: &NewStudyGroup,
        initial_meeting: Option<&NewMeeting>,
    ) -> RepoResult<CreatedGroup> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, StudyGroupModel>(
            r#"
            INSERT INTO study_groups (name, description, course_code, owner_id, university_id,
                                      max_capacity, is_private)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, description, course_code, owner_id, university_id,
                      max_capacity, is_private, created_at, updated_at
            "#,
        )
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.course_code)
        .bind(group.owner_id.into_inner())
        .bind(group.university_id.map(Id::into_inner))
        .bind(group.max_capacity)
        .bind(group.is_private)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // The owner is a member from the first moment the group exists
        sqlx::query(
            r#"
            INSERT INTO group_members (group_id, user_id) VALUES ($1, $2)
            "#,
        )
        .bind(model.id)
        .bind(group.owner_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let meeting = match initial_meeting {
            Some(draft) => {
                Some(insert_meeting(&mut tx, model.id, group.owner_id.into_inner(), draft).await?)
            }
            None => None,
        };

        tx.commit().await.map_err(map_db_error)?;

        Ok(CreatedGroup {
            group: StudyGroup::from(model),
            initial_meeting: meeting,
        })
    }

    #[instrument(skip(self, group), fields(id = %group.id))]
    async fn update(&self, group: &StudyGroup) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE study_groups
            SET name = $2, description = $3, course_code = $4, university_id = $5,
                max_capacity = $6, is_private = $7, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(group.id.into_inner())
        .bind(&group.name)
        .bind(&group.description)
        .bind(&group.course_code)
        .bind(group.university_id.map(Id::into_inner))
        .bind(group.max_capacity)
        .bind(group.is_private)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(group.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM study_groups WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(group_not_found(id));
        }

        Ok(())
    }
}
