//! PostgreSQL implementation of MeetingRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use study_core::entities::{Meeting, NewMeeting};
use study_core::error::DomainError;
use study_core::traits::{MeetingRepository, RepoResult};
use study_core::value_objects::Id;

use crate::mappers::ScheduleColumns;
use crate::models::MeetingModel;

use super::error::{map_db_error, map_fk_violation, meeting_not_found};

/// Insert a meeting row plus its tag links on an open connection.
///
/// Shared between meeting creation and the group-creation bundle so both run
/// the same statements inside their own transactions.
pub(crate) async fn insert_meeting(
    conn: &mut PgConnection,
    group_id: i64,
    created_by: i64,
    meeting: &NewMeeting,
) -> Result<Meeting, DomainError> {
    let schedule = ScheduleColumns::new(&meeting.schedule);

    let model = sqlx::query_as::<_, MeetingModel>(
        r#"
        INSERT INTO meetings (group_id, name, description, location, start_time, end_time,
                              is_recurring, meeting_date, start_date, end_date, recurrence_days,
                              created_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        RETURNING id, group_id, name, description, location, start_time, end_time,
                  is_recurring, meeting_date, start_date, end_date, recurrence_days,
                  created_by, created_at, updated_at
        "#,
    )
    .bind(group_id)
    .bind(&meeting.name)
    .bind(&meeting.description)
    .bind(&meeting.location)
    .bind(meeting.start_time)
    .bind(meeting.end_time)
    .bind(schedule.is_recurring)
    .bind(schedule.meeting_date)
    .bind(schedule.start_date)
    .bind(schedule.end_date)
    .bind(schedule.recurrence_days)
    .bind(created_by)
    .fetch_one(&mut *conn)
    .await
    .map_err(map_db_error)?;

    for tag_id in &meeting.tag_ids {
        sqlx::query(
            r#"
            INSERT INTO meeting_tags (meeting_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (meeting_id, tag_id) DO NOTHING
            "#,
        )
        .bind(model.id)
        .bind(tag_id.into_inner())
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            map_fk_violation(e, || {
                DomainError::ValidationError(format!("unknown tag id {tag_id}"))
            })
        })?;
    }

    Meeting::try_from(model)
}

/// PostgreSQL implementation of MeetingRepository
#[derive(Clone)]
pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    /// Create a new PgMeetingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for PgMeetingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<Meeting>> {
        let result = sqlx::query_as::<_, MeetingModel>(
            r#"
            SELECT id, group_id, name, description, location, start_time, end_time,
                   is_recurring, meeting_date, start_date, end_date, recurrence_days,
                   created_by, created_at, updated_at
            FROM meetings
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Meeting::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_group(&self, group_id: Id) -> RepoResult<Vec<Meeting>> {
        let results = sqlx::query_as::<_, MeetingModel>(
            r#"
            SELECT id, group_id, name, description, location, start_time, end_time,
                   is_recurring, meeting_date, start_date, end_date, recurrence_days,
                   created_by, created_at, updated_at
            FROM meetings
            WHERE group_id = $1
            ORDER BY id
            "#,
        )
        .bind(group_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Meeting::try_from).collect()
    }

    #[instrument(skip(self, meeting), fields(name = %meeting.name))]
    async fn create(
        &self,
        group_id: Id,
        created_by: Id,
        meeting: &NewMeeting,
    ) -> RepoResult<Meeting> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let created = insert_meeting(
            &mut tx,
            group_id.into_inner(),
            created_by.into_inner(),
            meeting,
        )
        .await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(created)
    }

    #[instrument(skip(self, meeting), fields(id = %meeting.id))]
    async fn update(&self, meeting: &Meeting) -> RepoResult<()> {
        let schedule = ScheduleColumns::new(&meeting.schedule);

        let result = sqlx::query(
            r#"
            UPDATE meetings
            SET name = $2, description = $3, location = $4, start_time = $5, end_time = $6,
                is_recurring = $7, meeting_date = $8, start_date = $9, end_date = $10,
                recurrence_days = $11, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(meeting.id.into_inner())
        .bind(&meeting.name)
        .bind(&meeting.description)
        .bind(&meeting.location)
        .bind(meeting.start_time)
        .bind(meeting.end_time)
        .bind(schedule.is_recurring)
        .bind(schedule.meeting_date)
        .bind(schedule.start_date)
        .bind(schedule.end_date)
        .bind(schedule.recurrence_days)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(meeting_not_found(meeting.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM meetings WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(meeting_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn tag_ids(&self, meeting_id: Id) -> RepoResult<Vec<Id>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT tag_id FROM meeting_tags WHERE meeting_id = $1 ORDER BY tag_id
            "#,
        )
        .bind(meeting_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids.into_iter().map(Id::new).collect())
    }
}
