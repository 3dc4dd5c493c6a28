//! Meeting database model

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for meetings table
///
/// The schedule is stored as sibling columns: one-time rows populate
/// `meeting_date`, recurring rows populate `start_date`, `end_date` and
/// `recurrence_days`. A table check constraint keeps the shapes exclusive.
#[derive(Debug, Clone, FromRow)]
pub struct MeetingModel {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_recurring: bool,
    pub meeting_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub recurrence_days: Option<i16>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
