//! Study group database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for study_groups table
#[derive(Debug, Clone, FromRow)]
pub struct StudyGroupModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub course_code: String,
    pub owner_id: i64,
    pub university_id: Option<i64>,
    pub max_capacity: i32,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
