//! StudyGroup entity - a capacity-limited group organized around a course

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Study group entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyGroup {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub course_code: String,
    pub owner_id: Id,
    pub university_id: Option<Id>,
    pub max_capacity: i32,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudyGroup {
    /// Create a new StudyGroup
    pub fn new(id: Id, name: String, course_code: String, owner_id: Id, max_capacity: i32) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            course_code,
            owner_id,
            university_id: None,
            max_capacity,
            is_private: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if a user is the group owner
    #[inline]
    pub fn is_owner(&self, user_id: Id) -> bool {
        self.owner_id == user_id
    }

    /// Whether another member fits under the capacity limit
    #[inline]
    pub fn has_space(&self, member_count: i64) -> bool {
        member_count < i64::from(self.max_capacity)
    }

    /// Update the group name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the group description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Update the course code
    pub fn set_course_code(&mut self, course_code: String) {
        self.course_code = course_code;
        self.updated_at = Utc::now();
    }

    /// Update the capacity limit
    pub fn set_capacity(&mut self, max_capacity: i32) {
        self.max_capacity = max_capacity;
        self.updated_at = Utc::now();
    }

    /// Toggle whether joining requires owner approval
    pub fn set_private(&mut self, is_private: bool) {
        self.is_private = is_private;
        self.updated_at = Utc::now();
    }
}

/// Fields for inserting a study group; the database assigns the id
#[derive(Debug, Clone)]
pub struct NewStudyGroup {
    pub name: String,
    pub description: Option<String>,
    pub course_code: String,
    pub owner_id: Id,
    pub university_id: Option<Id>,
    pub max_capacity: i32,
    pub is_private: bool,
}
