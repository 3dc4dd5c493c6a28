//! GroupMember entity - the user-group membership junction

use chrono::{DateTime, Utc};

use crate::value_objects::Id;

/// Membership of a user in a study group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    pub group_id: Id,
    pub user_id: Id,
    pub joined_at: DateTime<Utc>,
}

impl GroupMember {
    /// Create a new membership
    pub fn new(group_id: Id, user_id: Id) -> Self {
        Self {
            group_id,
            user_id,
            joined_at: Utc::now(),
        }
    }
}
