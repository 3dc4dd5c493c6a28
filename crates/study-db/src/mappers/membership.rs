//! Group membership entity <-> model mapper

use study_core::entities::GroupMember;
use study_core::value_objects::Id;

use crate::models::GroupMemberModel;

/// Convert GroupMemberModel to GroupMember entity
impl From<GroupMemberModel> for GroupMember {
    fn from(model: GroupMemberModel) -> Self {
        GroupMember {
            group_id: Id::new(model.group_id),
            user_id: Id::new(model.user_id),
            joined_at: model.joined_at,
        }
    }
}
