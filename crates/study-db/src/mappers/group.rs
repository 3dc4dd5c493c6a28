//! Study group entity <-> model mapper

use study_core::entities::StudyGroup;
use study_core::value_objects::Id;

use crate::models::StudyGroupModel;

/// Convert StudyGroupModel to StudyGroup entity
impl From<StudyGroupModel> for StudyGroup {
    fn from(model: StudyGroupModel) -> Self {
        StudyGroup {
            id: Id::new(model.id),
            name: model.name,
            description: model.description,
            course_code: model.course_code,
            owner_id: Id::new(model.owner_id),
            university_id: model.university_id.map(Id::new),
            max_capacity: model.max_capacity,
            is_private: model.is_private,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
