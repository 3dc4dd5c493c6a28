//! User entity <-> model mapper

use study_core::entities::User;
use study_core::value_objects::Id;

use crate::models::UserModel;

/// Convert UserModel to User entity (the password hash stays in the database layer)
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            bio: model.bio,
            university_id: model.university_id.map(Id::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
