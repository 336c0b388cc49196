//! User entity <-> model mapper

use pickup_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            birth_date: model.birth_date,
            city: model.city,
            state: model.state,
            image: model.image,
            phone: model.phone,
            email: model.email,
            is_active: model.is_active,
            is_private: model.is_private,
            is_admin: model.is_admin,
            created_on: model.created_on,
        }
    }
}
