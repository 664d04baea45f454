use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User {
            id: UserId::new(self.id),
            name: self.name,
            email: self.email,
        }
    }
}
