use crate::domain::shared::value_objects::UserId;

/// Public profile of a marketplace user, as shown next to their listings.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}
