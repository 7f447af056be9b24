//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::util::pagination::Page,
};

/// Application user identified by their Discord account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    pub admin: bool,
    pub token_balance: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            admin: self.admin,
            token_balance: self.token_balance,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            admin: entity.admin,
            token_balance: entity.token_balance,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user during login.
///
/// The optional `is_admin` field preserves existing admin status when None, allowing
/// updates to name without modifying permissions.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub name: String,
    pub is_admin: Option<bool>,
}

/// Result of an upsert: the stored user and whether the row was just created.
#[derive(Debug, Clone)]
pub struct UpsertedUser {
    pub user: User,
    pub created: bool,
}

pub fn users_page_into_dto(page: Page<User>) -> PaginatedUsersDto {
    PaginatedUsersDto {
        users: page.items.into_iter().map(User::into_dto).collect(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages,
    }
}
