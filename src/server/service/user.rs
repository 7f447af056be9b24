//! User service for business logic.
//!
//! This module provides the `UserService` for admin user management: listing users and
//! granting or revoking admin status.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::User,
    util::pagination::{Page, PaginationParams},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    /// Retrieves all users with pagination, ordered alphabetically by name.
    pub async fn get_all_users(&self, params: PaginationParams) -> Result<Page<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_all_paginated(params)
            .await?)
    }

    /// Grants or revokes admin status.
    ///
    /// # Arguments
    /// - `acting_user_id` - Admin performing the change
    /// - `user_id` - Target user
    /// - `admin` - New admin flag
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::BadRequest)` - Admin tried to revoke their own status
    /// - `Err(AppError::NotFound)` - Target user doesn't exist
    pub async fn set_admin(
        &self,
        acting_user_id: i32,
        user_id: i32,
        admin: bool,
    ) -> Result<User, AppError> {
        if acting_user_id == user_id && !admin {
            return Err(AppError::BadRequest(
                "You cannot revoke your own admin status".to_string(),
            ));
        }

        let user = UserRepository::new(self.db)
            .set_admin(user_id, admin)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            acting_user_id,
            user_id,
            admin,
            "Changed admin status"
        );

        Ok(user)
    }
}
