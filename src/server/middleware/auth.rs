use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Permission a handler can demand on top of being logged in.
pub enum Permission {
    Admin,
}

/// Resolves the session user and checks their permissions.
///
/// ```rust,ignore
/// let admin = AuthGuard::new(&state.db, &session)
///     .require(&[Permission::Admin])
///     .await?;
/// ```
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if they hold every permission.
    ///
    /// An empty slice only requires a valid login.
    ///
    /// # Returns
    /// - `Err(AuthError::UserNotInSession)` - Not logged in (401)
    /// - `Err(AuthError::UserNotInDatabase)` - Session points at a deleted user (404)
    /// - `Err(AuthError::AccessDenied)` - Missing permission (403)
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without admin permissions".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the logged-in user, or `None` for anonymous visitors.
    ///
    /// Used by public endpoints that also show private rows to their owner. A session
    /// pointing at a deleted user reads as anonymous.
    pub async fn optional(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}
