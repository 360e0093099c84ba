use crate::{
    model::{constants::Role, user::UserDto},
    server::error::{auth::AuthError, Error},
};

/// User resolved from the current session.
///
/// Obtained through `controller::util::get_user::get_user_from_session`; holding one means
/// the session carried a user ID that still exists in the database.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Fails with [`AuthError::Forbidden`] unless the user holds `role`.
    ///
    /// Administrators satisfy every role requirement.
    pub fn require_role(&self, role: Role) -> Result<(), Error> {
        if self.role == role || self.role == Role::Admin {
            return Ok(());
        }

        Err(AuthError::Forbidden {
            user_id: self.id,
            required: role,
        }
        .into())
    }
}

impl From<AuthenticatedUser> for UserDto {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

impl From<UserDto> for AuthenticatedUser {
    fn from(user: UserDto) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
