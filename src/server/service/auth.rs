//! Username/password authentication and administrator seeding.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{audit::AuditEntity, constants::AuditAction, constants::Role, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::db::UserModel,
        service::audit,
        util::password::{hash_password, verify_password},
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and returns the matching user.
    ///
    /// An unknown username and a wrong password produce the same
    /// [`AuthError::InvalidCredentials`] so callers cannot tell which usernames exist. Nothing is
    /// written; the caller records the login with [`Self::record_login`] once the
    /// session has been established.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserDto, Error> {
        let user_repository = UserRepository::new(self.db);

        let Some(user) = user_repository.find_by_username(username.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        UserDto::try_from(user)
    }

    /// Records a `LOGIN` audit entry for `user_id`.
    pub async fn record_login(&self, user_id: i32) -> Result<(), Error> {
        audit::record(
            self.db,
            user_id,
            AuditAction::Login,
            AuditEntity::User,
            user_id,
            None,
        )
        .await?;

        tracing::info!(user_id, "user logged in");

        Ok(())
    }

    /// Records a `LOGOUT` audit entry for `user_id` if the user still exists.
    ///
    /// Returns whether an entry was written.
    pub async fn logout(&self, user_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            tracing::debug!(user_id, "logout for user no longer in database");

            return Ok(false);
        }

        audit::record(
            &txn,
            user_id,
            AuditAction::Logout,
            AuditEntity::User,
            user_id,
            None,
        )
        .await?;
        txn.commit().await?;

        tracing::info!(user_id, "user logged out");

        Ok(true)
    }

    pub async fn get_user(&self, user_id: i32) -> Result<Option<UserDto>, Error> {
        UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .map(UserDto::try_from)
            .transpose()
    }

    /// Creates an administrator when no user exists yet.
    ///
    /// Returns whether a user was created. Running against a populated table is a no-op,
    /// so this is safe to call on every startup.
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
        cost: Option<u32>,
    ) -> Result<bool, Error> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(Error::InternalError(
                "administrator credentials must not be empty".to_string(),
            ));
        }

        let password_hash = hash_password(password, cost).await?;

        let txn = self.db.begin().await?;
        let user_repository = UserRepository::new(&txn);

        if user_repository.count().await? > 0 {
            return Ok(false);
        }

        let user = user_repository
            .create(username, &password_hash, Role::Admin)
            .await?;
        txn.commit().await?;

        tracing::info!(user_id = user.id, username = %user.username, "seeded administrator");

        Ok(true)
    }
}

impl TryFrom<UserModel> for UserDto {
    type Error = Error;

    fn try_from(user: UserModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: user.id,
            username: user.username,
            role: user.role.parse()?,
        })
    }
}
