use crate::server::{
    error::{auth::AuthError, Error},
    model::{app::AppState, auth::AuthenticatedUser, session::context::SessionContext},
    service::auth::AuthService,
};

/// Resolves the user attached to the session
///
/// # Arguments
/// - `state`: Application state with the database connection
/// - `session`: The request's session context
///
/// # Returns
/// - `Ok(AuthenticatedUser)`: User found in session and database
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: No user ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID in session but not in
///   the database; the session is destroyed
/// - `Err(Error)`: Database or session store failures
pub async fn get_user_from_session(
    state: &AppState,
    session: &SessionContext,
) -> Result<AuthenticatedUser, Error> {
    let Some(user_id) = session.user_id().await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(user) = AuthService::new(&state.db).get_user(user_id).await? else {
        session.destroy().await?;

        tracing::debug!(
            "Session destroyed for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(user_id)));
    };

    Ok(user.into())
}
