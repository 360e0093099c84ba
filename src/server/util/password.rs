//! Password hashing with bcrypt.
//!
//! bcrypt is CPU bound, so both operations run on the blocking thread pool.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::server::error::Error;

/// Hashes `password` with bcrypt at `cost` (defaults to [`DEFAULT_COST`]).
pub async fn hash_password(password: &str, cost: Option<u32>) -> Result<String, Error> {
    let password = password.to_string();
    let cost = cost.unwrap_or(DEFAULT_COST);

    let hashed = tokio::task::spawn_blocking(move || hash(password, cost)).await??;

    Ok(hashed)
}

/// Returns whether `password` matches the bcrypt `password_hash`.
pub async fn verify_password(password: &str, password_hash: &str) -> Result<bool, Error> {
    let password = password.to_string();
    let password_hash = password_hash.to_string();

    let matches = tokio::task::spawn_blocking(move || verify(password, &password_hash)).await??;

    Ok(matches)
}
