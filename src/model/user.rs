use serde::{Deserialize, Serialize};

use crate::model::constants::Role;

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: Role,
}

/// Credentials submitted to the login endpoint
#[derive(Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginDto")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponseDto {
    pub user: UserDto,
}
