use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Login form document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub csrf_token: String,
    /// Where a successful login redirects to
    pub next: String,
}
