//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_USER};

/// User account with its role name resolved.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[schema(as = Usuario)]
pub struct User {
    #[serde(rename = "idusuarios")]
    pub id: i32,
    #[serde(rename = "email_user")]
    pub email: String,
    pub username: String,
    /// Stored secret: a hash, or plaintext for accounts not yet migrated.
    #[serde(skip_serializing)]
    pub secret: String,
    #[serde(rename = "estado_user")]
    pub active: bool,
    #[serde(rename = "idroles")]
    pub role_id: Option<i32>,
    #[serde(rename = "rol", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// Check if user has the administrator role
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }

    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.id,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

/// Identity established by a successful login or a valid bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i32,
    pub username: String,
    pub role: Option<String>,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ROLE_ADMIN)
    }

    /// Role name reported to clients; accounts without a role are plain users.
    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or(ROLE_USER)
    }
}

/// Account fields written when a user is created.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub secret: String,
    pub role_id: Option<i32>,
}

/// Body returned by login and registration.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9...")]
    pub token: String,
    #[serde(rename = "idUsuario")]
    #[schema(example = 1)]
    pub user_id: i32,
    #[schema(example = "maria")]
    pub username: String,
    #[serde(rename = "rol")]
    #[schema(example = "ROLE_USER")]
    pub role: String,
}

/// Account creation through the user administration endpoint.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(rename = "email_user")]
    #[validate(length(min = 3, message = "email_user is required"))]
    #[schema(example = "maria@example.com")]
    pub email: String,
    /// Defaults to the e-mail
    #[validate(length(min = 1, message = "username cannot be empty"))]
    pub username: Option<String>,
    #[serde(rename = "password_user")]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(rename = "idroles")]
    pub role_id: Option<i32>,
}
