//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME, DEFAULT_CORS_ORIGINS,
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS,
    DEFAULT_JWT_LEEWAY_SECONDS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};

/// Credentials of the administrator account created by `seed`.
#[derive(Clone)]
pub struct AdminAccount {
    pub username: String,
    pub email: String,
    password: String,
}

impl AdminAccount {
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub jwt_leeway_seconds: i64,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Keep newly registered passwords unhashed (legacy deployments only)
    pub legacy_plaintext_passwords: bool,
    pub admin: AdminAccount,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("jwt_leeway_seconds", &self.jwt_leeway_seconds)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("legacy_plaintext_passwords", &self.legacy_plaintext_passwords)
            .field("admin_username", &self.admin.username)
            .field("admin_password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is not set or is too short (security requirement),
    /// or if ADMIN_PASSWORD is not set in a release build.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        let admin_password =
            admin_password(env::var("ADMIN_PASSWORD").ok(), cfg!(debug_assertions))
                .unwrap_or_else(|| {
                    panic!("ADMIN_PASSWORD environment variable must be set in production")
                });

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            jwt_secret,
            jwt_expiration_hours: parse_var("JWT_EXPIRATION_HOURS")
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
            jwt_leeway_seconds: parse_var("JWT_LEEWAY_SECONDS")
                .unwrap_or(DEFAULT_JWT_LEEWAY_SECONDS),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| split_origins(&v))
                .unwrap_or_else(|_| default_origins()),
            legacy_plaintext_passwords: parse_var("LEGACY_PLAINTEXT_PASSWORDS").unwrap_or(false),
            admin: AdminAccount {
                username: env::var("ADMIN_USERNAME")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string()),
                email: env::var("ADMIN_EMAIL")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string()),
                password: admin_password,
            },
        }
    }

    /// Build a configuration without touching the environment.
    ///
    /// Used by tests and embedders that wire their own database.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_max_connections: 1,
            jwt_secret: jwt_secret.into(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            jwt_leeway_seconds: DEFAULT_JWT_LEEWAY_SECONDS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors_allowed_origins: default_origins(),
            legacy_plaintext_passwords: false,
            admin: AdminAccount {
                username: DEFAULT_ADMIN_USERNAME.to_string(),
                email: DEFAULT_ADMIN_EMAIL.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
            },
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// The configured administrator password, or the development default when
/// `allow_default` is set. `None` means no password may be seeded.
fn admin_password(configured: Option<String>, allow_default: bool) -> Option<String> {
    match configured {
        Some(password) => Some(password),
        None if allow_default => {
            tracing::warn!("ADMIN_PASSWORD not set, using insecure default for development");
            Some(DEFAULT_ADMIN_PASSWORD.to_string())
        }
        None => None,
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

fn default_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_trims_and_skips_empty() {
        let origins = split_origins(" http://a.test , ,http://b.test");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn test_admin_password_default_is_development_only() {
        assert_eq!(
            admin_password(None, true).as_deref(),
            Some(DEFAULT_ADMIN_PASSWORD)
        );
        assert_eq!(admin_password(None, false), None);
        assert_eq!(
            admin_password(Some("s3cret-admin".into()), false).as_deref(),
            Some("s3cret-admin")
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("sqlite::memory:", "a-very-long-secret-used-only-in-tests");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("a-very-long-secret"));
        assert!(!debug.contains("sqlite::memory:"));
        assert!(debug.contains("[REDACTED]"));
    }
}
