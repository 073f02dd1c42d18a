//! Password value object - Domain layer password handling.
//!
//! New secrets are hashed with Argon2. Hashes written by the previous
//! Java deployment are BCrypt (`$2a$`, `$2b$`, `$2y$`) and still verify.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];
/// `$2b$` + two cost digits + `$` + 22 salt chars + 31 hash chars.
const BCRYPT_HASH_LENGTH: usize = 60;
const ARGON2_ALGORITHMS: &[&str] = &["argon2id", "argon2i", "argon2d"];

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by hashing the plain text.
    ///
    /// # Errors
    /// Returns validation error if password is shorter than the minimum length.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        validate_length(plain_text)?;
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Hash an already accepted secret without the length policy.
    ///
    /// Used when migrating stored plaintext secrets, which predate the policy.
    pub fn rehash(plain_text: &str) -> AppResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        if is_bcrypt(&self.hash) {
            return bcrypt::verify(plain_text, &self.hash).unwrap_or(false);
        }
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    /// Whether a stored secret is a well-formed Argon2 or BCrypt hash.
    ///
    /// Plaintext secrets that merely start with `$` are not hashes.
    pub fn is_hash(stored: &str) -> bool {
        is_bcrypt(stored) || is_argon2(stored)
    }

    fn hash(plain_text: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

/// Enforce the minimum password length.
pub fn validate_length(plain_text: &str) -> AppResult<()> {
    if plain_text.len() < MIN_PASSWORD_LENGTH as usize {
        return Err(AppError::validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    Ok(())
}

fn is_bcrypt(stored: &str) -> bool {
    let Some(rest) = BCRYPT_PREFIXES.iter().find_map(|p| stored.strip_prefix(p)) else {
        return false;
    };
    let bytes = rest.as_bytes();
    stored.len() == BCRYPT_HASH_LENGTH
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[2] == b'$'
        && bytes[3..]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || *b == b'.' || *b == b'/')
}

fn is_argon2(stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| ARGON2_ALGORITHMS.contains(&parsed.algorithm.as_str()))
        .unwrap_or(false)
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("WrongPassword123"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_password_too_short() {
        assert!(Password::new("short").is_err());
        assert!(Password::new("12345678").is_ok());
    }

    #[test]
    fn test_rehash_skips_length_policy() {
        let password = Password::rehash("abc").unwrap();
        assert!(password.verify("abc"));
    }

    #[test]
    fn test_bcrypt_hash_verifies() {
        let hash = bcrypt::hash("admin123", 4).unwrap();
        let password = Password::from_hash(hash);

        assert!(password.verify("admin123"));
        assert!(!password.verify("admin124"));
    }

    #[test]
    fn test_is_hash_recognises_formats() {
        let argon = Password::new("Password123!").unwrap();
        let bcrypt_hash = bcrypt::hash("Password123!", 4).unwrap();

        assert!(Password::is_hash(argon.as_str()));
        assert!(Password::is_hash(&bcrypt_hash));
        assert!(!Password::is_hash("Password123!"));
        assert!(!Password::is_hash("admin123"));
    }

    #[test]
    fn test_dollar_prefixed_plaintext_is_not_a_hash() {
        assert!(!Password::is_hash("$ecret12"));
        assert!(!Password::is_hash("$2a$pass"));
        assert!(!Password::is_hash("$2b$12$tooshort"));
        // Parses as a PHC string but names no Argon2 variant
        assert!(!Password::is_hash("$pbkdf2$i=1000$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo"));
    }
}
