//! Stored-secret verification strategies.
//!
//! Accounts migrated from the previous deployment may still hold their
//! secret unhashed. Login tries each strategy in a fixed order and reports
//! which one accepted the secret so the caller can upgrade legacy rows.

use super::Password;

/// One way of checking a supplied secret against the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialVerifier {
    /// Stored value is plaintext and must equal the supplied secret.
    Legacy,
    /// Stored value is an Argon2 or BCrypt hash.
    Hashed,
}

impl CredentialVerifier {
    /// Strategies in the order login applies them.
    pub const ORDER: [CredentialVerifier; 2] =
        [CredentialVerifier::Legacy, CredentialVerifier::Hashed];

    pub fn accepts(&self, stored: &str, supplied: &str) -> bool {
        match self {
            CredentialVerifier::Legacy => !Password::is_hash(stored) && stored == supplied,
            CredentialVerifier::Hashed => {
                Password::is_hash(stored) && Password::from_hash(stored.to_string()).verify(supplied)
            }
        }
    }

    /// First strategy accepting the secret, if any.
    pub fn verify(stored: &str, supplied: &str) -> Option<CredentialVerifier> {
        Self::ORDER
            .into_iter()
            .find(|verifier| verifier.accepts(stored, supplied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plaintext_secret_uses_legacy_path() {
        assert_eq!(
            CredentialVerifier::verify("admin123", "admin123"),
            Some(CredentialVerifier::Legacy)
        );
    }

    #[test]
    fn test_hashed_secret_never_matches_by_equality() {
        let hash = Password::new("Password123!").unwrap().into_string();

        assert!(!CredentialVerifier::Legacy.accepts(&hash, &hash));
        assert_eq!(CredentialVerifier::verify(&hash, &hash), None);
    }

    #[test]
    fn test_hashed_secret_uses_hashed_path() {
        let hash = Password::new("Password123!").unwrap().into_string();

        assert_eq!(
            CredentialVerifier::verify(&hash, "Password123!"),
            Some(CredentialVerifier::Hashed)
        );
        assert_eq!(CredentialVerifier::verify(&hash, "Password124!"), None);
    }

    #[test]
    fn test_dollar_prefixed_plaintext_uses_legacy_path() {
        for stored in ["$ecret12", "$2a$pass"] {
            assert_eq!(
                CredentialVerifier::verify(stored, stored),
                Some(CredentialVerifier::Legacy)
            );
        }
    }

    #[test]
    fn test_bcrypt_hash_uses_hashed_path() {
        let hash = bcrypt::hash("admin123", 4).unwrap();

        assert_eq!(
            CredentialVerifier::verify(&hash, "admin123"),
            Some(CredentialVerifier::Hashed)
        );
        assert_eq!(CredentialVerifier::verify(&hash, &hash), None);
    }

    #[test]
    fn test_wrong_plaintext_rejected() {
        assert_eq!(CredentialVerifier::verify("admin123", "admin1234"), None);
    }
}
