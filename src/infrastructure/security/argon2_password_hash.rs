use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as ParsedHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use crate::application::security::PasswordHash;
use crate::shared::error::AppError;

/// Argon2id password hasher.
///
/// Hashing is CPU bound, so both operations run on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHash {
    params: Params,
}

impl Argon2PasswordHash {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use explicit cost parameters instead of the argon2 defaults.
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

fn wrong_credentials() -> AppError {
    AppError::Unauthorized("kredensial yang Anda masukkan salah".into())
}

#[async_trait]
impl PasswordHash for Argon2PasswordHash {
    async fn hash(&self, password: &str) -> Result<String, AppError> {
        let argon2 = self.argon2();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
        })
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
    }

    async fn compare_password(&self, password: &str, hashed: &str) -> Result<(), AppError> {
        let argon2 = self.argon2();
        let password = password.to_owned();
        let hashed = hashed.to_owned();

        let matched = tokio::task::spawn_blocking(move || {
            // An unparsable stored hash can never match.
            ParsedHash::new(&hashed)
                .map(|parsed| argon2.verify_password(password.as_bytes(), &parsed).is_ok())
                .unwrap_or(false)
        })
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?;

        if !matched {
            return Err(wrong_credentials());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::ErrorKind;

    fn hasher() -> Argon2PasswordHash {
        Argon2PasswordHash::with_params(Params::new(1024, 1, 1, None).unwrap())
    }

    #[tokio::test]
    async fn test_hash_is_salted_and_not_plain() {
        let hasher = hasher();

        let first = hasher.hash("secret").await.unwrap();
        let second = hasher.hash("secret").await.unwrap();

        assert_ne!(first, "secret");
        assert!(first.starts_with("$argon2id$"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_compare_password_accepts_match() {
        let hasher = hasher();
        let hashed = hasher.hash("secret").await.unwrap();

        assert!(hasher.compare_password("secret", &hashed).await.is_ok());
    }

    #[tokio::test]
    async fn test_compare_password_rejects_mismatch() {
        let hasher = hasher();
        let hashed = hasher.hash("secret").await.unwrap();

        let error = hasher.compare_password("wrong", &hashed).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Authentication);
        assert_eq!(error.client_message(), "kredensial yang Anda masukkan salah");
    }

    #[tokio::test]
    async fn test_compare_password_rejects_garbage_hash() {
        let error = hasher()
            .compare_password("secret", "not-a-hash")
            .await
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Authentication);
    }
}
