//! Admin authentication service
//!
//! Handles admin login and bearer-token verification. Tokens are HS256
//! JWTs carrying the username and an expiry; verification checks the
//! signature and expiry, not merely that a token is present.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::{AdminUser, CreateUserRequest};
use crate::storage::Storage;
use crate::utils::errors::{AppError, Result};

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated admin.
    pub sub: String,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
}

#[derive(Clone)]
pub struct AuthService {
    storage: Arc<dyn Storage>,
    settings: Settings,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>, settings: Settings) -> Self {
        Self { storage, settings }
    }

    /// Create the configured admin account if it does not exist yet.
    /// Called once at startup.
    pub async fn ensure_admin_user(&self) -> Result<()> {
        let username = &self.settings.auth.admin_username;
        if self.storage.get_user_by_username(username).await?.is_some() {
            debug!(username = %username, "Admin account already present");
            return Ok(());
        }

        self.storage
            .create_user(CreateUserRequest {
                username: username.clone(),
                password: self.settings.auth.admin_password.clone(),
            })
            .await?;
        info!(username = %username, "Admin account created");

        Ok(())
    }

    /// Verify credentials and issue a session token.
    pub async fn login(&self, username: &str, password: &str) -> Result<(String, AdminUser)> {
        let user = self
            .storage
            .get_user_by_username(username)
            .await?
            .ok_or_else(|| {
                warn!(username = %username, "Login attempt for unknown user");
                AppError::Auth("Invalid username or password".to_string())
            })?;

        if user.password != password {
            warn!(username = %username, "Login attempt with wrong password");
            return Err(AppError::Auth("Invalid username or password".to_string()));
        }

        let token = self.issue_token(&user.username)?;
        info!(username = %username, "Admin logged in");

        Ok((token, user))
    }

    /// Issue a signed token for an authenticated admin.
    pub fn issue_token(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            exp: (now + Duration::minutes(self.settings.auth.token_ttl_minutes)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.auth.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Auth(format!("token issuance failed: {e}")))
    }

    /// Verify a bearer token's signature and expiry, returning its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            debug!(error = %e, "Token verification failed");
            AppError::Auth("Invalid or expired token".to_string())
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn service() -> AuthService {
        AuthService::new(Arc::new(MemoryStorage::new()), Settings::default())
    }

    #[tokio::test]
    async fn test_login_round_trip() {
        let auth = service();
        auth.ensure_admin_user().await.unwrap();

        let (token, user) = auth.login("admin", "admin").await.unwrap();
        assert_eq!(user.username, "admin");

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let auth = service();
        auth.ensure_admin_user().await.unwrap();

        let err = auth.login("admin", "nope").await;
        assert!(matches!(err, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_arbitrary_long_token_is_rejected() {
        // A token is only as good as its signature; length proves nothing.
        let auth = service();
        let err = auth.verify_token(&"x".repeat(200));
        assert!(matches!(err, Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let auth = service();

        let mut other_settings = Settings::default();
        other_settings.auth.jwt_secret = "a-completely-different-secret".to_string();
        let other = AuthService::new(Arc::new(MemoryStorage::new()), other_settings);

        let token = other.issue_token("admin").unwrap();
        assert!(matches!(auth.verify_token(&token), Err(AppError::Auth(_))));
    }

    #[tokio::test]
    async fn test_ensure_admin_user_is_idempotent() {
        let auth = service();
        auth.ensure_admin_user().await.unwrap();
        auth.ensure_admin_user().await.unwrap();
    }
}
