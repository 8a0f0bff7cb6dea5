//! Exchanges email and password for the caller's opaque token.

use std::sync::Arc;

use tracing::{debug, info, warn};

use jobboard_auth::password::PasswordHasher;
use jobboard_auth::token::TokenGenerator;
use jobboard_core::error::{AppError, ErrorKind};
use jobboard_core::result::AppResult;
use jobboard_database::store::{TokenStore, UserStore};
use jobboard_entity::token::AuthToken;
use jobboard_entity::user::{is_upper, normalize_email};

/// Field under which credential failures are reported.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// Uniform message for every credential failure.
pub const INVALID_CREDENTIALS: &str = "Unable to authenticate user with given credentials";

/// Token request payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObtainToken {
    /// Account email.
    pub email: String,
    /// Plaintext password, not trimmed.
    pub password: String,
}

/// Issues at most one token per user and hands it back on every login.
#[derive(Debug, Clone)]
pub struct TokenService {
    users: Arc<dyn UserStore>,
    tokens: Arc<dyn TokenStore>,
    hasher: Arc<PasswordHasher>,
    generator: TokenGenerator,
}

impl TokenService {
    /// Creates a new token service.
    pub fn new(
        users: Arc<dyn UserStore>,
        tokens: Arc<dyn TokenStore>,
        hasher: Arc<PasswordHasher>,
        generator: TokenGenerator,
    ) -> Self {
        Self {
            users,
            tokens,
            hasher,
            generator,
        }
    }

    /// Verifies the credentials and returns the user's token.
    pub async fn obtain(&self, req: ObtainToken) -> AppResult<AuthToken> {
        if is_upper(&req.email) {
            return Err(AppError::field("email", "Email is not as per standards"));
        }

        let email = normalize_email(&req.email);
        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                self.hasher.hash_and_discard(&req.password);
                warn!("Token request for unknown email");
                return Err(invalid_credentials());
            }
        };

        if !self.hasher.verify_password(&req.password, &user.password_hash)? {
            warn!(user_id = user.id, "Token request with wrong password");
            return Err(invalid_credentials());
        }
        if !user.is_active {
            warn!(user_id = user.id, "Token request for inactive user");
            return Err(invalid_credentials());
        }

        self.get_or_create(user.id).await
    }

    async fn get_or_create(&self, user_id: i64) -> AppResult<AuthToken> {
        if let Some(token) = self.tokens.find_by_user(user_id).await? {
            debug!(user_id, "Reusing existing token");
            return Ok(token);
        }

        let key = self.generator.generate();
        match self.tokens.create(user_id, &key).await {
            Ok(token) => {
                info!(user_id, "Token issued");
                Ok(token)
            }
            // A concurrent request created it first.
            Err(e) if e.is(ErrorKind::Conflict) => self
                .tokens
                .find_by_user(user_id)
                .await?
                .ok_or(e),
            Err(e) => Err(e),
        }
    }
}

fn invalid_credentials() -> AppError {
    AppError::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS)
}
