use jwt_simple::prelude::*;

use crate::error::{AppError, Result};

use super::TokenClaims;

/// Lifetime of an issued access token. Expiry is the only invalidation path.
pub const TOKEN_TTL_HOURS: u64 = 1;

/// jwt-simple refuses HS256 keys shorter than 96 bits when signing or verifying.
pub const MIN_SECRET_BYTES: usize = 12;

/// Signs and verifies HS256 access tokens with the server-held secret.
#[derive(Clone)]
pub struct TokenSigner {
    key: HS256Key,
}

impl TokenSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: HS256Key::from_bytes(secret.as_bytes()),
        }
    }

    /// Issue a token for `email`, valid for one hour.
    pub fn issue(&self, email: &str) -> Result<String> {
        let claims = Claims::with_custom_claims(
            TokenClaims {
                email: email.to_string(),
            },
            Duration::from_hours(TOKEN_TTL_HOURS),
        );
        self.key
            .authenticate(claims)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify signature and expiry, returning the decoded claims.
    ///
    /// Every failure maps to the same unauthorized error; the cause is only logged.
    pub fn verify(&self, token: &str) -> Result<TokenClaims> {
        let options = VerificationOptions {
            time_tolerance: Some(Duration::from_secs(0)),
            ..Default::default()
        };
        self.key
            .verify_token::<TokenClaims>(token, Some(options))
            .map(|claims| claims.custom)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::unauthorized()
            })
    }
}
