use serde::{Deserialize, Serialize};

/// Custom claims carried by an access token.
///
/// The email is the natural key for every ownership and role check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
}

/// Identity attached to a request once its bearer token verifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub email: String,
}

impl From<TokenClaims> for AuthUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            email: claims.email,
        }
    }
}
