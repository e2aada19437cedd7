//! # Session State
//!
//! Everything that belongs to one logged-in shopper.
//!
//! ```text
//! login(email, access) ──► SessionContext { user, token, cart } ──► logout()
//!                                 │
//!                                 └── cart commands take &mut session.cart
//! ```
//!
//! The token never lives in a global; whoever holds the session holds the
//! credentials. Logging out consumes the session, so the cart and token
//! cannot be used afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sweetshop_core::CartEngine;
use tracing::info;

use crate::error::ApiError;

// =============================================================================
// Auth Token
// =============================================================================

/// Bearer token issued by the backend at login.
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        AuthToken(token.into())
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// The login endpoint's response body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
}

// =============================================================================
// Session
// =============================================================================

/// Shopper identity shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

/// A logged-in shopper: identity, credentials and cart.
#[derive(Debug)]
pub struct SessionContext {
    user: SessionUser,
    token: AuthToken,
    logged_in_at: DateTime<Utc>,
    pub cart: CartEngine,
}

impl SessionContext {
    /// Starts a session from a successful login.
    ///
    /// ## Errors
    /// `NOT_AUTHENTICATED` when the backend handed back an empty token,
    /// `VALIDATION_ERROR` for a blank email.
    pub fn login(email: &str, login: LoginResponse) -> Result<Self, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ApiError::validation("email is required"));
        }

        let token = AuthToken::new(login.access);
        if token.is_blank() {
            return Err(ApiError::not_authenticated());
        }

        info!(email = %email, "Shopper logged in");
        Ok(SessionContext {
            user: SessionUser {
                email: email.to_string(),
            },
            token,
            logged_in_at: Utc::now(),
            cart: CartEngine::new(),
        })
    }

    /// Ends the session. The cart is discarded with it.
    pub fn logout(self) -> SessionUser {
        info!(
            email = %self.user.email,
            abandoned_lines = self.cart.line_count(),
            "Shopper logged out"
        );
        self.user
    }

    pub fn user(&self) -> &SessionUser {
        &self.user
    }

    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    pub fn logged_in_at(&self) -> DateTime<Utc> {
        self.logged_in_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login_response(access: &str) -> LoginResponse {
        LoginResponse {
            access: access.to_string(),
        }
    }

    #[test]
    fn test_login_starts_with_empty_cart() {
        let session = SessionContext::login(" asha@example.com ", login_response("jwt-1")).unwrap();
        assert_eq!(session.user().email, "asha@example.com");
        assert!(session.cart.is_empty());
        assert_eq!(session.token().bearer_header(), "Bearer jwt-1");
    }

    #[test]
    fn test_login_rejects_blank_token_or_email() {
        assert!(SessionContext::login("asha@example.com", login_response("")).is_err());
        assert!(SessionContext::login("", login_response("jwt-1")).is_err());
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = AuthToken::new("super-secret");
        assert_eq!(format!("{:?}", token), "AuthToken(***)");
    }

    #[test]
    fn test_login_response_shape() {
        let body: LoginResponse =
            serde_json::from_str(r#"{"access": "jwt-1", "refresh": "r-1"}"#).unwrap();
        assert_eq!(body.access, "jwt-1");
    }

    #[test]
    fn test_logout_returns_user() {
        let session = SessionContext::login("asha@example.com", login_response("jwt-1")).unwrap();
        let user = session.logout();
        assert_eq!(user.email, "asha@example.com");
    }
}
