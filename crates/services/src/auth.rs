//! Authentication interface
//!
//! The hosted backend owns accounts and sessions. This module defines the
//! request/response types, the error taxonomy and the [`AuthBackend`] trait a
//! provider client implements. Nothing here talks to the network.

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Canned messages shown to the user
pub mod messages {
    /// Fallback for unexpected failures
    pub const DEFAULT: &str = "Something went wrong. Please try again.";
    /// Rejected credentials
    pub const AUTH: &str = "Authentication failed. Please check your credentials and try again.";
    /// Connectivity failures
    pub const NETWORK: &str = "Network error. Please check your connection and try again.";
    /// Forbidden actions
    pub const PERMISSION: &str = "You do not have permission to perform this action.";
    /// Missing resources
    pub const NOT_FOUND: &str = "The requested resource was not found.";
    /// Form validation failures
    pub const VALIDATION: &str = "Please check the form for errors and try again.";
}

/// Authentication errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair was rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An account already exists for this email
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Operation requires a signed-in user
    #[error("Not signed in")]
    NotAuthenticated,

    /// Session expired or was revoked
    #[error("Session expired")]
    SessionExpired,

    /// Request failed local validation
    #[error("Validation failed: {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Provider could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// Any other provider failure
    #[error("Auth provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// Message suitable for an alert
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionExpired => messages::AUTH,
            AuthError::NotAuthenticated => messages::PERMISSION,
            AuthError::Validation(_) | AuthError::EmailTaken(_) => messages::VALIDATION,
            AuthError::Network(_) => messages::NETWORK,
            AuthError::Provider(_) => messages::DEFAULT,
        }
    }
}

/// Result type for auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Subscription tier stored on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    /// Free tier, assigned at sign-up
    #[default]
    Basic,
    /// Paid tier
    Premium,
}

/// Signed-in user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned id
    pub id: String,
    /// Login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Subscription tier
    #[serde(default)]
    pub subscription_tier: SubscriptionTier,
}

/// Active session tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token
    pub access_token: String,
    /// Token used to renew the session
    pub refresh_token: String,
    /// Unix timestamp (seconds) when the access token expires
    pub expires_at: i64,
    /// Owner of the session
    pub user: User,
}

impl Session {
    /// Whether the access token has expired at `now` (unix seconds)
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}

/// Result of sign-up or sign-in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The user
    pub user: User,
    /// Session, absent when the provider requires email confirmation
    pub session: Option<Session>,
}

/// One invalid form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name
    pub field: &'static str,
    /// Message to show under the field
    pub message: &'static str,
}

/// Sign-up form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// Login email
    pub email: String,
    /// Password
    pub password: String,
    /// Display name
    pub name: String,
}

impl SignUpRequest {
    /// Create a sign-up request
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    /// Check the form before sending it
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(FieldError {
                field: "name",
                message: "Name is required",
            });
        }
        if let Some(error) = check_email(&self.email) {
            errors.push(error);
        }
        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Password is required",
            });
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(FieldError {
                field: "password",
                message: "Password must be at least 6 characters",
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

/// Sign-in form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignInRequest {
    /// Login email
    pub email: String,
    /// Password
    pub password: String,
}

impl SignInRequest {
    /// Create a sign-in request
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the form before sending it
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<FieldError> = check_email(&self.email).into_iter().collect();
        if self.password.is_empty() {
            errors.push(FieldError {
                field: "password",
                message: "Password is required",
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Validation(errors))
        }
    }
}

fn check_email(email: &str) -> Option<FieldError> {
    if email.trim().is_empty() {
        return Some(FieldError {
            field: "email",
            message: "Email is required",
        });
    }
    if !is_valid_email(email) {
        return Some(FieldError {
            field: "email",
            message: "Please enter a valid email",
        });
    }
    None
}

/// Loose `local@domain.tld` shape check, no whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_REGEX.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").unwrap());
    re.is_match(email)
}

/// Client for the hosted auth provider
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Create an account and its profile row
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthResponse>;

    /// Sign in with email and password
    async fn sign_in(&self, request: SignInRequest) -> Result<AuthResponse>;

    /// End the current session
    async fn sign_out(&self) -> Result<()>;

    /// Current session, if any
    async fn get_session(&self) -> Result<Option<Session>>;

    /// Current user, if signed in
    async fn get_current_user(&self) -> Result<Option<User>>;

    /// Send password reset instructions
    async fn reset_password(&self, email: &str) -> Result<()>;

    /// Change the signed-in user's password
    async fn update_password(&self, password: &str) -> Result<()>;
}
