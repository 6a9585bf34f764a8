//! Authentication types for JWT, roles and capabilities.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::types::UserId;

/// Role a user signs in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Tour operator managing packages and bookings.
    Agency,
    /// Traveller booking tours.
    Customer,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Returns the role name as stored and serialized.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Agency => "agency",
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: UserId,
    /// Role the token was issued for.
    pub role: Role,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates claims issued now and valid for `lifetime`.
    #[must_use]
    pub fn new(user_id: UserId, role: Role, lifetime: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        }
    }

    /// Returns the user ID from claims.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.sub
    }
}

/// Proof that the caller passed the agency authorization check.
///
/// Only obtainable through [`AgencyAccess::grant`], so holding one means the
/// claims it came from carried the agency role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgencyAccess {
    owner: UserId,
}

impl AgencyAccess {
    /// Grants agency access for the given claims.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Forbidden` if the claims do not carry the agency role.
    pub fn grant(claims: &Claims) -> Result<Self, AppError> {
        match claims.role {
            Role::Agency => Ok(Self {
                owner: claims.user_id(),
            }),
            other => Err(AppError::Forbidden(format!(
                "role '{other}' cannot access the agency dashboard"
            ))),
        }
    }

    /// Returns the user that owns the agency profile.
    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }
}

/// Login request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Always `Bearer`.
    pub token_type: &'static str,
    /// Token expiration in seconds.
    pub expires_in: i64,
    /// Role the token carries.
    pub role: Role,
}
