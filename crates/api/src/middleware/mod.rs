//! Request middleware and extractors.

pub mod agency;
pub mod auth;

pub use agency::{Agency, require_agency};
pub use auth::{MaybeAuthUser, auth_middleware, optional_auth_middleware};
