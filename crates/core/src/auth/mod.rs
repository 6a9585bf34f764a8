//! Authentication helpers.
//!
//! Roles and claims live in `tourdesk_shared::auth`; this module only deals
//! with password hashing.

mod password;

pub use password::{PasswordError, hash_password, verify_against_dummy, verify_password};
