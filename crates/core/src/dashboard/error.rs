//! Dashboard error types.

use thiserror::Error;
use tourdesk_shared::{AppError, types::UserId};

use crate::catalog::CatalogError;

/// Dashboard-related errors.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The user has no agency profile.
    #[error("Agency profile not found for user {0}")]
    AgencyNotFound(UserId),

    /// Catalogue lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::AgencyNotFound(_) => {
                Self::NotFound("Agency profile not found".to_string())
            }
            DashboardError::Catalog(CatalogError::Storage(msg)) => Self::Database(msg),
            DashboardError::Catalog(CatalogError::InvalidRecord(msg)) => Self::Internal(msg),
        }
    }
}
