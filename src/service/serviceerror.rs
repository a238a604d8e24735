use thiserror::Error;

use crate::holiday::holidayerror::HolidayError;
use crate::repository::repositoryerror::RepositoryError;

/// Anything a service query can fail with: the catalog read, or the
/// resolution itself.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Holiday(#[from] HolidayError)
}
