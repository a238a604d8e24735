use std::sync::Arc;

use crate::holiday::holidayrule::HolidayRule;

use super::repositoryerror::RepositoryError;

/// Read-only source of one country's full holiday rule set.
///
/// The resolution engine never filters or mutates what a repository
/// returns; every query starts from `get_all`.
pub trait HolidayRuleRepository: Send + Sync {
    fn get_all(&self) -> Result<Vec<HolidayRule>, RepositoryError>;
}

impl <T: HolidayRuleRepository + ?Sized> HolidayRuleRepository for Arc<T> {
    fn get_all(&self) -> Result<Vec<HolidayRule>, RepositoryError> {
        (**self).get_all()
    }
}
