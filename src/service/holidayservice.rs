use chrono::{Datelike, NaiveDate};

use crate::holiday::holidayresolver;
use crate::holiday::resolvedholiday::ResolvedHoliday;
use crate::repository::holidayrulerepository::HolidayRuleRepository;

use super::serviceerror::ServiceError;

/// Query facade over one country's rule repository.
///
/// Each call performs a single repository read and hands the rule set to
/// the pure resolver; nothing is cached between calls.
pub struct HolidayService<R> {
    repository: R
}

impl <R> HolidayService<R> where
    R: HolidayRuleRepository {
    pub fn new(repository: R) -> HolidayService<R> {
        HolidayService { repository }
    }

    /// Every holiday of `year` with its resolved date, in catalog order.
    pub fn holidays_in_year(&self, year: i32) -> Result<Vec<ResolvedHoliday>, ServiceError> {
        let rules = self.repository.get_all()?;
        let resolved = holidayresolver::resolve_year(&rules, year)?;
        tracing::debug!(year, count = resolved.len(), "year resolved");
        Ok(resolved)
    }

    /// Whether `d` is a holiday under the repository's rule set.
    pub fn is_holiday(&self, d: NaiveDate) -> Result<bool, ServiceError> {
        let rules = self.repository.get_all()?;
        let result = holidayresolver::is_holiday(&rules, d)?;
        tracing::debug!(date = %d, year = d.year(), result, "membership checked");
        Ok(result)
    }
}
