use crate::holiday::holidayrule::HolidayRule;
use crate::holiday::holidaytype::HolidayType;
use crate::time::utility::days_of_month;

use super::holidayrulerepository::HolidayRuleRepository;
use super::repositoryerror::RepositoryError;

/// Rule catalog held in memory, validated once at construction.
pub struct InMemoryRuleRepository {
    rules: Vec<HolidayRule>
}

impl InMemoryRuleRepository {
    /// Builds a repository, rejecting fixed-date rules that no year can
    /// satisfy. February 29 is admitted here; resolving it for a non-leap
    /// year stays a per-year [`InvalidDate`] error.
    ///
    /// [`InvalidDate`]: crate::holiday::holidayerror::HolidayError::InvalidDate
    pub fn new(rules: Vec<HolidayRule>) -> Result<InMemoryRuleRepository, RepositoryError> {
        for rule in rules.iter() {
            validate_rule(rule)?;
        }
        Ok(InMemoryRuleRepository { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn validate_rule(rule: &HolidayRule) -> Result<(), RepositoryError> {
    match rule.holiday_type() {
        HolidayType::FixedDate | HolidayType::FixedDateShiftedToMonday => {
            // Bound the day by the month's longest form; the leap year
            // 2000 admits February 29.
            let in_range = (1..=12).contains(&rule.month())
                && rule.day() >= 1
                && rule.day() <= days_of_month(2000, rule.month());
            if in_range {
                Ok(())
            } else {
                Err(RepositoryError::InvalidRule {
                    name: rule.name().to_owned(),
                    month: rule.month(),
                    day: rule.day()
                })
            }
        },
        HolidayType::EasterRelative | HolidayType::EasterRelativeShiftedToMonday => Ok(())
    }
}

impl HolidayRuleRepository for InMemoryRuleRepository {
    fn get_all(&self) -> Result<Vec<HolidayRule>, RepositoryError> {
        Ok(self.rules.clone())
    }
}
