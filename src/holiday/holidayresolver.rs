use chrono::{
    Datelike,
    Duration,
    NaiveDate
};

use crate::time::easter::easter_sunday;
use crate::time::mondayshift::next_monday;

use super::holidayerror::HolidayError;
use super::holidayrule::HolidayRule;
use super::holidaytype::HolidayType;
use super::resolvedholiday::ResolvedHoliday;

fn fixed_date(rule: &HolidayRule, year: i32) -> Result<NaiveDate, HolidayError> {
    NaiveDate::from_ymd_opt(year, rule.month(), rule.day()).ok_or(HolidayError::InvalidDate {
        year,
        month: rule.month(),
        day: rule.day()
    })
}

fn easter_relative(rule: &HolidayRule, year: i32) -> NaiveDate {
    easter_sunday(year) + Duration::days(i64::from(rule.easter_offset_days()))
}

/// Resolves one rule to its calendar date in `year`.
///
/// A fixed day/month that does not exist in `year` is an error, never
/// clamped or rolled over. The legislations modeled never place a rule
/// where the Monday shift or the Easter offset leaves the requested year;
/// that is asserted rather than handled.
pub fn resolve_date(rule: &HolidayRule, year: i32) -> Result<NaiveDate, HolidayError> {
    let date = match rule.holiday_type() {
        HolidayType::FixedDate => fixed_date(rule, year)?,
        HolidayType::FixedDateShiftedToMonday => next_monday(fixed_date(rule, year)?),
        HolidayType::EasterRelative => easter_relative(rule, year),
        HolidayType::EasterRelativeShiftedToMonday => next_monday(easter_relative(rule, year))
    };

    assert_eq!(date.year(), year, "rule '{}' resolved outside {}", rule.name(), year);
    Ok(date)
}

/// Resolves a whole rule set for `year`: one [`ResolvedHoliday`] per rule,
/// in catalog order, without deduplication or filtering.
pub fn resolve_year(rules: &[HolidayRule], year: i32) -> Result<Vec<ResolvedHoliday>, HolidayError> {
    rules.iter()
        .map(|rule| resolve_date(rule, year).map(|date| ResolvedHoliday::new(rule.clone(), date)))
        .collect()
}

/// True iff `d` equals one of the rule set's resolved dates in `d`'s year.
pub fn is_holiday(rules: &[HolidayRule], d: NaiveDate) -> Result<bool, HolidayError> {
    let resolved = resolve_year(rules, d.year())?;
    Ok(resolved.iter().any(|holiday| holiday.date() == d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(day: u32, month: u32, offset: i32, holiday_type: HolidayType) -> HolidayRule {
        HolidayRule::new(1, "test".to_owned(), day, month, offset, holiday_type)
    }

    #[test]
    fn fixed_date_passes_through() {
        let new_year = rule(1, 1, 0, HolidayType::FixedDate);
        assert_eq!(resolve_date(&new_year, 2024).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn fixed_date_is_not_shifted_off_a_weekday() {
        // Jul 20, 2025 is a Sunday; type 1 stays put.
        let independencia = rule(20, 7, 0, HolidayType::FixedDate);
        assert_eq!(resolve_date(&independencia, 2025).unwrap(), date(2025, 7, 20));
    }

    #[test]
    fn shifted_fixed_date_moves_to_the_next_monday() {
        // Mar 19, 2024 is a Tuesday.
        let san_jose = rule(19, 3, 0, HolidayType::FixedDateShiftedToMonday);
        assert_eq!(resolve_date(&san_jose, 2024).unwrap(), date(2024, 3, 25));
    }

    #[test]
    fn shifted_fixed_date_keeps_a_monday() {
        // Dec 8, 2025 is already a Monday.
        let inmaculada = rule(8, 12, 0, HolidayType::FixedDateShiftedToMonday);
        assert_eq!(resolve_date(&inmaculada, 2025).unwrap(), date(2025, 12, 8));
    }

    #[test]
    fn negative_easter_offsets_are_signed_day_arithmetic() {
        // Easter 2024 is Mar 31; Good Friday two days before.
        let viernes_santo = rule(0, 0, -2, HolidayType::EasterRelative);
        assert_eq!(resolve_date(&viernes_santo, 2024).unwrap(), date(2024, 3, 29));
    }

    #[test]
    fn shifted_easter_offset_keeps_a_monday() {
        // Easter 2025 is Apr 20, so offset +1 lands on Monday Apr 21 and
        // stays there.
        let lunes = rule(0, 0, 1, HolidayType::EasterRelativeShiftedToMonday);
        assert_eq!(resolve_date(&lunes, 2025).unwrap(), date(2025, 4, 21));
    }

    #[test]
    fn shifted_easter_offset_moves_off_a_weekday() {
        // Easter 2025 + 39 is Thursday May 29; observed the next Monday.
        let ascension = rule(0, 0, 39, HolidayType::EasterRelativeShiftedToMonday);
        assert_eq!(resolve_date(&ascension, 2025).unwrap(), date(2025, 6, 2));
    }

    #[test]
    fn nonexistent_fixed_date_is_an_error() {
        let bad = rule(30, 2, 0, HolidayType::FixedDate);
        assert_eq!(
            resolve_date(&bad, 2024),
            Err(HolidayError::InvalidDate { year: 2024, month: 2, day: 30 })
        );
    }

    #[test]
    fn leap_day_rule_fails_only_outside_leap_years() {
        let leap_day = rule(29, 2, 0, HolidayType::FixedDate);
        assert_eq!(resolve_date(&leap_day, 2024).unwrap(), date(2024, 2, 29));
        assert_eq!(
            resolve_date(&leap_day, 2025),
            Err(HolidayError::InvalidDate { year: 2025, month: 2, day: 29 })
        );
    }

    #[test]
    #[should_panic(expected = "resolved outside")]
    fn an_offset_leaving_the_year_is_asserted() {
        let runaway = rule(0, 0, 300, HolidayType::EasterRelative);
        let _ = resolve_date(&runaway, 2024);
    }

    #[test]
    fn resolve_year_keeps_catalog_order() {
        // Deliberately not in date order.
        let rules = vec![
            rule(25, 12, 0, HolidayType::FixedDate),
            rule(1, 1, 0, HolidayType::FixedDate),
            rule(0, 0, -2, HolidayType::EasterRelative)
        ];

        let resolved = resolve_year(&rules, 2024).unwrap();
        let dates: Vec<NaiveDate> = resolved.iter().map(|h| h.date()).collect();
        assert_eq!(dates, vec![date(2024, 12, 25), date(2024, 1, 1), date(2024, 3, 29)]);
    }

    #[test]
    fn resolve_year_never_leaves_the_requested_year() {
        let rules = vec![
            rule(1, 1, 0, HolidayType::FixedDate),
            rule(31, 12, 0, HolidayType::FixedDate),
            rule(0, 0, 68, HolidayType::EasterRelativeShiftedToMonday)
        ];

        for year in [1990, 2024, 2025, 2100] {
            for holiday in resolve_year(&rules, year).unwrap() {
                assert_eq!(holiday.date().year(), year);
            }
        }
    }

    #[test]
    fn membership_is_exact_date_equality() {
        let rules = vec![rule(25, 12, 0, HolidayType::FixedDate)];

        assert!(is_holiday(&rules, date(2024, 12, 25)).unwrap());
        assert!(!is_holiday(&rules, date(2024, 12, 26)).unwrap());
    }
}
