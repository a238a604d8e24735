use thiserror::Error;

/// Failures the resolution engine can produce.
///
/// Both are deterministic for a given rule and year; there is no transient
/// case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HolidayError {
    /// The rule carries a type code outside the four defined strategies.
    #[error("unsupported holiday type code {0}")]
    UnsupportedRuleType(u8),

    /// A fixed-date rule names a day that does not exist in the requested
    /// year, e.g. February 30, or February 29 outside a leap year.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 }
}
