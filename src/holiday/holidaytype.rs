use serde::{
    Deserialize,
    Serialize
};

use super::holidayerror::HolidayError;

/// The four resolution strategies a holiday rule can carry.
///
/// Discriminants are the catalog type codes. Any other code is rejected
/// with [`HolidayError::UnsupportedRuleType`] when the rule is built, so a
/// bad catalog row can never resolve as a silent no-op.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HolidayType {
    /// Fixed day and month, observed where it falls.
    FixedDate = 1,
    /// Fixed day and month, observed on the next Monday unless it already
    /// falls on one.
    FixedDateShiftedToMonday = 2,
    /// Signed day offset from Easter Sunday, observed where it falls.
    EasterRelative = 3,
    /// Signed day offset from Easter Sunday, shifted to the next Monday.
    EasterRelativeShiftedToMonday = 4
}

impl TryFrom<u8> for HolidayType {
    type Error = HolidayError;

    fn try_from(code: u8) -> Result<HolidayType, HolidayError> {
        match code {
            1 => Ok(HolidayType::FixedDate),
            2 => Ok(HolidayType::FixedDateShiftedToMonday),
            3 => Ok(HolidayType::EasterRelative),
            4 => Ok(HolidayType::EasterRelativeShiftedToMonday),
            _ => Err(HolidayError::UnsupportedRuleType(code))
        }
    }
}

impl From<HolidayType> for u8 {
    fn from(holiday_type: HolidayType) -> u8 {
        holiday_type as u8
    }
}
