use serde::{
    Deserialize,
    Serialize
};

use super::holidaytype::HolidayType;

/// One stored holiday definition: a fixed day/month or an Easter offset,
/// plus the [`HolidayType`] that says how the date is observed.
///
/// `day` and `month` only participate in resolution for the fixed types,
/// and `easter_offset_days` only for the Easter relative ones; whatever
/// the catalog stores in the unused fields is carried along untouched.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HolidayRule {
    id: u32,
    name: String,
    #[serde(default)]
    day: u32,
    #[serde(default)]
    month: u32,
    #[serde(default)]
    easter_offset_days: i32,
    holiday_type: HolidayType
}

impl HolidayRule {
    pub fn new(id: u32,
               name: String,
               day: u32,
               month: u32,
               easter_offset_days: i32,
               holiday_type: HolidayType) -> HolidayRule {
        HolidayRule { id, name, day, month, easter_offset_days, holiday_type }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn easter_offset_days(&self) -> i32 {
        self.easter_offset_days
    }

    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }
}
