use chrono::NaiveDate;
use serde::ser::{
    Serialize,
    SerializeStruct,
    Serializer
};

use super::holidayrule::HolidayRule;

/// The engine's output for one rule in one year: the source rule together
/// with the concrete date it resolved to. Built fresh per request, never
/// mutated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ResolvedHoliday {
    rule: HolidayRule,
    date: NaiveDate
}

impl ResolvedHoliday {
    pub fn new(rule: HolidayRule, date: NaiveDate) -> ResolvedHoliday {
        ResolvedHoliday { rule, date }
    }

    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Serializes as the flat `{id, name, date}` record the reporting layer
/// publishes, not as the nested rule.
impl Serialize for ResolvedHoliday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        let mut record = serializer.serialize_struct("ResolvedHoliday", 3)?;
        record.serialize_field("id", &self.rule.id())?;
        record.serialize_field("name", self.rule.name())?;
        record.serialize_field("date", &self.date)?;
        record.end()
    }
}
