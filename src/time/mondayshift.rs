use chrono::{Datelike, Duration, NaiveDate};

/// Moves a date forward to the next Monday. Mondays are returned as they
/// are, never pushed a full week ahead.
///
/// This is the observance shift of the "Ley Emiliani" style holiday types.
pub fn next_monday(d: NaiveDate) -> NaiveDate {
    let behind = d.weekday().num_days_from_monday();
    if behind == 0 {
        d
    } else {
        d + Duration::days(i64::from(7 - behind))
    }
}
