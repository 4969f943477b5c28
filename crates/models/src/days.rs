use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};
use thiserror::Error;

/// A day of the week as stored on a time slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// The rows of every rendered timetable, top to bottom
    pub const TIMETABLE_ROWS: [Self; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// Day-to-code mapping for parsing and display
    const DAY_CODES: [(Self, &'static str, &'static str); 7] = [
        (Self::Monday, "MON", "MONDAY"),
        (Self::Tuesday, "TUE", "TUESDAY"),
        (Self::Wednesday, "WED", "WEDNESDAY"),
        (Self::Thursday, "THU", "THURSDAY"),
        (Self::Friday, "FRI", "FRIDAY"),
        (Self::Saturday, "SAT", "SATURDAY"),
        (Self::Sunday, "SUN", "SUNDAY"),
    ];

    /// The three-letter upper-case code, e.g. `MON`
    pub fn code(self) -> &'static str {
        Self::DAY_CODES
            .iter()
            .find(|(day, _, _)| *day == self)
            .map(|(_, code, _)| *code)
            .unwrap_or_default()
    }
}

/// Normalises free-text day input for storage and filtering
///
/// Recognised days become their code (`"monday"` -> `"MON"`), anything else
/// is trimmed and upper-cased.
pub fn normalize_day(day: &str) -> String {
    match day.parse::<Weekday>() {
        Ok(weekday) => weekday.code().to_string(),
        Err(_) => day.trim().to_ascii_uppercase(),
    }
}

/// Error returned when free text does not name a weekday
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown day: {0:?}")]
pub struct UnknownDay(pub String);

impl FromStr for Weekday {
    type Err = UnknownDay;

    fn from_str(day: &str) -> Result<Self, Self::Err> {
        let upper = day.trim().to_ascii_uppercase();

        Self::DAY_CODES
            .iter()
            .find(|(_, code, name)| upper == *code || upper == *name)
            .map(|(day, _, _)| *day)
            .ok_or_else(|| UnknownDay(day.to_string()))
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}
