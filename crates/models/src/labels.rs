//! Derived display values shared by the admin surface and the document generator

use chrono::NaiveTime;

/// Shown in place of initials when a teacher is missing or has a blank name
pub const MISSING_INITIALS: &str = "N/A";

/// Derives a teacher's initials from their names
///
/// # Returns
/// * The upper-cased first letter of each name, or `None` when either name is
///   blank
pub fn initials(first_name: &str, last_name: &str) -> Option<String> {
    let first = first_name.trim().chars().next()?;
    let last = last_name.trim().chars().next()?;

    Some(first.to_uppercase().chain(last.to_uppercase()).collect())
}

/// Full name as shown in lists and document titles
pub fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

/// Formats a time as `HH:MM`
pub fn time_label(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Formats a time range as `HH:MM-HH:MM`
pub fn time_range_label(start: NaiveTime, end: NaiveTime) -> String {
    format!("{}-{}", time_label(start), time_label(end))
}

/// Label of a time slot, e.g. `MON 08:00-09:00`
pub fn time_slot_label(day: &str, start: NaiveTime, end: NaiveTime) -> String {
    format!("{day} {}", time_range_label(start, end))
}

/// Label of a timetable entry
///
/// The middle part is the subject teacher's initials when known, the subject
/// name otherwise.
pub fn entry_label(
    class_name: &str,
    subject_name: &str,
    subject_teacher_initials: Option<&str>,
    slot_label: &str,
) -> String {
    let middle = subject_teacher_initials.unwrap_or(subject_name);
    format!("{class_name} - {middle} - {slot_label}")
}

/// One stacked line inside a timetable cell, e.g. `Math (JD)`
pub fn cell_line(subject_name: &str, qualifier: &str) -> String {
    format!("{subject_name} ({qualifier})")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_initials_upper_cases_first_letters() {
        assert_eq!(initials("Jane", "Doe").as_deref(), Some("JD"));
        assert_eq!(initials("amina", "okello").as_deref(), Some("AO"));
        assert_eq!(initials("  peter ", " kamau").as_deref(), Some("PK"));
    }

    #[test]
    fn test_initials_undefined_for_blank_names() {
        assert_eq!(initials("", "Doe"), None);
        assert_eq!(initials("Jane", "   "), None);
        assert_eq!(initials("", ""), None);
    }

    #[test]
    fn test_time_labels() {
        let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(9, 40, 0).unwrap();

        assert_eq!(time_label(start), "08:00");
        assert_eq!(time_range_label(start, end), "08:00-09:40");
        assert_eq!(time_slot_label("MON", start, end), "MON 08:00-09:40");
    }

    #[test]
    fn test_entry_label_prefers_initials() {
        assert_eq!(
            entry_label("S1A", "Math", Some("JD"), "MON 08:00-09:00"),
            "S1A - JD - MON 08:00-09:00"
        );
        assert_eq!(
            entry_label("S1A", "Math", None, "MON 08:00-09:00"),
            "S1A - Math - MON 08:00-09:00"
        );
    }

    #[test]
    fn test_cell_line() {
        assert_eq!(cell_line("Math", "JD"), "Math (JD)");
        assert_eq!(cell_line("Biology", "S2B"), "Biology (S2B)");
    }
}
