pub mod school_class;
pub mod subject;
pub mod subject_class;
pub mod teacher;
pub mod time_slot;
pub mod timetable_entry;
