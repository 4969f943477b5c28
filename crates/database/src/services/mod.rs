pub mod school_class;
pub mod subject;
pub mod teacher;
pub mod time_slot;
pub mod timetable;
pub mod timetable_entry;
