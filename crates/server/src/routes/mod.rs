pub mod health;
pub mod root;
pub mod school_class;
pub mod subject;
pub mod teacher;
pub mod time_slot;
pub mod timetable_entry;
