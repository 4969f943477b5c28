pub mod days;
pub mod labels;
