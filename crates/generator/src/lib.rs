pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod grid;
pub mod layout;
pub mod render;
