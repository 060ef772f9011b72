pub mod config;
pub mod data;
pub mod dates;
pub mod error;
pub mod format;
