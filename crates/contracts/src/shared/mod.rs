pub mod callback;
pub mod chart;
pub mod layout;
