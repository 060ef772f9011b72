pub mod layout;
pub mod repository;
pub mod service;
