pub mod catalog;
pub mod database_service;
