pub mod background_service;
pub mod config;
pub mod error;
