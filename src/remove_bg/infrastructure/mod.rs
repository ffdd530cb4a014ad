pub mod error;
pub mod file_storage;
