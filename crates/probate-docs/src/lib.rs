pub mod config;
pub mod document;
pub mod error;
pub mod estate;
pub mod format;
pub mod forms;
pub mod mapping;
pub mod telemetry;
