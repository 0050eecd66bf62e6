//! # Menu Shared
//! 
//! Configuration, telemetry, and shared constants for the menu service.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use error::AppError;
