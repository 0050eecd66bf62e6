//! # Menu Core
//! 
//! Menu item entity, transfer shapes, repository port, unit of work, and the
//! menu item service.

pub mod domain;
pub mod dto;
pub mod persistence;
pub mod repositories;
pub mod services;
pub mod seed;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
