//! # Menu API
//! 
//! HTTP handlers, extractors, error mapping, and router for the menu service.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{build_app, build_router};
pub use state::AppState;

#[cfg(test)]
mod test;
