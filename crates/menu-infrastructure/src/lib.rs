//! # Menu Infrastructure
//! 
//! Store implementations (adapters) for the menu item repository port.

pub mod database;

pub use database::{create_pool, run_migrations, InMemoryMenuItemRepository, PgMenuItemRepository, MIGRATOR};
