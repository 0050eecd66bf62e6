//! Database module (PostgreSQL and in-memory adapters)

pub mod connection;
pub mod memory;
pub mod postgres;

pub use connection::{create_pool, run_migrations, MIGRATOR};
pub use memory::InMemoryMenuItemRepository;
pub use postgres::PgMenuItemRepository;
