//! Persistence context: query model and unit of work shared by every store

pub mod query;
pub mod unit_of_work;

pub use query::{fold_case, MenuItemFilter, MenuItemOrder, MenuItemQuery};
pub use unit_of_work::{stamp_timestamps, EntryState, TrackedEntry, UnitOfWork};
