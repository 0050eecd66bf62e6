//! # Menu Core - Domain Module
//! 
//! Domain entities for the menu service.

pub mod menu_item;

pub use menu_item::{MenuItem, MenuItemFields, DEFAULT_DIETARY_TAG};
