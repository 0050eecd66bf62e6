//! Domain services (business logic)

pub mod menu_item_service;

pub use menu_item_service::MenuItemService;
