//! Transfer shapes crossing the service boundary

pub mod menu_item;
pub mod validation;

pub use menu_item::{CreateMenuItem, MenuItemDto, UpdateMenuItem};
pub use validation::{validate_input, FieldError, PRICE_SCALE};
