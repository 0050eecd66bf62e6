// ============================================================================
// Menu Core - Menu Item Entity
// File: crates/menu-core/src/domain/menu_item.rs
// Description: Persisted restaurant menu item
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dietary tag applied when a caller leaves the field out entirely.
pub const DEFAULT_DIETARY_TAG: &str = "None";

/// Menu item entity.
///
/// `id` is `0` until the store assigns one on first commit. Both timestamps are
/// owned by the unit of work's stamping step and are meaningless before that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub dietary_tag: String,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The mutable part of a menu item. Create and update both replace all of it.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemFields {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub dietary_tag: String,
}

impl MenuItemFields {
    /// Strips leading and trailing whitespace from every string field.
    /// Internal whitespace is left as supplied.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            price: self.price,
            category: self.category.trim().to_string(),
            dietary_tag: self.dietary_tag.trim().to_string(),
        }
    }
}

impl MenuItem {
    /// Builds an unsaved item. Fields are stored exactly as given.
    pub fn new(fields: MenuItemFields) -> Self {
        Self {
            id: 0,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            dietary_tag: fields.dietary_tag,
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
        }
    }

    /// Overwrites every mutable field. `id` and `created_at` are untouched.
    pub fn replace_fields(&mut self, fields: MenuItemFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.category = fields.category;
        self.dietary_tag = fields.dietary_tag;
    }
}
