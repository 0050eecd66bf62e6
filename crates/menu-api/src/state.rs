use std::sync::Arc;

use menu_core::services::MenuItemService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub menu_items: Arc<MenuItemService>,
}

impl AppState {
    pub fn new(menu_items: Arc<MenuItemService>) -> Self {
        Self { menu_items }
    }
}
