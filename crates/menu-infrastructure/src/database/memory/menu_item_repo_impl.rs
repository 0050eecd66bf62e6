// ============================================================================
// Menu Infrastructure - In-Memory Menu Item Repository
// File: crates/menu-infrastructure/src/database/memory/menu_item_repo_impl.rs
// ============================================================================

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::RoundingStrategy;
use tracing::{debug, info};

use menu_core::domain::MenuItem;
use menu_core::dto::PRICE_SCALE;
use menu_core::error::DomainError;
use menu_core::persistence::{EntryState, MenuItemQuery, UnitOfWork};
use menu_core::repositories::MenuItemRepository;

#[derive(Default)]
struct Table {
    rows: BTreeMap<i32, MenuItem>,
    last_id: i32,
}

/// Process-local store with the same matching and ordering rules as PostgreSQL.
/// One lock guards the whole table, so each commit is atomic.
#[derive(Default)]
pub struct InMemoryMenuItemRepository {
    table: RwLock<Table>,
}

impl InMemoryMenuItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MenuItemRepository for InMemoryMenuItemRepository {
    async fn find(&self, query: &MenuItemQuery) -> Result<Vec<MenuItem>, DomainError> {
        let mut items: Vec<MenuItem> = {
            let table = self.table.read();
            table
                .rows
                .values()
                .filter(|item| query.matches(item))
                .cloned()
                .collect()
        };
        items.sort_by(|a, b| query.compare(a, b));

        debug!("Menu item query returned {} rows", items.len());
        Ok(items)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DomainError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.table.read().rows.contains_key(&id))
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.table.read().rows.len() as i64)
    }

    async fn commit(&self, unit: UnitOfWork) -> Result<Vec<MenuItem>, DomainError> {
        if unit.is_empty() {
            return Ok(Vec::new());
        }

        let entries = unit.prepare_commit(Utc::now());
        let mut table = self.table.write();

        // Reject the whole unit before touching any row.
        if let Some(missing) = entries
            .iter()
            .find(|e| e.state == EntryState::Modified && !table.rows.contains_key(&e.item.id))
        {
            return Err(DomainError::MenuItemNotFound(missing.item.id));
        }

        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let mut item = entry.item;
            item.price = item
                .price
                .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);

            match entry.state {
                EntryState::Added => {
                    table.last_id += 1;
                    item.id = table.last_id;
                }
                EntryState::Modified => {
                    if let Some(current) = table.rows.get(&item.id) {
                        item.created_at = current.created_at;
                    }
                }
            }

            table.rows.insert(item.id, item.clone());
            saved.push(item);
        }
        drop(table);

        info!("Committed {} menu item change(s)", saved.len());
        Ok(saved)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.table.write().rows.remove(&id).is_some())
    }
}
