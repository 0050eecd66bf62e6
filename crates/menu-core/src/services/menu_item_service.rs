// ============================================================================
// Menu Core - Menu Item Service
// File: crates/menu-core/src/services/menu_item_service.rs
// ============================================================================
//! Menu item queries and writes on top of the repository port

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{MenuItem, MenuItemFields};
use crate::dto::{CreateMenuItem, MenuItemDto, UpdateMenuItem};
use crate::error::DomainError;
use crate::persistence::{MenuItemQuery, UnitOfWork};
use crate::repositories::MenuItemRepository;

/// Menu item service. Inputs are trusted to have passed boundary validation.
pub struct MenuItemService {
    repository: Arc<dyn MenuItemRepository>,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl MenuItemService {
    pub fn new(repository: Arc<dyn MenuItemRepository>) -> Self {
        Self { repository }
    }

    /// All items, by category then name.
    pub async fn list_all(&self) -> Result<Vec<MenuItemDto>, DomainError> {
        self.query(MenuItemQuery::all()).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<MenuItemDto>, DomainError> {
        let item = self.repository.find_by_id(id).await?;
        Ok(item.map(MenuItemDto::from))
    }

    /// Case-insensitive category match, by name. Blank input never reaches the store.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<MenuItemDto>, DomainError> {
        if is_blank(category) {
            return Ok(Vec::new());
        }
        self.query(MenuItemQuery::by_category(category.trim())).await
    }

    /// Case-insensitive dietary tag match, by category then name.
    pub async fn list_by_dietary_tag(&self, tag: &str) -> Result<Vec<MenuItemDto>, DomainError> {
        if is_blank(tag) {
            return Ok(Vec::new());
        }
        self.query(MenuItemQuery::by_dietary_tag(tag.trim())).await
    }

    /// Case-sensitive substring match on the name. The fragment is used verbatim.
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<MenuItemDto>, DomainError> {
        if is_blank(name) {
            return Ok(Vec::new());
        }
        self.query(MenuItemQuery::by_name_fragment(name)).await
    }

    pub async fn search(&self, term: &str, exact_match: bool) -> Result<Vec<MenuItemDto>, DomainError> {
        if is_blank(term) {
            return Ok(Vec::new());
        }
        self.query(MenuItemQuery::search(term.trim(), exact_match)).await
    }

    pub async fn create(&self, input: CreateMenuItem) -> Result<MenuItemDto, DomainError> {
        let item = MenuItem::new(MenuItemFields::from(input).trimmed());

        let mut unit = UnitOfWork::new();
        unit.add(item);
        let created = self.commit_single(unit).await?;

        info!("Menu item created: {} ({})", created.id, created.name);
        Ok(MenuItemDto::from(created))
    }

    /// Full replacement of every mutable field. Last writer wins.
    pub async fn update(&self, id: i32, input: UpdateMenuItem) -> Result<Option<MenuItemDto>, DomainError> {
        let Some(mut item) = self.repository.find_by_id(id).await? else {
            debug!("Update skipped, menu item {} not found", id);
            return Ok(None);
        };

        item.replace_fields(MenuItemFields::from(input).trimmed());

        let mut unit = UnitOfWork::new();
        unit.modify(item);
        match self.commit_single(unit).await {
            Ok(updated) => {
                info!("Menu item updated: {}", updated.id);
                Ok(Some(MenuItemDto::from(updated)))
            }
            // Deleted between load and save.
            Err(DomainError::MenuItemNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            info!("Menu item deleted: {}", id);
        }
        Ok(deleted)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        self.repository.exists(id).await
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        self.repository.count().await
    }

    async fn query(&self, query: MenuItemQuery) -> Result<Vec<MenuItemDto>, DomainError> {
        debug!("Querying menu items: {:?}", query);
        let items = self.repository.find(&query).await?;
        Ok(items.into_iter().map(MenuItemDto::from).collect())
    }

    async fn commit_single(&self, unit: UnitOfWork) -> Result<MenuItem, DomainError> {
        self.repository
            .commit(unit)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::InternalError("Commit returned no rows".to_string()))
    }
}
