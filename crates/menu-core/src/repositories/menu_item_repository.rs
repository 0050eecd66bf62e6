//! Menu item repository trait (port)

use async_trait::async_trait;

use crate::domain::MenuItem;
use crate::error::DomainError;
use crate::persistence::{MenuItemQuery, UnitOfWork};

/// Collection-like access to stored menu items. Business rules live in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    /// Items matching the query's filter, in the query's order.
    async fn find(&self, query: &MenuItemQuery) -> Result<Vec<MenuItem>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DomainError>;

    async fn exists(&self, id: i32) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;

    /// Stamps and writes every pending entry atomically, returning the stored rows
    /// in entry order. Fails with `MenuItemNotFound` if a modified row is gone.
    async fn commit(&self, unit: UnitOfWork) -> Result<Vec<MenuItem>, DomainError>;

    /// Hard delete. `false` when no row had this id.
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
