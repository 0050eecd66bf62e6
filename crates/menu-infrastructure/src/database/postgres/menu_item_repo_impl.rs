// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{debug, error, info};

use menu_core::domain::MenuItem;
use menu_core::error::DomainError;
use menu_core::persistence::{EntryState, MenuItemFilter, MenuItemOrder, MenuItemQuery, UnitOfWork};
use menu_core::repositories::MenuItemRepository;

const SELECT_MENU_ITEMS: &str = r#"
    SELECT
        id, name, description, price,
        category, dietary_tag, created_at, updated_at
    FROM menu_items
"#;

const SELECT_MENU_ITEM_BY_ID: &str = r#"
    SELECT
        id, name, description, price,
        category, dietary_tag, created_at, updated_at
    FROM menu_items
    WHERE id = $1
"#;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub dietary_tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            dietary_tag: row.dietary_tag,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e: sqlx::Error| {
        error!("Database error {}: {}", context, e);
        DomainError::DatabaseError(e.to_string())
    }
}

/// Appends the WHERE clause. Folded needles are compared against `LOWER(column)`;
/// `STRPOS` keeps `%` and `_` in needles literal.
fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &MenuItemFilter) {
    match filter {
        MenuItemFilter::All => {}
        MenuItemFilter::CategoryEquals(needle) => {
            builder.push(" WHERE LOWER(category) = ").push_bind(needle.clone());
        }
        MenuItemFilter::DietaryTagEquals(needle) => {
            builder.push(" WHERE LOWER(dietary_tag) = ").push_bind(needle.clone());
        }
        MenuItemFilter::NameContains(needle) => {
            builder
                .push(" WHERE STRPOS(name, ")
                .push_bind(needle.clone())
                .push(") > 0");
        }
        MenuItemFilter::TextEquals(needle) => {
            builder
                .push(" WHERE LOWER(name) = ")
                .push_bind(needle.clone())
                .push(" OR LOWER(description) = ")
                .push_bind(needle.clone());
        }
        MenuItemFilter::TextContains(needle) => {
            builder
                .push(" WHERE STRPOS(LOWER(name), ")
                .push_bind(needle.clone())
                .push(") > 0 OR STRPOS(LOWER(description), ")
                .push_bind(needle.clone())
                .push(") > 0 OR STRPOS(LOWER(category), ")
                .push_bind(needle.clone())
                .push(") > 0");
        }
    }
}

/// Ordinal ordering via the "C" collation, matching the in-memory store.
fn order_clause(order: MenuItemOrder) -> &'static str {
    match order {
        MenuItemOrder::CategoryThenName => r#" ORDER BY category COLLATE "C", name COLLATE "C", id"#,
        MenuItemOrder::Name => r#" ORDER BY name COLLATE "C", id"#,
        MenuItemOrder::NameThenCategory => r#" ORDER BY name COLLATE "C", category COLLATE "C", id"#,
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn find(&self, query: &MenuItemQuery) -> Result<Vec<MenuItem>, DomainError> {
        let mut builder = QueryBuilder::<Postgres>::new(SELECT_MENU_ITEMS);
        push_filter(&mut builder, &query.filter);
        builder.push(order_clause(query.order));

        let rows: Vec<MenuItemRow> = builder
            .build_query_as::<MenuItemRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("querying menu items"))?;

        debug!("Menu item query returned {} rows", rows.len());
        Ok(rows.into_iter().map(MenuItem::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MenuItem>, DomainError> {
        let row: Option<MenuItemRow> = sqlx::query_as(SELECT_MENU_ITEM_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("finding menu item by id"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn exists(&self, id: i32) -> Result<bool, DomainError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM menu_items WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("checking menu item existence"))
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("counting menu items"))
    }

    async fn commit(&self, unit: UnitOfWork) -> Result<Vec<MenuItem>, DomainError> {
        if unit.is_empty() {
            return Ok(Vec::new());
        }

        let entries = unit.prepare_commit(Utc::now());
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("beginning transaction"))?;

        let mut saved = Vec::with_capacity(entries.len());
        for entry in entries {
            let item = entry.item;
            let row: MenuItemRow = match entry.state {
                EntryState::Added => sqlx::query_as::<_, MenuItemRow>(
                    r#"
                    INSERT INTO menu_items (
                        name, description, price, category,
                        dietary_tag, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    RETURNING
                        id, name, description, price,
                        category, dietary_tag, created_at, updated_at
                    "#,
                )
                .bind(&item.name)
                .bind(&item.description)
                .bind(item.price)
                .bind(&item.category)
                .bind(&item.dietary_tag)
                .bind(item.created_at)
                .bind(item.updated_at)
                .fetch_one(&mut *tx)
                .await
                .map_err(db_error("inserting menu item"))?,

                // created_at is never written after insert
                EntryState::Modified => sqlx::query_as::<_, MenuItemRow>(
                    r#"
                    UPDATE menu_items
                    SET
                        name = $2,
                        description = $3,
                        price = $4,
                        category = $5,
                        dietary_tag = $6,
                        updated_at = $7
                    WHERE id = $1
                    RETURNING
                        id, name, description, price,
                        category, dietary_tag, created_at, updated_at
                    "#,
                )
                .bind(item.id)
                .bind(&item.name)
                .bind(&item.description)
                .bind(item.price)
                .bind(&item.category)
                .bind(&item.dietary_tag)
                .bind(item.updated_at)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error("updating menu item"))?
                .ok_or(DomainError::MenuItemNotFound(item.id))?,
            };
            saved.push(MenuItem::from(row));
        }

        tx.commit().await.map_err(db_error("committing transaction"))?;

        info!("Committed {} menu item change(s)", saved.len());
        Ok(saved)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("deleting menu item"))?;

        Ok(result.rows_affected() > 0)
    }
}
