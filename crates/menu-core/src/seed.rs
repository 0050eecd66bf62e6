//! Fixed rows for initial bring-up

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{MenuItem, MenuItemFields};
use crate::error::DomainError;
use crate::persistence::UnitOfWork;
use crate::repositories::MenuItemRepository;

/// The four items every fresh store starts with.
pub fn seed_menu_items() -> Vec<MenuItem> {
    [
        ("Margherita Pizza", "Classic pizza with tomato sauce, mozzarella, and basil", 1299, "Main Course", "Vegetarian"),
        ("Grilled Salmon", "Atlantic salmon with lemon butter and seasonal vegetables", 1899, "Main Course", "Gluten-Free"),
        ("Caesar Salad", "Romaine lettuce, parmesan, croutons, and Caesar dressing", 899, "Appetizer", "None"),
        ("Chocolate Lava Cake", "Warm chocolate cake with a molten center", 750, "Dessert", "Vegetarian"),
    ]
    .into_iter()
    .map(|(name, description, cents, category, dietary_tag)| {
        MenuItem::new(MenuItemFields {
            name: name.to_string(),
            description: description.to_string(),
            price: Decimal::new(cents, 2),
            category: category.to_string(),
            dietary_tag: dietary_tag.to_string(),
        })
    })
    .collect()
}

/// Inserts the seed rows in one unit of work when the store holds nothing.
/// Returns how many rows were inserted.
pub async fn seed_if_empty(repository: &dyn MenuItemRepository) -> Result<usize, DomainError> {
    if repository.count().await? > 0 {
        return Ok(0);
    }

    let mut unit = UnitOfWork::new();
    for item in seed_menu_items() {
        unit.add(item);
    }
    let inserted = repository.commit(unit).await?.len();

    info!("Seeded {} menu items", inserted);
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockMenuItemRepository;

    #[test]
    fn test_seed_categories() {
        let mut categories: Vec<String> = seed_menu_items().into_iter().map(|i| i.category).collect();
        categories.sort();
        assert_eq!(categories, vec!["Appetizer", "Dessert", "Main Course", "Main Course"]);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_store_has_rows() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_count().returning(|| Ok(1));
        repo.expect_commit().never();

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_commits_all_rows_once() {
        let mut repo = MockMenuItemRepository::new();
        repo.expect_count().returning(|| Ok(0));
        repo.expect_commit()
            .withf(|unit| unit.len() == 4)
            .times(1)
            .returning(|unit| Ok(unit.prepare_commit(chrono::Utc::now()).into_iter().map(|e| e.item).collect()));

        assert_eq!(seed_if_empty(&repo).await.unwrap(), 4);
    }
}
