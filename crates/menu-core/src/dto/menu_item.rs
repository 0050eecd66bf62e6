// ============================================================================
// Menu Core - Menu Item DTOs
// File: crates/menu-core/src/dto/menu_item.rs
// ============================================================================
//! Create, update, and output shapes for menu items

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validation::{validate_not_blank, validate_price};
use crate::domain::{MenuItem, MenuItemFields, DEFAULT_DIETARY_TAG};

fn default_dietary_tag() -> String {
    DEFAULT_DIETARY_TAG.to_string()
}

/// Payload for `POST /menuitem`.
///
/// Missing strings deserialize to empty so that they fail validation with a field
/// error instead of a body parse error. A missing `dietaryTag` becomes `"None"`;
/// an explicit empty one stays empty.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItem {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub category: String,

    #[serde(default = "default_dietary_tag")]
    #[validate(length(max = 50, message = "Dietary tag cannot exceed 50 characters"))]
    pub dietary_tag: String,
}

/// Payload for `PUT /menuitem/{id}`. Every mutable field is replaced.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuItem {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Description cannot exceed 500 characters"))]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 50, message = "Category must be between 1 and 50 characters"),
        custom(function = "validate_not_blank")
    )]
    pub category: String,

    #[serde(default = "default_dietary_tag")]
    #[validate(length(max = 50, message = "Dietary tag cannot exceed 50 characters"))]
    pub dietary_tag: String,
}

impl From<CreateMenuItem> for MenuItemFields {
    fn from(input: CreateMenuItem) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            dietary_tag: input.dietary_tag,
        }
    }
}

impl From<UpdateMenuItem> for MenuItemFields {
    fn from(input: UpdateMenuItem) -> Self {
        Self {
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            dietary_tag: input.dietary_tag,
        }
    }
}

/// Item representation returned by every read and write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub category: String,
    pub dietary_tag: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&MenuItem> for MenuItemDto {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category.clone(),
            dietary_tag: item.dietary_tag.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<MenuItem> for MenuItemDto {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            price: item.price,
            category: item.category,
            dietary_tag: item.dietary_tag,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_input;

    fn parse(json: &str) -> CreateMenuItem {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_payload_passes() {
        let input = parse(
            r#"{"name":"Margherita Pizza","price":12.99,"category":"Main Course","dietaryTag":"Vegetarian"}"#,
        );
        assert!(validate_input(&input).is_ok());
        assert_eq!(input.price, Decimal::new(1299, 2));
        assert_eq!(input.description, "");
    }

    #[test]
    fn test_missing_dietary_tag_defaults_but_empty_is_kept() {
        let omitted = parse(r#"{"name":"Soup","price":4.5,"category":"Starter"}"#);
        assert_eq!(omitted.dietary_tag, DEFAULT_DIETARY_TAG);

        let empty = parse(r#"{"name":"Soup","price":4.5,"category":"Starter","dietaryTag":""}"#);
        assert_eq!(empty.dietary_tag, "");
        assert!(validate_input(&empty).is_ok());
    }

    #[test]
    fn test_field_errors_are_reported_per_field() {
        let input = parse(r#"{"name":"   ","price":0,"dietaryTag":"x"}"#);
        let errors = validate_input(&input).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert!(fields.contains(&"name"));
        assert!(fields.contains(&"price"));
        assert!(fields.contains(&"category"));
        assert!(!fields.contains(&"dietaryTag"));
    }

    #[test]
    fn test_lengths_count_characters() {
        let name = "é".repeat(100);
        let input = parse(&format!(
            r#"{{"name":"{}","price":1,"category":"Dessert"}}"#,
            name
        ));
        assert!(validate_input(&input).is_ok());

        let too_long = parse(&format!(
            r#"{{"name":"Cake","description":"{}","price":1,"category":"Dessert"}}"#,
            "a".repeat(501)
        ));
        let errors = validate_input(&too_long).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn test_output_serializes_price_as_number() {
        let mut item = MenuItem::new(MenuItemFields {
            name: "Tiramisu".to_string(),
            description: String::new(),
            price: Decimal::new(750, 2),
            category: "Dessert".to_string(),
            dietary_tag: "Vegetarian".to_string(),
        });
        item.id = 3;

        let json = serde_json::to_value(MenuItemDto::from(&item)).unwrap();
        assert_eq!(json["price"], serde_json::json!(7.5));
        assert_eq!(json["dietaryTag"], "Vegetarian");
        assert!(json.get("createdAt").is_some());
    }
}
