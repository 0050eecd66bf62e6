// ============================================================================
// Menu API - Menu Item Handlers
// File: crates/menu-api/src/handlers/menu_item.rs
// ============================================================================
//! Menu item HTTP handlers

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{de, Deserialize, Deserializer};
use tracing::info;

use menu_core::dto::{CreateMenuItem, MenuItemDto, UpdateMenuItem};

use crate::error::ApiError;
use crate::extract::{ItemId, ValidatedJson};
use crate::state::AppState;

/// Query string for `GET /menuitem/search`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    #[serde(default)]
    pub search_term: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub exact_match: bool,
}

/// `true`/`false` in any letter case. An empty value is `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" | "" => Ok(false),
        _ => Err(de::Error::custom(format!("invalid boolean `{}`", raw))),
    }
}

fn not_found(id: i32) -> ApiError {
    ApiError::NotFound(format!("Menu item {} not found", id))
}

/// GET /menuitem
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<MenuItemDto>>, ApiError> {
    Ok(Json(state.menu_items.list_all().await?))
}

/// GET /menuitem/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<Json<MenuItemDto>, ApiError> {
    let item = state.menu_items.get_by_id(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// GET /menuitem/category/{category}
pub async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<MenuItemDto>>, ApiError> {
    Ok(Json(state.menu_items.list_by_category(&category).await?))
}

/// GET /menuitem/dietary/{dietary_tag}
pub async fn list_by_dietary_tag(
    State(state): State<AppState>,
    Path(dietary_tag): Path<String>,
) -> Result<Json<Vec<MenuItemDto>>, ApiError> {
    Ok(Json(state.menu_items.list_by_dietary_tag(&dietary_tag).await?))
}

/// GET /menuitem/name/{name}
pub async fn find_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<MenuItemDto>>, ApiError> {
    Ok(Json(state.menu_items.find_by_name(&name).await?))
}

/// GET /menuitem/search?searchTerm=&exactMatch=
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<MenuItemDto>>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let items = state
        .menu_items
        .search(&params.search_term, params.exact_match)
        .await?;
    Ok(Json(items))
}

/// POST /menuitem
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMenuItem>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state.menu_items.create(input).await?;
    let location = format!("/menuitem/{}", item.id);

    info!("Created menu item {} at {}", item.id, location);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

/// PUT /menuitem/{id}
pub async fn update(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ValidatedJson(input): ValidatedJson<UpdateMenuItem>,
) -> Result<Json<MenuItemDto>, ApiError> {
    let item = state.menu_items.update(id, input).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(item))
}

/// DELETE /menuitem/{id}
pub async fn delete(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> Result<StatusCode, ApiError> {
    if state.menu_items.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
