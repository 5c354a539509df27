use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use catalog_core::catalog::{validate_category, Category};
use catalog_core::storage::RepositoryError;

use super::{ensure_valid_id, AppError};
use crate::{models::CategoryPayload, state::AppState};

/// List all categories (GET /api/categories).
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, AppError> {
    let categories = state.categories.list_all().await?;
    Ok(Json(categories))
}

/// Get a single category by ID (GET /api/categories/{id}).
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Category>, AppError> {
    let category = state
        .categories
        .get_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found::<Category>(id))?;

    Ok(Json(category))
}

/// Create a new category (POST /api/categories).
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryPayload>,
) -> Result<impl IntoResponse, AppError> {
    let category = payload.into_category();
    validate_category(&category)?;

    let category = state.categories.add(category).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Created new category");

    let location = format!("/api/categories/{}", category.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

/// Replace a category by ID (PUT /api/categories/{id}).
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryPayload>,
) -> Result<StatusCode, AppError> {
    ensure_valid_id(id)?;

    let changes = payload.into_category();
    validate_category(&changes)?;

    state.categories.update(id, changes).await?;

    tracing::info!(category_id = id, "Updated category");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category by ID (DELETE /api/categories/{id}).
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.categories.delete(id).await?;

    tracing::info!(category_id = id, "Deleted category");

    Ok(StatusCode::NO_CONTENT)
}
