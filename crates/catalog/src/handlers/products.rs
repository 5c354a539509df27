use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use catalog_core::catalog::{validate_product, Product};
use catalog_core::storage::RepositoryError;

use super::{ensure_valid_id, AppError};
use crate::{models::ProductPayload, state::AppState};

/// List all products (GET /api/products).
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// Get a single product by ID (GET /api/products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .get_by_id(id)
        .await?
        .ok_or_else(|| RepositoryError::not_found::<Product>(id))?;

    Ok(Json(product))
}

/// Create a new product (POST /api/products).
///
/// `category_id` is stored as given; the category is not looked up.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, AppError> {
    let product = payload.into_product();
    validate_product(&product)?;

    let product = state.products.add(product).await?;

    tracing::info!(
        product_id = product.id,
        category_id = product.category_id,
        name = %product.name,
        "Created new product"
    );

    let location = format!("/api/products/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Replace a product by ID (PUT /api/products/{id}).
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<StatusCode, AppError> {
    ensure_valid_id(id)?;

    let changes = payload.into_product();
    validate_product(&changes)?;

    state.products.update(id, changes).await?;

    tracing::info!(product_id = id, "Updated product");

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product by ID (DELETE /api/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.products.delete(id).await?;

    tracing::info!(product_id = id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
