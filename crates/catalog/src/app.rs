use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        categories::{
            create_category, delete_category, get_category, list_categories, update_category,
        },
        health::livez,
        products::{create_product, delete_product, get_product, list_products, update_product},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    // API routes with CORS
    let api_routes = Router::new()
        // Category routes
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        // Product routes
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());

        let response = app.oneshot(empty_request("GET", "/livez")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_categories_empty() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/api/categories"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_and_get_category() {
        let app = create_app(AppState::default());

        // Create a category
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/categories", r#"{"name":"Books"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/categories/1"
        );
        let category = body_json(response).await;
        assert_eq!(category["id"], 1);
        assert_eq!(category["name"], "Books");

        // Get the category
        let response = app
            .oneshot(empty_request("GET", "/api/categories/1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "Books");
    }

    #[tokio::test]
    async fn test_get_nonexistent_category() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(empty_request("GET", "/api/categories/404"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_category_with_blank_name_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("POST", "/api/categories", r#"{"name":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_category() {
        let app = create_app(AppState::default());
        app.clone()
            .oneshot(json_request("POST", "/api/categories", r#"{"name":"Books"}"#))
            .await
            .unwrap();

        // Warm the cache so the update has something to invalidate
        app.clone()
            .oneshot(empty_request("GET", "/api/categories/1"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request("PUT", "/api/categories/1", r#"{"name":"Novels"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(empty_request("GET", "/api/categories/1"))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["name"], "Novels");
    }

    #[tokio::test]
    async fn test_update_with_non_positive_id_is_bad_request() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("PUT", "/api/categories/0", r#"{"name":"Books"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_category_is_not_found() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request("PUT", "/api/categories/999", r#"{"name":"Books"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_category() {
        let app = create_app(AppState::default());
        app.clone()
            .oneshot(json_request("POST", "/api/categories", r#"{"name":"Books"}"#))
            .await
            .unwrap();

        // Delete the category
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/categories/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Deleting again reports it missing
        let response = app
            .clone()
            .oneshot(empty_request("DELETE", "/api/categories/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Verify the category is gone
        let response = app
            .oneshot(empty_request("GET", "/api/categories/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_lifecycle() {
        let app = create_app(AppState::default());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/products",
                r#"{"name":"Pen","price":"1.50","quantity":10,"category_id":1}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/products/1"
        );

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/products/1",
                r#"{"name":"Pen","price":"2.25","quantity":4,"category_id":1}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .clone()
            .oneshot(empty_request("GET", "/api/products"))
            .await
            .unwrap();
        let products = body_json(response).await;
        assert_eq!(products[0]["price"], "2.25");
        assert_eq!(products[0]["quantity"], 4);

        let response = app
            .oneshot(empty_request("DELETE", "/api/products/1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_create_product_with_negative_price_is_rejected() {
        let app = create_app(AppState::default());

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/products",
                r#"{"name":"Pen","price":"-1","quantity":1,"category_id":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_reflects_new_products() {
        let app = create_app(AppState::default());

        for name in ["Pen", "Ink"] {
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/products",
                    &format!(r#"{{"name":"{name}","price":"1","quantity":1,"category_id":1}}"#),
                ))
                .await
                .unwrap();

            // Populate the list cache between writes
            app.clone()
                .oneshot(empty_request("GET", "/api/products"))
                .await
                .unwrap();
        }

        let response = app
            .oneshot(empty_request("GET", "/api/products"))
            .await
            .unwrap();
        let products = body_json(response).await;
        let names: Vec<&str> = products
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Pen", "Ink"]);
    }
}
