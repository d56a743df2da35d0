//! `Path` and `Query` wrappers whose rejections render as `AppError`.

use axum::extract::FromRequestParts;

use crate::utils::error::AppError;

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn detail_of(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_path_on_route_without_params_is_internal_error() {
        let app = Router::new().route(
            "/plain",
            get(|ApiPath(name): ApiPath<String>| async move { name }),
        );

        let (status, body) = detail_of(app, "/plain").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn test_query_type_mismatch_is_validation_error() {
        let app = Router::new().route(
            "/count",
            get(|ApiQuery(pairs): ApiQuery<Vec<(String, u8)>>| async move {
                pairs.len().to_string()
            }),
        );

        let (status, body) = detail_of(app, "/count?n=lots").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("query string"));
    }
}
