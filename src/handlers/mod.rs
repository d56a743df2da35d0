use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use serde::Serialize;

use crate::store::ActivityStore;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiPath, ApiQuery};
use crate::utils::response::{message, success};

pub const INDEX_PATH: &str = "/static/index.html";

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

/// Raw query pairs; a repeated `email` resolves to its last value.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    fn from_pairs(pairs: QueryPairs) -> Self {
        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();
        Self { email }
    }

    fn into_email(self) -> Result<String, AppError> {
        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => Ok(email.to_string()),
            _ => Err(AppError::ValidationError("Email is required".to_string())),
        }
    }
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "mergington-activities",
    };

    success(payload).into_response()
}

pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

pub async fn list_activities(State(store): State<Arc<ActivityStore>>) -> Response {
    success(store.list_activities().await).into_response()
}

pub async fn signup(
    State(store): State<Arc<ActivityStore>>,
    ApiPath(activity_name): ApiPath<String>,
    ApiQuery(pairs): ApiQuery<QueryPairs>,
) -> Result<Response, AppError> {
    let email = EmailQuery::from_pairs(pairs).into_email()?;
    store.signup(&activity_name, &email).await?;

    Ok(message(format!("Signed up {} for {}", email, activity_name)).into_response())
}

pub async fn unregister(
    State(store): State<Arc<ActivityStore>>,
    ApiPath(activity_name): ApiPath<String>,
    ApiQuery(pairs): ApiQuery<QueryPairs>,
) -> Result<Response, AppError> {
    let email = EmailQuery::from_pairs(pairs).into_email()?;
    store.unregister(&activity_name, &email).await?;

    Ok(message(format!("Unregistered {} from {}", email, activity_name)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_trimmed() {
        let query = EmailQuery {
            email: Some("  kid@mergington.edu ".to_string()),
        };
        assert_eq!(query.into_email().unwrap(), "kid@mergington.edu");
    }

    #[test]
    fn test_last_email_wins() {
        let pairs = vec![
            ("email".to_string(), "first@mergington.edu".to_string()),
            ("source".to_string(), "form".to_string()),
            ("email".to_string(), "second@mergington.edu".to_string()),
        ];

        let query = EmailQuery::from_pairs(pairs);
        assert_eq!(query.email.as_deref(), Some("second@mergington.edu"));
        assert!(EmailQuery::from_pairs(Vec::new()).email.is_none());
    }

    #[test]
    fn test_blank_or_missing_email_is_rejected() {
        for email in [None, Some(String::new()), Some("   ".to_string())] {
            let err = EmailQuery { email }.into_email().unwrap_err();
            assert_eq!(err.detail(), "Email is required");
        }
    }
}
