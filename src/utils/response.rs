use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

pub fn success<T>(data: T) -> impl IntoResponse
where
    T: Serialize,
{
    (StatusCode::OK, Json(data))
}

pub fn message(message: impl Into<String>) -> impl IntoResponse {
    let body = MessageBody {
        message: message.into(),
    };
    (StatusCode::OK, Json(body))
}

pub fn error(detail: impl Into<String>, status: StatusCode) -> Response {
    let body = ErrorBody {
        detail: detail.into(),
    };

    (status, Json(body)).into_response()
}
