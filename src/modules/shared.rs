use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::ValidationErrors;

// =============================================================================
// ERROR RESPONSE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Failed `validator` checks become a 422 before anything touches the store.
pub fn validation_error(errors: ValidationErrors) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::with_message("Validation failed", errors.to_string())),
    )
}

/// Turns a module error into the wire error. Server-side failures are logged
/// and replaced by a generic body.
pub fn error_response(status: StatusCode, error: &dyn std::error::Error) -> ApiError {
    if status.is_server_error() {
        tracing::error!("Request failed: {}", error);
        return (status, Json(ErrorResponse::new("Internal server error")));
    }
    (status, Json(ErrorResponse::new(error.to_string())))
}

// =============================================================================
// MESSAGE RESPONSE
// =============================================================================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Json<Self> {
        Json(Self { message })
    }
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// `Json` whose rejections use the `ErrorResponse` body. Malformed JSON and
/// values that do not fit the target type are both 422.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// `Query` whose rejections use the `ErrorResponse` body with status 422.
pub struct AppQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    let status = match &rejection {
        JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        // Missing content type (415) and unreadable or oversized bodies keep axum's status.
        _ => rejection.status(),
    };
    (
        status,
        Json(ErrorResponse::with_message("Invalid request body", rejection.body_text())),
    )
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse::with_message(
            "Invalid query parameters",
            rejection.body_text(),
        )),
    )
}
