use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Error body shared by every endpoint: `{"error": title, "message": detail}`.
#[derive(Debug, Error)]
#[error("{title}: {message}")]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, message: Option<String>) -> Self {
        let title = title.into();
        let message = message.unwrap_or_else(|| title.clone());
        Self { status, title, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.title, "message": self.message});
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let msg = e.to_string();
        match e {
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                warn!(err = %msg, "rejected input");
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
            }
            ServiceError::InsufficientFunds(_) => {
                warn!(err = %msg, "payment declined");
                JsonApiError::new(StatusCode::BAD_REQUEST, "Insufficient Funds", Some(msg))
            }
            ServiceError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Forbidden(_) => JsonApiError::new(StatusCode::FORBIDDEN, "Forbidden", Some(msg)),
            ServiceError::Conflict(_) | ServiceError::Model(ModelError::Conflict(_)) => JsonApiError::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                error!(err = %msg, "database failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", Some(msg))
            }
        }
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        warn!(err = %rejection.body_text(), "invalid path parameter");
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Path", Some(rejection.body_text()))
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(err = %rejection.body_text(), "invalid json body");
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Body", Some(rejection.body_text()))
    }
}

impl From<QueryRejection> for JsonApiError {
    fn from(rejection: QueryRejection) -> Self {
        warn!(err = %rejection.body_text(), "invalid query string");
        JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid Query", Some(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::Model(ModelError::Validation("x".into())), StatusCode::BAD_REQUEST),
            (ServiceError::InsufficientFunds("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("user"), StatusCode::NOT_FOUND),
            (ServiceError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT),
            (ServiceError::Model(ModelError::Conflict("x".into())), StatusCode::CONFLICT),
            (ServiceError::Db("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Model(ModelError::Db("x".into())), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from(err).status, status);
        }
    }

    #[test]
    fn message_defaults_to_title() {
        let e = JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None);
        assert_eq!(e.message, "Not Found");
    }
}
