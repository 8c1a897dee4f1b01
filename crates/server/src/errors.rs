use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// The single place where request failures become HTTP responses.
///
/// Client errors (validation, unknown id, unreadable body) answer 400 with the
/// message as a plain-text body; store failures answer 500 with a generic body.
#[derive(Debug)]
pub enum ApiError {
    Service(ServiceError),
    Body { status: StatusCode, message: String },
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        ApiError::Service(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // a well-formed body with a field of the wrong type is still a bad request
        let status = match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
            other => other,
        };
        ApiError::Body { status, message: rejection.body_text() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Service(err) if err.is_client_error() => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            ApiError::Service(err) => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            ApiError::Body { status, message } => {
                warn!(%status, error = %message, "unreadable request body");
                (status, message).into_response()
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use models::errors::ValidationError;

    async fn body_text(res: Response) -> String {
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn client_errors_map_to_bad_request() {
        let res = ApiError::from(ServiceError::Validation(ValidationError::EmptyField)).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = ApiError::from(ServiceError::NotFound(3)).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn store_errors_hide_their_details() {
        let res = ApiError::from(ServiceError::Db("connection reset by 10.0.0.7".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(res).await, "internal server error");
    }
}
