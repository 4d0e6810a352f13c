use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

#[derive(Debug, Display)]
pub enum ApiError {
    #[display("{}", _0)]
    NotFound(String),
    #[display("Missing authentication header (X-Auth-Token)")]
    Unauthenticated,
    #[display("validation failed: {}", _0)]
    Validation(String),
    #[display("bad request: {}", _0)]
    BadRequest(String),
}

impl ApiError {
    pub fn order_not_found(id: &str) -> Self {
        Self::NotFound(format!("Order with ID {id} not found"))
    }
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthenticated => StatusCode::FORBIDDEN,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            error: self.to_string(),
        })
    }
}

impl From<RepoErr> for ApiError {
    fn from(e: RepoErr) -> Self {
        match e {
            RepoErr::Validation(v) => Self::Validation(v.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("quantity must be at least 1, got {0}")]
    InvalidQuantity(i64),
    #[error("{field} must not be negative")]
    NegativeAmount { field: &'static str },
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
    #[error("order amounts exceed the supported range")]
    AmountTooLarge,
}

#[derive(Debug, thiserror::Error)]
pub enum RepoErr {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(
            ApiError::order_not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Unauthenticated.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::Validation("q".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::BadRequest("q".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn repo_validation_maps_to_unprocessable() {
        let api: ApiError = RepoErr::from(ValidationError::InvalidQuantity(0)).into();
        assert_eq!(api.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            api.to_string(),
            "validation failed: quantity must be at least 1, got 0"
        );

        let api: ApiError = RepoErr::from(ValidationError::AmountTooLarge).into();
        assert_eq!(api.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn error_body_carries_message() {
        let resp = ApiError::order_not_found("ORD-2024-999").error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["error"], "Order with ID ORD-2024-999 not found");
    }
}
