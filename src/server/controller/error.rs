use crate::server::database::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use derive_more::{Display, Error};
use serde_json::json;
use validator::ValidationErrors;

const WRITE_DETAIL_MAX_CHARS: usize = 200;

#[derive(Debug, Display, Error)]
pub(crate) enum ApiError {
    #[display("reservation payload failed validation")]
    Validation {
        #[error(not(source))]
        fields: ValidationErrors,
    },
    #[display("document store is not available")]
    StoreUnavailable,
    #[display("reservation could not be stored: {detail}")]
    WriteFailed { detail: String },
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable => ApiError::StoreUnavailable,
            StoreError::QueryFailed(detail) | StoreError::WriteFailed(detail) => {
                ApiError::WriteFailed {
                    detail: truncate_chars(&detail, WRITE_DETAIL_MAX_CHARS),
                }
            }
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::WriteFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Validation { fields } => {
                json!({ "error": self.to_string(), "fields": fields })
            }
            _ => json!({ "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Bounded, char-safe prefix of an error detail going into a response.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn store_errors_map_to_server_errors() {
        let unavailable: ApiError = StoreError::Unavailable.into();
        assert_eq!(unavailable.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let failed: ApiError = StoreError::WriteFailed("boom".to_string()).into();
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn write_detail_is_bounded() {
        let long = "x".repeat(1000);
        let failed: ApiError = StoreError::WriteFailed(long).into();
        match failed {
            ApiError::WriteFailed { detail } => assert_eq!(detail.len(), WRITE_DETAIL_MAX_CHARS),
            other => panic!("unexpected mapping: {other}"),
        }
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("pálinka", 3), "pál");
    }
}
