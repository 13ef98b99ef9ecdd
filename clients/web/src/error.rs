use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use database::persistence::storage::StoreError;
use thiserror::Error;

use crate::views;

#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            WebError::Store(StoreError::MissingId) => StatusCode::BAD_REQUEST,
            WebError::Store(StoreError::Postgres(_))
            | WebError::Store(StoreError::Poisoned)
            | WebError::Store(StoreError::IdsExhausted) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Store failures are logged, never shown
        let message = if status.is_server_error() {
            log::error!("Request failed: {}", self);
            "Something went wrong while handling your request.".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(views::failure_page(
                status.canonical_reason().unwrap_or("Error"),
                &message,
            ))
    }
}

#[cfg(test)]
mod tests {
    use database::consts::consts::PersonId;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let error = WebError::from(StoreError::NotFound(PersonId(4)));

        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_id_maps_to_400() {
        let error = WebError::from(StoreError::MissingId);

        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn poisoned_store_hides_details() {
        let response = WebError::from(StoreError::Poisoned).error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
