use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use mf_core::errors::DomainError;
use mf_shared::error_codes;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::MissingField { .. } => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Conflict { .. } => StatusCode::CONFLICT,
        DomainError::Unauthorized | DomainError::Auth(_) | DomainError::Token(_) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Forbidden { .. } => StatusCode::FORBIDDEN,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    let response = match error {
        DomainError::Validation(errors) => {
            log::debug!("Validation failed: {}", errors);
            ErrorResponse::new(error_codes::VALIDATION_ERROR, "Request validation failed")
                .add_detail("errors", errors.errors())
        }
        DomainError::MissingField { field } => {
            ErrorResponse::new(error_codes::BAD_REQUEST, format!("Missing field: {}", field))
                .add_detail("field", field)
        }
        DomainError::NotFound { resource } => {
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} was not found", resource))
        }
        DomainError::Conflict { message } => ErrorResponse::new(error_codes::CONFLICT, message),
        // Token sub-reasons stay in the logs
        DomainError::Unauthorized | DomainError::Token(_) => {
            ErrorResponse::new(error_codes::UNAUTHORIZED, "Unauthorized")
        }
        DomainError::Auth(auth_error) => {
            ErrorResponse::new(error_codes::UNAUTHORIZED, auth_error.to_string())
        }
        DomainError::Forbidden { message } => ErrorResponse::new(error_codes::FORBIDDEN, message),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred")
        }
    };

    response.to_response(status)
}

/// Turns JSON body failures into a 400 with the standard error envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON payload: {}", err);

    let status = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    let response = ErrorResponse::new(error_codes::BAD_REQUEST, format!("Invalid JSON body: {}", err))
        .to_response(status);

    actix_web::error::InternalError::from_response(err, response).into()
}
