//! JSON HTTP API mounted under `/v1`.

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::domain::notification::{Notification, ValidationError};
use crate::dto::CreatedOutput;
use crate::forms::FormError;
use crate::services::ServiceError;

pub mod cast_members;
pub mod categories;
pub mod genres;
pub mod videos;

/// Error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }
}

/// Registers every endpoint of the API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .configure(categories::configure)
            .configure(cast_members::configure)
            .configure(genres::configure)
            .configure(videos::configure),
    );
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "invalid request body",
        vec![err.to_string()],
    ));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        "invalid query string",
        vec![err.to_string()],
    ));
    InternalError::from_response(err, response).into()
}

pub fn created(output: CreatedOutput) -> HttpResponse {
    HttpResponse::Created().json(output)
}

/// Maps a rejected mutation to `404` when the target is missing, `400` otherwise.
pub fn notification_response(message: &str, notification: Notification) -> HttpResponse {
    let errors = notification.into_errors();
    let not_found = errors
        .iter()
        .any(|error| matches!(error, ValidationError::NotFound { .. }));
    let body = ErrorResponse::new(message, errors.iter().map(ToString::to_string).collect());
    if not_found {
        HttpResponse::NotFound().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

pub fn form_error_response(message: &str, error: FormError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(message, vec![error.to_string()]))
}

pub fn service_error_response(error: ServiceError) -> HttpResponse {
    match error {
        ServiceError::NotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new(error.to_string(), Vec::new()))
        }
        ServiceError::InvalidQuery(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(error.to_string(), Vec::new()))
        }
        ServiceError::Internal => HttpResponse::InternalServerError()
            .json(ErrorResponse::new(error.to_string(), Vec::new())),
    }
}

/// Response for a path id that can never match a row.
pub fn unknown_id(aggregate: &str) -> HttpResponse {
    service_error_response(ServiceError::NotFound(aggregate.to_string()))
}
