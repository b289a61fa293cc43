//! CORS (Cross-Origin Resource Sharing) middleware configuration.
//!
//! Development allows any origin. Everywhere else only the configured
//! allow-list is accepted; an empty list rejects every cross-origin request.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use mf_shared::CorsConfig;

/// Creates a CORS middleware from configuration
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        return cors.allow_any_origin();
    }

    for origin in &config.allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
