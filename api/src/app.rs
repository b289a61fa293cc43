//! Application factory
//!
//! Builds the actix-web `App` with state, middleware and every route.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, HttpResponse,
};

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::json_error_handler;
use crate::middleware::{cors::create_cors, security::SecurityMiddleware};
use crate::routes::{auth, favorites, movies, users, AppState};

use mf_core::repositories::{AccountRepository, CatalogRepository};
use mf_shared::{error_codes, AppConfig, HealthResponse};

/// Logger target for HTTP access records
pub const ACCESS_LOG_TARGET: &str = "myflix::access";

/// Create and configure the application with all dependencies
pub fn create_app<A, C>(
    app_state: web::Data<AppState<A, C>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    C: CatalogRepository + 'static,
{
    let cors = create_cors(&config.cors);
    let security = SecurityMiddleware::for_environment(config.environment);
    let logger = Logger::new(&config.logging.access_log_format).log_target(ACCESS_LOG_TARGET);

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Last wrap runs first: security, then CORS, then access log
        .wrap(logger)
        .wrap(cors)
        .wrap(security)
        .route("/", web::get().to(welcome))
        .route("/health", web::get().to(health_check))
        .route("/login", web::post().to(auth::login::<A, C>))
        .service(
            web::scope("/movies")
                .route("", web::get().to(movies::list_movies::<A, C>))
                .route("/genre/{genre_name}", web::get().to(movies::list_by_genre::<A, C>))
                .route(
                    "/directors/{director_name}",
                    web::get().to(movies::list_by_director::<A, C>),
                )
                .route("/{title}", web::get().to(movies::get_movie::<A, C>)),
        )
        .route("/genres/{name}", web::get().to(movies::get_genre::<A, C>))
        .route("/directors/{name}", web::get().to(movies::get_director::<A, C>))
        .service(
            web::scope("/users")
                .service(
                    web::resource("")
                        .route(web::get().to(users::list_users::<A, C>))
                        .route(web::post().to(users::register::<A, C>)),
                )
                .service(
                    web::resource("/{username}")
                        .route(web::get().to(users::get_user::<A, C>))
                        .route(web::put().to(users::update_user::<A, C>))
                        .route(web::delete().to(users::delete_user::<A, C>)),
                )
                .service(
                    web::resource("/{username}/movies/{movie_id}")
                        .route(web::post().to(favorites::add_favorite::<A, C>))
                        .route(web::delete().to(favorites::remove_favorite::<A, C>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

async fn welcome() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Welcome to myFlix!")
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy("myflix-api", env!("CARGO_PKG_VERSION")))
}

async fn not_found() -> HttpResponse {
    ErrorResponse::new(error_codes::NOT_FOUND, "The requested resource was not found")
        .to_response(actix_web::http::StatusCode::NOT_FOUND)
}
