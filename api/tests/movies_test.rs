//! Catalog reads over HTTP

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::Value;

use mf_api::create_app;

#[actix_web::test]
async fn test_public_routes() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("myFlix"));

    let body: Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(body["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_catalog_requires_token() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for uri in [
        "/movies",
        "/movies/Inception",
        "/movies/genre/Crime",
        "/movies/directors/Christopher%20Nolan",
        "/genres/Crime",
        "/directors/Christopher%20Nolan",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[actix_web::test]
async fn test_list_and_lookup_movies() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = register_and_login!(&app, "alice1", "secret");

    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 3);

    let req = test::TestRequest::get()
        .uri("/movies/The%20Godfather")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], "m3");
    assert_eq!(body["director"]["name"], "Francis Ford Coppola");

    let req = test::TestRequest::get()
        .uri("/movies/Unknown")
        .insert_header(common::bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_movies_by_genre_and_director() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = register_and_login!(&app, "alice1", "secret");

    let req = test::TestRequest::get()
        .uri("/movies/genre/Science%20Fiction")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/movies/directors/Francis%20Ford%20Coppola")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["title"], "The Godfather");

    // no movies in the genre is reported as not found
    let req = test::TestRequest::get()
        .uri("/movies/genre/Western")
        .insert_header(common::bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_genre_and_director_records() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = register_and_login!(&app, "alice1", "secret");

    let req = test::TestRequest::get()
        .uri("/genres/Crime")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "Crime");
    assert_eq!(body["description"], "Crime films");

    let req = test::TestRequest::get()
        .uri("/directors/Christopher%20Nolan")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["birth_year"], 1970);
    assert!(body.get("death_year").is_none());

    let req = test::TestRequest::get()
        .uri("/directors/Nobody")
        .insert_header(common::bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}
