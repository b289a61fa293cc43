//! Account registration, login and lifecycle over HTTP

#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};

use mf_api::create_app;

#[actix_web::test]
async fn test_register_returns_profile_without_password() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let resp = test::call_service(&app, common::register_request("alice1", "secret").to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice1");
    assert_eq!(body["favorite_movies"], json!([]));
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn test_duplicate_registration_conflicts() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let first = test::call_service(&app, common::register_request("alice1", "secret").to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = test::call_service(&app, common::register_request("alice1", "other").to_request()).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    assert_eq!(ctx.accounts.len().await, 1);
}

#[actix_web::test]
async fn test_validation_errors_are_listed_in_rule_order() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "ab!", "password": "", "email": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    let codes: Vec<&str> = body["details"]["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["too_short", "not_alphanumeric", "required", "invalid_email"]);
    assert!(ctx.accounts.is_empty().await);
}

#[actix_web::test]
async fn test_missing_field_and_malformed_body_are_bad_requests() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "alice1", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"]["field"], "email");

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_rejects_wrong_password() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let _ = register_and_login!(&app, "alice1", "secret");

    let resp = test::call_service(&app, common::login_request("alice1", "wrong").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(&app, common::login_request("nobody1", "secret").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_returns_bearer_token() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    test::call_service(&app, common::register_request("alice1", "secret").to_request()).await;

    let body: Value =
        test::call_and_read_body_json(&app, common::login_request("alice1", "secret").to_request()).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["username"], "alice1");
    assert!(body["expires_in"].as_i64().unwrap() > 0);
}

#[actix_web::test]
async fn test_account_reads_require_token() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = register_and_login!(&app, "alice1", "secret");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/users")
        .insert_header(("Authorization", "Bearer not-a-jwt"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/users/alice1")
        .insert_header(common::bearer(&token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["email"], "alice1@example.com");
}

#[actix_web::test]
async fn test_update_own_account() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = register_and_login!(&app, "alice1", "secret");

    let req = test::TestRequest::put()
        .uri("/users/alice1")
        .insert_header(common::bearer(&token))
        .set_json(json!({
            "Username": "alice2",
            "Password": "newsecret",
            "Email": "alice@example.com",
            "Birthday": "1991-02-03"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "alice2");
    assert_eq!(body["birthday"], "1991-02-03");

    let resp = test::call_service(&app, common::login_request("alice2", "newsecret").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_cannot_modify_another_account() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let _ = register_and_login!(&app, "alice1", "secret");
    let mallory = register_and_login!(&app, "mallory", "secret");

    let req = test::TestRequest::put()
        .uri("/users/alice1")
        .insert_header(common::bearer(&mallory))
        .set_json(json!({ "username": "pwned1", "password": "x", "email": "m@x.com" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete()
        .uri("/users/alice1")
        .insert_header(common::bearer(&mallory))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);
    assert_eq!(ctx.accounts.len().await, 2);
}

#[actix_web::test]
async fn test_admin_can_delete_any_account() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let _ = register_and_login!(&app, "alice1", "secret");
    let admin = register_and_login!(&app, "admin1", "secret");
    ctx.promote_to_admin("admin1").await;

    let req = test::TestRequest::delete()
        .uri("/users/alice1")
        .insert_header(common::bearer(&admin))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "alice1 was deleted.");
}

#[actix_web::test]
async fn test_token_for_deleted_account_is_rejected() {
    let ctx = common::context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let token = register_and_login!(&app, "alice1", "secret");

    let req = test::TestRequest::delete()
        .uri("/users/alice1")
        .insert_header(common::bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/movies")
        .insert_header(common::bearer(&token))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
