//! HTTP tests for registration, login and the profile endpoints

mod common;

use actix_web::{http::header::AUTHORIZATION, test};
use serde_json::{json, Value};

use hs_api::create_app;
use hs_core::services::{TokenService, TokenServiceConfig};

use common::{context, PASSWORD};

#[actix_web::test]
async fn test_register_login_and_profile() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "alice",
            "password": PASSWORD,
            "email": "alice@example.com",
            "full_name": "Alice Nguyen"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 201);
    assert_eq!(body["message"], "create user success");
    assert_eq!(body["result"]["username"], "alice");
    assert_eq!(body["result"]["roles"], json!(["GUEST"]));

    let sent = ctx.mail.wait_for(1).await;
    assert_eq!(sent[0].to, "alice@example.com");
    assert_eq!(sent[0].subject, "Welcome to Airbnb");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "alice", "password": PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["message"], "login success");
    assert_eq!(body["result"]["token_type"], "Bearer");
    let token = body["result"]["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/users/me")
        .insert_header((AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["message"], "get user info");
    assert_eq!(body["result"]["full_name"], "Alice Nguyen");
    assert_eq!(body["result"]["thumbnail_url"], "/media/default-avatar.png");
}

#[actix_web::test]
async fn test_register_duplicate_username_is_conflict() {
    let ctx = context();
    ctx.seed_user("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "alice",
            "password": "another1",
            "email": "alice2@example.com",
            "full_name": "Other Alice"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 409);
    assert_eq!(body["message"], "Username already exists");
    assert!(body["result"].is_null());
}

#[actix_web::test]
async fn test_register_validation_failure() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({
            "username": "al",
            "password": "123",
            "email": "not-an-email",
            "full_name": "Al"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("username"));
    assert!(message.contains("password"));
    assert!(message.contains("email"));
    assert!(ctx.state.user_service.count().await.unwrap() == 0);
}

#[actix_web::test]
async fn test_malformed_json_body() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 400);
}

#[actix_web::test]
async fn test_login_wrong_password() {
    let ctx = context();
    ctx.seed_user("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    for (username, password) in [("alice", "wrong-password"), ("nobody", PASSWORD)] {
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], 401);
        assert_eq!(body["message"], "Invalid username or password");
    }
}

#[actix_web::test]
async fn test_profile_token_failures() {
    let ctx = context();
    ctx.seed_user("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    // well-formed but signed with another key
    let foreign = TokenService::new(TokenServiceConfig {
        jwt_secret: "some-other-secret".to_string(),
        ..TokenServiceConfig::default()
    })
    .generate_token("alice", vec![])
    .unwrap();

    let cases = [
        (None, 401),
        (Some("Bearer not-a-jwt".to_string()), 401),
        (Some(format!("Bearer {}", foreign.token)), 404),
    ];

    for (header, expected) in cases {
        let mut req = test::TestRequest::get().uri("/api/users/me");
        if let Some(value) = header {
            req = req.insert_header((AUTHORIZATION, value));
        }
        let resp = test::call_service(&app, req.to_request()).await;
        assert_eq!(resp.status().as_u16(), expected);
    }
}

#[actix_web::test]
async fn test_list_and_count_users() {
    let ctx = context();
    ctx.seed_user("alice").await;
    ctx.seed_user("bob").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/users")
        .insert_header((AUTHORIZATION, ctx.bearer("alice")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "get all users");
    let names: Vec<&str> = body["result"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["alice", "bob"]);

    let req = test::TestRequest::get()
        .uri("/api/users/count")
        .insert_header((AUTHORIZATION, ctx.bearer("alice")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "count users");
    assert_eq!(body["result"], 2);
}

#[actix_web::test]
async fn test_update_profile_keeps_blank_fields() {
    let ctx = context();
    ctx.seed_user("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri("/api/users/me")
        .insert_header((AUTHORIZATION, ctx.bearer("alice")))
        .set_json(json!({
            "email": "",
            "full_name": "Alice B",
            "phone": "+84901234567",
            "thumbnail": { "file_name": "me.png", "data": "aGVsbG8=" }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["code"], 200);
    assert_eq!(body["message"], "update profile success");
    assert_eq!(body["result"]["email"], "alice@example.com");
    assert_eq!(body["result"]["full_name"], "Alice B");
    assert_eq!(body["result"]["phone"], "+84901234567");
    assert_eq!(body["result"]["thumbnail_url"], "https://img.test/1/me.png");
    assert_eq!(ctx.images.upload_count(), 1);
}

#[actix_web::test]
async fn test_update_profile_rejects_bad_thumbnail() {
    let ctx = context();
    ctx.seed_user("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri("/api/users/me")
        .insert_header((AUTHORIZATION, ctx.bearer("alice")))
        .set_json(json!({ "thumbnail": { "file_name": "me.png", "data": "%%%" } }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    assert_eq!(ctx.images.upload_count(), 0);
}

#[actix_web::test]
async fn test_change_password_flow() {
    let ctx = context();
    ctx.seed_user("alice").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let attempts = [
        ("wrong-current", "newsecret", "newsecret", 400, "Current password is incorrect"),
        (PASSWORD, "newsecret", "different", 400, "New password and confirmation do not match"),
        (PASSWORD, "newsecret", "newsecret", 200, "change password success"),
    ];

    for (current, new, confirm, code, message) in attempts {
        let req = test::TestRequest::put()
            .uri("/api/users/password")
            .insert_header((AUTHORIZATION, ctx.bearer("alice")))
            .set_json(json!({
                "username": "alice",
                "password": current,
                "new_password": new,
                "confirm_password": confirm
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["code"], code);
        assert_eq!(body["message"], message);
    }

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "alice", "password": "newsecret" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 200);
}

#[actix_web::test]
async fn test_change_password_of_another_account_is_forbidden() {
    let ctx = context();
    ctx.seed_user("alice").await;
    ctx.seed_user("bob").await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::put()
        .uri("/api/users/password")
        .insert_header((AUTHORIZATION, ctx.bearer("alice")))
        .set_json(json!({
            "username": "bob",
            "password": PASSWORD,
            "new_password": "taken-over",
            "confirm_password": "taken-over"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 403);
    assert_eq!(body["message"], "Cannot change the password of another account");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "bob", "password": PASSWORD }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["code"], 200);
}

#[actix_web::test]
async fn test_favorites() {
    let ctx = context();
    let alice = ctx.seed_user("alice").await;
    let listing = ctx.seed_listing(42, 450_000, 3).await;
    ctx.users.add_favorite(alice, listing).await;
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/users/me/favorites")
        .insert_header((AUTHORIZATION, ctx.bearer("alice")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["message"], "get favorites");
    assert_eq!(body["result"]["user_id"], alice);
    assert_eq!(body["result"]["favorites"][0]["id"], 42);
    assert_eq!(body["result"]["favorites"][0]["title"], "Listing 42");
}
