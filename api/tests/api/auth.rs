//! Integration tests for POST /auth

use actix_web::{http::header, test};
use chrono::Utc;
use jsonwebtoken::Algorithm;

use kw_api::create_app;
use kw_core::domain::value_objects::JwkSet;
use kw_core::services::KeyCodec;

use crate::helpers::{header_kid, TestStore, TEST_KEY_A_PEM, TEST_KEY_B_PEM};

#[actix_web::test]
async fn test_issues_token_signed_by_valid_key() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post().uri("/auth").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));

    let body = test::read_body(resp).await;
    let token = std::str::from_utf8(&body).unwrap();
    assert_eq!(token.split('.').count(), 3);

    let header = jsonwebtoken::decode_header(token).unwrap();
    assert_eq!(header.alg, Algorithm::RS256);
    assert_eq!(header.typ.as_deref(), Some("JWT"));
    assert_eq!(header_kid(token), store.valid_kid.unwrap().to_string());
}

#[actix_web::test]
async fn test_valid_token_verifies_against_published_keys() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post().uri("/auth").to_request();
    let token = test::call_and_read_body(&app, req).await;
    let token = String::from_utf8(token.to_vec()).unwrap();

    let req = test::TestRequest::get()
        .uri("/.well-known/jwks.json")
        .to_request();
    let set: JwkSet = test::call_and_read_body_json(&app, req).await;

    let data = crate::helpers::verify_with_jwks(&token, &set, true);
    assert_eq!(data.claims.user, "username");
    let now = Utc::now().timestamp();
    assert!(data.claims.exp > now + 3500 && data.claims.exp <= now + 3600);
}

#[actix_web::test]
async fn test_expired_flag_issues_expired_token() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post().uri("/auth?expired").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = test::read_body(resp).await;
    let token = std::str::from_utf8(&body).unwrap();
    assert_eq!(header_kid(token), store.expired_kid.unwrap().to_string());

    // Signed by key B, which is no longer published
    let (n, e) = KeyCodec::public_parameters(
        &KeyCodec::deserialize(TEST_KEY_B_PEM.as_bytes()).unwrap(),
    );
    let key = jsonwebtoken::DecodingKey::from_rsa_components(
        &KeyCodec::encode_unsigned_int(&n),
        &KeyCodec::encode_unsigned_int(&e),
    )
    .unwrap();
    let mut validation = jsonwebtoken::Validation::new(Algorithm::RS256);
    validation.validate_exp = false;
    let data = jsonwebtoken::decode::<kw_core::TokenClaims>(token, &key, &validation).unwrap();
    assert!(data.claims.exp < Utc::now().timestamp());
}

#[actix_web::test]
async fn test_expired_flag_with_any_value() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    for uri in [
        "/auth?expired=true",
        "/auth?expired=",
        "/auth?expired=false",
        "/auth?expired&expired",
        "/auth?expired=1&expired=2",
    ] {
        let req = test::TestRequest::post().uri(uri).to_request();
        let token = test::call_and_read_body(&app, req).await;
        let token = std::str::from_utf8(&token).unwrap().to_string();
        assert_eq!(
            header_kid(&token),
            store.expired_kid.unwrap().to_string(),
            "{}",
            uri
        );
    }
}

#[actix_web::test]
async fn test_unrelated_query_keys_are_ignored() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post().uri("/auth?foo=bar").to_request();
    let token = test::call_and_read_body(&app, req).await;
    let token = std::str::from_utf8(&token).unwrap().to_string();
    assert_eq!(header_kid(&token), store.valid_kid.unwrap().to_string());
}

#[actix_web::test]
async fn test_no_expired_key_is_404() {
    let store = TestStore::empty().await;
    store.insert_valid(TEST_KEY_A_PEM).await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post().uri("/auth?expired").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Key not found.");
}

#[actix_web::test]
async fn test_empty_store_is_404() {
    let store = TestStore::empty().await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post().uri("/auth").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    assert_eq!(test::read_body(resp).await, "Key not found.");
}

#[actix_web::test]
async fn test_request_body_is_ignored() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"username":"userABC","password":"password123"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_unavailable_store_is_500_with_empty_body() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;
    store.pool.close().await;

    let req = test::TestRequest::post().uri("/auth").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    assert!(test::read_body(resp).await.is_empty());
}
