//! Every unsupported method or path answers 405 with an empty body

use actix_web::{http::Method, test};

use kw_api::create_app;

use crate::helpers::TestStore;

#[actix_web::test]
async fn test_unsupported_combinations_are_405() {
    let store = TestStore::seeded().await;
    let app = test::init_service(create_app(store.state())).await;

    let cases = [
        (Method::GET, "/auth"),
        (Method::PUT, "/auth"),
        (Method::PATCH, "/auth"),
        (Method::DELETE, "/auth"),
        (Method::HEAD, "/auth"),
        (Method::POST, "/.well-known/jwks.json"),
        (Method::PUT, "/.well-known/jwks.json"),
        (Method::DELETE, "/.well-known/jwks.json"),
        (Method::GET, "/"),
        (Method::GET, "/health"),
        (Method::POST, "/auth/extra"),
        (Method::GET, "/.well-known/jwks"),
        (Method::GET, "/.well-known/jwks.json?x=1"),
    ];

    for (method, uri) in cases {
        let req = test::TestRequest::default()
            .method(method.clone())
            .uri(uri)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 405, "{} {}", method, uri);
        assert!(test::read_body(resp).await.is_empty(), "{} {}", method, uri);
    }
}

#[actix_web::test]
async fn test_unsupported_requests_do_not_touch_the_store() {
    let store = TestStore::empty().await;
    let app = test::init_service(create_app(store.state())).await;
    store.pool.close().await;

    let req = test::TestRequest::delete().uri("/auth").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 405);
}
