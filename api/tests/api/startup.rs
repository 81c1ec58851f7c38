//! Boots the real server on an ephemeral port and talks HTTP to it

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use kw_api::Application;
use kw_shared::{AppConfig, KeyConfig};

async fn raw_request(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(("127.0.0.1", port)).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[actix_web::test]
async fn test_server_seeds_and_serves() {
    let config = AppConfig {
        keys: KeyConfig {
            key_size_bits: 2048,
            ..KeyConfig::default()
        },
        ..AppConfig::in_memory()
    };
    let app = Application::build(config).await.expect("server builds");
    let port = app.port();
    assert_ne!(port, 0);
    actix_web::rt::spawn(app.run_until_stopped());

    let response = raw_request(
        port,
        "GET /.well-known/jwks.json HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
    assert!(response.contains(r#""kid":"1""#), "{}", response);

    let response = raw_request(
        port,
        "POST /auth?expired HTTP/1.1\r\nHost: localhost\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(response.starts_with("HTTP/1.1 200"), "{}", response);
}

#[actix_web::test]
async fn test_unreachable_store_aborts_startup() {
    let mut config = AppConfig::in_memory();
    config.database.url = "sqlite:///nonexistent-dir/keys.db".to_string();

    assert!(Application::build(config).await.is_err());
}
