//! Server startup
//!
//! Opens the key store, seeds it and binds the listener. Seeding completes
//! before the listener accepts connections; any failure aborts startup.

use actix_web::dev::Server;
use actix_web::{web, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use kw_core::services::{KeySeeder, TokenIssuerConfig};
use kw_infra::database::{DatabasePool, SqliteSigningKeyRepository};
use kw_shared::AppConfig;

use crate::app::{create_app, AppState};

/// A bound, not yet running, server
pub struct Application {
    port: u16,
    server: Server,
    pool: DatabasePool,
}

impl Application {
    pub async fn build(config: AppConfig) -> Result<Self, anyhow::Error> {
        let pool = DatabasePool::new(config.database.clone())
            .await
            .context("Failed to open key store")?;
        pool.init_schema()
            .await
            .context("Failed to create key store schema")?;
        if !pool.health_check().await.context("Key store health check failed")? {
            anyhow::bail!("Key store health check returned an unexpected value");
        }
        tracing::info!(stats = %pool.get_statistics(), "Key store ready");

        let repository = Arc::new(SqliteSigningKeyRepository::new(pool.get_pool().clone()));
        KeySeeder::new(Arc::clone(&repository), config.keys.clone())
            .seed()
            .await
            .context("Failed to seed signing keys")?;

        let address = config.server.bind_address();
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
        let port = listener.local_addr()?.port();

        let state = web::Data::new(AppState::new(
            repository,
            TokenIssuerConfig::from(&config.keys),
        ));
        let server = run(listener, state, &config)?;

        tracing::info!(%address, port, environment = %config.environment, "Keywarden listening");
        Ok(Self { port, server, pool })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let result = self.server.await;
        self.pool.close().await;
        result
    }
}

fn run(
    listener: TcpListener,
    state: web::Data<AppState<SqliteSigningKeyRepository>>,
    config: &AppConfig,
) -> Result<Server, std::io::Error> {
    let mut server = HttpServer::new(move || create_app(state.clone()))
        .keep_alive(Duration::from_secs(config.server.keep_alive));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    Ok(server.listen(listener)?.run())
}
