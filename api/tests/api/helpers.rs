use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, TokenData, Validation};
use once_cell::sync::Lazy;
use std::sync::Arc;

use kw_api::telemetry::{get_subscriber, init_subscriber};
use kw_api::AppState;
use kw_core::domain::entities::TokenClaims;
use kw_core::domain::value_objects::JwkSet;
use kw_core::repositories::SigningKeyRepository;
use kw_core::services::TokenIssuerConfig;
use kw_infra::database::{DatabasePool, SqliteSigningKeyRepository};
use kw_shared::LoggingConfig;

pub const TEST_KEY_A_PEM: &str = include_str!("../../../testdata/rsa_signing_key_a.pem");
pub const TEST_KEY_B_PEM: &str = include_str!("../../../testdata/rsa_signing_key_b.pem");

static TRACING: Lazy<()> = Lazy::new(|| {
    let config = LoggingConfig {
        level: "info".to_string(),
        ..LoggingConfig::default()
    };

    let subscriber = if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(&config, std::io::stdout)
    } else {
        get_subscriber(&config, std::io::sink)
    };
    let _ = init_subscriber(subscriber);
});

/// In-memory key store, optionally holding one valid and one expired key
pub struct TestStore {
    pub pool: DatabasePool,
    pub repository: Arc<SqliteSigningKeyRepository>,
    pub valid_kid: Option<i64>,
    pub expired_kid: Option<i64>,
}

impl TestStore {
    pub async fn empty() -> Self {
        Lazy::force(&TRACING);

        let pool = DatabasePool::in_memory().await.expect("in-memory store opens");
        let repository = Arc::new(SqliteSigningKeyRepository::new(pool.get_pool().clone()));
        Self {
            pool,
            repository,
            valid_kid: None,
            expired_kid: None,
        }
    }

    /// Key A valid for an hour, key B expired an hour ago
    pub async fn seeded() -> Self {
        let mut store = Self::empty().await;
        store.valid_kid = Some(store.insert_valid(TEST_KEY_A_PEM).await);
        store.expired_kid = Some(store.insert_expired(TEST_KEY_B_PEM).await);
        store
    }

    pub async fn insert_valid(&self, pem: &str) -> i64 {
        self.repository
            .insert(pem.as_bytes(), Utc::now() + Duration::hours(1))
            .await
            .expect("insert succeeds")
    }

    pub async fn insert_expired(&self, pem: &str) -> i64 {
        self.repository
            .insert(pem.as_bytes(), Utc::now() - Duration::hours(1))
            .await
            .expect("insert succeeds")
    }

    pub fn state(&self) -> web::Data<AppState<SqliteSigningKeyRepository>> {
        web::Data::new(AppState::new(
            Arc::clone(&self.repository),
            TokenIssuerConfig::default(),
        ))
    }
}

pub fn header_kid(token: &str) -> String {
    decode_header(token)
        .expect("token header decodes")
        .kid
        .expect("token header carries a kid")
}

/// Verifies `token` against the published record with its `kid`
pub fn verify_with_jwks(token: &str, set: &JwkSet, validate_exp: bool) -> TokenData<TokenClaims> {
    let kid = header_kid(token);
    let jwk = set.find(&kid).expect("signing key is published");
    let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e).expect("valid JWK");

    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_exp = validate_exp;
    decode::<TokenClaims>(token, &decoding_key, &validation).expect("token verifies")
}
