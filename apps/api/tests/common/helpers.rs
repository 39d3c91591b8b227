//! Test helper functions for playlist store integration tests
//!
//! Database-backed tests connect to `TEST_DATABASE_URL`. When it is unset
//! they print a notice and return early instead of failing.

#![allow(dead_code)]

use once_cell::sync::Lazy;
use openmusic_api::db;
use openmusic_shared_config::DatabaseConfig;
use sqlx::PgPool;

/// Environment variable naming the database integration tests run against
pub const TEST_DATABASE_URL_VAR: &str = "TEST_DATABASE_URL";

static TRACING: Lazy<()> = Lazy::new(|| {
    openmusic_api::telemetry::init_tracing("openmusic_api=debug");
});

/// Connect to the test database and apply migrations.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn test_pool() -> Option<PgPool> {
    Lazy::force(&TRACING);

    let url = match std::env::var(TEST_DATABASE_URL_VAR) {
        Ok(url) if !url.is_empty() => url,
        _ => {
            eprintln!("{} not set, skipping database test", TEST_DATABASE_URL_VAR);
            return None;
        }
    };

    let config = DatabaseConfig {
        max_connections: 5,
        min_connections: 0,
        ..DatabaseConfig::with_url(url)
    };

    let pool = db::create_pool(&config)
        .await
        .expect("test database should accept connections");
    db::run_migrations(&pool)
        .await
        .expect("migrations should apply to the test database");

    Some(pool)
}

/// Assert that a result contains a specific error message substring
#[macro_export]
macro_rules! assert_err_contains {
    ($result:expr, $substr:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let msg = e.to_string();
                assert!(
                    msg.contains($substr),
                    "Error message '{}' does not contain '{}'",
                    msg,
                    $substr
                );
            }
        }
    };
}
