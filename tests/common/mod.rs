use std::str::FromStr;
use std::sync::Arc;

use axum_test::TestServer;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use concursos_api::config::Config;
use concursos_api::services::auth::AuthService;
use concursos_api::{db, routes, AppState};

pub const LOGIN: &str = "betha";
pub const SENHA: &str = "12345";

/// In-memory database with the full schema applied. A single connection
/// keeps every query against the same memory store.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origin: "http://localhost:5173".to_string(),
        session_ttl_hours: 1,
    }
}

/// Full router over `pool` with an in-memory session store. Cookies are
/// kept between requests so a login carries over to later calls.
pub async fn test_server(pool: SqlitePool) -> TestServer {
    let state = AppState {
        db: pool,
        config: Arc::new(test_config()),
    };
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(time::Duration::hours(1)));
    let app = routes::create_router(state).layer(session_layer);

    let mut server = TestServer::new(app).unwrap();
    server.save_cookies();
    server
}

pub async fn seed_user(pool: &SqlitePool) {
    AuthService::create_user(pool, LOGIN, SENHA, "admin")
        .await
        .unwrap();
}

pub async fn login(server: &TestServer) {
    let response = server
        .post("/login")
        .json(&serde_json::json!({"login": LOGIN, "senha": SENHA}))
        .await;
    response.assert_status_ok();
}

/// Server with a seeded admin already signed in.
pub async fn logged_in_server(pool: SqlitePool) -> TestServer {
    seed_user(&pool).await;
    let server = test_server(pool).await;
    login(&server).await;
    server
}
