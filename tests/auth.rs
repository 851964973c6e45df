mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn login_creates_session() {
    let pool = common::test_pool().await;
    common::seed_user(&pool).await;
    let server = common::test_server(pool).await;

    let response = server
        .post("/login")
        .json(&json!({"login": common::LOGIN, "senha": common::SENHA}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Login realizado com sucesso");
    assert_eq!(body["user"]["login"], common::LOGIN);

    let session: Value = server.get("/session").await.json();
    assert_eq!(session["logged_in"], true);
    assert_eq!(session["user"]["login"], common::LOGIN);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let pool = common::test_pool().await;
    common::seed_user(&pool).await;
    let server = common::test_server(pool).await;

    let response = server
        .post("/login")
        .json(&json!({"login": common::LOGIN, "senha": "errada"}))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Credenciais inválidas");

    let session: Value = server.get("/session").await.json();
    assert_eq!(session["logged_in"], false);
}

#[tokio::test]
async fn login_requires_credentials() {
    let pool = common::test_pool().await;
    let server = common::test_server(pool).await;

    let response = server.post("/login").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Login e senha são obrigatórios");
}

#[tokio::test]
async fn protected_route_requires_session() {
    let pool = common::test_pool().await;
    common::seed_user(&pool).await;
    let server = common::test_server(pool).await;

    let response = server.get("/concursos").await;
    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Usuário não autenticado");
}

#[tokio::test]
async fn logout_clears_session() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server.post("/logout").await;
    response.assert_status_ok();

    let session: Value = server.get("/session").await.json();
    assert_eq!(session["logged_in"], false);
}

#[tokio::test]
async fn change_password_invalidates_old_one() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server
        .put("/change-password")
        .json(&json!({"senha_atual": common::SENHA, "nova_senha": "nova123"}))
        .await;
    response.assert_status_ok();

    server.post("/logout").await.assert_status_ok();

    let old = server
        .post("/login")
        .json(&json!({"login": common::LOGIN, "senha": common::SENHA}))
        .await;
    old.assert_status(StatusCode::UNAUTHORIZED);

    let new = server
        .post("/login")
        .json(&json!({"login": common::LOGIN, "senha": "nova123"}))
        .await;
    new.assert_status_ok();
}

#[tokio::test]
async fn change_password_checks_current_one() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server
        .put("/change-password")
        .json(&json!({"senha_atual": "errada", "nova_senha": "nova123"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Senha atual incorreta");
}

#[tokio::test]
async fn change_login_updates_session_principal() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server
        .put("/change-login")
        .json(&json!({"novo_login": "admin2"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user"]["login"], "admin2");

    let session: Value = server.get("/session").await.json();
    assert_eq!(session["logged_in"], true);
    assert_eq!(session["user"]["login"], "admin2");
}

#[tokio::test]
async fn profile_hides_password_hash() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server.get("/profile").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user"]["login"], common::LOGIN);
    assert_eq!(body["user"]["perfil"], "admin");
    assert!(body["user"].get("senha_hash").is_none());
}
