mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use sqlx::SqlitePool;

async fn criar_concurso(server: &axum_test::TestServer, nome: &str, data: &str) -> i64 {
    let response = server
        .post("/concursos")
        .json(&json!({"nome": nome, "data": data}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["concurso"]["id"].as_i64().unwrap()
}

#[tokio::test]
async fn create_and_fetch_roundtrip() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server
        .post("/concursos")
        .json(&json!({
            "nome": "Concurso PM 2025",
            "data": "2025-03-10",
            "previsao_inscritos": 1200
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Concurso criado com sucesso");
    assert_eq!(body["concurso"]["status"], "ativo");
    let id = body["concurso"]["id"].as_i64().unwrap();

    let fetched: Value = server.get(&format!("/concursos/{id}")).await.json();
    assert_eq!(fetched["concurso"]["nome"], "Concurso PM 2025");
    assert_eq!(fetched["concurso"]["data"], "2025-03-10");
    assert_eq!(fetched["concurso"]["previsao_inscritos"], 1200);
    assert_eq!(fetched["concurso"]["locais_aplicacao"], json!([]));
}

#[tokio::test]
async fn create_requires_nome_and_data() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let response = server
        .post("/concursos")
        .json(&json!({"nome": "Sem data"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Nome e data são obrigatórios");
}

#[tokio::test]
async fn list_paginates_and_echoes_page() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    criar_concurso(&server, "Primeiro", "2025-01-10").await;
    criar_concurso(&server, "Segundo", "2025-02-10").await;
    criar_concurso(&server, "Terceiro", "2025-03-10").await;

    let body: Value = server.get("/concursos?page=2&per_page=1").await.json();
    let concursos = body["concursos"].as_array().unwrap();
    assert_eq!(concursos.len(), 1);
    assert_eq!(concursos[0]["nome"], "Segundo");
    assert_eq!(body["total"], 3);
    assert_eq!(body["pages"], 3);
    assert_eq!(body["current_page"], 2);
}

#[tokio::test]
async fn list_filters_by_status() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    criar_concurso(&server, "Aberto", "2025-01-10").await;
    let response = server
        .post("/concursos")
        .json(&json!({"nome": "Fechado", "data": "2024-01-10", "status": "encerrado"}))
        .await;
    response.assert_status(StatusCode::CREATED);

    let body: Value = server.get("/concursos?status=encerrado").await.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["concursos"][0]["nome"], "Fechado");
}

#[tokio::test]
async fn update_touches_only_sent_fields() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let id = criar_concurso(&server, "Original", "2025-01-10").await;

    let response = server
        .put(&format!("/concursos/{id}"))
        .json(&json!({"status": "encerrado"}))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Concurso atualizado com sucesso");
    assert_eq!(body["concurso"]["nome"], "Original");
    assert_eq!(body["concurso"]["status"], "encerrado");
}

#[tokio::test]
async fn delete_removes_row() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let id = criar_concurso(&server, "Descartável", "2025-01-10").await;

    let response = server.delete(&format!("/concursos/{id}")).await;
    response.assert_status_ok();

    let missing = server.get(&format!("/concursos/{id}")).await;
    missing.assert_status(StatusCode::NOT_FOUND);
    let body: Value = missing.json();
    assert_eq!(body["error"], "Concurso não encontrado");
}

async fn contar(pool: &SqlitePool, sql: &str) -> i64 {
    sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
}

#[tokio::test]
async fn duplicate_school_association_is_rejected() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool.clone()).await;

    let concurso_id = criar_concurso(&server, "Com escolas", "2025-05-10").await;
    let escola: Value = server
        .post("/escolas")
        .json(&json!({"nome_instituicao": "Escola Modelo"}))
        .await
        .json();
    let escola_id = escola["escola"]["id"].as_i64().unwrap();

    let primeira = server
        .post(&format!("/concursos/{concurso_id}/escolas"))
        .json(&json!({"escola_id": escola_id, "tipo": "indicado"}))
        .await;
    primeira.assert_status(StatusCode::CREATED);

    let segunda = server
        .post(&format!("/concursos/{concurso_id}/escolas"))
        .json(&json!({"escola_id": escola_id}))
        .await;
    segunda.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = segunda.json();
    assert_eq!(body["error"], "Escola já está associada a este concurso");

    assert_eq!(contar(&pool, "SELECT COUNT(*) FROM concurso_escola").await, 1);
}

#[tokio::test]
async fn resumo_rolls_back_when_a_vaga_is_invalid() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool.clone()).await;

    let id = criar_concurso(&server, "Com resumo", "2025-05-10").await;

    let response = server
        .post(&format!("/concursos/{id}/resumo-contratacao"))
        .json(&json!({
            "valor_material_limpeza": 150.0,
            "vagas_funcao": [
                {"funcao": "Fiscal", "quantidade": 10, "valor_unitario": 25.5},
                {"quantidade": 5}
            ]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Função e quantidade são obrigatórias para cada vaga");

    // A transação inteira deve ter sido desfeita.
    assert_eq!(
        contar(&pool, "SELECT COUNT(*) FROM resumos_contratacao").await,
        0
    );
    assert_eq!(contar(&pool, "SELECT COUNT(*) FROM vagas_funcao").await, 0);

    let valido = server
        .post(&format!("/concursos/{id}/resumo-contratacao"))
        .json(&json!({
            "valor_material_limpeza": 150.0,
            "vagas_funcao": [
                {"funcao": "Fiscal", "quantidade": 10, "valor_unitario": 25.5}
            ]
        }))
        .await;
    valido.assert_status(StatusCode::CREATED);
    let body: Value = valido.json();
    assert_eq!(body["resumo"]["valor_material_limpeza"], 150.0);
    assert_eq!(body["resumo"]["vagas_funcao"][0]["valor_unitario"], 25.5);

    let fetched: Value = server
        .get(&format!("/concursos/{id}/resumo-contratacao"))
        .await
        .json();
    assert_eq!(fetched["resumo"]["vagas_funcao"][0]["funcao"], "Fiscal");
    assert_eq!(fetched["resumo"]["vagas_funcao"][0]["quantidade"], 10);
}

#[tokio::test]
async fn resumo_is_unique_per_concurso() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let id = criar_concurso(&server, "Único resumo", "2025-05-10").await;

    let payload = json!({"valor_kit_lanche": 12.5, "vagas_funcao": []});
    let primeira = server
        .post(&format!("/concursos/{id}/resumo-contratacao"))
        .json(&payload)
        .await;
    primeira.assert_status(StatusCode::CREATED);

    let segunda = server
        .post(&format!("/concursos/{id}/resumo-contratacao"))
        .json(&payload)
        .await;
    segunda.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = segunda.json();
    assert_eq!(
        body["error"],
        "Resumo de contratação já existe para este concurso"
    );
}

#[tokio::test]
async fn listar_ativos_skips_encerrados() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    criar_concurso(&server, "Ativo", "2025-05-10").await;
    server
        .post("/concursos")
        .json(&json!({"nome": "Encerrado", "data": "2024-01-10", "status": "encerrado"}))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/concursos/ativos").await.json();
    let concursos = body["concursos"].as_array().unwrap();
    assert_eq!(concursos.len(), 1);
    assert_eq!(concursos[0]["nome"], "Ativo");
}
