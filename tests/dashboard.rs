mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Days, Local};
use serde_json::{json, Value};

async fn criar_concurso(server: &TestServer, nome: &str, data: &str, status: &str) -> i64 {
    let response = server
        .post("/concursos")
        .json(&json!({"nome": nome, "data": data, "status": status, "previsao_inscritos": 500}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["concurso"]["id"].as_i64().unwrap()
}

async fn criar_colaborador(server: &TestServer, cpf: &str) -> i64 {
    let response = server
        .post("/colaboradores")
        .json(&json!({"nome": "João Fiscal", "cpf": cpf}))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    body["colaborador"]["id"].as_i64().unwrap()
}

async fn criar_pagamento(
    server: &TestServer,
    concurso_id: i64,
    colaborador_id: i64,
    valor: f64,
    data: &str,
    status: &str,
) {
    let response = server
        .post("/pagamentos")
        .json(&json!({
            "concurso_id": concurso_id,
            "colaborador_id": colaborador_id,
            "funcao": "Fiscal",
            "valor": valor,
            "data_pagamento": data,
            "status_pagamento": status
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn kpis_reflect_seeded_rows() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let hoje = Local::now().date_naive();
    let proximo = hoje.checked_add_days(Days::new(10)).unwrap();
    let passado = hoje.checked_sub_days(Days::new(100)).unwrap();

    let ativo = criar_concurso(&server, "Próximo", &proximo.to_string(), "ativo").await;
    criar_concurso(&server, "Antigo", &passado.to_string(), "encerrado").await;

    let escola: Value = server
        .post("/escolas")
        .json(&json!({"nome_instituicao": "Colégio Central"}))
        .await
        .json();
    let escola_id = escola["escola"]["id"].as_i64().unwrap();
    for (nome, capacidade) in [("Sala 1", 30), ("Sala 2", 20)] {
        server
            .post(&format!("/escolas/{escola_id}/salas"))
            .json(&json!({"nome": nome, "capacidade": capacidade}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let colaborador = criar_colaborador(&server, "11122233344").await;
    criar_pagamento(&server, ativo, colaborador, 100.50, &hoje.to_string(), "Pago").await;
    criar_pagamento(&server, ativo, colaborador, 50.25, &hoje.to_string(), "Pago").await;

    let body: Value = server.get("/dashboard/kpis").await.json();
    let kpis = &body["kpis"];
    assert_eq!(kpis["total_concursos"], 2);
    assert_eq!(kpis["concursos_ativos"], 1);
    assert_eq!(kpis["proximos_concursos"], 1);
    assert_eq!(kpis["total_escolas"], 1);
    assert_eq!(kpis["total_salas"], 2);
    assert_eq!(kpis["total_colaboradores"], 1);
    assert_eq!(kpis["pagamentos_mes"], 2);
    assert_eq!(kpis["valor_pagamentos_mes"], 150.75);
}

#[tokio::test]
async fn pagamentos_por_mes_groups_by_month() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let hoje = Local::now().date_naive();
    let concurso = criar_concurso(&server, "Atual", &hoje.to_string(), "ativo").await;
    let colaborador = criar_colaborador(&server, "55566677788").await;
    criar_pagamento(&server, concurso, colaborador, 100.50, &hoje.to_string(), "Pago").await;
    criar_pagamento(&server, concurso, colaborador, 50.25, &hoje.to_string(), "Pago").await;

    let body: Value = server
        .get("/dashboard/graficos/pagamentos-por-mes")
        .await
        .json();
    let dados = body["dados"].as_array().unwrap();
    assert_eq!(dados.len(), 1);
    assert_eq!(dados[0]["mes"], hoje.format("%Y-%m").to_string());
    assert_eq!(dados[0]["total_pagamentos"], 2);
    assert_eq!(dados[0]["valor_total"], 150.75);
}

#[tokio::test]
async fn concursos_por_mes_counts_trailing_year() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let hoje = Local::now().date_naive();
    let passado = hoje.checked_sub_days(Days::new(100)).unwrap();
    criar_concurso(&server, "Atual", &hoje.to_string(), "ativo").await;
    criar_concurso(&server, "Antigo", &passado.to_string(), "encerrado").await;

    let body: Value = server
        .get("/dashboard/graficos/concursos-por-mes")
        .await
        .json();
    let dados = body["dados"].as_array().unwrap();
    assert_eq!(dados.len(), 2);
    let mes_atual = hoje.format("%Y-%m").to_string();
    let atual = dados.iter().find(|d| d["mes"] == mes_atual).unwrap();
    assert_eq!(atual["total"], 1);
}

#[tokio::test]
async fn ocupacao_salas_aggregates_per_school() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let escola: Value = server
        .post("/escolas")
        .json(&json!({"nome_instituicao": "Colégio Central"}))
        .await
        .json();
    let escola_id = escola["escola"]["id"].as_i64().unwrap();
    for (nome, capacidade) in [("Sala 1", 30), ("Sala 2", 20)] {
        server
            .post(&format!("/escolas/{escola_id}/salas"))
            .json(&json!({"nome": nome, "capacidade": capacidade}))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let body: Value = server.get("/dashboard/graficos/ocupacao-salas").await.json();
    let dados = body["dados"].as_array().unwrap();
    assert_eq!(dados.len(), 1);
    assert_eq!(dados[0]["escola"], "Colégio Central");
    assert_eq!(dados[0]["total_salas"], 2);
    assert_eq!(dados[0]["capacidade_total"], 50);
    assert_eq!(dados[0]["ocupacao_percentual"], 75);
}

#[tokio::test]
async fn proximos_eventos_merge_contests_and_calendar() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let hoje = Local::now().date_naive();
    let prova = hoje.checked_add_days(Days::new(3)).unwrap();
    criar_concurso(&server, "Prova Geral", &prova.to_string(), "ativo").await;

    let amanha = Local::now()
        .naive_local()
        .checked_add_days(Days::new(1))
        .unwrap();
    server
        .post("/eventos")
        .json(&json!({
            "titulo": "Reunião",
            "data_inicio": amanha.format("%Y-%m-%dT%H:%M:%S").to_string()
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = server.get("/dashboard/proximos-eventos").await.json();
    let eventos = body["eventos"].as_array().unwrap();
    assert_eq!(eventos.len(), 2);
    // Ordenado pela data: a reunião de amanhã vem antes da prova.
    assert_eq!(eventos[0]["tipo"], "evento");
    assert_eq!(eventos[0]["titulo"], "Reunião");
    assert_eq!(eventos[1]["tipo"], "concurso");
    assert_eq!(eventos[1]["titulo"], "Prova Geral");
    assert_eq!(eventos[1]["descricao"], "Concurso - 500 inscritos previstos");
}

#[tokio::test]
async fn resumo_financeiro_splits_by_status() {
    let pool = common::test_pool().await;
    let server = common::logged_in_server(pool).await;

    let hoje = Local::now().date_naive();
    let concurso = criar_concurso(&server, "Atual", &hoje.to_string(), "ativo").await;
    let colaborador = criar_colaborador(&server, "99988877766").await;
    criar_pagamento(&server, concurso, colaborador, 100.50, &hoje.to_string(), "Pago").await;
    criar_pagamento(&server, concurso, colaborador, 50.25, &hoje.to_string(), "Pendente").await;

    let body: Value = server.get("/dashboard/resumo-financeiro").await.json();
    let resumo = &body["resumo_financeiro"];
    assert_eq!(resumo["total_pagamentos"], 150.75);
    assert_eq!(resumo["pagamentos_pendentes"]["quantidade"], 1);
    assert_eq!(resumo["pagamentos_pendentes"]["valor_total"], 50.25);
    assert_eq!(resumo["pagamentos_mes"]["quantidade"], 1);
    assert_eq!(resumo["pagamentos_mes"]["valor_total"], 100.50);
}
