use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::ApiResult,
    models::{
        auth::SessionUser,
        financeiro::{AjudaCustoList, AjudaCustoPayload, PagamentoList, PagamentoPayload},
        pagination::Page,
    },
    services::financeiro::{AjudaCustoService, PagamentoService},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct PagamentoQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub concurso_id: Option<i64>,
}

pub async fn list_pagamentos(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<PagamentoQuery>,
) -> ApiResult<Json<PagamentoList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = PagamentoService::list(
        &state.db,
        page,
        query.status.as_deref(),
        query.concurso_id,
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_pagamento(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<PagamentoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let pagamento = PagamentoService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Pagamento criado com sucesso",
            "pagamento": pagamento,
        })),
    ))
}

pub async fn get_pagamento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let pagamento = PagamentoService::get(&state.db, id).await?;
    Ok(Json(json!({ "pagamento": pagamento })))
}

pub async fn update_pagamento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<PagamentoPayload>,
) -> ApiResult<Json<Value>> {
    let pagamento = PagamentoService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Pagamento atualizado com sucesso",
        "pagamento": pagamento,
    })))
}

pub async fn delete_pagamento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    PagamentoService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Pagamento excluído com sucesso" })))
}

#[derive(Debug, Deserialize)]
pub struct AjudaCustoQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub colaborador_id: Option<i64>,
}

pub async fn list_ajudas_custo(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<AjudaCustoQuery>,
) -> ApiResult<Json<AjudaCustoList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = AjudaCustoService::list(
        &state.db,
        page,
        query.status.as_deref(),
        query.colaborador_id,
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_ajuda_custo(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<AjudaCustoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let ajuda = AjudaCustoService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Ajuda de custo criada com sucesso",
            "ajuda_custo": ajuda,
        })),
    ))
}

pub async fn get_ajuda_custo(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let ajuda = AjudaCustoService::get(&state.db, id).await?;
    Ok(Json(json!({ "ajuda_custo": ajuda })))
}

pub async fn update_ajuda_custo(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<AjudaCustoPayload>,
) -> ApiResult<Json<Value>> {
    let ajuda = AjudaCustoService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Ajuda de custo atualizada com sucesso",
        "ajuda_custo": ajuda,
    })))
}

pub async fn delete_ajuda_custo(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    AjudaCustoService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Ajuda de custo excluída com sucesso" })))
}
