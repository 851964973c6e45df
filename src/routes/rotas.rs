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
        pagination::Page,
        rota::{FiltroRotaList, FiltroRotaPayload, RotaList, RotaPayload},
    },
    services::rota::{FiltroRotaService, RotaService},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct RotaQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub escola_origem_id: Option<i64>,
    pub escola_destino_id: Option<i64>,
}

pub async fn list_rotas(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<RotaQuery>,
) -> ApiResult<Json<RotaList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = RotaService::list(
        &state.db,
        page,
        query.escola_origem_id,
        query.escola_destino_id,
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_rota(
    State(state): State<AppState>,
    user: SessionUser,
    Json(body): Json<RotaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let rota = RotaService::create(&state.db, user.id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Rota criada com sucesso",
            "rota": rota,
        })),
    ))
}

pub async fn get_rota(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let rota = RotaService::get(&state.db, id).await?;
    Ok(Json(json!({ "rota": rota })))
}

pub async fn update_rota(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<RotaPayload>,
) -> ApiResult<Json<Value>> {
    let rota = RotaService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Rota atualizada com sucesso",
        "rota": rota,
    })))
}

pub async fn delete_rota(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    RotaService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Rota excluída com sucesso" })))
}

// Filtros de rota salvos

#[derive(Debug, Deserialize)]
pub struct FiltroRotaQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub ativo: Option<bool>,
}

pub async fn list_filtros(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<FiltroRotaQuery>,
) -> ApiResult<Json<FiltroRotaList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = FiltroRotaService::list(&state.db, page, query.ativo).await?;
    Ok(Json(lista))
}

pub async fn create_filtro(
    State(state): State<AppState>,
    user: SessionUser,
    Json(body): Json<FiltroRotaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let filtro = FiltroRotaService::create(&state.db, user.id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Filtro criado com sucesso",
            "filtro": filtro,
        })),
    ))
}

pub async fn get_filtro(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let filtro = FiltroRotaService::get(&state.db, id).await?;
    Ok(Json(json!({ "filtro": filtro })))
}

pub async fn update_filtro(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<FiltroRotaPayload>,
) -> ApiResult<Json<Value>> {
    let filtro = FiltroRotaService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Filtro atualizado com sucesso",
        "filtro": filtro,
    })))
}

pub async fn delete_filtro(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    FiltroRotaService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Filtro excluído com sucesso" })))
}
