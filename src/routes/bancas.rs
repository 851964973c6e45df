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
        banca::{BancaList, BancaPayload, ContatoSetorialPayload, FormularioBancaPayload},
        pagination::Page,
    },
    services::banca::BancaService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct BancaQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

pub async fn list_bancas(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<BancaQuery>,
) -> ApiResult<Json<BancaList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = BancaService::list(&state.db, page).await?;
    Ok(Json(lista))
}

pub async fn create_banca(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<BancaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let banca = BancaService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Banca organizadora criada com sucesso",
            "banca": banca,
        })),
    ))
}

pub async fn get_banca(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let banca = BancaService::get(&state.db, id).await?;
    Ok(Json(json!({ "banca": banca })))
}

pub async fn update_banca(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<BancaPayload>,
) -> ApiResult<Json<Value>> {
    let banca = BancaService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Banca organizadora atualizada com sucesso",
        "banca": banca,
    })))
}

pub async fn delete_banca(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    BancaService::delete(&state.db, id).await?;
    Ok(Json(json!({
        "message": "Banca organizadora excluída com sucesso"
    })))
}

pub async fn list_contatos(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let contatos = BancaService::listar_contatos(&state.db, id).await?;
    Ok(Json(json!({ "contatos_setoriais": contatos })))
}

pub async fn create_contato(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<ContatoSetorialPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let contato = BancaService::create_contato(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Contato setorial criado com sucesso",
            "contato": contato,
        })),
    ))
}

pub async fn delete_contato(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    BancaService::delete_contato(&state.db, id).await?;
    Ok(Json(json!({ "message": "Contato setorial excluído com sucesso" })))
}

pub async fn list_formularios(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let formularios = BancaService::listar_formularios(&state.db, id).await?;
    Ok(Json(json!({ "formularios": formularios })))
}

pub async fn create_formulario(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<FormularioBancaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let formulario = BancaService::create_formulario(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Formulário criado com sucesso",
            "formulario": formulario,
        })),
    ))
}

pub async fn delete_formulario(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    BancaService::delete_formulario(&state.db, id).await?;
    Ok(Json(json!({ "message": "Formulário excluído com sucesso" })))
}
