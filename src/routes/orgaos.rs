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
        orgao::{DocumentoOrgaoPayload, OficioList, OficioPayload, OrgaoList, OrgaoPayload},
        pagination::Page,
    },
    services::orgao::{OficioService, OrgaoService},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct OrgaoQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

pub async fn list_orgaos(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<OrgaoQuery>,
) -> ApiResult<Json<OrgaoList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = OrgaoService::list(&state.db, page).await?;
    Ok(Json(lista))
}

pub async fn create_orgao(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<OrgaoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let orgao = OrgaoService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Órgão criado com sucesso",
            "orgao": orgao,
        })),
    ))
}

pub async fn get_orgao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let orgao = OrgaoService::get(&state.db, id).await?;
    Ok(Json(json!({ "orgao": orgao })))
}

pub async fn update_orgao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<OrgaoPayload>,
) -> ApiResult<Json<Value>> {
    let orgao = OrgaoService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Órgão atualizado com sucesso",
        "orgao": orgao,
    })))
}

pub async fn delete_orgao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    OrgaoService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Órgão excluído com sucesso" })))
}

pub async fn list_documentos(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let documentos = OrgaoService::listar_documentos(&state.db, id).await?;
    Ok(Json(json!({ "documentos": documentos })))
}

pub async fn create_documento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<DocumentoOrgaoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let documento = OrgaoService::create_documento(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Documento adicionado com sucesso",
            "documento": documento,
        })),
    ))
}

pub async fn delete_documento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    OrgaoService::delete_documento(&state.db, id).await?;
    Ok(Json(json!({ "message": "Documento excluído com sucesso" })))
}

// Entregas de ofício

#[derive(Debug, Deserialize)]
pub struct OficioQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub destinatario_id: Option<i64>,
}

pub async fn list_oficios(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<OficioQuery>,
) -> ApiResult<Json<OficioList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = OficioService::list(
        &state.db,
        page,
        query.status.as_deref(),
        query.destinatario_id,
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_oficio(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<OficioPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let oficio = OficioService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Ofício criado com sucesso",
            "oficio": oficio,
        })),
    ))
}

pub async fn get_oficio(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let oficio = OficioService::get(&state.db, id).await?;
    Ok(Json(json!({ "oficio": oficio })))
}

pub async fn update_oficio(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<OficioPayload>,
) -> ApiResult<Json<Value>> {
    let oficio = OficioService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Ofício atualizado com sucesso",
        "oficio": oficio,
    })))
}

pub async fn delete_oficio(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    OficioService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Ofício excluído com sucesso" })))
}
