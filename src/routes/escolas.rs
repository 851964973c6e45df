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
        escola::{EscolaList, EscolaPayload, FotoEscolaPayload, SalaPayload},
        pagination::Page,
    },
    services::escola::EscolaService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EscolaQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub municipio: Option<String>,
}

pub async fn list_escolas(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<EscolaQuery>,
) -> ApiResult<Json<EscolaList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = EscolaService::list(&state.db, page, query.municipio.as_deref()).await?;
    Ok(Json(lista))
}

pub async fn create_escola(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<EscolaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let escola = EscolaService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Escola criada com sucesso",
            "escola": escola,
        })),
    ))
}

pub async fn get_escola(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let escola = EscolaService::get(&state.db, id).await?;
    Ok(Json(json!({ "escola": escola })))
}

pub async fn update_escola(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<EscolaPayload>,
) -> ApiResult<Json<Value>> {
    let escola = EscolaService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Escola atualizada com sucesso",
        "escola": escola,
    })))
}

pub async fn delete_escola(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    EscolaService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Escola excluída com sucesso" })))
}

// Salas

pub async fn list_salas(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let salas = EscolaService::listar_salas(&state.db, id).await?;
    Ok(Json(json!({ "salas": salas })))
}

pub async fn create_sala(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<SalaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let sala = EscolaService::create_sala(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Sala criada com sucesso",
            "sala": sala,
        })),
    ))
}

pub async fn update_sala(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<SalaPayload>,
) -> ApiResult<Json<Value>> {
    let sala = EscolaService::update_sala(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Sala atualizada com sucesso",
        "sala": sala,
    })))
}

pub async fn delete_sala(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    EscolaService::delete_sala(&state.db, id).await?;
    Ok(Json(json!({ "message": "Sala excluída com sucesso" })))
}

// Fotos

pub async fn list_fotos(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let fotos = EscolaService::listar_fotos(&state.db, id).await?;
    Ok(Json(json!({ "fotos": fotos })))
}

pub async fn create_foto(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<FotoEscolaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let foto = EscolaService::create_foto(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Foto adicionada com sucesso",
            "foto": foto,
        })),
    ))
}

pub async fn delete_foto(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    EscolaService::delete_foto(&state.db, id).await?;
    Ok(Json(json!({ "message": "Foto excluída com sucesso" })))
}
