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
        calendario::{EventoList, EventoPayload, NotificacaoPayload},
        pagination::Page,
    },
    services::calendario::EventoService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EventoQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub tipo_evento: Option<String>,
    pub inicio: Option<String>,
    pub fim: Option<String>,
}

pub async fn list_eventos(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<EventoQuery>,
) -> ApiResult<Json<EventoList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = EventoService::list(
        &state.db,
        page,
        query.tipo_evento.as_deref(),
        query.inicio.as_deref(),
        query.fim.as_deref(),
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_evento(
    State(state): State<AppState>,
    user: SessionUser,
    Json(body): Json<EventoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let evento = EventoService::create(&state.db, user.id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Evento criado com sucesso",
            "evento": evento,
        })),
    ))
}

pub async fn get_evento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let evento = EventoService::find(&state.db, id).await?;
    Ok(Json(json!({ "evento": evento })))
}

pub async fn update_evento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<EventoPayload>,
) -> ApiResult<Json<Value>> {
    let evento = EventoService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Evento atualizado com sucesso",
        "evento": evento,
    })))
}

pub async fn delete_evento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    EventoService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Evento excluído com sucesso" })))
}

pub async fn list_notificacoes(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let notificacoes = EventoService::listar_notificacoes(&state.db, id).await?;
    Ok(Json(json!({ "notificacoes": notificacoes })))
}

pub async fn create_notificacao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<NotificacaoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let notificacao = EventoService::create_notificacao(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Notificação criada com sucesso",
            "notificacao": notificacao,
        })),
    ))
}
