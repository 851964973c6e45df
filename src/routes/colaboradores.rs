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
        colaborador::{ColaboradorList, ColaboradorPayload, ParticipacaoPayload},
        pagination::Page,
    },
    services::colaborador::ColaboradorService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ColaboradorQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub nome: Option<String>,
}

pub async fn list_colaboradores(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<ColaboradorQuery>,
) -> ApiResult<Json<ColaboradorList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = ColaboradorService::list(&state.db, page, query.nome.as_deref()).await?;
    Ok(Json(lista))
}

pub async fn create_colaborador(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<ColaboradorPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let colaborador = ColaboradorService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Colaborador criado com sucesso",
            "colaborador": colaborador,
        })),
    ))
}

pub async fn get_colaborador(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let colaborador = ColaboradorService::get(&state.db, id).await?;
    Ok(Json(json!({ "colaborador": colaborador })))
}

pub async fn update_colaborador(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<ColaboradorPayload>,
) -> ApiResult<Json<Value>> {
    let colaborador = ColaboradorService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Colaborador atualizado com sucesso",
        "colaborador": colaborador,
    })))
}

pub async fn delete_colaborador(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    ColaboradorService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Colaborador excluído com sucesso" })))
}

pub async fn list_participacoes(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let participacoes = ColaboradorService::listar_participacoes(&state.db, id).await?;
    Ok(Json(json!({ "participacoes": participacoes })))
}

pub async fn create_participacao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<ParticipacaoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let participacao = ColaboradorService::create_participacao(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Participação registrada com sucesso",
            "participacao": participacao,
        })),
    ))
}

pub async fn delete_participacao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    ColaboradorService::delete_participacao(&state.db, id).await?;
    Ok(Json(json!({ "message": "Participação excluída com sucesso" })))
}
