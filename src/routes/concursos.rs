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
        concurso::{AssociarEscolaRequest, ConcursoList, ConcursoPayload, ResumoContratacaoPayload},
        pagination::Page,
    },
    services::concurso::ConcursoService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ConcursoQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
}

pub async fn list_concursos(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<ConcursoQuery>,
) -> ApiResult<Json<ConcursoList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = ConcursoService::list(&state.db, page, query.status.as_deref()).await?;
    Ok(Json(lista))
}

pub async fn create_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<ConcursoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let concurso = ConcursoService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Concurso criado com sucesso",
            "concurso": concurso,
        })),
    ))
}

pub async fn get_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let concurso = ConcursoService::get(&state.db, id).await?;
    Ok(Json(json!({ "concurso": concurso })))
}

pub async fn update_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<ConcursoPayload>,
) -> ApiResult<Json<Value>> {
    let concurso = ConcursoService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Concurso atualizado com sucesso",
        "concurso": concurso,
    })))
}

pub async fn delete_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    ConcursoService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Concurso excluído com sucesso" })))
}

pub async fn list_concursos_ativos(
    State(state): State<AppState>,
    _user: SessionUser,
) -> ApiResult<Json<Value>> {
    let concursos = ConcursoService::listar_ativos(&state.db).await?;
    Ok(Json(json!({ "concursos": concursos })))
}

pub async fn create_resumo_contratacao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<ResumoContratacaoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let resumo = ConcursoService::create_resumo(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Resumo de contratação criado com sucesso",
            "resumo": resumo,
        })),
    ))
}

pub async fn get_resumo_contratacao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let resumo = ConcursoService::get_resumo(&state.db, id).await?;
    Ok(Json(json!({ "resumo": resumo })))
}

pub async fn add_escola_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<AssociarEscolaRequest>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let associacao = ConcursoService::associar_escola(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Escola adicionada ao concurso com sucesso",
            "associacao": associacao,
        })),
    ))
}

pub async fn list_escolas_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let escolas = ConcursoService::listar_escolas(&state.db, id).await?;
    Ok(Json(json!({ "escolas": escolas })))
}

pub async fn remove_escola_concurso(
    State(state): State<AppState>,
    _user: SessionUser,
    Path((id, escola_id)): Path<(i64, i64)>,
) -> ApiResult<Json<Value>> {
    ConcursoService::remover_escola(&state.db, id, escola_id).await?;
    Ok(Json(json!({
        "message": "Escola removida do concurso com sucesso"
    })))
}
