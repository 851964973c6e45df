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
        secretaria::{
            AnexoFormularioPayload, FormularioCessaoList, FormularioCessaoPayload,
            SecretariaEstadualList, SecretariaMunicipalList, SecretariaPayload,
        },
    },
    services::secretaria::{
        FormularioCessaoService, SecretariaEstadualService, SecretariaMunicipalService,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SecretariaQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

// Secretarias municipais

pub async fn list_municipais(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<SecretariaQuery>,
) -> ApiResult<Json<SecretariaMunicipalList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = SecretariaMunicipalService::list(&state.db, page).await?;
    Ok(Json(lista))
}

pub async fn create_municipal(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<SecretariaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let secretaria = SecretariaMunicipalService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Secretaria criada com sucesso",
            "secretaria": secretaria,
        })),
    ))
}

pub async fn get_municipal(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let secretaria = SecretariaMunicipalService::get(&state.db, id).await?;
    Ok(Json(json!({ "secretaria": secretaria })))
}

pub async fn update_municipal(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<SecretariaPayload>,
) -> ApiResult<Json<Value>> {
    let secretaria = SecretariaMunicipalService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Secretaria atualizada com sucesso",
        "secretaria": secretaria,
    })))
}

pub async fn delete_municipal(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    SecretariaMunicipalService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Secretaria excluída com sucesso" })))
}

// Secretarias estaduais

pub async fn list_estaduais(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<SecretariaQuery>,
) -> ApiResult<Json<SecretariaEstadualList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = SecretariaEstadualService::list(&state.db, page).await?;
    Ok(Json(lista))
}

pub async fn create_estadual(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<SecretariaPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let secretaria = SecretariaEstadualService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Secretaria criada com sucesso",
            "secretaria": secretaria,
        })),
    ))
}

pub async fn get_estadual(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let secretaria = SecretariaEstadualService::get(&state.db, id).await?;
    Ok(Json(json!({ "secretaria": secretaria })))
}

pub async fn update_estadual(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<SecretariaPayload>,
) -> ApiResult<Json<Value>> {
    let secretaria = SecretariaEstadualService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Secretaria atualizada com sucesso",
        "secretaria": secretaria,
    })))
}

pub async fn delete_estadual(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    SecretariaEstadualService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Secretaria excluída com sucesso" })))
}

// Formulários de cessão

#[derive(Debug, Deserialize)]
pub struct FormularioCessaoQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub concurso_id: Option<i64>,
}

pub async fn list_formularios_cessao(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<FormularioCessaoQuery>,
) -> ApiResult<Json<FormularioCessaoList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = FormularioCessaoService::list(
        &state.db,
        page,
        query.status.as_deref(),
        query.concurso_id,
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_formulario_cessao(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<FormularioCessaoPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let formulario = FormularioCessaoService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Formulário de cessão criado com sucesso",
            "formulario": formulario,
        })),
    ))
}

pub async fn get_formulario_cessao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let formulario = FormularioCessaoService::get(&state.db, id).await?;
    Ok(Json(json!({ "formulario": formulario })))
}

pub async fn update_formulario_cessao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<FormularioCessaoPayload>,
) -> ApiResult<Json<Value>> {
    let formulario = FormularioCessaoService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Formulário de cessão atualizado com sucesso",
        "formulario": formulario,
    })))
}

pub async fn delete_formulario_cessao(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    FormularioCessaoService::delete(&state.db, id).await?;
    Ok(Json(json!({
        "message": "Formulário de cessão excluído com sucesso"
    })))
}

pub async fn list_anexos(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let anexos = FormularioCessaoService::listar_anexos(&state.db, id).await?;
    Ok(Json(json!({ "anexos": anexos })))
}

pub async fn create_anexo(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<AnexoFormularioPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let anexo = FormularioCessaoService::create_anexo(&state.db, id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Anexo adicionado com sucesso",
            "anexo": anexo,
        })),
    ))
}

pub async fn delete_anexo(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    FormularioCessaoService::delete_anexo(&state.db, id).await?;
    Ok(Json(json!({ "message": "Anexo excluído com sucesso" })))
}
