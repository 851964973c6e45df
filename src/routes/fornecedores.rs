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
        fornecedor::{DocumentoFornecedorPayload, FornecedorList, FornecedorPayload},
        pagination::Page,
    },
    services::fornecedor::FornecedorService,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct FornecedorQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub tipo_servico: Option<String>,
}

pub async fn list_fornecedores(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<FornecedorQuery>,
) -> ApiResult<Json<FornecedorList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = FornecedorService::list(&state.db, page, query.tipo_servico.as_deref()).await?;
    Ok(Json(lista))
}

pub async fn create_fornecedor(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<FornecedorPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let fornecedor = FornecedorService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Fornecedor criado com sucesso",
            "fornecedor": fornecedor,
        })),
    ))
}

pub async fn get_fornecedor(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let fornecedor = FornecedorService::get(&state.db, id).await?;
    Ok(Json(json!({ "fornecedor": fornecedor })))
}

pub async fn update_fornecedor(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<FornecedorPayload>,
) -> ApiResult<Json<Value>> {
    let fornecedor = FornecedorService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Fornecedor atualizado com sucesso",
        "fornecedor": fornecedor,
    })))
}

pub async fn delete_fornecedor(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    FornecedorService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Fornecedor excluído com sucesso" })))
}

pub async fn list_documentos(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let documentos = FornecedorService::listar_documentos(&state.db, id).await?;
    Ok(Json(json!({ "documentos": documentos })))
}

pub async fn create_documento(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<DocumentoFornecedorPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let documento = FornecedorService::create_documento(&state.db, id, &body).await?;
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
    FornecedorService::delete_documento(&state.db, id).await?;
    Ok(Json(json!({ "message": "Documento excluído com sucesso" })))
}
