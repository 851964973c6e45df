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
        comunicacao::{EmailList, EmailPayload, TemplateEmailList, TemplateEmailPayload},
        pagination::Page,
    },
    services::comunicacao::{EmailService, TemplateEmailService},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub status: Option<String>,
    pub concurso_id: Option<i64>,
}

pub async fn list_emails(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<EmailQuery>,
) -> ApiResult<Json<EmailList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = EmailService::list(
        &state.db,
        page,
        query.status.as_deref(),
        query.concurso_id,
    )
    .await?;
    Ok(Json(lista))
}

pub async fn create_email(
    State(state): State<AppState>,
    user: SessionUser,
    Json(body): Json<EmailPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let email = EmailService::create(&state.db, user.id, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Email registrado com sucesso",
            "email": email,
        })),
    ))
}

pub async fn get_email(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let email = EmailService::get(&state.db, id).await?;
    Ok(Json(json!({ "email": email })))
}

pub async fn delete_email(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    EmailService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Email excluído com sucesso" })))
}

// Templates de email

#[derive(Debug, Deserialize)]
pub struct TemplateQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub ativo: Option<bool>,
}

pub async fn list_templates(
    State(state): State<AppState>,
    _user: SessionUser,
    Query(query): Query<TemplateQuery>,
) -> ApiResult<Json<TemplateEmailList>> {
    let page = Page::from_query(query.page, query.per_page);
    let lista = TemplateEmailService::list(&state.db, page, query.ativo).await?;
    Ok(Json(lista))
}

pub async fn create_template(
    State(state): State<AppState>,
    _user: SessionUser,
    Json(body): Json<TemplateEmailPayload>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let template = TemplateEmailService::create(&state.db, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Template criado com sucesso",
            "template": template,
        })),
    ))
}

pub async fn get_template(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    let template = TemplateEmailService::get(&state.db, id).await?;
    Ok(Json(json!({ "template": template })))
}

pub async fn update_template(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
    Json(body): Json<TemplateEmailPayload>,
) -> ApiResult<Json<Value>> {
    let template = TemplateEmailService::update(&state.db, id, &body).await?;
    Ok(Json(json!({
        "message": "Template atualizado com sucesso",
        "template": template,
    })))
}

pub async fn delete_template(
    State(state): State<AppState>,
    _user: SessionUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<Value>> {
    TemplateEmailService::delete(&state.db, id).await?;
    Ok(Json(json!({ "message": "Template excluído com sucesso" })))
}
