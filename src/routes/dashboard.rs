use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    error::ApiResult, models::auth::SessionUser, services::dashboard::DashboardService, AppState,
};

pub async fn kpis(State(state): State<AppState>, _user: SessionUser) -> ApiResult<Json<Value>> {
    let kpis = DashboardService::kpis(&state.db).await?;
    Ok(Json(json!({ "kpis": kpis })))
}

pub async fn concursos_por_mes(
    State(state): State<AppState>,
    _user: SessionUser,
) -> ApiResult<Json<Value>> {
    let dados = DashboardService::concursos_por_mes(&state.db).await?;
    Ok(Json(json!({ "dados": dados })))
}

pub async fn ocupacao_salas(
    State(state): State<AppState>,
    _user: SessionUser,
) -> ApiResult<Json<Value>> {
    let dados = DashboardService::ocupacao_salas(&state.db).await?;
    Ok(Json(json!({ "dados": dados })))
}

pub async fn proximos_eventos(
    State(state): State<AppState>,
    _user: SessionUser,
) -> ApiResult<Json<Value>> {
    let eventos = DashboardService::proximos_eventos(&state.db).await?;
    Ok(Json(json!({ "eventos": eventos })))
}

pub async fn pagamentos_por_mes(
    State(state): State<AppState>,
    _user: SessionUser,
) -> ApiResult<Json<Value>> {
    let dados = DashboardService::pagamentos_por_mes(&state.db).await?;
    Ok(Json(json!({ "dados": dados })))
}

pub async fn resumo_financeiro(
    State(state): State<AppState>,
    _user: SessionUser,
) -> ApiResult<Json<Value>> {
    let resumo = DashboardService::resumo_financeiro(&state.db).await?;
    Ok(Json(json!({ "resumo_financeiro": resumo })))
}
