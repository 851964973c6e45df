use axum::{extract::State, Json};
use serde_json::{json, Value};
use tower_sessions::Session;

use crate::{
    error::{ApiError, ApiResult},
    middleware::auth::SESSION_USER_KEY,
    models::auth::{ChangeLoginRequest, ChangePasswordRequest, LoginRequest, SessionUser},
    services::{auth::AuthService, non_blank},
    AppState,
};

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<Value>> {
    let (Some(login), Some(senha)) = (non_blank(&body.login), non_blank(&body.senha)) else {
        return Err(ApiError::BadRequest(
            "Login e senha são obrigatórios".to_string(),
        ));
    };

    let usuario = AuthService::verify_credentials(&state.db, login, senha).await?;
    session
        .insert(SESSION_USER_KEY, SessionUser::from(&usuario))
        .await?;

    Ok(Json(json!({
        "message": "Login realizado com sucesso",
        "user": usuario,
    })))
}

pub async fn logout(session: Session) -> ApiResult<Json<Value>> {
    session.flush().await?;
    Ok(Json(json!({ "message": "Logout realizado com sucesso" })))
}

/// Session probe used by the frontend on boot. Never 401s; an expired or
/// dangling session simply reports `logged_in: false`.
pub async fn check_session(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<Value>> {
    if let Some(sessao) = session.get::<SessionUser>(SESSION_USER_KEY).await? {
        if let Some(usuario) = AuthService::find_by_id(&state.db, sessao.id).await? {
            return Ok(Json(json!({ "logged_in": true, "user": usuario })));
        }
    }
    Ok(Json(json!({ "logged_in": false })))
}

pub async fn change_password(
    State(state): State<AppState>,
    user: SessionUser,
    Json(body): Json<ChangePasswordRequest>,
) -> ApiResult<Json<Value>> {
    let (Some(senha_atual), Some(nova_senha)) = (
        non_blank(&body.senha_atual),
        non_blank(&body.nova_senha),
    ) else {
        return Err(ApiError::BadRequest(
            "Senha atual e nova senha são obrigatórias".to_string(),
        ));
    };

    AuthService::change_password(&state.db, user.id, senha_atual, nova_senha).await?;
    Ok(Json(json!({ "message": "Senha alterada com sucesso" })))
}

pub async fn change_login(
    State(state): State<AppState>,
    session: Session,
    user: SessionUser,
    Json(body): Json<ChangeLoginRequest>,
) -> ApiResult<Json<Value>> {
    let Some(novo_login) = non_blank(&body.novo_login) else {
        return Err(ApiError::BadRequest("Novo login é obrigatório".to_string()));
    };

    let usuario = AuthService::change_login(&state.db, user.id, novo_login).await?;
    // Keep the stored principal in step with the renamed login.
    session
        .insert(SESSION_USER_KEY, SessionUser::from(&usuario))
        .await?;

    Ok(Json(json!({
        "message": "Login alterado com sucesso",
        "user": usuario,
    })))
}

pub async fn profile(State(state): State<AppState>, user: SessionUser) -> ApiResult<Json<Value>> {
    let usuario = AuthService::find_by_id(&state.db, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuário não encontrado".to_string()))?;
    Ok(Json(json!({ "user": usuario })))
}
