use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::auth::Usuario,
};

/// Bcrypt runs on the blocking pool so credential checks never stall the
/// async runtime.
pub async fn hash_password(senha: &str) -> ApiResult<String> {
    let senha = senha.to_string();
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(senha, bcrypt::DEFAULT_COST))
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
        .map_err(|e| ApiError::Internal(e.into()))?;
    Ok(hash)
}

pub async fn verify_password(senha: &str, stored_hash: &str) -> ApiResult<bool> {
    let senha = senha.to_string();
    let stored_hash = stored_hash.to_string();
    let ok = tokio::task::spawn_blocking(move || bcrypt::verify(senha, &stored_hash))
        .await
        .map_err(|e| ApiError::Internal(e.into()))?
        .map_err(|e| ApiError::Internal(e.into()))?;
    Ok(ok)
}

pub struct AuthService;

impl AuthService {
    /// Validate a login/password pair. Unknown logins and wrong passwords are
    /// indistinguishable to the caller.
    pub async fn verify_credentials(
        pool: &SqlitePool,
        login: &str,
        senha: &str,
    ) -> ApiResult<Usuario> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE login = $1")
            .bind(login)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Credenciais inválidas".to_string()))?;

        if !verify_password(senha, &usuario.senha_hash).await? {
            return Err(ApiError::Unauthorized("Credenciais inválidas".to_string()));
        }
        Ok(usuario)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> ApiResult<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(usuario)
    }

    pub async fn find_by_login(pool: &SqlitePool, login: &str) -> ApiResult<Option<Usuario>> {
        let usuario = sqlx::query_as::<_, Usuario>("SELECT * FROM usuarios WHERE login = $1")
            .bind(login)
            .fetch_optional(pool)
            .await?;
        Ok(usuario)
    }

    pub async fn create_user(
        pool: &SqlitePool,
        login: &str,
        senha: &str,
        perfil: &str,
    ) -> ApiResult<Usuario> {
        let senha_hash = hash_password(senha).await?;
        let usuario = sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (login, senha_hash, perfil) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(login)
        .bind(senha_hash)
        .bind(perfil)
        .fetch_one(pool)
        .await?;
        Ok(usuario)
    }

    pub async fn change_password(
        pool: &SqlitePool,
        user_id: i64,
        senha_atual: &str,
        nova_senha: &str,
    ) -> ApiResult<()> {
        let usuario = Self::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Usuário não encontrado".to_string()))?;

        if !verify_password(senha_atual, &usuario.senha_hash).await? {
            return Err(ApiError::BadRequest("Senha atual incorreta".to_string()));
        }

        let senha_hash = hash_password(nova_senha).await?;
        sqlx::query(
            "UPDATE usuarios SET senha_hash = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2",
        )
        .bind(senha_hash)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Rename the account, refusing logins already held by another user.
    pub async fn change_login(
        pool: &SqlitePool,
        user_id: i64,
        novo_login: &str,
    ) -> ApiResult<Usuario> {
        let em_uso: Option<i64> =
            sqlx::query_scalar("SELECT id FROM usuarios WHERE login = $1 AND id != $2")
                .bind(novo_login)
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        if em_uso.is_some() {
            return Err(ApiError::BadRequest("Login já está em uso".to_string()));
        }

        let usuario = sqlx::query_as::<_, Usuario>(
            "UPDATE usuarios SET login = $1, updated_at = CURRENT_TIMESTAMP WHERE id = $2 \
             RETURNING *",
        )
        .bind(novo_login)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Usuário não encontrado".to_string()))?;
        Ok(usuario)
    }
}
