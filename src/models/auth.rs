use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    pub senha_hash: String,
    pub perfil: String, // "admin" | "usuario"
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Authenticated principal kept in the server-side session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub login: String,
    pub perfil: String,
}

impl From<&Usuario> for SessionUser {
    fn from(u: &Usuario) -> Self {
        Self {
            id: u.id,
            login: u.login.clone(),
            perfil: u.perfil.clone(),
        }
    }
}

// Request DTOs. Fields stay optional so missing values surface as a 400
// from the handler's presence check, not a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: Option<String>,
    pub senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub senha_atual: Option<String>,
    pub nova_senha: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangeLoginRequest {
    pub novo_login: Option<String>,
}
