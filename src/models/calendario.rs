use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventoCalendario {
    pub id: i64,
    pub usuario_id: i64,
    pub titulo: String,
    pub descricao: Option<String>,
    pub data_inicio: NaiveDateTime,
    pub data_fim: Option<NaiveDateTime>,
    pub dia_inteiro: bool,
    pub tipo_evento: Option<String>, // "reuniao" | "concurso" | "visita" | "outro"
    pub cor: String,
    pub concurso_id: Option<i64>,
    pub escola_id: Option<i64>,
    pub notificacao_email: bool,
    pub minutos_antes_notificacao: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NotificacaoEvento {
    pub id: i64,
    pub evento_id: i64,
    pub data_envio: NaiveDateTime,
    pub status: String, // "Pendente" | "Enviado" | "Erro"
    pub email_destinatario: Option<String>,
    pub mensagem_erro: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct EventoList {
    pub eventos: Vec<EventoCalendario>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct EventoPayload {
    pub titulo: Option<String>,
    pub descricao: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub dia_inteiro: Option<bool>,
    pub tipo_evento: Option<String>,
    pub cor: Option<String>,
    pub concurso_id: Option<i64>,
    pub escola_id: Option<i64>,
    pub notificacao_email: Option<bool>,
    pub minutos_antes_notificacao: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NotificacaoPayload {
    pub data_envio: Option<String>,
    pub status: Option<String>,
    pub email_destinatario: Option<String>,
    pub mensagem_erro: Option<String>,
}
