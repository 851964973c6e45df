use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailEnviado {
    pub id: i64,
    pub usuario_id: i64,
    pub concurso_id: Option<i64>,
    pub data_envio: NaiveDateTime,
    pub assunto: String,
    pub corpo_email: String,
    pub total_destinatarios: i64,
    pub emails_sucesso: i64,
    pub emails_erro: i64,
    pub status: String, // "Pendente" | "Enviando" | "Concluído" | "Erro"
    pub assinatura_digital: bool,
    pub arquivo_assinatura: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailDestinatario {
    pub id: i64,
    pub email_enviado_id: i64,
    pub escola_id: Option<i64>,
    pub email_destinatario: String,
    pub nome_destinatario: Option<String>,
    pub status_envio: String, // "Pendente" | "Enviado" | "Erro"
    pub data_envio: Option<NaiveDateTime>,
    pub mensagem_erro: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TemplateEmail {
    pub id: i64,
    pub nome_template: String,
    pub assunto_padrao: Option<String>,
    pub corpo_padrao: String,
    pub variaveis_disponiveis: Option<String>, // JSON list of placeholders
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct EmailDetail {
    #[serde(flatten)]
    pub email: EmailEnviado,
    pub destinatarios: Vec<EmailDestinatario>,
}

#[derive(Debug, Serialize)]
pub struct EmailList {
    pub emails: Vec<EmailEnviado>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct TemplateEmailList {
    pub templates: Vec<TemplateEmail>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct EmailPayload {
    pub concurso_id: Option<i64>,
    pub data_envio: Option<String>,
    pub assunto: Option<String>,
    pub corpo_email: Option<String>,
    pub assinatura_digital: Option<bool>,
    pub arquivo_assinatura: Option<String>,
    #[serde(default)]
    pub destinatarios: Vec<DestinatarioPayload>,
}

#[derive(Debug, Deserialize)]
pub struct DestinatarioPayload {
    pub escola_id: Option<i64>,
    pub email_destinatario: Option<String>,
    pub nome_destinatario: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TemplateEmailPayload {
    pub nome_template: Option<String>,
    pub assunto_padrao: Option<String>,
    pub corpo_padrao: Option<String>,
    pub variaveis_disponiveis: Option<String>,
    pub ativo: Option<bool>,
}
