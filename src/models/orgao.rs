use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrgaoPublico {
    pub id: i64,
    pub nome: String,
    pub cnpj: String,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub contato_responsavel: Option<String>,
    pub telefone_contato: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentoOrgao {
    pub id: i64,
    pub orgao_id: i64,
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub tipo_documento: Option<String>,
    pub descricao: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EntregaOficio {
    pub id: i64,
    pub data_envio: NaiveDate,
    pub destinatario_id: i64,
    pub tipo_oficio: String,
    pub status: String, // "Pendente" | "Entregue" | "Lido"
    pub observacoes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct OrgaoDetail {
    #[serde(flatten)]
    pub orgao: OrgaoPublico,
    pub documentos: Vec<DocumentoOrgao>,
}

#[derive(Debug, Serialize)]
pub struct OrgaoList {
    pub orgaos: Vec<OrgaoPublico>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct OficioList {
    pub oficios: Vec<EntregaOficio>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct OrgaoPayload {
    pub nome: Option<String>,
    pub cnpj: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub contato_responsavel: Option<String>,
    pub telefone_contato: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentoOrgaoPayload {
    pub nome_arquivo: Option<String>,
    pub caminho_arquivo: Option<String>,
    pub tipo_documento: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OficioPayload {
    pub data_envio: Option<String>,
    pub destinatario_id: Option<i64>,
    pub tipo_oficio: Option<String>,
    pub status: Option<String>,
    pub observacoes: Option<String>,
}
