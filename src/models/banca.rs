use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BancaOrganizadora {
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContatoSetorial {
    pub id: i64,
    pub banca_id: i64,
    pub setor: String, // "Financeiro", "Logistica", "Adm", "Direção", ...
    pub nome_contato: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FormularioBanca {
    pub id: i64,
    pub banca_id: i64,
    pub concurso_id: Option<i64>,
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub descricao: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct BancaDetail {
    #[serde(flatten)]
    pub banca: BancaOrganizadora,
    pub contatos_setoriais: Vec<ContatoSetorial>,
    pub formularios: Vec<FormularioBanca>,
}

#[derive(Debug, Serialize)]
pub struct BancaList {
    pub bancas: Vec<BancaOrganizadora>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct BancaPayload {
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
}

#[derive(Debug, Deserialize)]
pub struct ContatoSetorialPayload {
    pub setor: Option<String>,
    pub nome_contato: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FormularioBancaPayload {
    pub concurso_id: Option<i64>,
    pub nome_arquivo: Option<String>,
    pub caminho_arquivo: Option<String>,
    pub descricao: Option<String>,
}
