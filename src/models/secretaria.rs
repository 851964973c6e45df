use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SecretariaMunicipal {
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
pub struct SecretariaEstadual {
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
pub struct FormularioCessao {
    pub id: i64,
    pub secretaria_municipal_id: Option<i64>,
    pub secretaria_estadual_id: Option<i64>,
    pub concurso_id: Option<i64>,
    pub escola_id: Option<i64>,
    pub data_solicitacao: NaiveDate,
    pub hora_inicio: Option<NaiveTime>,
    pub hora_fim: Option<NaiveTime>,
    pub evento_descricao: Option<String>,
    pub status: String, // "Pendente" | "Aprovado" | "Rejeitado"
    pub assinatura_eletronica: bool,
    pub data_assinatura: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnexoFormulario {
    pub id: i64,
    pub formulario_id: i64,
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub tipo_arquivo: Option<String>,
    pub tamanho_arquivo: Option<i64>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct FormularioCessaoDetail {
    #[serde(flatten)]
    pub formulario: FormularioCessao,
    pub anexos: Vec<AnexoFormulario>,
}

#[derive(Debug, Serialize)]
pub struct SecretariaMunicipalList {
    pub secretarias: Vec<SecretariaMunicipal>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct SecretariaEstadualList {
    pub secretarias: Vec<SecretariaEstadual>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct FormularioCessaoList {
    pub formularios: Vec<FormularioCessao>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct SecretariaPayload {
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
pub struct FormularioCessaoPayload {
    pub secretaria_municipal_id: Option<i64>,
    pub secretaria_estadual_id: Option<i64>,
    pub concurso_id: Option<i64>,
    pub escola_id: Option<i64>,
    pub data_solicitacao: Option<String>,
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
    pub evento_descricao: Option<String>,
    pub status: Option<String>,
    pub assinatura_eletronica: Option<bool>,
    pub data_assinatura: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnexoFormularioPayload {
    pub nome_arquivo: Option<String>,
    pub caminho_arquivo: Option<String>,
    pub tipo_arquivo: Option<String>,
    pub tamanho_arquivo: Option<i64>,
}
