use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fornecedor {
    pub id: i64,
    pub tipo_servico: String, // "Refeições", "material de limpeza", "som", ...
    pub nome: String,
    pub cnpj: String,
    pub codigo_atividade_economica: Option<String>,
    pub descricao_atividade_economica: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentoFornecedor {
    pub id: i64,
    pub fornecedor_id: i64,
    pub concurso_id: Option<i64>,
    pub tipo_documento: String, // "orcamento" | "nota_fiscal"
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub descricao: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct FornecedorDetail {
    #[serde(flatten)]
    pub fornecedor: Fornecedor,
    pub documentos: Vec<DocumentoFornecedor>,
}

#[derive(Debug, Serialize)]
pub struct FornecedorList {
    pub fornecedores: Vec<Fornecedor>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct FornecedorPayload {
    pub tipo_servico: Option<String>,
    pub nome: Option<String>,
    pub cnpj: Option<String>,
    pub codigo_atividade_economica: Option<String>,
    pub descricao_atividade_economica: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentoFornecedorPayload {
    pub concurso_id: Option<i64>,
    pub tipo_documento: Option<String>,
    pub nome_arquivo: Option<String>,
    pub caminho_arquivo: Option<String>,
    pub descricao: Option<String>,
}
