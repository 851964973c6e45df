use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::units;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Escola {
    pub id: i64,
    pub nome_instituicao: String,
    pub razao_social: Option<String>,
    pub cnpj: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub diretor_nome: Option<String>,
    pub diretor_cpf: Option<String>,
    pub diretor_telefone: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub localizacao_google_maps: Option<String>,
    pub codigo_energia: Option<String>,
    pub codigo_agua: Option<String>,
    pub banco: Option<String>,
    pub tipo_conta: Option<String>,
    pub numero_agencia: Option<String>,
    pub digito_agencia: Option<String>,
    pub numero_conta: Option<String>,
    pub digito_conta: Option<String>,
    pub chave_pix: Option<String>,
    pub tipo_custo: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sala {
    pub id: i64,
    pub escola_id: i64,
    pub bloco: Option<String>,
    pub andar: Option<String>,
    pub nome: String,
    pub capacidade: Option<i64>,
    #[serde(rename = "largura", with = "units::metros_opt")]
    pub largura_cm: Option<i64>,
    #[serde(rename = "comprimento", with = "units::metros_opt")]
    pub comprimento_cm: Option<i64>,
    pub mobiliario: Option<String>, // "Cadeira dupla", "Mesa com cadeira", ...
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FotoEscola {
    pub id: i64,
    pub escola_id: i64,
    pub categoria: String, // "Fachada", "Sala", "Corredor", ...
    pub nome_arquivo: String,
    pub caminho_arquivo: String,
    pub descricao: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct EscolaDetail {
    #[serde(flatten)]
    pub escola: Escola,
    pub salas: Vec<Sala>,
    pub fotos: Vec<FotoEscola>,
}

#[derive(Debug, Serialize)]
pub struct EscolaList {
    pub escolas: Vec<Escola>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct EscolaPayload {
    pub nome_instituicao: Option<String>,
    pub razao_social: Option<String>,
    pub cnpj: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub diretor_nome: Option<String>,
    pub diretor_cpf: Option<String>,
    pub diretor_telefone: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub inscricao_estadual: Option<String>,
    pub inscricao_municipal: Option<String>,
    pub localizacao_google_maps: Option<String>,
    pub codigo_energia: Option<String>,
    pub codigo_agua: Option<String>,
    pub banco: Option<String>,
    pub tipo_conta: Option<String>,
    pub numero_agencia: Option<String>,
    pub digito_agencia: Option<String>,
    pub numero_conta: Option<String>,
    pub digito_conta: Option<String>,
    pub chave_pix: Option<String>,
    pub tipo_custo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SalaPayload {
    pub bloco: Option<String>,
    pub andar: Option<String>,
    pub nome: Option<String>,
    pub capacidade: Option<i64>,
    pub largura: Option<f64>,
    pub comprimento: Option<f64>,
    pub mobiliario: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FotoEscolaPayload {
    pub categoria: Option<String>,
    pub nome_arquivo: Option<String>,
    pub caminho_arquivo: Option<String>,
    pub descricao: Option<String>,
}
