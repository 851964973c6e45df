use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Colaborador {
    pub id: i64,
    pub nome: String,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub rg: Option<String>,
    pub orgao_emissor: Option<String>,
    pub data_expedicao: Option<NaiveDate>,
    pub cpf: String,
    pub pis_pasep: Option<String>,
    pub banco: Option<String>,
    pub tipo_conta: Option<String>,
    pub numero_agencia: Option<String>,
    pub digito_agencia: Option<String>,
    pub numero_conta: Option<String>,
    pub digito_conta: Option<String>,
    pub chave_pix: Option<String>,
    pub data_nascimento: Option<NaiveDate>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub escolaridade: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParticipacaoEvento {
    pub id: i64,
    pub colaborador_id: i64,
    pub concurso_id: i64,
    pub escola_id: Option<i64>,
    pub funcao: String,
    pub coordenador_local: Option<String>,
    pub assistente: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct ColaboradorDetail {
    #[serde(flatten)]
    pub colaborador: Colaborador,
    pub participacoes: Vec<ParticipacaoEvento>,
}

#[derive(Debug, Serialize)]
pub struct ColaboradorList {
    pub colaboradores: Vec<Colaborador>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct ColaboradorPayload {
    pub nome: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cep: Option<String>,
    pub municipio: Option<String>,
    pub uf: Option<String>,
    pub rg: Option<String>,
    pub orgao_emissor: Option<String>,
    pub data_expedicao: Option<String>,
    pub cpf: Option<String>,
    pub pis_pasep: Option<String>,
    pub banco: Option<String>,
    pub tipo_conta: Option<String>,
    pub numero_agencia: Option<String>,
    pub digito_agencia: Option<String>,
    pub numero_conta: Option<String>,
    pub digito_conta: Option<String>,
    pub chave_pix: Option<String>,
    pub data_nascimento: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub escolaridade: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParticipacaoPayload {
    pub concurso_id: Option<i64>,
    pub escola_id: Option<i64>,
    pub funcao: Option<String>,
    pub coordenador_local: Option<String>,
    pub assistente: Option<String>,
}
