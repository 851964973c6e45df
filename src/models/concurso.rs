use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::banca::BancaOrganizadora;
use super::escola::Escola;
use super::units;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Concurso {
    pub id: i64,
    pub nome: String,
    pub data: NaiveDate,
    pub banca_organizadora_id: Option<i64>,
    pub previsao_inscritos: Option<i64>,
    pub status: String, // "ativo" | "encerrado" | "cancelado"
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, FromRow)]
pub struct ResumoContratacao {
    pub id: i64,
    pub concurso_id: i64,
    pub valor_material_limpeza_centavos: Option<i64>,
    pub valor_kit_lanche_centavos: Option<i64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VagaFuncao {
    pub id: i64,
    #[serde(skip_serializing)]
    pub resumo_contratacao_id: i64,
    pub funcao: String,
    pub quantidade: i64,
    #[serde(rename = "valor_unitario", with = "units::reais_opt")]
    pub valor_unitario_centavos: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConcursoEscola {
    pub id: i64,
    pub concurso_id: i64,
    pub escola_id: i64,
    pub tipo: Option<String>, // "indicado" | "selecionado"
    pub created_at: NaiveDateTime,
}

/// Hiring summary as it crosses the API: money in reais, vacancies embedded.
#[derive(Debug, Serialize)]
pub struct ResumoContratacaoDto {
    pub id: i64,
    pub concurso_id: i64,
    #[serde(rename = "valor_material_limpeza", with = "units::reais_opt")]
    pub valor_material_limpeza_centavos: Option<i64>,
    #[serde(rename = "valor_kit_lanche", with = "units::reais_opt")]
    pub valor_kit_lanche_centavos: Option<i64>,
    pub vagas_funcao: Vec<VagaFuncao>,
}

impl ResumoContratacaoDto {
    pub fn from_parts(resumo: ResumoContratacao, vagas: Vec<VagaFuncao>) -> Self {
        Self {
            id: resumo.id,
            concurso_id: resumo.concurso_id,
            valor_material_limpeza_centavos: resumo.valor_material_limpeza_centavos,
            valor_kit_lanche_centavos: resumo.valor_kit_lanche_centavos,
            vagas_funcao: vagas,
        }
    }
}

/// Contest↔school association joined with its school row.
#[derive(Debug, Serialize)]
pub struct LocalAplicacaoDto {
    #[serde(flatten)]
    pub associacao: ConcursoEscola,
    pub escola: Option<Escola>,
}

#[derive(Debug, Serialize)]
pub struct ConcursoDetail {
    #[serde(flatten)]
    pub concurso: Concurso,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banca_organizadora: Option<BancaOrganizadora>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resumo_contratacao: Option<ResumoContratacaoDto>,
    pub locais_aplicacao: Vec<LocalAplicacaoDto>,
}

#[derive(Debug, Serialize)]
pub struct ConcursoList {
    pub concursos: Vec<Concurso>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct ConcursoPayload {
    pub nome: Option<String>,
    pub data: Option<String>,
    pub banca_organizadora_id: Option<i64>,
    pub previsao_inscritos: Option<i64>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResumoContratacaoPayload {
    pub valor_material_limpeza: Option<f64>,
    pub valor_kit_lanche: Option<f64>,
    #[serde(default)]
    pub vagas_funcao: Vec<VagaFuncaoPayload>,
}

#[derive(Debug, Deserialize)]
pub struct VagaFuncaoPayload {
    pub funcao: Option<String>,
    pub quantidade: Option<i64>,
    pub valor_unitario: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AssociarEscolaRequest {
    pub escola_id: Option<i64>,
    pub tipo: Option<String>,
}
