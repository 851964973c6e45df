use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::units;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pagamento {
    pub id: i64,
    pub concurso_id: i64,
    pub escola_id: Option<i64>,
    pub colaborador_id: i64,
    pub funcao: String,
    #[serde(rename = "valor", with = "units::reais")]
    pub valor_centavos: i64,
    pub data_pagamento: Option<NaiveDate>,
    pub status_pagamento: String, // "Pendente" | "Pago" | "Cancelado"
    pub chave_pix_utilizada: Option<String>,
    pub observacoes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AjudaCusto {
    pub id: i64,
    pub colaborador_id: i64,
    pub concurso_id: i64,
    pub tipo_ajuda: String, // "Transporte", "Alimentação", "Hospedagem", ...
    #[serde(rename = "valor", with = "units::reais")]
    pub valor_centavos: i64,
    pub data_pagamento: Option<NaiveDate>,
    pub status_pagamento: String,
    pub justificativa: Option<String>,
    pub comprovante_arquivo: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct PagamentoList {
    pub pagamentos: Vec<Pagamento>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct AjudaCustoList {
    pub ajudas_custo: Vec<AjudaCusto>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct PagamentoPayload {
    pub concurso_id: Option<i64>,
    pub escola_id: Option<i64>,
    pub colaborador_id: Option<i64>,
    pub funcao: Option<String>,
    pub valor: Option<f64>,
    pub data_pagamento: Option<String>,
    pub status_pagamento: Option<String>,
    pub chave_pix_utilizada: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AjudaCustoPayload {
    pub colaborador_id: Option<i64>,
    pub concurso_id: Option<i64>,
    pub tipo_ajuda: Option<String>,
    pub valor: Option<f64>,
    pub data_pagamento: Option<String>,
    pub status_pagamento: Option<String>,
    pub justificativa: Option<String>,
    pub comprovante_arquivo: Option<String>,
}
