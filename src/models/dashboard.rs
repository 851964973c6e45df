use serde::Serialize;
use sqlx::FromRow;

use super::units;

#[derive(Debug, Serialize)]
pub struct DashboardKpis {
    pub total_concursos: i64,
    pub concursos_ativos: i64,
    pub total_escolas: i64,
    pub total_salas: i64,
    pub total_colaboradores: i64,
    pub pagamentos_mes: i64,
    #[serde(rename = "valor_pagamentos_mes", with = "units::reais")]
    pub valor_pagamentos_mes_centavos: i64,
    pub proximos_concursos: i64,
}

/// One bar of the contests-per-month chart; `mes` is `YYYY-MM`.
#[derive(Debug, Serialize, FromRow)]
pub struct ConcursosMes {
    pub mes: String,
    pub total: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct PagamentosMes {
    pub mes: String,
    pub total_pagamentos: i64,
    #[serde(rename = "valor_total", with = "units::reais")]
    pub valor_total_centavos: i64,
}

#[derive(Debug, Serialize)]
pub struct OcupacaoEscola {
    pub escola: String,
    pub total_salas: i64,
    pub capacidade_total: i64,
    pub ocupacao_percentual: i64,
}

/// Merged upcoming-agenda entry; `data` keeps the serialized date string so
/// contests (dates) and calendar events (datetimes) sort together.
#[derive(Debug, Serialize)]
pub struct ProximoEvento {
    pub tipo: String, // "concurso" | "evento"
    pub titulo: String,
    pub data: String,
    pub descricao: String,
}

#[derive(Debug, Serialize)]
pub struct StatusPagamentos {
    pub quantidade: i64,
    #[serde(rename = "valor_total", with = "units::reais")]
    pub valor_total_centavos: i64,
}

#[derive(Debug, Serialize)]
pub struct ResumoFinanceiro {
    #[serde(rename = "total_pagamentos", with = "units::reais")]
    pub total_pagamentos_centavos: i64,
    pub pagamentos_pendentes: StatusPagamentos,
    pub pagamentos_mes: StatusPagamentos,
}
