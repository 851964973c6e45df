use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime};
use sqlx::SqlitePool;

use crate::{
    error::ApiResult,
    models::dashboard::{
        ConcursosMes, DashboardKpis, OcupacaoEscola, PagamentosMes, ProximoEvento,
        ResumoFinanceiro, StatusPagamentos,
    },
};

/// First and last day of the month containing `hoje`, both inclusive.
fn month_bounds(hoje: NaiveDate) -> (NaiveDate, NaiveDate) {
    let inicio = hoje.with_day(1).unwrap_or(hoje);
    let fim = inicio
        .checked_add_days(Days::new(32))
        .and_then(|d| d.with_day(1))
        .and_then(|d| d.pred_opt())
        .unwrap_or(hoje);
    (inicio, fim)
}

/// Start of the twelve-month chart window: first of the current month
/// minus 365 days.
fn trailing_year_start(hoje: NaiveDate) -> NaiveDate {
    hoje.with_day(1)
        .and_then(|d| d.checked_sub_days(Days::new(365)))
        .unwrap_or(hoje)
}

pub struct DashboardService;

impl DashboardService {
    pub async fn kpis(pool: &SqlitePool) -> ApiResult<DashboardKpis> {
        let hoje = Local::now().date_naive();
        let (inicio_mes, fim_mes) = month_bounds(hoje);
        let limite = hoje.checked_add_days(Days::new(30)).unwrap_or(hoje);

        let total_concursos: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM concursos")
            .fetch_one(pool)
            .await?;
        let concursos_ativos: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM concursos WHERE status = 'ativo'")
                .fetch_one(pool)
                .await?;
        let total_escolas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM escolas")
            .fetch_one(pool)
            .await?;
        let total_salas: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM salas")
            .fetch_one(pool)
            .await?;
        let total_colaboradores: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM colaboradores")
            .fetch_one(pool)
            .await?;

        let pagamentos_mes: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pagamentos WHERE data_pagamento >= $1 AND data_pagamento <= $2",
        )
        .bind(inicio_mes)
        .bind(fim_mes)
        .fetch_one(pool)
        .await?;
        let valor_pagamentos_mes_centavos: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(valor_centavos), 0) FROM pagamentos
             WHERE data_pagamento >= $1 AND data_pagamento <= $2",
        )
        .bind(inicio_mes)
        .bind(fim_mes)
        .fetch_one(pool)
        .await?;

        let proximos_concursos: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM concursos
             WHERE status = 'ativo' AND data >= $1 AND data <= $2",
        )
        .bind(hoje)
        .bind(limite)
        .fetch_one(pool)
        .await?;

        Ok(DashboardKpis {
            total_concursos,
            concursos_ativos,
            total_escolas,
            total_salas,
            total_colaboradores,
            pagamentos_mes,
            valor_pagamentos_mes_centavos,
            proximos_concursos,
        })
    }

    pub async fn concursos_por_mes(pool: &SqlitePool) -> ApiResult<Vec<ConcursosMes>> {
        let inicio = trailing_year_start(Local::now().date_naive());
        let dados = sqlx::query_as::<_, ConcursosMes>(
            "SELECT strftime('%Y-%m', data) AS mes, COUNT(id) AS total
             FROM concursos
             WHERE data >= $1
             GROUP BY strftime('%Y-%m', data)
             ORDER BY mes",
        )
        .bind(inicio)
        .fetch_all(pool)
        .await?;
        Ok(dados)
    }

    pub async fn ocupacao_salas(pool: &SqlitePool) -> ApiResult<Vec<OcupacaoEscola>> {
        let linhas = sqlx::query_as::<_, (String, i64, i64)>(
            "SELECT e.nome_instituicao, COUNT(s.id), COALESCE(SUM(s.capacidade), 0)
             FROM escolas e
             JOIN salas s ON s.escola_id = e.id
             GROUP BY e.id, e.nome_instituicao
             ORDER BY e.id
             LIMIT 10",
        )
        .fetch_all(pool)
        .await?;

        Ok(linhas
            .into_iter()
            .map(|(escola, total_salas, capacidade_total)| OcupacaoEscola {
                escola,
                total_salas,
                capacidade_total,
                // Fixo até existir alocação de candidatos por sala.
                ocupacao_percentual: 75,
            })
            .collect())
    }

    /// Active contests and calendar events for the next seven days, merged
    /// into a single agenda capped at ten entries.
    pub async fn proximos_eventos(pool: &SqlitePool) -> ApiResult<Vec<ProximoEvento>> {
        let agora = Local::now().naive_local();
        let hoje = agora.date();
        let limite = hoje.checked_add_days(Days::new(7)).unwrap_or(hoje);
        let limite_eventos = agora.checked_add_days(Days::new(7)).unwrap_or(agora);

        let concursos = sqlx::query_as::<_, (String, NaiveDate, Option<i64>)>(
            "SELECT nome, data, previsao_inscritos FROM concursos
             WHERE status = 'ativo' AND data >= $1 AND data <= $2
             ORDER BY data
             LIMIT 5",
        )
        .bind(hoje)
        .bind(limite)
        .fetch_all(pool)
        .await?;

        let eventos_calendario = sqlx::query_as::<_, (String, NaiveDateTime, Option<String>)>(
            "SELECT titulo, data_inicio, descricao FROM eventos_calendario
             WHERE data_inicio >= $1 AND data_inicio <= $2
             ORDER BY data_inicio
             LIMIT 5",
        )
        .bind(agora)
        .bind(limite_eventos)
        .fetch_all(pool)
        .await?;

        let mut eventos = Vec::with_capacity(concursos.len() + eventos_calendario.len());
        for (nome, data, previsao) in concursos {
            eventos.push(ProximoEvento {
                tipo: "concurso".to_string(),
                titulo: nome,
                data: data.to_string(),
                descricao: format!(
                    "Concurso - {} inscritos previstos",
                    previsao.unwrap_or(0)
                ),
            });
        }
        for (titulo, data_inicio, descricao) in eventos_calendario {
            eventos.push(ProximoEvento {
                tipo: "evento".to_string(),
                titulo,
                data: data_inicio.format("%Y-%m-%dT%H:%M:%S").to_string(),
                descricao: descricao.unwrap_or_default(),
            });
        }
        eventos.sort_by(|a, b| a.data.cmp(&b.data));
        eventos.truncate(10);
        Ok(eventos)
    }

    pub async fn pagamentos_por_mes(pool: &SqlitePool) -> ApiResult<Vec<PagamentosMes>> {
        let inicio = trailing_year_start(Local::now().date_naive());
        let dados = sqlx::query_as::<_, PagamentosMes>(
            "SELECT strftime('%Y-%m', data_pagamento) AS mes,
                    COUNT(id) AS total_pagamentos,
                    COALESCE(SUM(valor_centavos), 0) AS valor_total_centavos
             FROM pagamentos
             WHERE data_pagamento >= $1
             GROUP BY strftime('%Y-%m', data_pagamento)
             ORDER BY mes",
        )
        .bind(inicio)
        .fetch_all(pool)
        .await?;
        Ok(dados)
    }

    pub async fn resumo_financeiro(pool: &SqlitePool) -> ApiResult<ResumoFinanceiro> {
        let total_pagamentos_centavos: i64 =
            sqlx::query_scalar("SELECT COALESCE(SUM(valor_centavos), 0) FROM pagamentos")
                .fetch_one(pool)
                .await?;

        let (pendentes_quantidade, pendentes_valor): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(id), COALESCE(SUM(valor_centavos), 0) FROM pagamentos
             WHERE status_pagamento = 'Pendente'",
        )
        .fetch_one(pool)
        .await?;

        let inicio_mes = month_bounds(Local::now().date_naive()).0;
        let (mes_quantidade, mes_valor): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(id), COALESCE(SUM(valor_centavos), 0) FROM pagamentos
             WHERE data_pagamento >= $1 AND status_pagamento = 'Pago'",
        )
        .bind(inicio_mes)
        .fetch_one(pool)
        .await?;

        Ok(ResumoFinanceiro {
            total_pagamentos_centavos,
            pagamentos_pendentes: StatusPagamentos {
                quantidade: pendentes_quantidade,
                valor_total_centavos: pendentes_valor,
            },
            pagamentos_mes: StatusPagamentos {
                quantidade: mes_quantidade,
                valor_total_centavos: mes_valor,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_covers_regular_month() {
        let (inicio, fim) = month_bounds(NaiveDate::from_ymd_opt(2024, 4, 17).unwrap());
        assert_eq!(inicio, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
        assert_eq!(fim, NaiveDate::from_ymd_opt(2024, 4, 30).unwrap());
    }

    #[test]
    fn month_bounds_rolls_over_december() {
        let (inicio, fim) = month_bounds(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(inicio, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(fim, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn month_bounds_handles_leap_february() {
        let (_, fim) = month_bounds(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(fim, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
}
