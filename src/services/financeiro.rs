use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        financeiro::{
            AjudaCusto, AjudaCustoList, AjudaCustoPayload, Pagamento, PagamentoList,
            PagamentoPayload,
        },
        pagination::Page,
    },
};

use super::{non_blank, parse_date};
use crate::models::units;

async fn exigir_concurso(pool: &SqlitePool, id: i64) -> ApiResult<()> {
    let row: Option<i64> = sqlx::query_scalar("SELECT id FROM concursos WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound("Concurso não encontrado".to_string())),
    }
}

async fn exigir_colaborador(pool: &SqlitePool, id: i64) -> ApiResult<()> {
    let row: Option<i64> = sqlx::query_scalar("SELECT id FROM colaboradores WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound("Colaborador não encontrado".to_string())),
    }
}

pub struct PagamentoService;

impl PagamentoService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        status: Option<&str>,
        concurso_id: Option<i64>,
    ) -> ApiResult<PagamentoList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pagamentos
             WHERE ($1 IS NULL OR status_pagamento = $1)
               AND ($2 IS NULL OR concurso_id = $2)",
        )
        .bind(status)
        .bind(concurso_id)
        .fetch_one(pool)
        .await?;

        let pagamentos = sqlx::query_as::<_, Pagamento>(
            "SELECT * FROM pagamentos
             WHERE ($1 IS NULL OR status_pagamento = $1)
               AND ($2 IS NULL OR concurso_id = $2)
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(status)
        .bind(concurso_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(PagamentoList {
            pagamentos,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &PagamentoPayload) -> ApiResult<Pagamento> {
        let (Some(concurso_id), Some(colaborador_id), Some(funcao), Some(valor)) = (
            payload.concurso_id,
            payload.colaborador_id,
            non_blank(&payload.funcao),
            payload.valor,
        ) else {
            return Err(ApiError::BadRequest(
                "Concurso, colaborador, função e valor são obrigatórios".to_string(),
            ));
        };

        exigir_concurso(pool, concurso_id).await?;
        exigir_colaborador(pool, colaborador_id).await?;

        let data_pagamento = match non_blank(&payload.data_pagamento) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let status = non_blank(&payload.status_pagamento).unwrap_or("Pendente");

        let pagamento = sqlx::query_as::<_, Pagamento>(
            "INSERT INTO pagamentos
                 (concurso_id, escola_id, colaborador_id, funcao, valor_centavos,
                  data_pagamento, status_pagamento, chave_pix_utilizada, observacoes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING *",
        )
        .bind(concurso_id)
        .bind(payload.escola_id)
        .bind(colaborador_id)
        .bind(funcao)
        .bind(units::to_centavos(valor))
        .bind(data_pagamento)
        .bind(status)
        .bind(&payload.chave_pix_utilizada)
        .bind(&payload.observacoes)
        .fetch_one(pool)
        .await?;
        Ok(pagamento)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<Pagamento> {
        sqlx::query_as::<_, Pagamento>("SELECT * FROM pagamentos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Pagamento não encontrado".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &PagamentoPayload,
    ) -> ApiResult<Pagamento> {
        let data_pagamento = match non_blank(&payload.data_pagamento) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        sqlx::query_as::<_, Pagamento>(
            "UPDATE pagamentos SET
                 concurso_id = COALESCE($1, concurso_id),
                 escola_id = COALESCE($2, escola_id),
                 colaborador_id = COALESCE($3, colaborador_id),
                 funcao = COALESCE($4, funcao),
                 valor_centavos = COALESCE($5, valor_centavos),
                 data_pagamento = COALESCE($6, data_pagamento),
                 status_pagamento = COALESCE($7, status_pagamento),
                 chave_pix_utilizada = COALESCE($8, chave_pix_utilizada),
                 observacoes = COALESCE($9, observacoes),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $10
             RETURNING *",
        )
        .bind(payload.concurso_id)
        .bind(payload.escola_id)
        .bind(payload.colaborador_id)
        .bind(non_blank(&payload.funcao))
        .bind(payload.valor.map(units::to_centavos))
        .bind(data_pagamento)
        .bind(non_blank(&payload.status_pagamento))
        .bind(&payload.chave_pix_utilizada)
        .bind(&payload.observacoes)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Pagamento não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM pagamentos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Pagamento não encontrado".to_string()));
        }
        Ok(())
    }
}

pub struct AjudaCustoService;

impl AjudaCustoService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        status: Option<&str>,
        colaborador_id: Option<i64>,
    ) -> ApiResult<AjudaCustoList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM ajuda_custo
             WHERE ($1 IS NULL OR status_pagamento = $1)
               AND ($2 IS NULL OR colaborador_id = $2)",
        )
        .bind(status)
        .bind(colaborador_id)
        .fetch_one(pool)
        .await?;

        let ajudas_custo = sqlx::query_as::<_, AjudaCusto>(
            "SELECT * FROM ajuda_custo
             WHERE ($1 IS NULL OR status_pagamento = $1)
               AND ($2 IS NULL OR colaborador_id = $2)
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(status)
        .bind(colaborador_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(AjudaCustoList {
            ajudas_custo,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &AjudaCustoPayload) -> ApiResult<AjudaCusto> {
        let (Some(colaborador_id), Some(concurso_id), Some(tipo_ajuda), Some(valor)) = (
            payload.colaborador_id,
            payload.concurso_id,
            non_blank(&payload.tipo_ajuda),
            payload.valor,
        ) else {
            return Err(ApiError::BadRequest(
                "Colaborador, concurso, tipo de ajuda e valor são obrigatórios".to_string(),
            ));
        };

        exigir_colaborador(pool, colaborador_id).await?;
        exigir_concurso(pool, concurso_id).await?;

        let data_pagamento = match non_blank(&payload.data_pagamento) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let status = non_blank(&payload.status_pagamento).unwrap_or("Pendente");

        let ajuda = sqlx::query_as::<_, AjudaCusto>(
            "INSERT INTO ajuda_custo
                 (colaborador_id, concurso_id, tipo_ajuda, valor_centavos, data_pagamento,
                  status_pagamento, justificativa, comprovante_arquivo)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(colaborador_id)
        .bind(concurso_id)
        .bind(tipo_ajuda)
        .bind(units::to_centavos(valor))
        .bind(data_pagamento)
        .bind(status)
        .bind(&payload.justificativa)
        .bind(&payload.comprovante_arquivo)
        .fetch_one(pool)
        .await?;
        Ok(ajuda)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<AjudaCusto> {
        sqlx::query_as::<_, AjudaCusto>("SELECT * FROM ajuda_custo WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ajuda de custo não encontrada".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &AjudaCustoPayload,
    ) -> ApiResult<AjudaCusto> {
        let data_pagamento = match non_blank(&payload.data_pagamento) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        sqlx::query_as::<_, AjudaCusto>(
            "UPDATE ajuda_custo SET
                 colaborador_id = COALESCE($1, colaborador_id),
                 concurso_id = COALESCE($2, concurso_id),
                 tipo_ajuda = COALESCE($3, tipo_ajuda),
                 valor_centavos = COALESCE($4, valor_centavos),
                 data_pagamento = COALESCE($5, data_pagamento),
                 status_pagamento = COALESCE($6, status_pagamento),
                 justificativa = COALESCE($7, justificativa),
                 comprovante_arquivo = COALESCE($8, comprovante_arquivo),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $9
             RETURNING *",
        )
        .bind(payload.colaborador_id)
        .bind(payload.concurso_id)
        .bind(non_blank(&payload.tipo_ajuda))
        .bind(payload.valor.map(units::to_centavos))
        .bind(data_pagamento)
        .bind(non_blank(&payload.status_pagamento))
        .bind(&payload.justificativa)
        .bind(&payload.comprovante_arquivo)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Ajuda de custo não encontrada".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM ajuda_custo WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(
                "Ajuda de custo não encontrada".to_string(),
            ));
        }
        Ok(())
    }
}
