use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        pagination::Page,
        rota::{FiltroRota, FiltroRotaList, FiltroRotaPayload, Rota, RotaList, RotaPayload},
        units,
    },
};

use super::{non_blank, parse_date};

async fn exigir_escola(pool: &SqlitePool, id: i64) -> ApiResult<()> {
    let row: Option<i64> = sqlx::query_scalar("SELECT id FROM escolas WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound("Escola não encontrada".to_string())),
    }
}

pub struct RotaService;

impl RotaService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        escola_origem_id: Option<i64>,
        escola_destino_id: Option<i64>,
    ) -> ApiResult<RotaList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rotas
             WHERE ($1 IS NULL OR escola_origem_id = $1)
               AND ($2 IS NULL OR escola_destino_id = $2)",
        )
        .bind(escola_origem_id)
        .bind(escola_destino_id)
        .fetch_one(pool)
        .await?;

        let rotas = sqlx::query_as::<_, Rota>(
            "SELECT * FROM rotas
             WHERE ($1 IS NULL OR escola_origem_id = $1)
               AND ($2 IS NULL OR escola_destino_id = $2)
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(escola_origem_id)
        .bind(escola_destino_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(RotaList {
            rotas,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    /// Persist a route query result. The requesting user is recorded so stale
    /// lookups can be traced back.
    pub async fn create(
        pool: &SqlitePool,
        usuario_id: i64,
        payload: &RotaPayload,
    ) -> ApiResult<Rota> {
        let (Some(escola_origem_id), Some(escola_destino_id)) =
            (payload.escola_origem_id, payload.escola_destino_id)
        else {
            return Err(ApiError::BadRequest(
                "Escola de origem e destino são obrigatórias".to_string(),
            ));
        };

        exigir_escola(pool, escola_origem_id).await?;
        exigir_escola(pool, escola_destino_id).await?;

        let servico = non_blank(&payload.servico_utilizado).unwrap_or("OpenRouteService");
        let status = non_blank(&payload.status_calculo).unwrap_or("Sucesso");

        let rota = sqlx::query_as::<_, Rota>(
            "INSERT INTO rotas
                 (escola_origem_id, escola_destino_id, distancia_m, tempo_estimado_minutos,
                  condicao_acesso, coordenadas_origem, coordenadas_destino, geometria_rota,
                  usuario_consulta_id, servico_utilizado, status_calculo, observacoes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *",
        )
        .bind(escola_origem_id)
        .bind(escola_destino_id)
        .bind(payload.distancia_km.map(units::to_metros))
        .bind(payload.tempo_estimado_minutos)
        .bind(&payload.condicao_acesso)
        .bind(&payload.coordenadas_origem)
        .bind(&payload.coordenadas_destino)
        .bind(&payload.geometria_rota)
        .bind(usuario_id)
        .bind(servico)
        .bind(status)
        .bind(&payload.observacoes)
        .fetch_one(pool)
        .await?;
        Ok(rota)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<Rota> {
        sqlx::query_as::<_, Rota>("SELECT * FROM rotas WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Rota não encontrada".to_string()))
    }

    pub async fn update(pool: &SqlitePool, id: i64, payload: &RotaPayload) -> ApiResult<Rota> {
        sqlx::query_as::<_, Rota>(
            "UPDATE rotas SET
                 escola_origem_id = COALESCE($1, escola_origem_id),
                 escola_destino_id = COALESCE($2, escola_destino_id),
                 distancia_m = COALESCE($3, distancia_m),
                 tempo_estimado_minutos = COALESCE($4, tempo_estimado_minutos),
                 condicao_acesso = COALESCE($5, condicao_acesso),
                 coordenadas_origem = COALESCE($6, coordenadas_origem),
                 coordenadas_destino = COALESCE($7, coordenadas_destino),
                 geometria_rota = COALESCE($8, geometria_rota),
                 servico_utilizado = COALESCE($9, servico_utilizado),
                 status_calculo = COALESCE($10, status_calculo),
                 observacoes = COALESCE($11, observacoes)
             WHERE id = $12
             RETURNING *",
        )
        .bind(payload.escola_origem_id)
        .bind(payload.escola_destino_id)
        .bind(payload.distancia_km.map(units::to_metros))
        .bind(payload.tempo_estimado_minutos)
        .bind(&payload.condicao_acesso)
        .bind(&payload.coordenadas_origem)
        .bind(&payload.coordenadas_destino)
        .bind(&payload.geometria_rota)
        .bind(non_blank(&payload.servico_utilizado))
        .bind(non_blank(&payload.status_calculo))
        .bind(&payload.observacoes)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Rota não encontrada".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM rotas WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Rota não encontrada".to_string()));
        }
        Ok(())
    }
}

pub struct FiltroRotaService;

impl FiltroRotaService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        ativo: Option<bool>,
    ) -> ApiResult<FiltroRotaList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM filtros_rota WHERE ($1 IS NULL OR ativo = $1)",
        )
        .bind(ativo)
        .fetch_one(pool)
        .await?;

        let filtros = sqlx::query_as::<_, FiltroRota>(
            "SELECT * FROM filtros_rota WHERE ($1 IS NULL OR ativo = $1)
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(ativo)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(FiltroRotaList {
            filtros,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(
        pool: &SqlitePool,
        usuario_id: i64,
        payload: &FiltroRotaPayload,
    ) -> ApiResult<FiltroRota> {
        let nome_filtro = non_blank(&payload.nome_filtro)
            .ok_or_else(|| ApiError::BadRequest("Nome do filtro é obrigatório".to_string()))?;

        let data_consulta_inicio = match non_blank(&payload.data_consulta_inicio) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let data_consulta_fim = match non_blank(&payload.data_consulta_fim) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        let filtro = sqlx::query_as::<_, FiltroRota>(
            "INSERT INTO filtros_rota
                 (usuario_id, nome_filtro, escola_origem_id, escola_destino_id,
                  distancia_minima_m, distancia_maxima_m, tempo_minimo, tempo_maximo,
                  data_consulta_inicio, data_consulta_fim, ativo)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(usuario_id)
        .bind(nome_filtro)
        .bind(payload.escola_origem_id)
        .bind(payload.escola_destino_id)
        .bind(payload.distancia_minima.map(units::to_metros))
        .bind(payload.distancia_maxima.map(units::to_metros))
        .bind(payload.tempo_minimo)
        .bind(payload.tempo_maximo)
        .bind(data_consulta_inicio)
        .bind(data_consulta_fim)
        .bind(payload.ativo.unwrap_or(true))
        .fetch_one(pool)
        .await?;
        Ok(filtro)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<FiltroRota> {
        sqlx::query_as::<_, FiltroRota>("SELECT * FROM filtros_rota WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Filtro não encontrado".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &FiltroRotaPayload,
    ) -> ApiResult<FiltroRota> {
        let data_consulta_inicio = match non_blank(&payload.data_consulta_inicio) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let data_consulta_fim = match non_blank(&payload.data_consulta_fim) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        sqlx::query_as::<_, FiltroRota>(
            "UPDATE filtros_rota SET
                 nome_filtro = COALESCE($1, nome_filtro),
                 escola_origem_id = COALESCE($2, escola_origem_id),
                 escola_destino_id = COALESCE($3, escola_destino_id),
                 distancia_minima_m = COALESCE($4, distancia_minima_m),
                 distancia_maxima_m = COALESCE($5, distancia_maxima_m),
                 tempo_minimo = COALESCE($6, tempo_minimo),
                 tempo_maximo = COALESCE($7, tempo_maximo),
                 data_consulta_inicio = COALESCE($8, data_consulta_inicio),
                 data_consulta_fim = COALESCE($9, data_consulta_fim),
                 ativo = COALESCE($10, ativo),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $11
             RETURNING *",
        )
        .bind(non_blank(&payload.nome_filtro))
        .bind(payload.escola_origem_id)
        .bind(payload.escola_destino_id)
        .bind(payload.distancia_minima.map(units::to_metros))
        .bind(payload.distancia_maxima.map(units::to_metros))
        .bind(payload.tempo_minimo)
        .bind(payload.tempo_maximo)
        .bind(data_consulta_inicio)
        .bind(data_consulta_fim)
        .bind(payload.ativo)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Filtro não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM filtros_rota WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Filtro não encontrado".to_string()));
        }
        Ok(())
    }
}
