use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        banca::BancaOrganizadora,
        concurso::{
            AssociarEscolaRequest, Concurso, ConcursoDetail, ConcursoEscola, ConcursoList,
            ConcursoPayload, LocalAplicacaoDto, ResumoContratacao, ResumoContratacaoDto,
            ResumoContratacaoPayload, VagaFuncao,
        },
        escola::Escola,
        pagination::Page,
        units,
    },
};

use super::{non_blank, parse_date};

pub struct ConcursoService;

impl ConcursoService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        status: Option<&str>,
    ) -> ApiResult<ConcursoList> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM concursos WHERE ($1 IS NULL OR status = $1)")
                .bind(status)
                .fetch_one(pool)
                .await?;

        let concursos = sqlx::query_as::<_, Concurso>(
            "SELECT * FROM concursos WHERE ($1 IS NULL OR status = $1)
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(ConcursoList {
            concursos,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &ConcursoPayload) -> ApiResult<Concurso> {
        let (Some(nome), Some(data)) = (non_blank(&payload.nome), non_blank(&payload.data)) else {
            return Err(ApiError::BadRequest(
                "Nome e data são obrigatórios".to_string(),
            ));
        };
        let data = parse_date(data)?;
        let status = non_blank(&payload.status).unwrap_or("ativo");

        let concurso = sqlx::query_as::<_, Concurso>(
            "INSERT INTO concursos (nome, data, banca_organizadora_id, previsao_inscritos, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(nome)
        .bind(data)
        .bind(payload.banca_organizadora_id)
        .bind(payload.previsao_inscritos)
        .bind(status)
        .fetch_one(pool)
        .await?;
        Ok(concurso)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<Concurso> {
        sqlx::query_as::<_, Concurso>("SELECT * FROM concursos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Concurso não encontrado".to_string()))
    }

    /// Contest with its board, hiring summary and school assignments expanded.
    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<ConcursoDetail> {
        let concurso = Self::find(pool, id).await?;

        let banca_organizadora = match concurso.banca_organizadora_id {
            Some(banca_id) => {
                sqlx::query_as::<_, BancaOrganizadora>(
                    "SELECT * FROM bancas_organizadoras WHERE id = $1",
                )
                .bind(banca_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };

        let resumo_contratacao = Self::find_resumo(pool, id).await?;
        let locais_aplicacao = Self::fetch_locais(pool, id).await?;

        Ok(ConcursoDetail {
            concurso,
            banca_organizadora,
            resumo_contratacao,
            locais_aplicacao,
        })
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &ConcursoPayload,
    ) -> ApiResult<Concurso> {
        let data = match non_blank(&payload.data) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        sqlx::query_as::<_, Concurso>(
            "UPDATE concursos SET
                 nome = COALESCE($1, nome),
                 data = COALESCE($2, data),
                 banca_organizadora_id = COALESCE($3, banca_organizadora_id),
                 previsao_inscritos = COALESCE($4, previsao_inscritos),
                 status = COALESCE($5, status),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $6
             RETURNING *",
        )
        .bind(non_blank(&payload.nome))
        .bind(data)
        .bind(payload.banca_organizadora_id)
        .bind(payload.previsao_inscritos)
        .bind(non_blank(&payload.status))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Concurso não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM concursos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Concurso não encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn listar_ativos(pool: &SqlitePool) -> ApiResult<Vec<Concurso>> {
        let concursos = sqlx::query_as::<_, Concurso>(
            "SELECT * FROM concursos WHERE status = 'ativo' ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(concursos)
    }

    /// Create the hiring summary and its role quotas in one transaction.
    /// A quota row missing funcao or quantidade aborts the whole request.
    pub async fn create_resumo(
        pool: &SqlitePool,
        concurso_id: i64,
        payload: &ResumoContratacaoPayload,
    ) -> ApiResult<ResumoContratacaoDto> {
        Self::find(pool, concurso_id).await?;

        let existente: Option<i64> =
            sqlx::query_scalar("SELECT id FROM resumos_contratacao WHERE concurso_id = $1")
                .bind(concurso_id)
                .fetch_optional(pool)
                .await?;
        if existente.is_some() {
            return Err(ApiError::BadRequest(
                "Resumo de contratação já existe para este concurso".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;

        let resumo = sqlx::query_as::<_, ResumoContratacao>(
            "INSERT INTO resumos_contratacao
                 (concurso_id, valor_material_limpeza_centavos, valor_kit_lanche_centavos)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(concurso_id)
        .bind(payload.valor_material_limpeza.map(units::to_centavos))
        .bind(payload.valor_kit_lanche.map(units::to_centavos))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // The UNIQUE constraint closes the check-then-insert race.
            if super::is_unique_violation(&e) {
                ApiError::BadRequest(
                    "Resumo de contratação já existe para este concurso".to_string(),
                )
            } else {
                e.into()
            }
        })?;

        let mut vagas = Vec::with_capacity(payload.vagas_funcao.len());
        for vaga in &payload.vagas_funcao {
            let (Some(funcao), Some(quantidade)) = (non_blank(&vaga.funcao), vaga.quantidade)
            else {
                return Err(ApiError::BadRequest(
                    "Função e quantidade são obrigatórias para cada vaga".to_string(),
                ));
            };
            let vaga = sqlx::query_as::<_, VagaFuncao>(
                "INSERT INTO vagas_funcao
                     (resumo_contratacao_id, funcao, quantidade, valor_unitario_centavos)
                 VALUES ($1, $2, $3, $4)
                 RETURNING *",
            )
            .bind(resumo.id)
            .bind(funcao)
            .bind(quantidade)
            .bind(vaga.valor_unitario.map(units::to_centavos))
            .fetch_one(&mut *tx)
            .await?;
            vagas.push(vaga);
        }

        tx.commit().await?;
        Ok(ResumoContratacaoDto::from_parts(resumo, vagas))
    }

    pub async fn get_resumo(
        pool: &SqlitePool,
        concurso_id: i64,
    ) -> ApiResult<ResumoContratacaoDto> {
        Self::find(pool, concurso_id).await?;
        Self::find_resumo(pool, concurso_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Resumo de contratação não encontrado".to_string()))
    }

    pub async fn associar_escola(
        pool: &SqlitePool,
        concurso_id: i64,
        req: &AssociarEscolaRequest,
    ) -> ApiResult<ConcursoEscola> {
        Self::find(pool, concurso_id).await?;

        let escola_id = req
            .escola_id
            .ok_or_else(|| ApiError::BadRequest("ID da escola é obrigatório".to_string()))?;

        let escola: Option<i64> = sqlx::query_scalar("SELECT id FROM escolas WHERE id = $1")
            .bind(escola_id)
            .fetch_optional(pool)
            .await?;
        if escola.is_none() {
            return Err(ApiError::NotFound("Escola não encontrada".to_string()));
        }

        let existente: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM concurso_escola WHERE concurso_id = $1 AND escola_id = $2",
        )
        .bind(concurso_id)
        .bind(escola_id)
        .fetch_optional(pool)
        .await?;
        if existente.is_some() {
            return Err(ApiError::BadRequest(
                "Escola já está associada a este concurso".to_string(),
            ));
        }

        let tipo = non_blank(&req.tipo).unwrap_or("indicado");
        let associacao = sqlx::query_as::<_, ConcursoEscola>(
            "INSERT INTO concurso_escola (concurso_id, escola_id, tipo)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(concurso_id)
        .bind(escola_id)
        .bind(tipo)
        .fetch_one(pool)
        .await?;
        Ok(associacao)
    }

    pub async fn listar_escolas(
        pool: &SqlitePool,
        concurso_id: i64,
    ) -> ApiResult<Vec<LocalAplicacaoDto>> {
        Self::find(pool, concurso_id).await?;
        Self::fetch_locais(pool, concurso_id).await
    }

    pub async fn remover_escola(
        pool: &SqlitePool,
        concurso_id: i64,
        escola_id: i64,
    ) -> ApiResult<()> {
        let result =
            sqlx::query("DELETE FROM concurso_escola WHERE concurso_id = $1 AND escola_id = $2")
                .bind(concurso_id)
                .bind(escola_id)
                .execute(pool)
                .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Associação não encontrada".to_string()));
        }
        Ok(())
    }

    async fn find_resumo(
        pool: &SqlitePool,
        concurso_id: i64,
    ) -> ApiResult<Option<ResumoContratacaoDto>> {
        let resumo = sqlx::query_as::<_, ResumoContratacao>(
            "SELECT * FROM resumos_contratacao WHERE concurso_id = $1",
        )
        .bind(concurso_id)
        .fetch_optional(pool)
        .await?;

        match resumo {
            Some(resumo) => {
                let vagas = sqlx::query_as::<_, VagaFuncao>(
                    "SELECT * FROM vagas_funcao WHERE resumo_contratacao_id = $1 ORDER BY id",
                )
                .bind(resumo.id)
                .fetch_all(pool)
                .await?;
                Ok(Some(ResumoContratacaoDto::from_parts(resumo, vagas)))
            }
            None => Ok(None),
        }
    }

    async fn fetch_locais(
        pool: &SqlitePool,
        concurso_id: i64,
    ) -> ApiResult<Vec<LocalAplicacaoDto>> {
        let associacoes = sqlx::query_as::<_, ConcursoEscola>(
            "SELECT * FROM concurso_escola WHERE concurso_id = $1 ORDER BY id",
        )
        .bind(concurso_id)
        .fetch_all(pool)
        .await?;

        let mut locais = Vec::with_capacity(associacoes.len());
        for associacao in associacoes {
            let escola = sqlx::query_as::<_, Escola>("SELECT * FROM escolas WHERE id = $1")
                .bind(associacao.escola_id)
                .fetch_optional(pool)
                .await?;
            locais.push(LocalAplicacaoDto { associacao, escola });
        }
        Ok(locais)
    }
}
