use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        colaborador::{
            Colaborador, ColaboradorDetail, ColaboradorList, ColaboradorPayload,
            ParticipacaoEvento, ParticipacaoPayload,
        },
        pagination::Page,
    },
};

use super::{is_unique_violation, non_blank, parse_date};

pub struct ColaboradorService;

impl ColaboradorService {
    pub async fn list(pool: &SqlitePool, page: Page, nome: Option<&str>) -> ApiResult<ColaboradorList> {
        let filtro = nome.map(|n| format!("%{n}%"));

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM colaboradores WHERE ($1 IS NULL OR nome LIKE $1)",
        )
        .bind(&filtro)
        .fetch_one(pool)
        .await?;

        let colaboradores = sqlx::query_as::<_, Colaborador>(
            "SELECT * FROM colaboradores WHERE ($1 IS NULL OR nome LIKE $1)
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(&filtro)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(ColaboradorList {
            colaboradores,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &ColaboradorPayload) -> ApiResult<Colaborador> {
        let (Some(nome), Some(cpf)) = (non_blank(&payload.nome), non_blank(&payload.cpf)) else {
            return Err(ApiError::BadRequest(
                "Nome e CPF são obrigatórios".to_string(),
            ));
        };

        let duplicado: Option<i64> =
            sqlx::query_scalar("SELECT id FROM colaboradores WHERE cpf = $1")
                .bind(cpf)
                .fetch_optional(pool)
                .await?;
        if duplicado.is_some() {
            return Err(ApiError::BadRequest("CPF já cadastrado".to_string()));
        }

        let data_expedicao = match non_blank(&payload.data_expedicao) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let data_nascimento = match non_blank(&payload.data_nascimento) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        let colaborador = sqlx::query_as::<_, Colaborador>(
            "INSERT INTO colaboradores
                 (nome, logradouro, numero, bairro, cep, municipio, uf, rg, orgao_emissor,
                  data_expedicao, cpf, pis_pasep, banco, tipo_conta, numero_agencia,
                  digito_agencia, numero_conta, digito_conta, chave_pix, data_nascimento,
                  telefone, email, escolaridade)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23)
             RETURNING *",
        )
        .bind(nome)
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.rg)
        .bind(&payload.orgao_emissor)
        .bind(data_expedicao)
        .bind(cpf)
        .bind(&payload.pis_pasep)
        .bind(&payload.banco)
        .bind(&payload.tipo_conta)
        .bind(&payload.numero_agencia)
        .bind(&payload.digito_agencia)
        .bind(&payload.numero_conta)
        .bind(&payload.digito_conta)
        .bind(&payload.chave_pix)
        .bind(data_nascimento)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(&payload.escolaridade)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CPF já cadastrado".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(colaborador)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<Colaborador> {
        sqlx::query_as::<_, Colaborador>("SELECT * FROM colaboradores WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Colaborador não encontrado".to_string()))
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<ColaboradorDetail> {
        let colaborador = Self::find(pool, id).await?;
        let participacoes = Self::fetch_participacoes(pool, id).await?;
        Ok(ColaboradorDetail {
            colaborador,
            participacoes,
        })
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &ColaboradorPayload,
    ) -> ApiResult<Colaborador> {
        let data_expedicao = match non_blank(&payload.data_expedicao) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let data_nascimento = match non_blank(&payload.data_nascimento) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        sqlx::query_as::<_, Colaborador>(
            "UPDATE colaboradores SET
                 nome = COALESCE($1, nome),
                 logradouro = COALESCE($2, logradouro),
                 numero = COALESCE($3, numero),
                 bairro = COALESCE($4, bairro),
                 cep = COALESCE($5, cep),
                 municipio = COALESCE($6, municipio),
                 uf = COALESCE($7, uf),
                 rg = COALESCE($8, rg),
                 orgao_emissor = COALESCE($9, orgao_emissor),
                 data_expedicao = COALESCE($10, data_expedicao),
                 cpf = COALESCE($11, cpf),
                 pis_pasep = COALESCE($12, pis_pasep),
                 banco = COALESCE($13, banco),
                 tipo_conta = COALESCE($14, tipo_conta),
                 numero_agencia = COALESCE($15, numero_agencia),
                 digito_agencia = COALESCE($16, digito_agencia),
                 numero_conta = COALESCE($17, numero_conta),
                 digito_conta = COALESCE($18, digito_conta),
                 chave_pix = COALESCE($19, chave_pix),
                 data_nascimento = COALESCE($20, data_nascimento),
                 telefone = COALESCE($21, telefone),
                 email = COALESCE($22, email),
                 escolaridade = COALESCE($23, escolaridade),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $24
             RETURNING *",
        )
        .bind(non_blank(&payload.nome))
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.rg)
        .bind(&payload.orgao_emissor)
        .bind(data_expedicao)
        .bind(non_blank(&payload.cpf))
        .bind(&payload.pis_pasep)
        .bind(&payload.banco)
        .bind(&payload.tipo_conta)
        .bind(&payload.numero_agencia)
        .bind(&payload.digito_agencia)
        .bind(&payload.numero_conta)
        .bind(&payload.digito_conta)
        .bind(&payload.chave_pix)
        .bind(data_nascimento)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(&payload.escolaridade)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CPF já cadastrado".to_string())
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or_else(|| ApiError::NotFound("Colaborador não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM colaboradores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Colaborador não encontrado".to_string()));
        }
        Ok(())
    }

    // Participações em eventos

    pub async fn listar_participacoes(
        pool: &SqlitePool,
        colaborador_id: i64,
    ) -> ApiResult<Vec<ParticipacaoEvento>> {
        Self::find(pool, colaborador_id).await?;
        Self::fetch_participacoes(pool, colaborador_id).await
    }

    pub async fn create_participacao(
        pool: &SqlitePool,
        colaborador_id: i64,
        payload: &ParticipacaoPayload,
    ) -> ApiResult<ParticipacaoEvento> {
        Self::find(pool, colaborador_id).await?;

        let (Some(concurso_id), Some(funcao)) = (payload.concurso_id, non_blank(&payload.funcao))
        else {
            return Err(ApiError::BadRequest(
                "Concurso e função são obrigatórios".to_string(),
            ));
        };

        let concurso: Option<i64> = sqlx::query_scalar("SELECT id FROM concursos WHERE id = $1")
            .bind(concurso_id)
            .fetch_optional(pool)
            .await?;
        if concurso.is_none() {
            return Err(ApiError::NotFound("Concurso não encontrado".to_string()));
        }

        let participacao = sqlx::query_as::<_, ParticipacaoEvento>(
            "INSERT INTO participacao_evento
                 (colaborador_id, concurso_id, escola_id, funcao, coordenador_local, assistente)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(colaborador_id)
        .bind(concurso_id)
        .bind(payload.escola_id)
        .bind(funcao)
        .bind(&payload.coordenador_local)
        .bind(&payload.assistente)
        .fetch_one(pool)
        .await?;
        Ok(participacao)
    }

    pub async fn delete_participacao(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM participacao_evento WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(
                "Participação não encontrada".to_string(),
            ));
        }
        Ok(())
    }

    async fn fetch_participacoes(
        pool: &SqlitePool,
        colaborador_id: i64,
    ) -> ApiResult<Vec<ParticipacaoEvento>> {
        let participacoes = sqlx::query_as::<_, ParticipacaoEvento>(
            "SELECT * FROM participacao_evento WHERE colaborador_id = $1 ORDER BY id",
        )
        .bind(colaborador_id)
        .fetch_all(pool)
        .await?;
        Ok(participacoes)
    }
}
