use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        banca::{
            BancaDetail, BancaList, BancaOrganizadora, BancaPayload, ContatoSetorial,
            ContatoSetorialPayload, FormularioBanca, FormularioBancaPayload,
        },
        pagination::Page,
    },
};

use super::{is_unique_violation, non_blank};

pub struct BancaService;

impl BancaService {
    pub async fn list(pool: &SqlitePool, page: Page) -> ApiResult<BancaList> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bancas_organizadoras")
            .fetch_one(pool)
            .await?;

        let bancas = sqlx::query_as::<_, BancaOrganizadora>(
            "SELECT * FROM bancas_organizadoras ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(BancaList {
            bancas,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &BancaPayload) -> ApiResult<BancaOrganizadora> {
        let (Some(nome), Some(cnpj)) = (non_blank(&payload.nome), non_blank(&payload.cnpj)) else {
            return Err(ApiError::BadRequest(
                "Nome e CNPJ são obrigatórios".to_string(),
            ));
        };

        let banca = sqlx::query_as::<_, BancaOrganizadora>(
            "INSERT INTO bancas_organizadoras
                 (nome, cnpj, logradouro, numero, bairro, cep, municipio, uf,
                  inscricao_municipal, inscricao_estadual, telefone, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *",
        )
        .bind(nome)
        .bind(cnpj)
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.inscricao_municipal)
        .bind(&payload.inscricao_estadual)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CNPJ já cadastrado".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(banca)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<BancaOrganizadora> {
        sqlx::query_as::<_, BancaOrganizadora>("SELECT * FROM bancas_organizadoras WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Banca não encontrada".to_string()))
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<BancaDetail> {
        let banca = Self::find(pool, id).await?;
        let contatos_setoriais = Self::fetch_contatos(pool, id).await?;
        let formularios = Self::fetch_formularios(pool, id).await?;
        Ok(BancaDetail {
            banca,
            contatos_setoriais,
            formularios,
        })
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &BancaPayload,
    ) -> ApiResult<BancaOrganizadora> {
        sqlx::query_as::<_, BancaOrganizadora>(
            "UPDATE bancas_organizadoras SET
                 nome = COALESCE($1, nome),
                 cnpj = COALESCE($2, cnpj),
                 logradouro = COALESCE($3, logradouro),
                 numero = COALESCE($4, numero),
                 bairro = COALESCE($5, bairro),
                 cep = COALESCE($6, cep),
                 municipio = COALESCE($7, municipio),
                 uf = COALESCE($8, uf),
                 inscricao_municipal = COALESCE($9, inscricao_municipal),
                 inscricao_estadual = COALESCE($10, inscricao_estadual),
                 telefone = COALESCE($11, telefone),
                 email = COALESCE($12, email),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $13
             RETURNING *",
        )
        .bind(non_blank(&payload.nome))
        .bind(non_blank(&payload.cnpj))
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.inscricao_municipal)
        .bind(&payload.inscricao_estadual)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CNPJ já cadastrado".to_string())
            } else {
                ApiError::from(e)
            }
        })?
        .ok_or_else(|| ApiError::NotFound("Banca não encontrada".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM bancas_organizadoras WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Banca não encontrada".to_string()));
        }
        Ok(())
    }

    // Contatos setoriais

    pub async fn listar_contatos(
        pool: &SqlitePool,
        banca_id: i64,
    ) -> ApiResult<Vec<ContatoSetorial>> {
        Self::find(pool, banca_id).await?;
        Self::fetch_contatos(pool, banca_id).await
    }

    pub async fn create_contato(
        pool: &SqlitePool,
        banca_id: i64,
        payload: &ContatoSetorialPayload,
    ) -> ApiResult<ContatoSetorial> {
        Self::find(pool, banca_id).await?;
        let setor = non_blank(&payload.setor)
            .ok_or_else(|| ApiError::BadRequest("Setor é obrigatório".to_string()))?;

        let contato = sqlx::query_as::<_, ContatoSetorial>(
            "INSERT INTO contatos_setoriais (banca_id, setor, nome_contato, telefone, email)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(banca_id)
        .bind(setor)
        .bind(&payload.nome_contato)
        .bind(&payload.telefone)
        .bind(&payload.email)
        .fetch_one(pool)
        .await?;
        Ok(contato)
    }

    pub async fn delete_contato(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM contatos_setoriais WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Contato não encontrado".to_string()));
        }
        Ok(())
    }

    // Formulários

    pub async fn listar_formularios(
        pool: &SqlitePool,
        banca_id: i64,
    ) -> ApiResult<Vec<FormularioBanca>> {
        Self::find(pool, banca_id).await?;
        Self::fetch_formularios(pool, banca_id).await
    }

    pub async fn create_formulario(
        pool: &SqlitePool,
        banca_id: i64,
        payload: &FormularioBancaPayload,
    ) -> ApiResult<FormularioBanca> {
        Self::find(pool, banca_id).await?;
        let (Some(nome_arquivo), Some(caminho_arquivo)) = (
            non_blank(&payload.nome_arquivo),
            non_blank(&payload.caminho_arquivo),
        ) else {
            return Err(ApiError::BadRequest(
                "Nome e caminho do arquivo são obrigatórios".to_string(),
            ));
        };

        let formulario = sqlx::query_as::<_, FormularioBanca>(
            "INSERT INTO formularios_banca
                 (banca_id, concurso_id, nome_arquivo, caminho_arquivo, descricao)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(banca_id)
        .bind(payload.concurso_id)
        .bind(nome_arquivo)
        .bind(caminho_arquivo)
        .bind(&payload.descricao)
        .fetch_one(pool)
        .await?;
        Ok(formulario)
    }

    pub async fn delete_formulario(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM formularios_banca WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Formulário não encontrado".to_string()));
        }
        Ok(())
    }

    async fn fetch_contatos(pool: &SqlitePool, banca_id: i64) -> ApiResult<Vec<ContatoSetorial>> {
        let contatos = sqlx::query_as::<_, ContatoSetorial>(
            "SELECT * FROM contatos_setoriais WHERE banca_id = $1 ORDER BY id",
        )
        .bind(banca_id)
        .fetch_all(pool)
        .await?;
        Ok(contatos)
    }

    async fn fetch_formularios(
        pool: &SqlitePool,
        banca_id: i64,
    ) -> ApiResult<Vec<FormularioBanca>> {
        let formularios = sqlx::query_as::<_, FormularioBanca>(
            "SELECT * FROM formularios_banca WHERE banca_id = $1 ORDER BY id",
        )
        .bind(banca_id)
        .fetch_all(pool)
        .await?;
        Ok(formularios)
    }
}
