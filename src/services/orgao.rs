use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        orgao::{
            DocumentoOrgao, DocumentoOrgaoPayload, EntregaOficio, OficioList, OficioPayload,
            OrgaoDetail, OrgaoList, OrgaoPayload, OrgaoPublico,
        },
        pagination::Page,
    },
};

use super::{is_unique_violation, non_blank, parse_date};

pub struct OrgaoService;

impl OrgaoService {
    pub async fn list(pool: &SqlitePool, page: Page) -> ApiResult<OrgaoList> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orgaos_publicos")
            .fetch_one(pool)
            .await?;

        let orgaos = sqlx::query_as::<_, OrgaoPublico>(
            "SELECT * FROM orgaos_publicos ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(OrgaoList {
            orgaos,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &OrgaoPayload) -> ApiResult<OrgaoPublico> {
        let (Some(nome), Some(cnpj)) = (non_blank(&payload.nome), non_blank(&payload.cnpj)) else {
            return Err(ApiError::BadRequest(
                "Nome e CNPJ são obrigatórios".to_string(),
            ));
        };

        let orgao = sqlx::query_as::<_, OrgaoPublico>(
            "INSERT INTO orgaos_publicos
                 (nome, cnpj, logradouro, numero, bairro, cep, municipio, uf,
                  inscricao_municipal, inscricao_estadual, telefone, email,
                  contato_responsavel, telefone_contato)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
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
        .bind(&payload.contato_responsavel)
        .bind(&payload.telefone_contato)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest("CNPJ já cadastrado".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(orgao)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<OrgaoPublico> {
        sqlx::query_as::<_, OrgaoPublico>("SELECT * FROM orgaos_publicos WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Órgão não encontrado".to_string()))
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<OrgaoDetail> {
        let orgao = Self::find(pool, id).await?;
        let documentos = Self::fetch_documentos(pool, id).await?;
        Ok(OrgaoDetail { orgao, documentos })
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &OrgaoPayload,
    ) -> ApiResult<OrgaoPublico> {
        sqlx::query_as::<_, OrgaoPublico>(
            "UPDATE orgaos_publicos SET
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
                 contato_responsavel = COALESCE($13, contato_responsavel),
                 telefone_contato = COALESCE($14, telefone_contato),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $15
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
        .bind(&payload.contato_responsavel)
        .bind(&payload.telefone_contato)
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
        .ok_or_else(|| ApiError::NotFound("Órgão não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM orgaos_publicos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Órgão não encontrado".to_string()));
        }
        Ok(())
    }

    // Documentos

    pub async fn listar_documentos(
        pool: &SqlitePool,
        orgao_id: i64,
    ) -> ApiResult<Vec<DocumentoOrgao>> {
        Self::find(pool, orgao_id).await?;
        Self::fetch_documentos(pool, orgao_id).await
    }

    pub async fn create_documento(
        pool: &SqlitePool,
        orgao_id: i64,
        payload: &DocumentoOrgaoPayload,
    ) -> ApiResult<DocumentoOrgao> {
        Self::find(pool, orgao_id).await?;
        let (Some(nome_arquivo), Some(caminho_arquivo)) = (
            non_blank(&payload.nome_arquivo),
            non_blank(&payload.caminho_arquivo),
        ) else {
            return Err(ApiError::BadRequest(
                "Nome e caminho do arquivo são obrigatórios".to_string(),
            ));
        };

        let documento = sqlx::query_as::<_, DocumentoOrgao>(
            "INSERT INTO documentos_orgao
                 (orgao_id, nome_arquivo, caminho_arquivo, tipo_documento, descricao)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(orgao_id)
        .bind(nome_arquivo)
        .bind(caminho_arquivo)
        .bind(&payload.tipo_documento)
        .bind(&payload.descricao)
        .fetch_one(pool)
        .await?;
        Ok(documento)
    }

    pub async fn delete_documento(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM documentos_orgao WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Documento não encontrado".to_string()));
        }
        Ok(())
    }

    async fn fetch_documentos(pool: &SqlitePool, orgao_id: i64) -> ApiResult<Vec<DocumentoOrgao>> {
        let documentos = sqlx::query_as::<_, DocumentoOrgao>(
            "SELECT * FROM documentos_orgao WHERE orgao_id = $1 ORDER BY id",
        )
        .bind(orgao_id)
        .fetch_all(pool)
        .await?;
        Ok(documentos)
    }
}

pub struct OficioService;

impl OficioService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        status: Option<&str>,
        destinatario_id: Option<i64>,
    ) -> ApiResult<OficioList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM entrega_oficios
             WHERE ($1 IS NULL OR status = $1)
               AND ($2 IS NULL OR destinatario_id = $2)",
        )
        .bind(status)
        .bind(destinatario_id)
        .fetch_one(pool)
        .await?;

        let oficios = sqlx::query_as::<_, EntregaOficio>(
            "SELECT * FROM entrega_oficios
             WHERE ($1 IS NULL OR status = $1)
               AND ($2 IS NULL OR destinatario_id = $2)
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(status)
        .bind(destinatario_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(OficioList {
            oficios,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &OficioPayload) -> ApiResult<EntregaOficio> {
        let (Some(data_envio), Some(destinatario_id), Some(tipo_oficio)) = (
            non_blank(&payload.data_envio),
            payload.destinatario_id,
            non_blank(&payload.tipo_oficio),
        ) else {
            return Err(ApiError::BadRequest(
                "Data de envio, destinatário e tipo de ofício são obrigatórios".to_string(),
            ));
        };
        let data_envio = parse_date(data_envio)?;

        OrgaoService::find(pool, destinatario_id).await?;

        let status = non_blank(&payload.status).unwrap_or("Pendente");
        let oficio = sqlx::query_as::<_, EntregaOficio>(
            "INSERT INTO entrega_oficios
                 (data_envio, destinatario_id, tipo_oficio, status, observacoes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(data_envio)
        .bind(destinatario_id)
        .bind(tipo_oficio)
        .bind(status)
        .bind(&payload.observacoes)
        .fetch_one(pool)
        .await?;
        Ok(oficio)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<EntregaOficio> {
        sqlx::query_as::<_, EntregaOficio>("SELECT * FROM entrega_oficios WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Ofício não encontrado".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &OficioPayload,
    ) -> ApiResult<EntregaOficio> {
        let data_envio = match non_blank(&payload.data_envio) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };

        sqlx::query_as::<_, EntregaOficio>(
            "UPDATE entrega_oficios SET
                 data_envio = COALESCE($1, data_envio),
                 destinatario_id = COALESCE($2, destinatario_id),
                 tipo_oficio = COALESCE($3, tipo_oficio),
                 status = COALESCE($4, status),
                 observacoes = COALESCE($5, observacoes),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $6
             RETURNING *",
        )
        .bind(data_envio)
        .bind(payload.destinatario_id)
        .bind(non_blank(&payload.tipo_oficio))
        .bind(non_blank(&payload.status))
        .bind(&payload.observacoes)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Ofício não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM entrega_oficios WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Ofício não encontrado".to_string()));
        }
        Ok(())
    }
}
