use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        fornecedor::{
            DocumentoFornecedor, DocumentoFornecedorPayload, Fornecedor, FornecedorDetail,
            FornecedorList, FornecedorPayload,
        },
        pagination::Page,
    },
};

use super::{is_unique_violation, non_blank};

pub struct FornecedorService;

impl FornecedorService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        tipo_servico: Option<&str>,
    ) -> ApiResult<FornecedorList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM fornecedores WHERE ($1 IS NULL OR tipo_servico = $1)",
        )
        .bind(tipo_servico)
        .fetch_one(pool)
        .await?;

        let fornecedores = sqlx::query_as::<_, Fornecedor>(
            "SELECT * FROM fornecedores WHERE ($1 IS NULL OR tipo_servico = $1)
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(tipo_servico)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(FornecedorList {
            fornecedores,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(pool: &SqlitePool, payload: &FornecedorPayload) -> ApiResult<Fornecedor> {
        let (Some(tipo_servico), Some(nome), Some(cnpj)) = (
            non_blank(&payload.tipo_servico),
            non_blank(&payload.nome),
            non_blank(&payload.cnpj),
        ) else {
            return Err(ApiError::BadRequest(
                "Tipo de serviço, nome e CNPJ são obrigatórios".to_string(),
            ));
        };

        let fornecedor = sqlx::query_as::<_, Fornecedor>(
            "INSERT INTO fornecedores
                 (tipo_servico, nome, cnpj, codigo_atividade_economica,
                  descricao_atividade_economica, logradouro, numero, bairro, cep, municipio,
                  uf, inscricao_estadual, inscricao_municipal, telefone, email)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING *",
        )
        .bind(tipo_servico)
        .bind(nome)
        .bind(cnpj)
        .bind(&payload.codigo_atividade_economica)
        .bind(&payload.descricao_atividade_economica)
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.inscricao_estadual)
        .bind(&payload.inscricao_municipal)
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
        Ok(fornecedor)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<Fornecedor> {
        sqlx::query_as::<_, Fornecedor>("SELECT * FROM fornecedores WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Fornecedor não encontrado".to_string()))
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<FornecedorDetail> {
        let fornecedor = Self::find(pool, id).await?;
        let documentos = Self::fetch_documentos(pool, id).await?;
        Ok(FornecedorDetail {
            fornecedor,
            documentos,
        })
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &FornecedorPayload,
    ) -> ApiResult<Fornecedor> {
        sqlx::query_as::<_, Fornecedor>(
            "UPDATE fornecedores SET
                 tipo_servico = COALESCE($1, tipo_servico),
                 nome = COALESCE($2, nome),
                 cnpj = COALESCE($3, cnpj),
                 codigo_atividade_economica = COALESCE($4, codigo_atividade_economica),
                 descricao_atividade_economica = COALESCE($5, descricao_atividade_economica),
                 logradouro = COALESCE($6, logradouro),
                 numero = COALESCE($7, numero),
                 bairro = COALESCE($8, bairro),
                 cep = COALESCE($9, cep),
                 municipio = COALESCE($10, municipio),
                 uf = COALESCE($11, uf),
                 inscricao_estadual = COALESCE($12, inscricao_estadual),
                 inscricao_municipal = COALESCE($13, inscricao_municipal),
                 telefone = COALESCE($14, telefone),
                 email = COALESCE($15, email),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $16
             RETURNING *",
        )
        .bind(non_blank(&payload.tipo_servico))
        .bind(non_blank(&payload.nome))
        .bind(non_blank(&payload.cnpj))
        .bind(&payload.codigo_atividade_economica)
        .bind(&payload.descricao_atividade_economica)
        .bind(&payload.logradouro)
        .bind(&payload.numero)
        .bind(&payload.bairro)
        .bind(&payload.cep)
        .bind(&payload.municipio)
        .bind(&payload.uf)
        .bind(&payload.inscricao_estadual)
        .bind(&payload.inscricao_municipal)
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
        .ok_or_else(|| ApiError::NotFound("Fornecedor não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM fornecedores WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Fornecedor não encontrado".to_string()));
        }
        Ok(())
    }

    // Documentos (orçamentos e notas fiscais)

    pub async fn listar_documentos(
        pool: &SqlitePool,
        fornecedor_id: i64,
    ) -> ApiResult<Vec<DocumentoFornecedor>> {
        Self::find(pool, fornecedor_id).await?;
        Self::fetch_documentos(pool, fornecedor_id).await
    }

    pub async fn create_documento(
        pool: &SqlitePool,
        fornecedor_id: i64,
        payload: &DocumentoFornecedorPayload,
    ) -> ApiResult<DocumentoFornecedor> {
        Self::find(pool, fornecedor_id).await?;
        let (Some(tipo_documento), Some(nome_arquivo), Some(caminho_arquivo)) = (
            non_blank(&payload.tipo_documento),
            non_blank(&payload.nome_arquivo),
            non_blank(&payload.caminho_arquivo),
        ) else {
            return Err(ApiError::BadRequest(
                "Tipo, nome e caminho do arquivo são obrigatórios".to_string(),
            ));
        };

        let documento = sqlx::query_as::<_, DocumentoFornecedor>(
            "INSERT INTO documentos_fornecedor
                 (fornecedor_id, concurso_id, tipo_documento, nome_arquivo, caminho_arquivo,
                  descricao)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(fornecedor_id)
        .bind(payload.concurso_id)
        .bind(tipo_documento)
        .bind(nome_arquivo)
        .bind(caminho_arquivo)
        .bind(&payload.descricao)
        .fetch_one(pool)
        .await?;
        Ok(documento)
    }

    pub async fn delete_documento(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM documentos_fornecedor WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Documento não encontrado".to_string()));
        }
        Ok(())
    }

    async fn fetch_documentos(
        pool: &SqlitePool,
        fornecedor_id: i64,
    ) -> ApiResult<Vec<DocumentoFornecedor>> {
        let documentos = sqlx::query_as::<_, DocumentoFornecedor>(
            "SELECT * FROM documentos_fornecedor WHERE fornecedor_id = $1 ORDER BY id",
        )
        .bind(fornecedor_id)
        .fetch_all(pool)
        .await?;
        Ok(documentos)
    }
}
