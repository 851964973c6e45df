use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        pagination::Page,
        secretaria::{
            AnexoFormulario, AnexoFormularioPayload, FormularioCessao, FormularioCessaoDetail,
            FormularioCessaoList, FormularioCessaoPayload, SecretariaEstadual,
            SecretariaEstadualList, SecretariaMunicipal, SecretariaMunicipalList,
            SecretariaPayload,
        },
    },
};

use super::{is_unique_violation, non_blank, parse_date, parse_datetime, parse_time};

fn duplicate_cnpj(e: sqlx::Error) -> ApiError {
    if is_unique_violation(&e) {
        ApiError::BadRequest("CNPJ já cadastrado".to_string())
    } else {
        ApiError::from(e)
    }
}

pub struct SecretariaMunicipalService;

impl SecretariaMunicipalService {
    pub async fn list(pool: &SqlitePool, page: Page) -> ApiResult<SecretariaMunicipalList> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM secretarias_municipais")
            .fetch_one(pool)
            .await?;

        let secretarias = sqlx::query_as::<_, SecretariaMunicipal>(
            "SELECT * FROM secretarias_municipais ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(SecretariaMunicipalList {
            secretarias,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(
        pool: &SqlitePool,
        payload: &SecretariaPayload,
    ) -> ApiResult<SecretariaMunicipal> {
        let (Some(nome), Some(cnpj)) = (non_blank(&payload.nome), non_blank(&payload.cnpj)) else {
            return Err(ApiError::BadRequest(
                "Nome e CNPJ são obrigatórios".to_string(),
            ));
        };

        let secretaria = sqlx::query_as::<_, SecretariaMunicipal>(
            "INSERT INTO secretarias_municipais
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
        .map_err(duplicate_cnpj)?;
        Ok(secretaria)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<SecretariaMunicipal> {
        sqlx::query_as::<_, SecretariaMunicipal>(
            "SELECT * FROM secretarias_municipais WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Secretaria não encontrada".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &SecretariaPayload,
    ) -> ApiResult<SecretariaMunicipal> {
        sqlx::query_as::<_, SecretariaMunicipal>(
            "UPDATE secretarias_municipais SET
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
        .map_err(duplicate_cnpj)?
        .ok_or_else(|| ApiError::NotFound("Secretaria não encontrada".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM secretarias_municipais WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Secretaria não encontrada".to_string()));
        }
        Ok(())
    }
}

pub struct SecretariaEstadualService;

impl SecretariaEstadualService {
    pub async fn list(pool: &SqlitePool, page: Page) -> ApiResult<SecretariaEstadualList> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM secretarias_estaduais")
            .fetch_one(pool)
            .await?;

        let secretarias = sqlx::query_as::<_, SecretariaEstadual>(
            "SELECT * FROM secretarias_estaduais ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(SecretariaEstadualList {
            secretarias,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(
        pool: &SqlitePool,
        payload: &SecretariaPayload,
    ) -> ApiResult<SecretariaEstadual> {
        let (Some(nome), Some(cnpj)) = (non_blank(&payload.nome), non_blank(&payload.cnpj)) else {
            return Err(ApiError::BadRequest(
                "Nome e CNPJ são obrigatórios".to_string(),
            ));
        };

        let secretaria = sqlx::query_as::<_, SecretariaEstadual>(
            "INSERT INTO secretarias_estaduais
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
        .map_err(duplicate_cnpj)?;
        Ok(secretaria)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<SecretariaEstadual> {
        sqlx::query_as::<_, SecretariaEstadual>(
            "SELECT * FROM secretarias_estaduais WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Secretaria não encontrada".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &SecretariaPayload,
    ) -> ApiResult<SecretariaEstadual> {
        sqlx::query_as::<_, SecretariaEstadual>(
            "UPDATE secretarias_estaduais SET
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
        .map_err(duplicate_cnpj)?
        .ok_or_else(|| ApiError::NotFound("Secretaria não encontrada".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM secretarias_estaduais WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Secretaria não encontrada".to_string()));
        }
        Ok(())
    }
}

pub struct FormularioCessaoService;

impl FormularioCessaoService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        status: Option<&str>,
        concurso_id: Option<i64>,
    ) -> ApiResult<FormularioCessaoList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM formularios_cessao
             WHERE ($1 IS NULL OR status = $1)
               AND ($2 IS NULL OR concurso_id = $2)",
        )
        .bind(status)
        .bind(concurso_id)
        .fetch_one(pool)
        .await?;

        let formularios = sqlx::query_as::<_, FormularioCessao>(
            "SELECT * FROM formularios_cessao
             WHERE ($1 IS NULL OR status = $1)
               AND ($2 IS NULL OR concurso_id = $2)
             ORDER BY id LIMIT $3 OFFSET $4",
        )
        .bind(status)
        .bind(concurso_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(FormularioCessaoList {
            formularios,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(
        pool: &SqlitePool,
        payload: &FormularioCessaoPayload,
    ) -> ApiResult<FormularioCessao> {
        let data_solicitacao = non_blank(&payload.data_solicitacao).ok_or_else(|| {
            ApiError::BadRequest("Data de solicitação é obrigatória".to_string())
        })?;
        let data_solicitacao = parse_date(data_solicitacao)?;

        let hora_inicio = match non_blank(&payload.hora_inicio) {
            Some(raw) => Some(parse_time(raw)?),
            None => None,
        };
        let hora_fim = match non_blank(&payload.hora_fim) {
            Some(raw) => Some(parse_time(raw)?),
            None => None,
        };
        let data_assinatura = match non_blank(&payload.data_assinatura) {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };
        let status = non_blank(&payload.status).unwrap_or("Pendente");

        let formulario = sqlx::query_as::<_, FormularioCessao>(
            "INSERT INTO formularios_cessao
                 (secretaria_municipal_id, secretaria_estadual_id, concurso_id, escola_id,
                  data_solicitacao, hora_inicio, hora_fim, evento_descricao, status,
                  assinatura_eletronica, data_assinatura)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(payload.secretaria_municipal_id)
        .bind(payload.secretaria_estadual_id)
        .bind(payload.concurso_id)
        .bind(payload.escola_id)
        .bind(data_solicitacao)
        .bind(hora_inicio)
        .bind(hora_fim)
        .bind(&payload.evento_descricao)
        .bind(status)
        .bind(payload.assinatura_eletronica.unwrap_or(false))
        .bind(data_assinatura)
        .fetch_one(pool)
        .await?;
        Ok(formulario)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<FormularioCessao> {
        sqlx::query_as::<_, FormularioCessao>("SELECT * FROM formularios_cessao WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Formulário não encontrado".to_string()))
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<FormularioCessaoDetail> {
        let formulario = Self::find(pool, id).await?;
        let anexos = Self::fetch_anexos(pool, id).await?;
        Ok(FormularioCessaoDetail { formulario, anexos })
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &FormularioCessaoPayload,
    ) -> ApiResult<FormularioCessao> {
        let data_solicitacao = match non_blank(&payload.data_solicitacao) {
            Some(raw) => Some(parse_date(raw)?),
            None => None,
        };
        let hora_inicio = match non_blank(&payload.hora_inicio) {
            Some(raw) => Some(parse_time(raw)?),
            None => None,
        };
        let hora_fim = match non_blank(&payload.hora_fim) {
            Some(raw) => Some(parse_time(raw)?),
            None => None,
        };
        let data_assinatura = match non_blank(&payload.data_assinatura) {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };

        sqlx::query_as::<_, FormularioCessao>(
            "UPDATE formularios_cessao SET
                 secretaria_municipal_id = COALESCE($1, secretaria_municipal_id),
                 secretaria_estadual_id = COALESCE($2, secretaria_estadual_id),
                 concurso_id = COALESCE($3, concurso_id),
                 escola_id = COALESCE($4, escola_id),
                 data_solicitacao = COALESCE($5, data_solicitacao),
                 hora_inicio = COALESCE($6, hora_inicio),
                 hora_fim = COALESCE($7, hora_fim),
                 evento_descricao = COALESCE($8, evento_descricao),
                 status = COALESCE($9, status),
                 assinatura_eletronica = COALESCE($10, assinatura_eletronica),
                 data_assinatura = COALESCE($11, data_assinatura),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $12
             RETURNING *",
        )
        .bind(payload.secretaria_municipal_id)
        .bind(payload.secretaria_estadual_id)
        .bind(payload.concurso_id)
        .bind(payload.escola_id)
        .bind(data_solicitacao)
        .bind(hora_inicio)
        .bind(hora_fim)
        .bind(&payload.evento_descricao)
        .bind(non_blank(&payload.status))
        .bind(payload.assinatura_eletronica)
        .bind(data_assinatura)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Formulário não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM formularios_cessao WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Formulário não encontrado".to_string()));
        }
        Ok(())
    }

    // Anexos

    pub async fn listar_anexos(
        pool: &SqlitePool,
        formulario_id: i64,
    ) -> ApiResult<Vec<AnexoFormulario>> {
        Self::find(pool, formulario_id).await?;
        Self::fetch_anexos(pool, formulario_id).await
    }

    pub async fn create_anexo(
        pool: &SqlitePool,
        formulario_id: i64,
        payload: &AnexoFormularioPayload,
    ) -> ApiResult<AnexoFormulario> {
        Self::find(pool, formulario_id).await?;
        let (Some(nome_arquivo), Some(caminho_arquivo)) = (
            non_blank(&payload.nome_arquivo),
            non_blank(&payload.caminho_arquivo),
        ) else {
            return Err(ApiError::BadRequest(
                "Nome e caminho do arquivo são obrigatórios".to_string(),
            ));
        };

        let anexo = sqlx::query_as::<_, AnexoFormulario>(
            "INSERT INTO anexos_formulario
                 (formulario_id, nome_arquivo, caminho_arquivo, tipo_arquivo, tamanho_arquivo)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(formulario_id)
        .bind(nome_arquivo)
        .bind(caminho_arquivo)
        .bind(&payload.tipo_arquivo)
        .bind(payload.tamanho_arquivo)
        .fetch_one(pool)
        .await?;
        Ok(anexo)
    }

    pub async fn delete_anexo(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM anexos_formulario WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Anexo não encontrado".to_string()));
        }
        Ok(())
    }

    async fn fetch_anexos(
        pool: &SqlitePool,
        formulario_id: i64,
    ) -> ApiResult<Vec<AnexoFormulario>> {
        let anexos = sqlx::query_as::<_, AnexoFormulario>(
            "SELECT * FROM anexos_formulario WHERE formulario_id = $1 ORDER BY id",
        )
        .bind(formulario_id)
        .fetch_all(pool)
        .await?;
        Ok(anexos)
    }
}
