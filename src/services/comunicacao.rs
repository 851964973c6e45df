use chrono::Local;
use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        comunicacao::{
            EmailDestinatario, EmailDetail, EmailEnviado, EmailList, EmailPayload, TemplateEmail,
            TemplateEmailList, TemplateEmailPayload,
        },
        pagination::Page,
    },
};

use super::{non_blank, parse_datetime};

pub struct EmailService;

impl EmailService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        status: Option<&str>,
        concurso_id: Option<i64>,
    ) -> ApiResult<EmailList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM emails_enviados
             WHERE ($1 IS NULL OR status = $1)
               AND ($2 IS NULL OR concurso_id = $2)",
        )
        .bind(status)
        .bind(concurso_id)
        .fetch_one(pool)
        .await?;

        let emails = sqlx::query_as::<_, EmailEnviado>(
            "SELECT * FROM emails_enviados
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

        Ok(EmailList {
            emails,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    /// Register a bulk send and its recipient list in one transaction. The
    /// recipient counters start at zero; delivery updates them later.
    pub async fn create(
        pool: &SqlitePool,
        usuario_id: i64,
        payload: &EmailPayload,
    ) -> ApiResult<EmailDetail> {
        let (Some(assunto), Some(corpo_email)) = (
            non_blank(&payload.assunto),
            non_blank(&payload.corpo_email),
        ) else {
            return Err(ApiError::BadRequest(
                "Assunto e corpo do email são obrigatórios".to_string(),
            ));
        };
        let data_envio = match non_blank(&payload.data_envio) {
            Some(raw) => parse_datetime(raw)?,
            None => Local::now().naive_local(),
        };

        let mut tx = pool.begin().await?;

        let email = sqlx::query_as::<_, EmailEnviado>(
            "INSERT INTO emails_enviados
                 (usuario_id, concurso_id, data_envio, assunto, corpo_email,
                  total_destinatarios, assinatura_digital, arquivo_assinatura)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *",
        )
        .bind(usuario_id)
        .bind(payload.concurso_id)
        .bind(data_envio)
        .bind(assunto)
        .bind(corpo_email)
        .bind(payload.destinatarios.len() as i64)
        .bind(payload.assinatura_digital.unwrap_or(false))
        .bind(&payload.arquivo_assinatura)
        .fetch_one(&mut *tx)
        .await?;

        let mut destinatarios = Vec::with_capacity(payload.destinatarios.len());
        for destinatario in &payload.destinatarios {
            let Some(endereco) = non_blank(&destinatario.email_destinatario) else {
                return Err(ApiError::BadRequest(
                    "Email do destinatário é obrigatório".to_string(),
                ));
            };
            let destinatario = sqlx::query_as::<_, EmailDestinatario>(
                "INSERT INTO email_destinatarios
                     (email_enviado_id, escola_id, email_destinatario, nome_destinatario)
                 VALUES ($1, $2, $3, $4)
                 RETURNING *",
            )
            .bind(email.id)
            .bind(destinatario.escola_id)
            .bind(endereco)
            .bind(&destinatario.nome_destinatario)
            .fetch_one(&mut *tx)
            .await?;
            destinatarios.push(destinatario);
        }

        tx.commit().await?;
        Ok(EmailDetail {
            email,
            destinatarios,
        })
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<EmailDetail> {
        let email = sqlx::query_as::<_, EmailEnviado>("SELECT * FROM emails_enviados WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Email não encontrado".to_string()))?;

        let destinatarios = sqlx::query_as::<_, EmailDestinatario>(
            "SELECT * FROM email_destinatarios WHERE email_enviado_id = $1 ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(EmailDetail {
            email,
            destinatarios,
        })
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM emails_enviados WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Email não encontrado".to_string()));
        }
        Ok(())
    }
}

pub struct TemplateEmailService;

impl TemplateEmailService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        ativo: Option<bool>,
    ) -> ApiResult<TemplateEmailList> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM templates_email WHERE ($1 IS NULL OR ativo = $1)",
        )
        .bind(ativo)
        .fetch_one(pool)
        .await?;

        let templates = sqlx::query_as::<_, TemplateEmail>(
            "SELECT * FROM templates_email WHERE ($1 IS NULL OR ativo = $1)
             ORDER BY id LIMIT $2 OFFSET $3",
        )
        .bind(ativo)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(TemplateEmailList {
            templates,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(
        pool: &SqlitePool,
        payload: &TemplateEmailPayload,
    ) -> ApiResult<TemplateEmail> {
        let (Some(nome_template), Some(corpo_padrao)) = (
            non_blank(&payload.nome_template),
            non_blank(&payload.corpo_padrao),
        ) else {
            return Err(ApiError::BadRequest(
                "Nome do template e corpo padrão são obrigatórios".to_string(),
            ));
        };

        let template = sqlx::query_as::<_, TemplateEmail>(
            "INSERT INTO templates_email
                 (nome_template, assunto_padrao, corpo_padrao, variaveis_disponiveis, ativo)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(nome_template)
        .bind(&payload.assunto_padrao)
        .bind(corpo_padrao)
        .bind(&payload.variaveis_disponiveis)
        .bind(payload.ativo.unwrap_or(true))
        .fetch_one(pool)
        .await?;
        Ok(template)
    }

    pub async fn get(pool: &SqlitePool, id: i64) -> ApiResult<TemplateEmail> {
        sqlx::query_as::<_, TemplateEmail>("SELECT * FROM templates_email WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Template não encontrado".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &TemplateEmailPayload,
    ) -> ApiResult<TemplateEmail> {
        sqlx::query_as::<_, TemplateEmail>(
            "UPDATE templates_email SET
                 nome_template = COALESCE($1, nome_template),
                 assunto_padrao = COALESCE($2, assunto_padrao),
                 corpo_padrao = COALESCE($3, corpo_padrao),
                 variaveis_disponiveis = COALESCE($4, variaveis_disponiveis),
                 ativo = COALESCE($5, ativo),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $6
             RETURNING *",
        )
        .bind(non_blank(&payload.nome_template))
        .bind(&payload.assunto_padrao)
        .bind(non_blank(&payload.corpo_padrao))
        .bind(&payload.variaveis_disponiveis)
        .bind(payload.ativo)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Template não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM templates_email WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Template não encontrado".to_string()));
        }
        Ok(())
    }
}
