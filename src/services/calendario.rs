use sqlx::SqlitePool;

use crate::{
    error::{ApiError, ApiResult},
    models::{
        calendario::{
            EventoCalendario, EventoList, EventoPayload, NotificacaoEvento, NotificacaoPayload,
        },
        pagination::Page,
    },
};

use super::{non_blank, parse_datetime};

pub struct EventoService;

impl EventoService {
    pub async fn list(
        pool: &SqlitePool,
        page: Page,
        tipo_evento: Option<&str>,
        inicio: Option<&str>,
        fim: Option<&str>,
    ) -> ApiResult<EventoList> {
        // Bound bare dates to midnight so the range covers the whole day.
        let inicio = match inicio {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };
        let fim = match fim {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM eventos_calendario
             WHERE ($1 IS NULL OR tipo_evento = $1)
               AND ($2 IS NULL OR data_inicio >= $2)
               AND ($3 IS NULL OR data_inicio <= $3)",
        )
        .bind(tipo_evento)
        .bind(inicio)
        .bind(fim)
        .fetch_one(pool)
        .await?;

        let eventos = sqlx::query_as::<_, EventoCalendario>(
            "SELECT * FROM eventos_calendario
             WHERE ($1 IS NULL OR tipo_evento = $1)
               AND ($2 IS NULL OR data_inicio >= $2)
               AND ($3 IS NULL OR data_inicio <= $3)
             ORDER BY data_inicio LIMIT $4 OFFSET $5",
        )
        .bind(tipo_evento)
        .bind(inicio)
        .bind(fim)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        Ok(EventoList {
            eventos,
            total,
            pages: page.total_pages(total),
            current_page: page.number,
        })
    }

    pub async fn create(
        pool: &SqlitePool,
        usuario_id: i64,
        payload: &EventoPayload,
    ) -> ApiResult<EventoCalendario> {
        let (Some(titulo), Some(data_inicio)) =
            (non_blank(&payload.titulo), non_blank(&payload.data_inicio))
        else {
            return Err(ApiError::BadRequest(
                "Título e data de início são obrigatórios".to_string(),
            ));
        };
        let data_inicio = parse_datetime(data_inicio)?;
        let data_fim = match non_blank(&payload.data_fim) {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };
        let cor = non_blank(&payload.cor).unwrap_or("#A8DADC");

        let evento = sqlx::query_as::<_, EventoCalendario>(
            "INSERT INTO eventos_calendario
                 (usuario_id, titulo, descricao, data_inicio, data_fim, dia_inteiro,
                  tipo_evento, cor, concurso_id, escola_id, notificacao_email,
                  minutos_antes_notificacao)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING *",
        )
        .bind(usuario_id)
        .bind(titulo)
        .bind(&payload.descricao)
        .bind(data_inicio)
        .bind(data_fim)
        .bind(payload.dia_inteiro.unwrap_or(false))
        .bind(&payload.tipo_evento)
        .bind(cor)
        .bind(payload.concurso_id)
        .bind(payload.escola_id)
        .bind(payload.notificacao_email.unwrap_or(false))
        .bind(payload.minutos_antes_notificacao.unwrap_or(30))
        .fetch_one(pool)
        .await?;
        Ok(evento)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> ApiResult<EventoCalendario> {
        sqlx::query_as::<_, EventoCalendario>("SELECT * FROM eventos_calendario WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| ApiError::NotFound("Evento não encontrado".to_string()))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &EventoPayload,
    ) -> ApiResult<EventoCalendario> {
        let data_inicio = match non_blank(&payload.data_inicio) {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };
        let data_fim = match non_blank(&payload.data_fim) {
            Some(raw) => Some(parse_datetime(raw)?),
            None => None,
        };

        sqlx::query_as::<_, EventoCalendario>(
            "UPDATE eventos_calendario SET
                 titulo = COALESCE($1, titulo),
                 descricao = COALESCE($2, descricao),
                 data_inicio = COALESCE($3, data_inicio),
                 data_fim = COALESCE($4, data_fim),
                 dia_inteiro = COALESCE($5, dia_inteiro),
                 tipo_evento = COALESCE($6, tipo_evento),
                 cor = COALESCE($7, cor),
                 concurso_id = COALESCE($8, concurso_id),
                 escola_id = COALESCE($9, escola_id),
                 notificacao_email = COALESCE($10, notificacao_email),
                 minutos_antes_notificacao = COALESCE($11, minutos_antes_notificacao),
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = $12
             RETURNING *",
        )
        .bind(non_blank(&payload.titulo))
        .bind(&payload.descricao)
        .bind(data_inicio)
        .bind(data_fim)
        .bind(payload.dia_inteiro)
        .bind(&payload.tipo_evento)
        .bind(non_blank(&payload.cor))
        .bind(payload.concurso_id)
        .bind(payload.escola_id)
        .bind(payload.notificacao_email)
        .bind(payload.minutos_antes_notificacao)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound("Evento não encontrado".to_string()))
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM eventos_calendario WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound("Evento não encontrado".to_string()));
        }
        Ok(())
    }

    // Notificações

    pub async fn listar_notificacoes(
        pool: &SqlitePool,
        evento_id: i64,
    ) -> ApiResult<Vec<NotificacaoEvento>> {
        Self::find(pool, evento_id).await?;
        let notificacoes = sqlx::query_as::<_, NotificacaoEvento>(
            "SELECT * FROM notificacoes_evento WHERE evento_id = $1 ORDER BY id",
        )
        .bind(evento_id)
        .fetch_all(pool)
        .await?;
        Ok(notificacoes)
    }

    pub async fn create_notificacao(
        pool: &SqlitePool,
        evento_id: i64,
        payload: &NotificacaoPayload,
    ) -> ApiResult<NotificacaoEvento> {
        Self::find(pool, evento_id).await?;
        let data_envio = non_blank(&payload.data_envio)
            .ok_or_else(|| ApiError::BadRequest("Data de envio é obrigatória".to_string()))?;
        let data_envio = parse_datetime(data_envio)?;
        let status = non_blank(&payload.status).unwrap_or("Pendente");

        let notificacao = sqlx::query_as::<_, NotificacaoEvento>(
            "INSERT INTO notificacoes_evento
                 (evento_id, data_envio, status, email_destinatario, mensagem_erro)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(evento_id)
        .bind(data_envio)
        .bind(status)
        .bind(&payload.email_destinatario)
        .bind(&payload.mensagem_erro)
        .fetch_one(pool)
        .await?;
        Ok(notificacao)
    }
}
