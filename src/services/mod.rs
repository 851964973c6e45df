pub mod auth;
pub mod banca;
pub mod calendario;
pub mod colaborador;
pub mod comunicacao;
pub mod concurso;
pub mod dashboard;
pub mod escola;
pub mod financeiro;
pub mod fornecedor;
pub mod orgao;
pub mod rota;
pub mod secretaria;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ApiError, ApiResult};

/// Presence check mirroring the API contract: an absent field and an empty
/// string are both treated as "not provided".
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub(crate) fn parse_date(s: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Data inválida: {s} (esperado YYYY-MM-DD)")))
}

/// Accepts ISO-8601 date-times with `T` or space separator, with or without
/// seconds, or a bare date (midnight).
pub(crate) fn parse_datetime(s: &str) -> ApiResult<NaiveDateTime> {
    for fmt in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }
    Err(ApiError::BadRequest(format!(
        "Data/hora inválida: {s} (esperado ISO-8601)"
    )))
}

pub(crate) fn parse_time(s: &str) -> ApiResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| ApiError::BadRequest(format!("Hora inválida: {s} (esperado HH:MM)")))
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_are_equivalent() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some(String::new())), None);
        assert_eq!(non_blank(&Some("x".into())), Some("x"));
    }

    #[test]
    fn dates_require_iso_format() {
        assert!(parse_date("2024-06-15").is_ok());
        assert!(parse_date("15/06/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn datetimes_accept_common_separators() {
        assert!(parse_datetime("2024-06-15T09:30:00").is_ok());
        assert!(parse_datetime("2024-06-15 09:30:00").is_ok());
        assert!(parse_datetime("2024-06-15T09:30").is_ok());
        assert_eq!(
            parse_datetime("2024-06-15").unwrap().to_string(),
            "2024-06-15 00:00:00"
        );
        assert!(parse_datetime("junho").is_err());
    }

    #[test]
    fn times_accept_minutes_precision() {
        assert!(parse_time("14:30:00").is_ok());
        assert!(parse_time("14:30").is_ok());
        assert!(parse_time("25:00").is_err());
    }
}
