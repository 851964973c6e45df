use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::units;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Rota {
    pub id: i64,
    pub escola_origem_id: i64,
    pub escola_destino_id: i64,
    #[serde(rename = "distancia_km", with = "units::quilometros_opt")]
    pub distancia_m: Option<i64>,
    pub tempo_estimado_minutos: Option<i64>,
    pub condicao_acesso: Option<String>,
    pub coordenadas_origem: Option<String>,  // JSON {lat, lng}
    pub coordenadas_destino: Option<String>, // JSON {lat, lng}
    pub geometria_rota: Option<String>,      // GeoJSON of the full route
    pub data_consulta: NaiveDateTime,
    pub usuario_consulta_id: Option<i64>,
    pub servico_utilizado: String,
    pub status_calculo: String, // "Sucesso" | "Erro" | "Parcial"
    pub observacoes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FiltroRota {
    pub id: i64,
    pub usuario_id: i64,
    pub nome_filtro: String,
    pub escola_origem_id: Option<i64>,
    pub escola_destino_id: Option<i64>,
    #[serde(rename = "distancia_minima", with = "units::quilometros_opt")]
    pub distancia_minima_m: Option<i64>,
    #[serde(rename = "distancia_maxima", with = "units::quilometros_opt")]
    pub distancia_maxima_m: Option<i64>,
    pub tempo_minimo: Option<i64>,
    pub tempo_maximo: Option<i64>,
    pub data_consulta_inicio: Option<NaiveDate>,
    pub data_consulta_fim: Option<NaiveDate>,
    pub ativo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct RotaList {
    pub rotas: Vec<Rota>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct FiltroRotaList {
    pub filtros: Vec<FiltroRota>,
    pub total: i64,
    pub pages: i64,
    pub current_page: i64,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct RotaPayload {
    pub escola_origem_id: Option<i64>,
    pub escola_destino_id: Option<i64>,
    pub distancia_km: Option<f64>,
    pub tempo_estimado_minutos: Option<i64>,
    pub condicao_acesso: Option<String>,
    pub coordenadas_origem: Option<String>,
    pub coordenadas_destino: Option<String>,
    pub geometria_rota: Option<String>,
    pub servico_utilizado: Option<String>,
    pub status_calculo: Option<String>,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FiltroRotaPayload {
    pub nome_filtro: Option<String>,
    pub escola_origem_id: Option<i64>,
    pub escola_destino_id: Option<i64>,
    pub distancia_minima: Option<f64>,
    pub distancia_maxima: Option<f64>,
    pub tempo_minimo: Option<i64>,
    pub tempo_maximo: Option<i64>,
    pub data_consulta_inicio: Option<String>,
    pub data_consulta_fim: Option<String>,
    pub ativo: Option<bool>,
}
