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
pub mod pagination;
pub mod rota;
pub mod secretaria;
pub mod units;
