pub mod auth;
pub mod bancas;
pub mod calendario;
pub mod colaboradores;
pub mod concursos;
pub mod dashboard;
pub mod emails;
pub mod escolas;
pub mod financeiro;
pub mod fornecedores;
pub mod health;
pub mod orgaos;
pub mod rotas;
pub mod secretarias;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Autenticação
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/session", get(auth::check_session))
        .route("/change-password", put(auth::change_password))
        .route("/change-login", put(auth::change_login))
        .route("/profile", get(auth::profile))
        // Concursos
        .route("/concursos", get(concursos::list_concursos).post(concursos::create_concurso))
        .route("/concursos/ativos", get(concursos::list_concursos_ativos))
        .route("/concursos/{id}", get(concursos::get_concurso).put(concursos::update_concurso).delete(concursos::delete_concurso))
        .route("/concursos/{id}/resumo-contratacao", get(concursos::get_resumo_contratacao).post(concursos::create_resumo_contratacao))
        .route("/concursos/{id}/escolas", get(concursos::list_escolas_concurso).post(concursos::add_escola_concurso))
        .route("/concursos/{id}/escolas/{escola_id}", delete(concursos::remove_escola_concurso))
        // Escolas
        .route("/escolas", get(escolas::list_escolas).post(escolas::create_escola))
        .route("/escolas/{id}", get(escolas::get_escola).put(escolas::update_escola).delete(escolas::delete_escola))
        .route("/escolas/{id}/salas", get(escolas::list_salas).post(escolas::create_sala))
        .route("/salas/{id}", put(escolas::update_sala).delete(escolas::delete_sala))
        .route("/escolas/{id}/fotos", get(escolas::list_fotos).post(escolas::create_foto))
        .route("/fotos/{id}", delete(escolas::delete_foto))
        // Colaboradores
        .route("/colaboradores", get(colaboradores::list_colaboradores).post(colaboradores::create_colaborador))
        .route("/colaboradores/{id}", get(colaboradores::get_colaborador).put(colaboradores::update_colaborador).delete(colaboradores::delete_colaborador))
        .route("/colaboradores/{id}/participacoes", get(colaboradores::list_participacoes).post(colaboradores::create_participacao))
        .route("/participacoes/{id}", delete(colaboradores::delete_participacao))
        // Financeiro
        .route("/pagamentos", get(financeiro::list_pagamentos).post(financeiro::create_pagamento))
        .route("/pagamentos/{id}", get(financeiro::get_pagamento).put(financeiro::update_pagamento).delete(financeiro::delete_pagamento))
        .route("/ajudas-custo", get(financeiro::list_ajudas_custo).post(financeiro::create_ajuda_custo))
        .route("/ajudas-custo/{id}", get(financeiro::get_ajuda_custo).put(financeiro::update_ajuda_custo).delete(financeiro::delete_ajuda_custo))
        // Bancas organizadoras
        .route("/bancas", get(bancas::list_bancas).post(bancas::create_banca))
        .route("/bancas/{id}", get(bancas::get_banca).put(bancas::update_banca).delete(bancas::delete_banca))
        .route("/bancas/{id}/contatos", get(bancas::list_contatos).post(bancas::create_contato))
        .route("/contatos-setoriais/{id}", delete(bancas::delete_contato))
        .route("/bancas/{id}/formularios", get(bancas::list_formularios).post(bancas::create_formulario))
        .route("/formularios-banca/{id}", delete(bancas::delete_formulario))
        // Fornecedores
        .route("/fornecedores", get(fornecedores::list_fornecedores).post(fornecedores::create_fornecedor))
        .route("/fornecedores/{id}", get(fornecedores::get_fornecedor).put(fornecedores::update_fornecedor).delete(fornecedores::delete_fornecedor))
        .route("/fornecedores/{id}/documentos", get(fornecedores::list_documentos).post(fornecedores::create_documento))
        .route("/documentos-fornecedor/{id}", delete(fornecedores::delete_documento))
        // Órgãos públicos e ofícios
        .route("/orgaos", get(orgaos::list_orgaos).post(orgaos::create_orgao))
        .route("/orgaos/{id}", get(orgaos::get_orgao).put(orgaos::update_orgao).delete(orgaos::delete_orgao))
        .route("/orgaos/{id}/documentos", get(orgaos::list_documentos).post(orgaos::create_documento))
        .route("/documentos-orgao/{id}", delete(orgaos::delete_documento))
        .route("/oficios", get(orgaos::list_oficios).post(orgaos::create_oficio))
        .route("/oficios/{id}", get(orgaos::get_oficio).put(orgaos::update_oficio).delete(orgaos::delete_oficio))
        // Secretarias e cessão de espaço
        .route("/secretarias/municipais", get(secretarias::list_municipais).post(secretarias::create_municipal))
        .route("/secretarias/municipais/{id}", get(secretarias::get_municipal).put(secretarias::update_municipal).delete(secretarias::delete_municipal))
        .route("/secretarias/estaduais", get(secretarias::list_estaduais).post(secretarias::create_estadual))
        .route("/secretarias/estaduais/{id}", get(secretarias::get_estadual).put(secretarias::update_estadual).delete(secretarias::delete_estadual))
        .route("/formularios-cessao", get(secretarias::list_formularios_cessao).post(secretarias::create_formulario_cessao))
        .route("/formularios-cessao/{id}", get(secretarias::get_formulario_cessao).put(secretarias::update_formulario_cessao).delete(secretarias::delete_formulario_cessao))
        .route("/formularios-cessao/{id}/anexos", get(secretarias::list_anexos).post(secretarias::create_anexo))
        .route("/anexos-formulario/{id}", delete(secretarias::delete_anexo))
        // Rotas entre escolas
        .route("/rotas", get(rotas::list_rotas).post(rotas::create_rota))
        .route("/rotas/{id}", get(rotas::get_rota).put(rotas::update_rota).delete(rotas::delete_rota))
        .route("/filtros-rota", get(rotas::list_filtros).post(rotas::create_filtro))
        .route("/filtros-rota/{id}", get(rotas::get_filtro).put(rotas::update_filtro).delete(rotas::delete_filtro))
        // Calendário
        .route("/eventos", get(calendario::list_eventos).post(calendario::create_evento))
        .route("/eventos/{id}", get(calendario::get_evento).put(calendario::update_evento).delete(calendario::delete_evento))
        .route("/eventos/{id}/notificacoes", get(calendario::list_notificacoes).post(calendario::create_notificacao))
        // Comunicação
        .route("/emails", get(emails::list_emails).post(emails::create_email))
        .route("/emails/{id}", get(emails::get_email).delete(emails::delete_email))
        .route("/templates-email", get(emails::list_templates).post(emails::create_template))
        .route("/templates-email/{id}", get(emails::get_template).put(emails::update_template).delete(emails::delete_template))
        // Dashboard
        .route("/dashboard/kpis", get(dashboard::kpis))
        .route("/dashboard/graficos/concursos-por-mes", get(dashboard::concursos_por_mes))
        .route("/dashboard/graficos/ocupacao-salas", get(dashboard::ocupacao_salas))
        .route("/dashboard/graficos/pagamentos-por-mes", get(dashboard::pagamentos_por_mes))
        .route("/dashboard/proximos-eventos", get(dashboard::proximos_eventos))
        .route("/dashboard/resumo-financeiro", get(dashboard::resumo_financeiro))
        .with_state(state)
}
