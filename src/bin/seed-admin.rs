/// Seed the initial administrator account.
/// Safe to re-run: an existing login is left untouched.
///
/// Usage: seed-admin [--login LOGIN] [--senha SENHA] [--perfil PERFIL]
use anyhow::Context;
use clap::Parser;

use concursos_api::db;
use concursos_api::services::auth::AuthService;

#[derive(Parser)]
#[command(name = "seed-admin", about = "Cria o usuário administrador inicial")]
struct Args {
    /// Login do administrador
    #[arg(long, default_value = "betha")]
    login: String,

    /// Senha inicial
    #[arg(long, default_value = "12345")]
    senha: String,

    /// Perfil atribuído à conta
    #[arg(long, default_value = "admin")]
    perfil: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL required")?;

    let pool = db::create_pool(&database_url).await?;
    db::run_migrations(&pool).await?;

    if AuthService::find_by_login(&pool, &args.login).await?.is_some() {
        tracing::info!("Usuário '{}' já existe, nada a fazer", args.login);
        return Ok(());
    }

    let usuario = AuthService::create_user(&pool, &args.login, &args.senha, &args.perfil).await?;
    tracing::info!(
        "Usuário administrador criado: {} (perfil: {})",
        usuario.login,
        usuario.perfil
    );

    Ok(())
}
