// src/db.rs
use crate::error::AppResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

// A aplicação original guardava os dados num ficheiro data.sqlite local,
// por isso esse é o default quando DATABASE_URL não está definida.
const DEFAULT_DATABASE_URL: &str = "sqlite://data.sqlite";

pub async fn create_db_pool() -> AppResult<SqlitePool> {
    dotenvy::dotenv().ok(); // Carrega .env
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Ligando à base de dados: {}", database_url);

    // Opções de conexão (criar se não existir, timeout)
    let options = SqliteConnectOptions::from_str(&database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    // Cria o pool (conjunto de conexões reutilizáveis)
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Executando migrações da base de dados...");
    // Executa automaticamente os ficheiros SQL em ./migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrações concluídas.");

    Ok(pool)
}
