// src/state.rs
use sqlx::SqlitePool;

// Estado partilhado da aplicação: construído em main() e entregue ao router,
// em vez de handles globais de DB/configuração.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
}

// Permite extrair o pool da DB diretamente
impl axum::extract::FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> SqlitePool {
        state.db_pool.clone()
    }
}
