// src/error.rs
use crate::templates::ServerErrorPage;
use askama::Template;
use axum::{http::StatusCode, response::Html, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro na base de dados: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Erro de migração da base de dados: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),

    // Nome do aluno em branco (o handler valida antes, mas o serviço
    // também recusa para nunca tocar na DB com dados inválidos)
    #[error("Nome do aluno é obrigatório")]
    NomeObrigatorio,

    // Disciplina fora da lista fechada DISCIPLINAS
    #[error("Disciplina inválida: {0}")]
    DisciplinaInvalida(String),

    // Violação de UNIQUE durante o commit (corrida entre lookup e insert).
    // Política: o segundo escritor perde e recebe erro genérico, sem retry.
    #[error("Conflito de persistência (registo duplicado)")]
    ConflitoPersistencia,

    #[error("Erro na sessão: {0}")]
    SessionError(String),

    #[error("Erro interno inesperado")]
    InternalServerError,
}

// Como converter AppError numa resposta HTTP
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Loga o erro detalhado no servidor
        tracing::error!("Erro processado: {:?}", self);

        let (status, user_message) = match self {
            AppError::SqlxError(_) | AppError::SqlxMigrateError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao aceder aos dados.")
            }
            AppError::NomeObrigatorio => {
                (StatusCode::BAD_REQUEST, "O nome do aluno é obrigatório.")
            }
            AppError::DisciplinaInvalida(_) => {
                (StatusCode::BAD_REQUEST, "Disciplina selecionada inválida.")
            }
            AppError::ConflitoPersistencia => {
                // Corrida perdida na DB: resposta genérica de servidor
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro ao gravar os dados.")
            }
            AppError::SessionError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Erro na gestão da sua sessão.")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Ocorreu um erro inesperado."),
        };

        // Erros de servidor usam o template 500.html; o fallback inline
        // cobre o caso do próprio template falhar ao renderizar
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            if let Ok(html) = (ServerErrorPage {}).render() {
                return (status, Html(html)).into_response();
            }
        }

        (status, Html(format!(r#"
            <!DOCTYPE html><html><head><title>Erro</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Erro {status_code}</h1><p>{message}</p><a href="javascript:history.back()">Voltar</a></body></html>
         "#, status_code = status.as_u16(), message = user_message))).into_response()
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
