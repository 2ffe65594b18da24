// src/web/home_handlers.rs
use crate::{
    error::{AppError, AppResult},
    templates::{IndexPage, NotFoundPage},
};
use askama::Template; // Trait Template para render()
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use chrono::Utc;

/// Hora atual em UTC, formatada para exibição nas páginas
pub fn hora_atual() -> String {
    Utc::now().format("%d/%m/%Y %H:%M:%S UTC").to_string()
}

// Handler para GET /
pub async fn index() -> AppResult<impl IntoResponse> {
    let template = IndexPage {
        current_time: hora_atual(),
    };
    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template IndexPage: {}", e);
            Err(AppError::InternalServerError)
        }
    }
}

// Fallback para rotas desconhecidas (contraparte do errorhandler 404)
pub async fn not_found() -> impl IntoResponse {
    let template = NotFoundPage {
        current_time: hora_atual(),
    };
    match template.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Falha ao renderizar template NotFoundPage: {}", e);
            (StatusCode::NOT_FOUND, "Página não encontrada.").into_response()
        }
    }
}
