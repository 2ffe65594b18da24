// src/web/aluno_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::aluno::CadastroForm,
    services::aluno_service::{self, Cadastro, DISCIPLINAS},
    state::AppState,
    templates::AlunosPage,
};
use askama::Template; // Trait Template para render()
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect},
};
use tower_sessions::Session; // Sessão transporta a mensagem flash

// Chave da mensagem flash na sessão (consumida no GET seguinte)
const FLASH_KEY: &str = "flash";

// Handler para GET /alunos - formulário de cadastro + listagem
pub async fn show_alunos_page(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    // Consome (remove) a flash deixada pelo POST anterior, se houver
    let flash: Option<String> = session
        .remove(FLASH_KEY)
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao ler flash: {}", e)))?;

    let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
    tracing::debug!("GET /alunos: {} alunos na listagem", alunos.len());

    let template = AlunosPage {
        flash,
        erro_nome: None,
        nome: String::new(),
        disciplina: DISCIPLINAS[0].to_string(),
        disciplinas: DISCIPLINAS,
        alunos,
    };
    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Falha ao renderizar template AlunosPage: {}", e);
            Err(AppError::InternalServerError)
        }
    }
}

// Handler para POST /alunos - processa o formulário de cadastro
pub async fn handle_cadastro(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CadastroForm>,
) -> AppResult<impl IntoResponse> {
    let nome = form.nome.trim();
    tracing::info!("POST /alunos: tentativa de cadastro de '{}'", nome);

    // Campo obrigatório: redisplaya o formulário sem tocar na DB
    if nome.is_empty() {
        let alunos = aluno_service::listar_alunos(&state.db_pool).await?;
        let template = AlunosPage {
            flash: None,
            erro_nome: Some("Este campo é obrigatório.".to_string()),
            nome: String::new(),
            disciplina: form.disciplina,
            disciplinas: DISCIPLINAS,
            alunos,
        };
        return match template.render() {
            Ok(html) => Ok(Html(html).into_response()),
            Err(e) => {
                tracing::error!("Falha ao renderizar template AlunosPage: {}", e);
                Err(AppError::InternalServerError)
            }
        };
    }

    // Um ConflitoPersistencia propaga daqui para a página 500 genérica
    let mensagem = match aluno_service::cadastrar_aluno(&state.db_pool, nome, &form.disciplina)
        .await?
    {
        Cadastro::Efetuado => "Estudante cadastrado com sucesso!",
        Cadastro::JaExiste => "Estudante já existe na base de dados!",
    };

    session
        .insert(FLASH_KEY, mensagem)
        .await
        .map_err(|e| AppError::SessionError(format!("Falha ao gravar flash: {}", e)))?;

    // POST → redirect → GET, como no fluxo original
    Ok(Redirect::to("/alunos").into_response())
}
