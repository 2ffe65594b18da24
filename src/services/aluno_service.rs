// src/services/aluno_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        aluno::{Aluno, AlunoComDisciplina},
        role::Role,
    },
};
use sqlx::SqlitePool;

// Lista fechada de disciplinas válidas. O formulário só oferece estas
// opções e o serviço recusa qualquer outra vinda por fora da UI.
pub const DISCIPLINAS: &[&str] = &[
    "DSWA5",
    "GPSA5",
    "IHCA5",
    "SODA5",
    "PJIA5",
    "TCOA5",
];

/// Resultado de uma tentativa de cadastro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadastro {
    /// Aluno novo gravado, associado à disciplina (pré-existente ou criada).
    Efetuado,
    /// Já havia um aluno com este nome; nada foi alterado na DB.
    JaExiste,
}

/// Verifica se um erro da DB é violação de UNIQUE (códigos SQLite comuns).
fn eh_violacao_unique(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        return db_err
            .code()
            .map_or(false, |c| c == "19" || c == "2067" || c == "1555");
    }
    false
}

/// Cadastra um aluno, reutilizando a disciplina (role) quando já existe.
///
/// Toda a operação corre numa única transação: lookup do aluno, lookup ou
/// criação preguiçosa da role e insert do aluno são confirmados num único
/// commit. Se outra requisição ganhar a corrida e a UNIQUE constraint
/// rejeitar um dos inserts, o segundo escritor recebe
/// `AppError::ConflitoPersistencia` (sem retry nem merge).
pub async fn cadastrar_aluno(
    db_pool: &SqlitePool,
    nome: &str,
    disciplina: &str,
) -> AppResult<Cadastro> {
    // Pré-condições do contrato: nada disto chega a tocar na DB
    if nome.trim().is_empty() {
        return Err(AppError::NomeObrigatorio);
    }
    if !DISCIPLINAS.contains(&disciplina) {
        tracing::warn!("Tentativa de cadastro com disciplina inválida: {}", disciplina);
        return Err(AppError::DisciplinaInvalida(disciplina.to_string()));
    }

    tracing::debug!("Cadastrando aluno '{}' na disciplina '{}'", nome, disciplina);

    let mut tx = db_pool.begin().await?;

    // 1. Aluno já existe? Então não há nada a gravar.
    let existente = sqlx::query_as::<_, Aluno>(
        r#"
        SELECT id, username, role_id FROM users WHERE username = ?1
        "#,
    )
    .bind(nome)
    .fetch_optional(&mut *tx)
    .await?;

    if let Some(aluno) = existente {
        tracing::debug!("Aluno '{}' (id {}) já existe na base de dados.", aluno.username, aluno.id);
        // A transação é descartada sem commit: zero escritas
        return Ok(Cadastro::JaExiste);
    }

    // 2. Busca a disciplina; cria preguiçosamente na primeira referência
    let role_id = match sqlx::query_as::<_, Role>(
        r#"
        SELECT id, name FROM roles WHERE name = ?1
        "#,
    )
    .bind(disciplina)
    .fetch_optional(&mut *tx)
    .await?
    {
        Some(role) => {
            tracing::debug!("Disciplina '{}' já existe (id {}).", role.name, role.id);
            role.id
        }
        None => {
            tracing::debug!("Disciplina '{}' ainda não existe, criando...", disciplina);
            let inserida = sqlx::query(
                r#"
                INSERT INTO roles (name) VALUES (?1)
                "#,
            )
            .bind(disciplina)
            .execute(&mut *tx)
            .await;

            match inserida {
                Ok(res) => res.last_insert_rowid(),
                Err(e) if eh_violacao_unique(&e) => {
                    tracing::warn!(
                        "Corrida na criação da disciplina '{}': UNIQUE rejeitou o insert.",
                        disciplina
                    );
                    return Err(AppError::ConflitoPersistencia);
                }
                Err(e) => return Err(e.into()),
            }
        }
    };

    // 3. Insere o aluno associado à disciplina resolvida
    let inserido = sqlx::query(
        r#"
        INSERT INTO users (username, role_id) VALUES (?1, ?2)
        "#,
    )
    .bind(nome)
    .bind(role_id)
    .execute(&mut *tx)
    .await;

    if let Err(e) = inserido {
        if eh_violacao_unique(&e) {
            tracing::warn!("Corrida no cadastro do aluno '{}': UNIQUE rejeitou o insert.", nome);
            return Err(AppError::ConflitoPersistencia);
        }
        return Err(e.into());
    }

    // 4. Commit único cobre role (se criada) e aluno
    tx.commit().await?;
    tracing::info!("✅ Aluno '{}' cadastrado na disciplina '{}'.", nome, disciplina);
    Ok(Cadastro::Efetuado)
}

/// Busca todos os alunos com o nome da disciplina associada, em ordem de id.
pub async fn listar_alunos(db_pool: &SqlitePool) -> AppResult<Vec<AlunoComDisciplina>> {
    tracing::debug!("Buscando todos os alunos...");
    let alunos = sqlx::query_as::<_, AlunoComDisciplina>(
        r#"
        SELECT u.id, u.username, COALESCE(r.name, '') AS disciplina
        FROM users u
        LEFT JOIN roles r ON r.id = u.role_id
        ORDER BY u.id ASC
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    tracing::debug!("Encontrados {} alunos.", alunos.len());
    Ok(alunos)
}
