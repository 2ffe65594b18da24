// src/models/aluno.rs
use serde::Deserialize;
use sqlx::FromRow;

// Representa um aluno lido da tabela 'users'
// (o domínio original chama os alunos de "users"; mantemos o nome da tabela)
#[derive(Debug, Clone, FromRow)]
pub struct Aluno {
    pub id: i64,
    pub username: String,
    pub role_id: Option<i64>, // nulo apenas transitoriamente, antes da associação
}

// Linha da listagem: aluno + nome da disciplina associada (JOIN com 'roles')
#[derive(Debug, Clone, FromRow)]
pub struct AlunoComDisciplina {
    pub id: i64,
    pub username: String,
    pub disciplina: String,
}

// Struct para dados do formulário de cadastro
#[derive(Debug, Deserialize)]
pub struct CadastroForm {
    pub nome: String,
    pub disciplina: String,
}
