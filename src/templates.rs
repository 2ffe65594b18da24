// src/templates.rs
use crate::models::aluno::AlunoComDisciplina;
use askama::Template; // Trait necessário para Askama

// Struct para o template `index.html` (ficheiro externo em templates/)
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    // Hora atual já formatada pelo handler (contraparte do flask-moment)
    pub current_time: String,
}

#[derive(Template)]
#[template(path = "alunos.html")]
pub struct AlunosPage {
    // Mensagem flash consumida da sessão (um ciclo POST→redirect→GET)
    pub flash: Option<String>,
    // Erro de validação do campo nome, quando o form é redisplayado
    pub erro_nome: Option<String>,
    // Valores atuais do formulário (para não perder o que foi digitado)
    pub nome: String,
    pub disciplina: String,
    // Lista fechada de disciplinas para o <select>
    pub disciplinas: &'static [&'static str],
    pub alunos: Vec<AlunoComDisciplina>,
}

impl AlunosPage {
    /// Verifica se uma disciplina é a atualmente selecionada no formulário
    pub fn selecionada(&self, codigo: &str) -> bool {
        self.disciplina == codigo
    }
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundPage {
    pub current_time: String,
}

#[derive(Template)]
#[template(path = "500.html")]
pub struct ServerErrorPage {}
