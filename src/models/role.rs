// src/models/role.rs
use sqlx::FromRow;

// Representa uma disciplina lida da tabela 'roles'.
// Criada preguiçosamente na primeira vez que um cadastro a referencia;
// nunca é atualizada nem removida por esta aplicação.
#[derive(Debug, Clone, FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}
