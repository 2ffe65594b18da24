// src/models/mod.rs
pub mod aluno;
pub mod role;
