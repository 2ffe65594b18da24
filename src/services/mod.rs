// src/services/mod.rs
pub mod aluno_service;
