// src/web/mod.rs
pub mod aluno_handlers;
pub mod home_handlers;
pub mod routes;
