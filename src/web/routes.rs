// src/web/routes.rs
use crate::{
    state::AppState,
    web::{aluno_handlers, home_handlers},
};
use axum::{routing::get, Router};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handlers::index))
        .route(
            "/alunos",
            get(aluno_handlers::show_alunos_page).post(aluno_handlers::handle_cadastro),
        )
        // Contraparte do errorhandler(404): qualquer rota desconhecida
        .fallback(home_handlers::not_found)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    async fn app_de_teste() -> (Router, SqlitePool) {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        // Nos testes a sessão vive em memória, sem tabela de sessões
        let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
        let app = create_router(AppState {
            db_pool: pool.clone(),
        })
        .layer(session_layer);
        (app, pool)
    }

    async fn corpo_como_texto(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_cadastro(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/alunos")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn pagina_inicial_responde() {
        let (app, _pool) = app_de_teste().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let corpo = corpo_como_texto(response).await;
        assert!(corpo.contains("Cadastro de Alunos"));
    }

    #[tokio::test]
    async fn pagina_alunos_mostra_formulario_e_disciplinas() {
        let (app, _pool) = app_de_teste().await;

        let response = app
            .oneshot(Request::builder().uri("/alunos").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let corpo = corpo_como_texto(response).await;
        assert!(corpo.contains("Cadastre o novo Aluno"));
        assert!(corpo.contains("DSWA5"));
        assert!(corpo.contains("TCOA5"));
    }

    #[tokio::test]
    async fn cadastro_valido_redireciona_e_persiste() {
        let (app, pool) = app_de_teste().await;

        let response = app
            .oneshot(post_cadastro("nome=Alice&disciplina=DSWA5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/alunos"
        );

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn cadastro_duplicado_tambem_redireciona_sem_gravar() {
        let (app, pool) = app_de_teste().await;

        let primeiro = app
            .clone()
            .oneshot(post_cadastro("nome=Bob&disciplina=GPSA5"))
            .await
            .unwrap();
        assert_eq!(primeiro.status(), StatusCode::SEE_OTHER);

        // Duplicado é informativo, não erro: mesmo redirect, nenhuma escrita
        let segundo = app
            .oneshot(post_cadastro("nome=Bob&disciplina=GPSA5"))
            .await
            .unwrap();
        assert_eq!(segundo.status(), StatusCode::SEE_OTHER);

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn nome_em_branco_redisplaya_sem_persistir() {
        let (app, pool) = app_de_teste().await;

        let response = app
            .oneshot(post_cadastro("nome=&disciplina=DSWA5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let corpo = corpo_como_texto(response).await;
        assert!(corpo.contains("Este campo é obrigatório."));

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn rota_desconhecida_devolve_404() {
        let (app, _pool) = app_de_teste().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nao-existe")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
