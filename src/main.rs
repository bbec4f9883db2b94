use axum::{
    routing::{get, post},
    Router,
};
use learnhub_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let teacher_api = Router::new()
        .route("/api/lessons/create", post(routes::lessons::create_lesson))
        .route("/api/quizzes/create", post(routes::quizzes::create_quiz))
        .layer(axum::middleware::from_fn(
            middleware::auth::require_teacher,
        ));

    let student_api = Router::new()
        .route(
            "/api/lessons/:subject/:grade",
            get(routes::lessons::list_lessons),
        )
        .route("/api/lessons/detail/:id", get(routes::lessons::get_lesson))
        .route(
            "/api/lessons/complete/:id",
            post(routes::lessons::complete_lesson),
        )
        .route(
            "/api/lessons/dashboard/:subject/:grade",
            get(routes::lessons::dashboard),
        )
        .route(
            "/api/quizzes/:subject/:grade",
            get(routes::quizzes::list_quizzes),
        )
        .route("/api/quizzes/detail/:id", get(routes::quizzes::get_quiz))
        .route("/api/quizzes/submit/:id", post(routes::quizzes::submit_quiz))
        .route(
            "/api/quizzes/results/:student_id/:subject",
            get(routes::quizzes::quiz_results),
        )
        .route(
            "/api/profile/student/:id",
            get(routes::profile::student_profile),
        )
        .route("/api/profile/analytics", get(routes::profile::analytics))
        .layer(axum::middleware::from_fn(middleware::auth::require_actor));

    let app = base_routes
        .merge(teacher_api)
        .merge(student_api)
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.api_rps),
            middleware::rate_limit::rps_middleware,
        ))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
