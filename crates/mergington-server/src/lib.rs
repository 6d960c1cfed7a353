pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use mergington_core::directory::ActivityDirectory;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router over the given directory.
///
/// The directory is passed in rather than constructed here so tests (and
/// alternative seeds) get an isolated store per router. Used by `serve()`
/// and available for integration testing via `tower::ServiceExt`.
pub fn build_router(directory: ActivityDirectory) -> Router {
    let app_state = state::AppState::new(directory);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(routes::activities::signup).delete(routes::activities::unregister),
        )
        .fallback(embed::static_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the activities server.
pub async fn serve(
    directory: ActivityDirectory,
    host: &str,
    port: u16,
    open_browser: bool,
) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(directory, listener, open_browser).await
}

/// Start the activities server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    directory: ActivityDirectory,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    let app = build_router(directory);

    tracing::info!("activities server listening on http://{addr}");

    if open_browser {
        let _ = open::that(format!("http://{addr}"));
    }

    axum::serve(listener, app).await?;
    Ok(())
}
