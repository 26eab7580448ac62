use axum::{Router, routing::post};

use crate::round_up;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Engine,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/account/accounts/feed/round-up",
            post(round_up::round_up_between),
        )
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState { engine };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
