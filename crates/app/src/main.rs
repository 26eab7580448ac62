use std::sync::Arc;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "pennyjar={level},server={level},engine={level},starling={level}",
            level = settings.app.level
        ))
        .init();

    let client = Arc::new(starling::Client::new(
        &settings.starling.base_url,
        settings.starling.token,
    )?);
    let engine = engine::Engine::new(client.clone(), client.clone(), client);
    tracing::info!(
        "round-up service configured against {}",
        settings.starling.base_url
    );

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(engine, listener).await?;

    Ok(())
}
