mod handlers;
mod router;

pub use router::create_router;

use crate::{Config, Result};

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let router = create_router(&config)?;

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("mulrace server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| crate::Error::Io(e.to_string()))?;

    Ok(())
}
