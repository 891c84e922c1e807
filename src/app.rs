//! Application wiring: configuration in, bound listener and router out.

use crate::ai::{ArticleService, GeminiArticleClient};
use crate::config::Config;
use crate::routes::{build_router, AppState};
use crate::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the production application backed by Gemini.
    pub async fn build(config: Config) -> Result<Self> {
        let articles = GeminiArticleClient::new(config.gemini_api_key, config.gemini_model)
            .with_base_url(config.gemini_base_url)
            .with_timeout(config.gemini_timeout);
        info!("Article provider: Gemini (model: {})", articles.model());

        Self::with_service(config.port, Arc::new(articles)).await
    }

    /// Build with an injected generation service. Port `0` picks a free port.
    pub async fn with_service(port: u16, articles: Arc<dyn ArticleService>) -> Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            e
        })?;

        Ok(Self {
            listener,
            router: build_router(AppState::new(articles)),
        })
    }

    /// Port the listener is actually bound to.
    pub fn port(&self) -> Result<u16> {
        Ok(self.listener.local_addr()?.port())
    }

    pub async fn run_until_stopped(self) -> Result<()> {
        info!("Listening on port {}", self.port()?);
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
