use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::adapters::http::{self, AppState};
use crate::config::ServiceConfig;
use crate::utils::error::{Result, ServiceError};
use crate::{ARCHITECTURE, SERVICE_NAME, SERVICE_VERSION};

pub struct Server {
    config: ServiceConfig,
}

impl Server {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn router(&self) -> Router {
        http::router(AppState::new(self.config.clone()))
    }

    pub async fn bind(&self) -> Result<TcpListener> {
        let addr = self.config.bind_addr();
        TcpListener::bind(addr)
            .await
            .map_err(|source| ServiceError::BindError {
                addr: addr.to_string(),
                source,
            })
    }

    /// Serves until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr: SocketAddr = listener.local_addr()?;
        tracing::info!(
            "🚀 {} v{} ({} architecture) listening on {}",
            SERVICE_NAME,
            SERVICE_VERSION,
            ARCHITECTURE,
            local_addr
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("{} stopped", SERVICE_NAME);
        Ok(())
    }

    /// Binds `0.0.0.0:<port>` and runs until the process is signalled.
    /// Returns the signal that stopped the server.
    pub async fn run(self) -> Result<ShutdownSignal> {
        let listener = self.bind().await?;
        let (tx, rx) = oneshot::channel();

        self.serve(listener, async move {
            let signal = shutdown_signal().await;
            let _ = tx.send(signal);
        })
        .await?;

        // serve 只在收到訊號後才會正常結束
        Ok(rx.await.unwrap_or(ShutdownSignal::Terminate))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    /// Exit status a shell reports for a process killed by this signal
    /// (128 + signal number), so orchestrators see the same code as an
    /// unhandled termination.
    pub fn exit_code(self) -> i32 {
        match self {
            ShutdownSignal::Interrupt => 130,
            ShutdownSignal::Terminate => 143,
        }
    }
}

pub async fn shutdown_signal() -> ShutdownSignal {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        _ = ctrl_c => ShutdownSignal::Interrupt,
        _ = terminate => ShutdownSignal::Terminate,
    };

    tracing::info!("Shutdown signal received: {:?}", signal);
    signal
}
