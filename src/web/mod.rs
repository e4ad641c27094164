use std::future::Future;
use std::net::SocketAddr;
use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info};

pub mod handlers;


use crate::config::Config;

/// A callback receiver built from explicit configuration. Instances share nothing,
/// so several can run in one process.
#[derive(Debug, Clone)]
pub struct CallbackServer {
    config: Config,
}

/// A server whose listener is already bound, so the real address is known before serving.
pub struct BoundServer {
    listener: TcpListener,
    app: Router,
}

impl CallbackServer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn router(&self) -> Router {
        handlers::router()
    }

    pub async fn bind(&self) -> anyhow::Result<BoundServer> {
        // 绑定监听地址，端口 0 时由系统分配
        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = TcpListener::bind(addr).await
            .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

        Ok(BoundServer {
            listener,
            app: self.router(),
        })
    }
}

impl BoundServer {
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub async fn serve(self) -> anyhow::Result<()> {
        axum::serve(self.listener, self.app).await?;
        Ok(())
    }

    pub async fn serve_with_shutdown<F>(self, signal: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(signal)
            .await?;
        Ok(())
    }
}

pub async fn start_server(config: Config) -> anyhow::Result<()> {
    // 先绑定，日志里输出实际地址
    let server = CallbackServer::new(config).bind().await?;

    info!("Starting server on {}", server.local_addr()?);

    // 等待 ctrl-c 后优雅关闭
    server.serve_with_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Received ctrl-c");
}
