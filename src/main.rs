#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing::info;
use callback_rs::{utils::logger, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志系统
    let _guard = logger::init()?;

    info!("Starting callback receiver...");

    // 读取配置
    let config = Config::from_env()?;

    // 启动 HTTP 服务器
    match callback_rs::start_server(config).await {
        Ok(_) => info!("Server stopped gracefully"),
        Err(e) => {
            tracing::error!("Server error: {}", e);
            return Err(e);
        }
    }

    // 优雅关闭
    info!("Shutting down...");
    Ok(())
}
