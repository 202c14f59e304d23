//! S3 MCP 服务库
//!
//! 这是一个基于 rmcp 的 MCP 服务，把 S3 兼容存储桶的常用操作以工具的形式提供给 AI 代理：
//! - 上传本地文件、base64 内容或远程 URL 的内容，并返回公开访问地址
//! - 按前缀列举存储桶中的文件
//! - 按对象键删除文件

pub mod config;
pub mod error;
pub mod handlers;
pub mod s3;
pub mod server;
pub mod utils;

use crate::config::Config;
use crate::s3::{ObjectStore, S3Store, create_s3_client};
use crate::server::S3McpServer;
use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use std::sync::Arc;
use tracing::info;

/// 工具处理函数共享的应用状态
///
/// 启动时创建一次，之后只读。
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObjectStore>,
    /// 用于 `upload_from_url` 下载远程内容
    pub http_client: reqwest::Client,
    pub bucket: String,
    pub public_url: String,
    pub path_prefix: String,
}

impl AppState {
    /// 根据配置和存储实现创建应用状态
    pub fn new(config: &Config, store: Arc<dyn ObjectStore>, http_client: reqwest::Client) -> Self {
        Self {
            store,
            http_client,
            bucket: config.bucket.clone(),
            public_url: config.public_url.clone(),
            path_prefix: config.path_prefix.clone(),
        }
    }

    /// 对象的公开访问地址：`<public_url>/<key>`
    pub fn object_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_url, key)
    }
}

/// 创建 MCP 服务
///
/// 根据配置初始化 S3 客户端和 HTTP 客户端，并注册所有工具。
///
/// # Returns
///
/// 配置好的 `S3McpServer` 实例
pub async fn app(config: &Config) -> S3McpServer {
    // 初始化 S3 客户端
    let s3_client = create_s3_client(config).await;
    let store: Arc<dyn ObjectStore> = Arc::new(S3Store::new(s3_client));

    // 初始化 HTTP 客户端用于下载远程文件
    let http_client = reqwest::Client::new();

    S3McpServer::new(AppState::new(config, store, http_client))
}

/// 通过标准输入输出提供服务，直到连接关闭或收到 SIGINT/SIGTERM。
pub async fn run(config: Config) -> Result<()> {
    info!(bucket = %config.bucket, endpoint = %config.endpoint, "启动 S3 MCP 服务");

    let service = app(&config)
        .await
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("serving error: {:?}", e))?;

    let cancel = service.cancellation_token();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("收到退出信号，正在关闭连接");
        cancel.cancel();
    });

    service.waiting().await?;
    info!("服务已停止");
    Ok(())
}

/// 等待 SIGINT 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl+C 信号: {}", e);
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
                tracing::error!("无法监听 SIGTERM 信号: {}", e);
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::MockObjectStore;

    #[test]
    fn test_object_url() {
        let config = Config::from_lookup(|name| {
            Some(match name {
                "S3_PUBLIC_URL" => "https://cdn.example.com/".to_string(),
                "S3_PATH_PREFIX" => "uploads/".to_string(),
                _ => "value".to_string(),
            })
        })
        .unwrap();

        let state = AppState::new(&config, Arc::new(MockObjectStore::new()), reqwest::Client::new());
        assert_eq!(
            state.object_url("uploads/a.png"),
            "https://cdn.example.com/uploads/a.png"
        );
        assert_eq!(state.path_prefix, "uploads/");
    }
}
