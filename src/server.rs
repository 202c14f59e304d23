//! MCP 服务模块。
//!
//! 将五个存储工具注册到 `rmcp` 的工具路由上。每个工具先校验入参，
//! 不合法的请求以 `invalid_params` 协议错误拒绝，不会触达存储；
//! 处理过程中的运行时错误则统一转换为错误信封返回。

use crate::AppState;
use crate::error::ValidationError;
use crate::handlers::{self, into_envelope};
use crate::handlers::params::{
    DeleteFileParams, ListFilesParams, UploadBase64Params, UploadFileParams, UploadFromUrlParams,
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

/// 服务说明，在初始化时发送给客户端
const INSTRUCTIONS: &str = "Store files in an S3-compatible bucket. Upload local files, \
base64 data or remote URLs to get a public URL back; list and delete stored objects by key.";

/// S3 存储工具服务。
#[derive(Clone)]
pub struct S3McpServer {
    state: AppState,
    tool_router: ToolRouter<Self>,
}

fn invalid_params(err: ValidationError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

#[tool_router]
impl S3McpServer {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Upload a local file to the S3 bucket and return its public URL")]
    pub async fn upload_file(
        &self,
        Parameters(params): Parameters<UploadFileParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(invalid_params)?;
        let result = handlers::upload_file(&self.state, params).await;
        Ok(into_envelope("upload_file", result))
    }

    #[tool(description = "Upload base64-encoded data to the S3 bucket and return its public URL")]
    pub async fn upload_base64(
        &self,
        Parameters(params): Parameters<UploadBase64Params>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(invalid_params)?;
        let result = handlers::upload_base64(&self.state, params).await;
        Ok(into_envelope("upload_base64", result))
    }

    #[tool(description = "Fetch a file from a URL and upload it to the S3 bucket")]
    pub async fn upload_from_url(
        &self,
        Parameters(params): Parameters<UploadFromUrlParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(invalid_params)?;
        let result = handlers::upload_from_url(&self.state, params).await;
        Ok(into_envelope("upload_from_url", result))
    }

    #[tool(description = "List files in the S3 bucket, optionally filtered by prefix")]
    pub async fn list_files(
        &self,
        Parameters(params): Parameters<ListFilesParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = params.validate().map_err(invalid_params)?;
        let result = handlers::list_files(&self.state, request).await;
        Ok(into_envelope("list_files", result))
    }

    #[tool(description = "Delete a file from the S3 bucket")]
    pub async fn delete_file(
        &self,
        Parameters(params): Parameters<DeleteFileParams>,
    ) -> Result<CallToolResult, McpError> {
        params.validate().map_err(invalid_params)?;
        let result = handlers::delete_file(&self.state, params).await;
        Ok(into_envelope("delete_file", result))
    }
}

#[tool_handler]
impl ServerHandler for S3McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}
