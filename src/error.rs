//! 错误类型模块。
//!
//! 按照失败发生的阶段划分为三类：
//! - `ConfigError`：启动阶段的配置错误，致命
//! - `ValidationError`：工具入参不合法，在处理函数执行前被拒绝
//! - `ToolError`：单次工具调用中的运行时错误，转换为错误信封返回给调用方

use thiserror::Error;

/// 启动阶段的配置错误。
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 缺少一个或多个必需的环境变量（一次性列出全部缺失项）。
    #[error("{}", missing_vars_message(.0))]
    MissingVars(Vec<&'static str>),
}

fn missing_vars_message(missing: &[&str]) -> String {
    let var_list = missing.join(", ");
    let example = missing
        .iter()
        .map(|name| format!("{name}=..."))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "Missing required environment variable(s): {var_list}\n\n\
         Set them in the environment of the MCP server process (or in a .env file), e.g.:\n  \
         {example} s3-mcp"
    )
}

/// 工具入参校验错误。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("file_path must be an absolute path, got: {0}")]
    RelativePath(String),

    #[error("url must be an absolute http(s) URL, got: {0}")]
    InvalidUrl(String),

    #[error("max_results must be between 1 and 100, got {0}")]
    MaxResultsOutOfRange(i64),
}

/// 单次工具调用中的运行时错误。
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid base64 data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// 远程地址返回了非 2xx 状态码。
    #[error("Failed to fetch URL: {0}")]
    FetchStatus(reqwest::StatusCode),

    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_vars_message_lists_every_variable() {
        let err = ConfigError::MissingVars(vec!["S3_ENDPOINT", "S3_ACCESS_KEY_ID"]);
        let message = err.to_string();

        assert!(message.contains("S3_ENDPOINT, S3_ACCESS_KEY_ID"));
        assert!(message.contains("S3_ENDPOINT=... S3_ACCESS_KEY_ID=..."));
    }

    #[test]
    fn test_fetch_status_message_contains_code_and_reason() {
        let err = ToolError::FetchStatus(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Failed to fetch URL: 404 Not Found");
    }
}
