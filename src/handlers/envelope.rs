//! 工具结果信封。
//!
//! 成功时返回格式化后的 JSON 文本；失败时返回 `{"error": message}` 并设置错误标志。

use crate::error::ToolError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

/// 将成功结果序列化为工具返回值
pub fn json_result<T: Serialize>(data: &T) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&e.to_string()),
    }
}

/// 构造错误信封
pub fn error_result(message: &str) -> CallToolResult {
    let body = json!({ "error": message }).to_string();
    CallToolResult::error(vec![Content::text(body)])
}

/// 将处理函数的结果转换为工具返回值。所有运行时错误都在这里转换为错误信封。
///
/// # 参数
///
/// * `tool` - 工具名称，仅用于日志。
/// * `result` - 处理函数的结果。
pub fn into_envelope<T: Serialize>(tool: &str, result: Result<T, ToolError>) -> CallToolResult {
    match result {
        Ok(data) => json_result(&data),
        Err(e) => {
            warn!(tool, error = %e, "工具调用失败");
            error_result(&e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .map(|t| t.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn test_success_envelope() {
        let result = into_envelope::<serde_json::Value>(
            "delete_file",
            Ok(json!({ "deleted": true, "key": "a.txt" })),
        );

        assert_eq!(result.is_error, Some(false));
        let value: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(value["deleted"], true);
        assert_eq!(value["key"], "a.txt");
    }

    #[test]
    /// 测试错误信封的结构
    fn test_error_envelope() {
        let result = into_envelope::<serde_json::Value>(
            "upload_from_url",
            Err(ToolError::FetchStatus(reqwest::StatusCode::NOT_FOUND)),
        );

        assert_eq!(result.is_error, Some(true));
        let value: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(value["error"], "Failed to fetch URL: 404 Not Found");
    }
}
