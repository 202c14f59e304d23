//! 工具入参定义。
//!
//! 每个工具的输入都是一个带 JSON Schema 的结构体，字段上的文档注释即工具参数的描述。
//! 协议层只做反序列化，数值范围等约束由各结构体的 `validate` 在处理函数执行前检查。

use crate::error::ValidationError;
use reqwest::Url;
use rmcp::schemars;
use serde::Deserialize;
use std::path::Path;

/// `list_files` 默认返回数量
pub const DEFAULT_MAX_RESULTS: i64 = 20;

/// `list_files` 返回数量上限
pub const MAX_RESULTS_LIMIT: i64 = 100;

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

/// 将空字符串视为未提供
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct UploadFileParams {
    /// Absolute path to the local file
    pub file_path: String,
    /// Custom object key. Auto-generated if omitted
    #[serde(default)]
    pub key: Option<String>,
}

impl UploadFileParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file_path.is_empty() {
            return Err(ValidationError::EmptyField("file_path"));
        }
        if !Path::new(&self.file_path).is_absolute() {
            return Err(ValidationError::RelativePath(self.file_path.clone()));
        }
        Ok(())
    }

    pub fn custom_key(&self) -> Option<String> {
        non_empty(self.key.clone())
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct UploadBase64Params {
    /// Base64-encoded file content
    pub data: String,
    /// Filename for key generation and extension detection
    pub filename: String,
    /// MIME type. Inferred from filename if omitted
    #[serde(default)]
    pub content_type: Option<String>,
    /// Custom object key. Auto-generated if omitted
    #[serde(default)]
    pub key: Option<String>,
}

impl UploadBase64Params {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filename.is_empty() {
            return Err(ValidationError::EmptyField("filename"));
        }
        Ok(())
    }

    pub fn custom_key(&self) -> Option<String> {
        non_empty(self.key.clone())
    }

    pub fn custom_content_type(&self) -> Option<String> {
        non_empty(self.content_type.clone())
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct UploadFromUrlParams {
    /// URL to fetch the file from
    pub url: String,
    /// Override filename for key generation. Inferred from URL if omitted
    #[serde(default)]
    pub filename: Option<String>,
    /// Custom object key. Auto-generated if omitted
    #[serde(default)]
    pub key: Option<String>,
}

impl UploadFromUrlParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
            _ => Err(ValidationError::InvalidUrl(self.url.clone())),
        }
    }

    pub fn custom_filename(&self) -> Option<String> {
        non_empty(self.filename.clone())
    }

    pub fn custom_key(&self) -> Option<String> {
        non_empty(self.key.clone())
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct ListFilesParams {
    /// Filter by key prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Maximum number of results (default 20, max 100)
    #[serde(default = "default_max_results")]
    #[schemars(range(min = 1, max = 100))]
    pub max_results: i64,
}

/// 校验后的列举请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub prefix: Option<String>,
    pub max_results: i32,
}

impl ListFilesParams {
    /// 校验入参并转换为 `ListRequest`。
    ///
    /// `max_results` 超出 1 到 100 时返回错误，不会静默截断。
    pub fn validate(self) -> Result<ListRequest, ValidationError> {
        if !(1..=MAX_RESULTS_LIMIT).contains(&self.max_results) {
            return Err(ValidationError::MaxResultsOutOfRange(self.max_results));
        }
        let max_results = i32::try_from(self.max_results)
            .map_err(|_| ValidationError::MaxResultsOutOfRange(self.max_results))?;

        Ok(ListRequest {
            prefix: non_empty(self.prefix),
            max_results,
        })
    }
}

#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct DeleteFileParams {
    /// Object key to delete
    pub key: String,
}

impl DeleteFileParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.is_empty() {
            return Err(ValidationError::EmptyField("key"));
        }
        Ok(())
    }
}
