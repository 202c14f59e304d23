//! 上传类工具的处理函数。
//!
//! 三个上传工具的流程相同：先取得内容字节，再确定内容类型和对象键，最后写入存储。

use crate::AppState;
use crate::error::ToolError;
use crate::handlers::params::{UploadBase64Params, UploadFileParams, UploadFromUrlParams};
use crate::utils::headers::{declared_content_type, detect_content_type};
use crate::utils::key::generate_key;
use crate::utils::path::{FALLBACK_FILENAME, file_name, file_name_from_url};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Url;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// 上传成功后返回给调用方的信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    pub url: String,
    pub key: String,
    pub size: usize,
    pub content_type: String,
}

/// 读取本地文件并上传。
///
/// 内容类型根据文件名推断；未指定对象键时自动生成。
pub async fn upload_file(
    state: &AppState,
    params: UploadFileParams,
) -> Result<UploadReceipt, ToolError> {
    let path = Path::new(&params.file_path);
    let body = tokio::fs::read(path)
        .await
        .map_err(|source| ToolError::ReadFile {
            path: params.file_path.clone(),
            source,
        })?;

    let filename = file_name(path).unwrap_or_else(|| FALLBACK_FILENAME.to_string());
    let content_type = detect_content_type(&filename);

    store_object(state, body, &filename, content_type, params.custom_key()).await
}

/// 解码 base64 内容并上传。
///
/// 未指定内容类型时根据文件名推断。
pub async fn upload_base64(
    state: &AppState,
    params: UploadBase64Params,
) -> Result<UploadReceipt, ToolError> {
    let body = decode_base64(&params.data)?;
    let content_type = params
        .custom_content_type()
        .unwrap_or_else(|| detect_content_type(&params.filename));

    store_object(state, body, &params.filename, content_type, params.custom_key()).await
}

/// 下载远程 URL 的内容并上传。
///
/// 远程返回非 2xx 状态码时直接返回错误，不会调用存储。
/// 优先使用响应头声明的内容类型，否则根据文件名推断。
pub async fn upload_from_url(
    state: &AppState,
    params: UploadFromUrlParams,
) -> Result<UploadReceipt, ToolError> {
    let url = Url::parse(&params.url).map_err(|e| ToolError::InvalidUrl {
        url: params.url.clone(),
        reason: e.to_string(),
    })?;

    let response = state.http_client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ToolError::FetchStatus(status));
    }

    let declared = declared_content_type(response.headers());
    let body = response.bytes().await?.to_vec();
    debug!(url = %url, size = body.len(), "远程内容下载完成");

    let filename = params
        .custom_filename()
        .unwrap_or_else(|| file_name_from_url(&url));
    let content_type = declared.unwrap_or_else(|| detect_content_type(&filename));

    store_object(state, body, &filename, content_type, params.custom_key()).await
}

/// 宽松解码 base64：忽略内容中的空白字符。
fn decode_base64(data: &str) -> Result<Vec<u8>, ToolError> {
    let compact: String = data.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

/// 确定对象键并写入存储。
async fn store_object(
    state: &AppState,
    body: Vec<u8>,
    filename: &str,
    content_type: String,
    key: Option<String>,
) -> Result<UploadReceipt, ToolError> {
    let key = key.unwrap_or_else(|| generate_key(filename, &state.path_prefix));
    let size = body.len();

    state
        .store
        .put_object(&state.bucket, &key, body, &content_type)
        .await?;

    info!(key = %key, size, content_type = %content_type, "对象上传完成");

    Ok(UploadReceipt {
        url: state.object_url(&key),
        key,
        size,
        content_type,
    })
}
