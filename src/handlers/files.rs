use crate::AppState;
use crate::error::ToolError;
use crate::handlers::params::{DeleteFileParams, ListRequest};
use serde::Serialize;
use tracing::info;

/// 列举结果中的单个文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub key: String,
    pub url: String,
    pub size: i64,
    pub last_modified: String,
}

/// `list_files` 的返回内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileListing {
    pub files: Vec<FileEntry>,
    pub count: usize,
}

/// `delete_file` 的返回内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteReceipt {
    pub deleted: bool,
    pub key: String,
}

/// 计算实际用于列举的前缀。
///
/// # 参数
///
/// * `path_prefix` - 配置的路径前缀。
/// * `filter` - 调用方传入的过滤前缀。
///
/// # 返回值
///
/// - 有过滤前缀时返回 `路径前缀 + 过滤前缀`
/// - 只有路径前缀时返回路径前缀
/// - 两者都为空时返回 `None`，即不过滤
pub fn resolve_list_prefix(path_prefix: &str, filter: Option<&str>) -> Option<String> {
    match filter.filter(|f| !f.is_empty()) {
        Some(filter) => Some(format!("{path_prefix}{filter}")),
        None if !path_prefix.is_empty() => Some(path_prefix.to_string()),
        None => None,
    }
}

/// 列举存储桶中的文件，只返回一页结果。
pub async fn list_files(state: &AppState, request: ListRequest) -> Result<FileListing, ToolError> {
    let prefix = resolve_list_prefix(&state.path_prefix, request.prefix.as_deref());

    let objects = state
        .store
        .list_objects(&state.bucket, prefix.clone(), request.max_results)
        .await?;

    let files: Vec<FileEntry> = objects
        .into_iter()
        .map(|object| FileEntry {
            url: state.object_url(&object.key),
            key: object.key,
            size: object.size,
            last_modified: object.last_modified,
        })
        .collect();

    info!(prefix = ?prefix, count = files.len(), "文件列举完成");

    Ok(FileListing {
        count: files.len(),
        files,
    })
}

/// 删除对象。不检查对象是否存在，键不存在时同样返回成功。
pub async fn delete_file(
    state: &AppState,
    params: DeleteFileParams,
) -> Result<DeleteReceipt, ToolError> {
    state
        .store
        .delete_object(&state.bucket, &params.key)
        .await?;

    info!(key = %params.key, "对象已删除");

    Ok(DeleteReceipt {
        deleted: true,
        key: params.key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_list_prefix() {
        assert_eq!(
            resolve_list_prefix("uploads/", Some("2024")).as_deref(),
            Some("uploads/2024")
        );
        assert_eq!(
            resolve_list_prefix("uploads/", None).as_deref(),
            Some("uploads/")
        );
        assert_eq!(resolve_list_prefix("", Some("img/")).as_deref(), Some("img/"));
        assert_eq!(resolve_list_prefix("", None), None);
        assert_eq!(resolve_list_prefix("", Some("")), None);
    }
}
