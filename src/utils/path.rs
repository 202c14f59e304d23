use reqwest::Url;
use std::path::Path;

/// URL 路径中无法得到文件名时使用的默认文件名
pub const FALLBACK_FILENAME: &str = "download";

/// 获取本地路径的文件名部分
///
/// # 参数
///
/// * `path` - 本地文件路径
///
/// # 返回值
///
/// 文件名；路径没有文件名部分（如 `/` 或以 `..` 结尾）时返回 `None`
///
/// # 示例
///
/// ```
/// use s3_mcp::utils::path::file_name;
/// use std::path::Path;
///
/// assert_eq!(file_name(Path::new("/tmp/report.pdf")).as_deref(), Some("report.pdf"));
/// assert_eq!(file_name(Path::new("/")), None);
/// ```
pub fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// 从 URL 的路径部分推断文件名
///
/// 忽略查询参数、片段和末尾的 `/`，取最后一段；路径为空时返回 `download`。
///
/// # 示例
///
/// ```
/// use reqwest::Url;
/// use s3_mcp::utils::path::file_name_from_url;
///
/// let url = Url::parse("https://example.com/images/cat.png?size=large").unwrap();
/// assert_eq!(file_name_from_url(&url), "cat.png");
///
/// let root = Url::parse("https://example.com/").unwrap();
/// assert_eq!(file_name_from_url(&root), "download");
/// ```
pub fn file_name_from_url(url: &Url) -> String {
    url.path()
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(FALLBACK_FILENAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_name(raw: &str) -> String {
        file_name_from_url(&Url::parse(raw).unwrap())
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(url_name("https://example.com/a/b/file.tar.gz"), "file.tar.gz");
        assert_eq!(url_name("https://example.com/docs/"), "docs");
        assert_eq!(url_name("https://example.com/x.png#frag"), "x.png");
        assert_eq!(url_name("https://example.com"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_file_name_local() {
        assert_eq!(
            file_name(Path::new("/var/data/photo.png")).as_deref(),
            Some("photo.png")
        );
        assert_eq!(file_name(Path::new("relative.txt")).as_deref(), Some("relative.txt"));
    }
}
