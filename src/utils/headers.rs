use reqwest::header::{CONTENT_TYPE, HeaderMap};

/// 无法识别扩展名时使用的通用二进制类型
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// 根据文件名的扩展名检测 MIME 类型
///
/// # 参数
///
/// * `filename` - 文件名或文件路径
///
/// # 返回值
///
/// 对应的 MIME 类型；扩展名未知或不存在时返回 `application/octet-stream`
///
/// # 示例
///
/// ```
/// use s3_mcp::utils::headers::detect_content_type;
///
/// assert_eq!(detect_content_type("photo.png"), "image/png");
/// assert_eq!(detect_content_type("Makefile"), "application/octet-stream");
/// ```
pub fn detect_content_type(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_raw()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string()
}

/// 读取响应头中声明的 `Content-Type`
///
/// 头部缺失、为空或不是合法的可见 ASCII 时返回 `None`。
pub fn declared_content_type(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_detect_content_type() {
        assert_eq!(detect_content_type("photo.png"), "image/png");
        assert_eq!(detect_content_type("notes.txt"), "text/plain");
        assert_eq!(detect_content_type("report.pdf"), "application/pdf");
        assert_eq!(detect_content_type("/tmp/dir/photo.JPG"), "image/jpeg");
    }

    #[test]
    fn test_detect_content_type_unknown() {
        assert_eq!(detect_content_type("data.xyz123"), DEFAULT_CONTENT_TYPE);
        assert_eq!(detect_content_type("Makefile"), DEFAULT_CONTENT_TYPE);
        assert_eq!(detect_content_type(""), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_declared_content_type() {
        let mut headers = HeaderMap::new();
        assert_eq!(declared_content_type(&headers), None);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static(""));
        assert_eq!(declared_content_type(&headers), None);

        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
        assert_eq!(
            declared_content_type(&headers).as_deref(),
            Some("text/html; charset=utf-8")
        );
    }
}
