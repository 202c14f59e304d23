use chrono::{DateTime, Utc};
use rand::Rng;

/// 随机后缀使用的字符集（小写字母和数字）
const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// 随机后缀长度
const SUFFIX_LEN: usize = 6;

/// 将文件名中 `[A-Za-z0-9._-]` 以外的字符替换为 `_`
///
/// # 示例
///
/// ```
/// use s3_mcp::utils::key::sanitize_filename;
///
/// assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
/// assert_eq!(sanitize_filename("a-b_c.d"), "a-b_c.d");
/// ```
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// 为上传的文件生成对象键
///
/// 格式为 `<prefix><YYYYMMDD>-<6位随机小写字母数字>-<清理后的文件名>`，日期取当前 UTC 日期。
/// 不会检查存储桶中是否已存在同名键。
///
/// # 参数
///
/// * `filename` - 原始文件名
/// * `prefix` - 配置的路径前缀
pub fn generate_key(filename: &str, prefix: &str) -> String {
    generate_key_at(filename, prefix, Utc::now())
}

/// 使用给定时间生成对象键，见 [`generate_key`]
pub fn generate_key_at(filename: &str, prefix: &str, now: DateTime<Utc>) -> String {
    format!(
        "{prefix}{}-{}-{}",
        now.format("%Y%m%d"),
        random_suffix(),
        sanitize_filename(filename)
    )
}

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// 拆分生成的键，返回 (日期, 随机后缀, 文件名)
    fn split_key<'a>(key: &'a str, prefix: &str) -> (&'a str, &'a str, &'a str) {
        let rest = key.strip_prefix(prefix).expect("key should start with prefix");
        assert_eq!(&rest[8..9], "-");
        assert_eq!(&rest[15..16], "-");
        (&rest[..8], &rest[9..15], &rest[16..])
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("hello world.txt"), "hello_world.txt");
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_filename("报告.pdf"), "__.pdf");
        assert_eq!(sanitize_filename("keep.these-chars_OK09"), "keep.these-chars_OK09");
    }

    #[test]
    fn test_generate_key_format() {
        let key = generate_key("my file.png", "uploads/");
        let (date, suffix, name) = split_key(&key, "uploads/");

        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
        assert_eq!(name, "my_file.png");
    }

    #[test]
    /// 测试键中包含当天的 UTC 日期
    fn test_generate_key_contains_today() {
        let before = Utc::now().format("%Y%m%d").to_string();
        let key = generate_key("a.txt", "");
        let after = Utc::now().format("%Y%m%d").to_string();

        let (date, _, _) = split_key(&key, "");
        assert!(date == before || date == after);
    }

    #[test]
    fn test_generate_key_at_fixed_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        let key = generate_key_at("x.bin", "p/", now);
        assert!(key.starts_with("p/20240309-"));
        assert!(key.ends_with("-x.bin"));
        assert_eq!(key.len(), "p/".len() + 8 + 1 + 6 + 1 + "x.bin".len());
    }

    #[test]
    /// 测试相同输入生成不同的键
    fn test_generate_key_is_random() {
        let first = generate_key("same.txt", "");
        let second = generate_key("same.txt", "");
        assert_ne!(first, second);
    }
}
