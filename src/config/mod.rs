//! S3 MCP 服务的配置模块。
//!
//! 该模块负责从环境变量加载和校验配置。配置在进程启动时创建一次，之后只读。

use crate::error::ConfigError;
use std::env;
use std::fmt;

/// 必须设置的环境变量
pub const REQUIRED_ENV_VARS: [&str; 5] = [
    "S3_ENDPOINT",
    "S3_ACCESS_KEY_ID",
    "S3_SECRET_ACCESS_KEY",
    "S3_BUCKET",
    "S3_PUBLIC_URL",
];

/// 未设置 `S3_REGION` 时使用的区域
pub const DEFAULT_REGION: &str = "auto";

/// 服务配置。
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket: String,
    /// 公开访问地址，已去掉末尾的 `/`
    pub public_url: String,
    /// 生成对象键时添加的前缀
    pub path_prefix: String,
}

impl Config {
    /// 从进程环境变量加载配置。
    ///
    /// # 返回值
    ///
    /// 加载好的配置；缺少必需变量时返回 `ConfigError::MissingVars`。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 使用给定的查找函数加载配置。
    ///
    /// 值为空字符串的必需变量视为缺失。所有缺失的变量会在同一个错误里一起返回。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值的函数。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let missing: Vec<&'static str> = REQUIRED_ENV_VARS
            .iter()
            .copied()
            .filter(|name| read(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingVars(missing));
        }

        let required = |name: &str| read(name).unwrap_or_default();

        Ok(Self {
            endpoint: required("S3_ENDPOINT"),
            region: read("S3_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: required("S3_ACCESS_KEY_ID"),
            secret_access_key: required("S3_SECRET_ACCESS_KEY"),
            bucket: required("S3_BUCKET"),
            public_url: required("S3_PUBLIC_URL").trim_end_matches('/').to_string(),
            path_prefix: lookup("S3_PATH_PREFIX").unwrap_or_default(),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .field("public_url", &self.public_url)
            .field("path_prefix", &self.path_prefix)
            .finish()
    }
}
