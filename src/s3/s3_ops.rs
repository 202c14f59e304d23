//! S3操作模块
//!
//! 该模块定义对象存储的抽象接口，并提供基于 `aws_sdk_s3` 的实现。
//! 每个操作都是一次网络调用，不做重试，也不跟随分页令牌。

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::{ByteStream, DateTimeFormat};
use aws_sdk_s3::types::Object;
use mockall::automock;

/// 列举操作返回的对象描述。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
    /// RFC 3339 格式的最后修改时间，存储未返回时为空字符串
    pub last_modified: String,
}

/// 对象存储接口。
#[automock]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 写入对象。
    ///
    /// # 参数
    ///
    /// * `bucket` - 存储桶名称。
    /// * `key` - 对象键。
    /// * `body` - 对象内容。
    /// * `content_type` - 对象的 MIME 类型。
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()>;

    /// 列举对象，只返回第一页。
    ///
    /// # 参数
    ///
    /// * `bucket` - 存储桶名称。
    /// * `prefix` - 可选的键前缀。
    /// * `max_keys` - 最多返回的对象数量。
    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<String>,
        max_keys: i32,
    ) -> Result<Vec<ObjectSummary>>;

    /// 删除对象。键不存在时由存储自身保证删除成功。
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}

/// 基于 `aws_sdk_s3::Client` 的对象存储实现。
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(e)))?;

        Ok(())
    }

    async fn list_objects(
        &self,
        bucket: &str,
        prefix: Option<String>,
        max_keys: i32,
    ) -> Result<Vec<ObjectSummary>> {
        let response = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .set_prefix(prefix)
            .max_keys(max_keys)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(e)))?;

        Ok(response.contents().iter().map(summarize).collect())
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.client
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(e)))?;

        Ok(())
    }
}

/// 将 SDK 返回的对象转换为 `ObjectSummary`。
fn summarize(object: &Object) -> ObjectSummary {
    ObjectSummary {
        key: object.key().unwrap_or_default().to_string(),
        size: object.size().unwrap_or_default(),
        last_modified: object
            .last_modified()
            .and_then(|time| time.fmt(DateTimeFormat::DateTime).ok())
            .unwrap_or_default(),
    }
}
