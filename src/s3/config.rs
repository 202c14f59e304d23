//! S3配置模块
//!
//! 该模块负责根据服务配置创建 S3 客户端。

use crate::config::Config;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, RequestChecksumCalculation, ResponseChecksumValidation};

/// 凭据提供者名称，会出现在 SDK 的调试日志中
const CREDENTIALS_PROVIDER_NAME: &str = "s3-mcp-env";

/// 使用服务配置创建 S3 客户端。
///
/// 使用静态凭据和自定义端点。校验和计算与校验都设置为仅在必要时进行，
/// 以兼容不支持新版默认校验和的 S3 兼容存储。
///
/// # 参数
///
/// * `config` - 已加载的服务配置。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn create_s3_client(config: &Config) -> Client {
    let credentials = Credentials::new(
        config.access_key_id.clone(),
        config.secret_access_key.clone(),
        None,
        None,
        CREDENTIALS_PROVIDER_NAME,
    );

    let region_provider = RegionProviderChain::first_try(Some(Region::new(config.region.clone())));

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials)
        .region(region_provider)
        .endpoint_url(&config.endpoint)
        .load()
        .await;

    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
        .build();

    Client::from_conf(s3_config)
}
