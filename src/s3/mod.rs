//! S3模块
//!
//! 该模块负责处理与S3存储桶的交互，包括客户端配置和对象的上传、列举、删除。

// 声明子模块
pub mod config;
pub mod s3_ops;

// 重新导出常用的类型和函数
pub use config::create_s3_client;
pub use s3_ops::{MockObjectStore, ObjectStore, ObjectSummary, S3Store};
