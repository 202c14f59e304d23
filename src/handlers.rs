//! 工具处理模块
//!
//! 此模块包含了每个工具的入参定义和处理函数：
//! - 上传处理器（本地文件、base64 内容、远程 URL）
//! - 文件列举与删除处理器
//! - 统一的结果信封

pub mod envelope;
pub mod files;
pub mod params;
pub mod upload;

// 重新导出主要的公共接口
pub use envelope::into_envelope;
pub use files::{DeleteReceipt, FileEntry, FileListing, delete_file, list_files};
pub use upload::{UploadReceipt, upload_base64, upload_file, upload_from_url};
