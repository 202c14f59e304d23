//! 工具函数模块
//!
//! 此模块包含了项目中使用的各种工具函数：
//! - 内容类型检测（包含HTTP响应头中的声明类型）
//! - 对象键生成与文件名清理
//! - 路径处理工具（本地路径与URL的文件名获取）

pub mod headers;
pub mod key;
pub mod path;
