//! # 解析器模块
//!
//! 读取 JSON 峰列表文件并提取面板标签。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: json

pub mod json;

pub use json::parse_pattern_file;
