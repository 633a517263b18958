//! # 统一错误处理模块
//!
//! 定义 xrdstack 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// xrdstack 统一错误类型
#[derive(Error, Debug)]
pub enum XrdStackError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse pattern file: {path}\nReason: {reason}")]
    ParseError { path: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 峰形配置与合成错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid shape configuration: {0}")]
    ConfigError(String),

    #[error("Pattern '{name}' has no peaks; cannot establish a synthesis grid")]
    EmptyPattern { name: String },

    // ─────────────────────────────────────────────────────────────
    // 渲染与导出错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to render plot: {0}")]
    RenderError(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, XrdStackError>;
