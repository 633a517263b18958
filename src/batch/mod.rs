//! # 批量处理模块
//!
//! 提供统一的文件收集与批量处理能力。
//!
//! ## 功能
//! - 收集匹配文件列表（按文件名排序，堆叠顺序即文件顺序）
//! - 并行处理与进度反馈
//! - 成功/跳过/失败统计
//!
//! ## 依赖关系
//! - 被各命令模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FileCollector;
pub use runner::{BatchResult, BatchRunner, ProcessResult};
