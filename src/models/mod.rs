//! # 数据模型模块
//!
//! 定义衍射图样峰列表的统一数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`profile/` 和 `commands/` 使用
//! - 子模块: pattern

pub mod pattern;

pub use pattern::{Dataset, Pattern, Peak, Wavelength};
