//! # 峰形合成模块
//!
//! 从离散峰列表合成连续伪衍射谱。
//!
//! ## 子模块
//! - `shape`: Gauss-Lorentz 混合峰形函数
//! - `synthesis`: 角度网格构造与峰形叠加
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/pattern.rs` 的 Peak 结构

pub mod shape;
pub mod synthesis;

pub use shape::ShapeConfig;
pub use synthesis::{synthesize, synthesize_on_grid, SynthesisGrid};
