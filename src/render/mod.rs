//! # 渲染模块
//!
//! 使用 `plotters` 将多个图样绘制为共享 2θ 轴的纵向堆叠面板。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/pattern.rs` 的 Dataset 结构
//! - 子模块: stacked

pub mod stacked;

pub use stacked::{render_stacked, PanelData, StackedPlotOptions};
