//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `plot`: 渲染堆叠图样比较图
//! - `export`: 导出峰列表或合成曲线数据
//! - `info`: 打印单个文件的峰表
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: plot, export, info

pub mod export;
pub mod info;
pub mod plot;

use clap::{Parser, Subcommand};

/// xrdstack - 堆叠衍射图样比较绘图工具
#[derive(Parser)]
#[command(name = "xrdstack")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Stacked X-ray diffraction pattern comparison plotter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Render stacked comparison plot from JSON peak lists
    Plot(plot::PlotArgs),

    /// Export peak lists or synthesized curves (CSV/XY)
    Export(export::ExportArgs),

    /// Print the peak table of one pattern file
    Info(info::InfoArgs),
}
