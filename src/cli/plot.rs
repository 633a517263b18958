//! # plot 子命令 CLI 定义
//!
//! 渲染堆叠图样比较图的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plot.rs`

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

use crate::profile::shape::{DEFAULT_GAUSS_WIDTH, DEFAULT_LORENTZ_WIDTH, DEFAULT_MIX_FACTOR};
use crate::profile::synthesis::{DEFAULT_MARGIN, DEFAULT_SAMPLE_COUNT};

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PlotFormat {
    /// PNG image (publication quality)
    Png,
    /// SVG vector image
    Svg,
}

/// 从文件扩展名推断输出格式
pub fn guess_plot_format(path: &Path) -> PlotFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => PlotFormat::Svg,
        _ => PlotFormat::Png,
    }
}

/// plot 子命令参数
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Input: JSON peak-list file or directory of files
    pub input: PathBuf,

    /// Output image path
    #[arg(short, long, default_value = "stacked_patterns.png")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<PlotFormat>,

    // ─────────────────────────────────────────────────────────────
    // 峰形参数
    // ─────────────────────────────────────────────────────────────
    /// Gauss-Lorentz mixing factor (f*Gauss + (1-f)*Lorentz, in [0,1])
    #[arg(long, default_value_t = DEFAULT_MIX_FACTOR)]
    pub mix: f64,

    /// Gaussian peak width (sigma)
    #[arg(long, default_value_t = DEFAULT_GAUSS_WIDTH)]
    pub gauss_width: f64,

    /// Lorentzian peak width (gamma)
    #[arg(long, default_value_t = DEFAULT_LORENTZ_WIDTH)]
    pub lorentz_width: f64,

    // ─────────────────────────────────────────────────────────────
    // 网格参数
    // ─────────────────────────────────────────────────────────────
    /// 2-theta margin beyond the outermost peaks, in degrees
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: f64,

    /// Number of grid points per synthesized curve
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    // ─────────────────────────────────────────────────────────────
    // 标注与外观
    // ─────────────────────────────────────────────────────────────
    /// Do not annotate peak positions
    #[arg(long, default_value_t = false)]
    pub hide_positions: bool,

    /// Do not annotate plane labels and d-spacings
    #[arg(long, default_value_t = false)]
    pub hide_planes: bool,

    /// Draw sticks only, without the synthesized filled curve
    #[arg(long, default_value_t = false)]
    pub no_curve: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1600)]
    pub width: u32,

    /// Figure height in pixels; 0 = 300 per panel
    #[arg(long, default_value_t = 0)]
    pub height: u32,

    // ─────────────────────────────────────────────────────────────
    // 批量输入参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (directory mode)
    #[arg(long, default_value = "*.json")]
    pub pattern: String,

    /// Recurse into subdirectories (directory mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,
}
