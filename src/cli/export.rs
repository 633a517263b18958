//! # export 子命令 CLI 定义
//!
//! 导出峰列表或合成曲线数据的参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/export.rs`

use clap::{Args, ValueEnum};
use std::path::{Path, PathBuf};

use crate::profile::shape::{DEFAULT_GAUSS_WIDTH, DEFAULT_LORENTZ_WIDTH, DEFAULT_MIX_FACTOR};
use crate::profile::synthesis::{DEFAULT_MARGIN, DEFAULT_SAMPLE_COUNT};

/// 数据输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV data file
    Csv,
    /// XY data file (standard XRD exchange format)
    Xy,
}

/// 从文件扩展名推断输出格式
pub fn guess_export_format(path: &Path) -> ExportFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("xy") | Some("dat") | Some("txt") => ExportFormat::Xy,
        _ => ExportFormat::Csv,
    }
}

/// export 子命令参数
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Input: JSON peak-list file or directory of files
    pub input: PathBuf,

    /// Output: file path (single mode) or directory (batch mode)
    #[arg(short, long, default_value = "xrd_export")]
    pub output: PathBuf,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Export the synthesized curve instead of the raw peak list
    #[arg(long, default_value_t = false)]
    pub curve: bool,

    // ─────────────────────────────────────────────────────────────
    // 峰形与网格参数（仅 --curve 时使用）
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

    /// 2-theta margin beyond the outermost peaks, in degrees
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: f64,

    /// Number of grid points per synthesized curve
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode)
    #[arg(long, default_value = "*.json")]
    pub pattern: String,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,
}
