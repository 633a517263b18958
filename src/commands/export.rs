//! # export 子命令实现
//!
//! 导出峰列表或合成曲线到 CSV/XY 数据文件。
//!
//! ## 功能
//! - 单文件和批量目录处理
//! - 批量模式并行执行（rayon）并汇总统计
//! - 可选合成曲线导出（--curve）
//!
//! ## 依赖关系
//! - 使用 `cli/export.rs` 定义的 ExportArgs
//! - 使用 `batch/` 模块进行批量处理
//! - 使用 `profile/` 合成曲线
//! - 使用 `export.rs` 写出数据

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::export::{guess_export_format, ExportArgs, ExportFormat};
use crate::error::{Result, XrdStackError};
use crate::export;
use crate::models::Dataset;
use crate::parsers;
use crate::profile::{synthesize, ShapeConfig};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 执行 export 命令
pub fn execute(args: ExportArgs) -> Result<()> {
    output::print_header("Diffraction Pattern Data Export");

    let shape = ShapeConfig::new(args.mix, args.gauss_width, args.lorentz_width)?;

    if args.input.is_file() {
        execute_single_file(&args, &shape)
    } else if args.input.is_dir() {
        execute_batch(&args, shape)
    } else {
        Err(XrdStackError::FileNotFound {
            path: args.input.display().to_string(),
        })
    }
}

/// 单文件模式
fn execute_single_file(args: &ExportArgs, shape: &ShapeConfig) -> Result<()> {
    output::print_info(&format!("Single file mode: '{}'", args.input.display()));

    let dataset = parsers::parse_pattern_file(&args.input)?;
    let format = args
        .format
        .unwrap_or_else(|| guess_export_format(&args.output));

    export_dataset(
        &dataset,
        &args.output,
        format,
        args.curve,
        shape,
        args.margin,
        args.samples,
    )?;

    output::print_success(&format!(
        "{} exported to '{}'",
        if args.curve { "Curve" } else { "Peak list" },
        args.output.display()
    ));
    Ok(())
}

/// 批量处理配置
struct BatchExportConfig {
    output_dir: PathBuf,
    format: ExportFormat,
    curve: bool,
    shape: ShapeConfig,
    margin: f64,
    samples: usize,
    overwrite: bool,
}

/// 批量处理模式
fn execute_batch(args: &ExportArgs, shape: ShapeConfig) -> Result<()> {
    output::print_info(&format!("Batch mode: directory '{}'", args.input.display()));

    let files = FileCollector::new(args.input.clone())
        .with_pattern(&args.pattern)
        .recursive(args.recursive)
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching files found with pattern '{}'",
            args.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} pattern files", files.len()));

    fs::create_dir_all(&args.output).map_err(|e| XrdStackError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;

    let format = args.format.unwrap_or(ExportFormat::Csv);
    output::print_info(&format!("Output format: {:?}", format));

    let config = Arc::new(BatchExportConfig {
        output_dir: args.output.clone(),
        format,
        curve: args.curve,
        shape,
        margin: args.margin,
        samples: args.samples,
        overwrite: args.overwrite,
    });

    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, |file| process_batch_file(file, &config));

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} success, {} skipped, {} failed",
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_batch_file(input: &PathBuf, config: &Arc<BatchExportConfig>) -> ProcessResult {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let ext = match config.format {
        ExportFormat::Csv => "csv",
        ExportFormat::Xy => "xy",
    };
    let suffix = if config.curve { "curve" } else { "peaks" };

    let output_file = config.output_dir.join(format!("{}_{}.{}", stem, suffix, ext));

    if output_file.exists() && !config.overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            output_file.display()
        ));
    }

    let dataset = match parsers::parse_pattern_file(input) {
        Ok(d) => d,
        Err(e) => return ProcessResult::Failed(input.display().to_string(), e.to_string()),
    };

    match export_dataset(
        &dataset,
        &output_file,
        config.format,
        config.curve,
        &config.shape,
        config.margin,
        config.samples,
    ) {
        Ok(_) => {
            ProcessResult::Success(format!("{} -> {}", input.display(), output_file.display()))
        }
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}

/// 导出单个图样（峰列表或合成曲线）
fn export_dataset(
    dataset: &Dataset,
    output_path: &Path,
    format: ExportFormat,
    curve: bool,
    shape: &ShapeConfig,
    margin: f64,
    samples: usize,
) -> Result<()> {
    if dataset.pattern.peaks.is_empty() {
        return Err(XrdStackError::EmptyPattern {
            name: dataset.label.clone(),
        });
    }

    if curve {
        let synthesized = synthesize(&dataset.pattern.peaks, shape, margin, samples)?;
        match format {
            ExportFormat::Csv => export::curve_to_csv(&synthesized, output_path),
            ExportFormat::Xy => export::curve_to_xy(
                &synthesized,
                &dataset.label,
                &dataset.pattern.wavelength,
                output_path,
            ),
        }
    } else {
        match format {
            ExportFormat::Csv => export::peaks_to_csv(&dataset.pattern, output_path),
            ExportFormat::Xy => {
                export::peaks_to_xy(&dataset.pattern, &dataset.label, output_path)
            }
        }
    }
}
