//! # plot 子命令实现
//!
//! 从 JSON 峰列表渲染堆叠图样比较图。
//!
//! ## 流程
//! 1. 收集输入文件（按文件名排序，排序即面板堆叠顺序）
//! 2. 解析所有图样并校验非空
//! 3. 并行合成伪衍射曲线（rayon，结果保持输入顺序）
//! 4. 以全局 2θ 范围渲染堆叠面板
//!
//! ## 依赖关系
//! - 使用 `cli/plot.rs` 定义的 PlotArgs
//! - 使用 `batch/collector.rs` 收集文件
//! - 使用 `profile/` 合成曲线
//! - 使用 `render/` 绘制图表

use crate::batch::FileCollector;
use crate::cli::plot::{guess_plot_format, PlotArgs, PlotFormat};
use crate::error::{Result, XrdStackError};
use crate::models::Dataset;
use crate::parsers;
use crate::profile::{synthesize, ShapeConfig};
use crate::render::{render_stacked, PanelData, StackedPlotOptions};
use crate::utils::{output, progress};

use rayon::prelude::*;

/// 每个面板的默认高度（像素）
const PANEL_HEIGHT: u32 = 300;
/// 底部 x 轴刻度区域高度（像素）
const AXIS_AREA_HEIGHT: u32 = 60;

/// 执行 plot 命令
pub fn execute(args: PlotArgs) -> Result<()> {
    output::print_header("Stacked Diffraction Pattern Plot");

    // 峰形配置在任何合成之前校验一次
    let shape = ShapeConfig::new(args.mix, args.gauss_width, args.lorentz_width)?;

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        FileCollector::new(args.input.clone())
            .with_pattern(&args.pattern)
            .recursive(args.recursive)
            .collect()
    } else {
        return Err(XrdStackError::FileNotFound {
            path: args.input.display().to_string(),
        });
    };

    if files.is_empty() {
        return Err(XrdStackError::NoFilesFound {
            pattern: args.pattern.clone(),
        });
    }

    output::print_info(&format!("Found {} pattern file(s)", files.len()));

    let datasets: Vec<Dataset> = files
        .iter()
        .map(|f| parsers::parse_pattern_file(f))
        .collect::<Result<Vec<_>>>()?;

    // 空图样在合成前显式拒绝：缺面板的比较图比报错更糟
    for dataset in &datasets {
        if dataset.pattern.peaks.is_empty() {
            return Err(XrdStackError::EmptyPattern {
                name: dataset.label.clone(),
            });
        }
    }

    output::print_info(&format!(
        "Shape: mix = {:.2}, sigma = {:.2}, gamma = {:.2}, {} samples/panel",
        shape.mix_factor(),
        shape.gauss_width(),
        shape.lorentz_width(),
        args.samples
    ));

    // 每个图样的曲线相互独立，可并行合成；collect 保持输入顺序
    let spinner = progress::create_spinner("Synthesizing curves");
    let curves: Vec<Vec<(f64, f64)>> = datasets
        .par_iter()
        .map(|dataset| synthesize(&dataset.pattern.peaks, &shape, args.margin, args.samples))
        .collect::<Result<Vec<_>>>()?;
    spinner.finish_and_clear();

    // 共享 x 轴：所有图样峰位的全局范围 ± 边距
    let x_range = global_x_range(&datasets, args.margin);

    let panels: Vec<PanelData> = datasets
        .iter()
        .zip(curves.iter())
        .map(|(dataset, curve)| PanelData {
            dataset,
            curve: if args.no_curve {
                None
            } else {
                Some(curve.as_slice())
            },
        })
        .collect();

    let height = if args.height == 0 {
        PANEL_HEIGHT * panels.len() as u32 + AXIS_AREA_HEIGHT
    } else {
        args.height
    };

    let options = StackedPlotOptions {
        show_positions: !args.hide_positions,
        show_planes: !args.hide_planes,
        headroom: args.margin,
        width: args.width,
        height,
    };

    let format = args.format.unwrap_or_else(|| guess_plot_format(&args.output));

    render_stacked(
        &panels,
        x_range,
        &options,
        &args.output,
        format == PlotFormat::Svg,
    )?;

    output::print_success(&format!(
        "Stacked plot ({} panels) saved to '{}'",
        panels.len(),
        args.output.display()
    ));

    Ok(())
}

/// 所有图样峰位的全局范围 ± 边距
///
/// 调用前已校验每个图样非空。
fn global_x_range(datasets: &[Dataset], margin: f64) -> (f64, f64) {
    let mut min_pos = f64::INFINITY;
    let mut max_pos = f64::NEG_INFINITY;

    for dataset in datasets {
        for peak in &dataset.pattern.peaks {
            min_pos = min_pos.min(peak.position);
            max_pos = max_pos.max(peak.position);
        }
    }

    (min_pos - margin, max_pos + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pattern, Peak, Wavelength};

    fn dataset(positions: &[f64]) -> Dataset {
        Dataset {
            label: "test".to_string(),
            sublabel: None,
            pattern: Pattern {
                wavelength: Wavelength {
                    element: "Cu".to_string(),
                    in_angstroms: 1.5406,
                },
                peaks: positions
                    .iter()
                    .map(|&position| Peak {
                        position,
                        amplitude: 50.0,
                        plane: "(100)".to_string(),
                        d_spacing: 1.0,
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_global_x_range_spans_all_patterns() {
        let datasets = vec![dataset(&[20.0, 35.0]), dataset(&[15.0, 28.0])];
        let (x_min, x_max) = global_x_range(&datasets, 5.0);
        assert_eq!(x_min, 10.0);
        assert_eq!(x_max, 40.0);
    }
}
