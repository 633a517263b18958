//! # 堆叠图样渲染
//!
//! 每个输入文件一个面板，纵向堆叠，共享全局 2θ 范围；
//! 堆叠顺序即输入顺序，对读者有意义，渲染层不得重排。
//!
//! ## 面板内容
//! - 每个峰：实线 stick（0 到强度）+ 虚线全高参考线 + 可选竖排峰位/晶面标注
//! - 合成曲线：半透明填充区域
//! - 角落标注：主标签（中）、副标签（右）、波长（左）
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs` 调用
//! - 使用 `models/pattern.rs` 的 Dataset 结构
//! - 使用 `plotters` 渲染图表

use crate::error::{Result, XrdStackError};
use crate::models::Dataset;

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;
use std::path::Path;

/// 单个面板的数据：解析出的图样 + 为其合成的曲线
pub struct PanelData<'a> {
    pub dataset: &'a Dataset,
    /// None 时不绘制填充曲线（--no-curve）
    pub curve: Option<&'a [(f64, f64)]>,
}

/// 堆叠图渲染选项
pub struct StackedPlotOptions {
    /// 在峰下方标注峰位数值
    pub show_positions: bool,
    /// 在峰下方标注晶面与 d 间距
    pub show_planes: bool,
    /// y 轴在 100 之上的余量（与网格边距一致）
    pub headroom: f64,
    pub width: u32,
    pub height: u32,
}

/// 渲染堆叠图样比较图
///
/// `panels` 按输入顺序排列；`x_range` 为所有图样峰位的全局范围 ± 边距。
pub fn render_stacked(
    panels: &[PanelData],
    x_range: (f64, f64),
    options: &StackedPlotOptions,
    output_path: &Path,
    use_svg: bool,
) -> Result<()> {
    if use_svg {
        let root =
            SVGBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_stacked_chart(&root, panels, x_range, options)?;
        root.present()
            .map_err(|e| XrdStackError::RenderError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (options.width, options.height)).into_drawing_area();
        draw_stacked_chart(&root, panels, x_range, options)?;
        root.present()
            .map_err(|e| XrdStackError::RenderError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制堆叠图表的核心逻辑
fn draw_stacked_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    panels: &[PanelData],
    x_range: (f64, f64),
    options: &StackedPlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    if panels.is_empty() {
        return Err(XrdStackError::RenderError(
            "nothing to draw: no panels".to_string(),
        ));
    }

    root.fill(&WHITE)
        .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

    let (x_min, x_max) = x_range;
    let y_max = 100.0 + options.headroom;

    let areas = root.split_evenly((panels.len(), 1));

    for (idx, (panel, area)) in panels.iter().zip(areas.iter()).enumerate() {
        let is_bottom = idx == panels.len() - 1;

        let mut chart = ChartBuilder::on(area)
            .margin_left(10)
            .margin_right(10)
            .margin_top(2)
            .x_label_area_size(if is_bottom { 45 } else { 0 })
            .y_label_area_size(10)
            .build_cartesian_2d(x_min..x_max, 0.0..y_max)
            .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

        // y 轴无意义（相对强度），隐藏刻度；仅底部面板画 x 轴刻度
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh().y_labels(0);
        if is_bottom {
            mesh.x_desc("2θ (°)")
                .x_label_style(("sans-serif", 16))
                .axis_desc_style(("sans-serif", 18));
        } else {
            mesh.x_labels(0);
        }
        mesh.draw()
            .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

        draw_panel(&mut chart, panel, (x_min, x_max), y_max, options)?;
    }

    Ok(())
}

/// 绘制单个面板：曲线、stick、参考线与标注
fn draw_panel<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    panel: &PanelData,
    x_range: (f64, f64),
    y_max: f64,
    options: &StackedPlotOptions,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let dataset = panel.dataset;
    let (x_min, x_max) = x_range;

    // 合成曲线：半透明填充
    if let Some(curve) = panel.curve {
        chart
            .draw_series(
                AreaSeries::new(curve.iter().copied(), 0.0, RED.mix(0.2))
                    .border_style(RED.mix(0.6)),
            )
            .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;
    }

    let stick_color = RGBColor(0, 102, 204);

    for peak in &dataset.pattern.peaks {
        // 全高虚线参考线
        chart
            .draw_series(DashedLineSeries::new(
                vec![(peak.position, 0.0), (peak.position, y_max)],
                3,
                3,
                BLACK.mix(0.4).stroke_width(1),
            ))
            .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

        // 实线 stick：0 到峰强度
        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(peak.position, 0.0), (peak.position, peak.amplitude)],
                stick_color.stroke_width(2),
            )))
            .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

        // 竖排峰元数据标注
        if options.show_positions || options.show_planes {
            let mut parts = Vec::new();
            if options.show_positions {
                parts.push(format!("{:.1}", peak.position));
            }
            if options.show_planes {
                parts.push(format!("{}, d={:.2}", peak.plane, peak.d_spacing));
            }
            let label = parts.join(" , ");

            let text_style = ("sans-serif", 9)
                .into_font()
                .transform(FontTransform::Rotate270)
                .color(&BLACK)
                .pos(Pos::new(HPos::Right, VPos::Bottom));

            chart
                .draw_series(std::iter::once(Text::new(
                    label,
                    (peak.position, 1.0),
                    text_style,
                )))
                .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;
        }
    }

    // 主标签（居中）
    let title_style = ("sans-serif", 15)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    chart
        .draw_series(std::iter::once(Text::new(
            dataset.label.clone(),
            ((x_min + x_max) / 2.0, y_max * 0.97),
            title_style,
        )))
        .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

    // 副标签（右侧，小号）
    if let Some(ref sublabel) = dataset.sublabel {
        let sub_style = ("sans-serif", 11)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Top));
        chart
            .draw_series(std::iter::once(Text::new(
                sublabel.clone(),
                (x_max - (x_max - x_min) * 0.01, y_max * 0.97),
                sub_style,
            )))
            .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;
    }

    // 波长标注（左侧）
    let wavelength = &dataset.pattern.wavelength;
    let wavelength_text = format!("({} , {:.4} Å)", wavelength.element, wavelength.in_angstroms);
    let wl_style = ("sans-serif", 11)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Top));
    chart
        .draw_series(std::iter::once(Text::new(
            wavelength_text,
            (x_min + (x_max - x_min) * 0.01, y_max * 0.97),
            wl_style,
        )))
        .map_err(|e| XrdStackError::RenderError(format!("{:?}", e)))?;

    Ok(())
}
