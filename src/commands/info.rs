//! # info 子命令实现
//!
//! 打印单个峰列表文件的概要与峰表。
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的 InfoArgs
//! - 使用 `parsers/` 读取图样
//! - 使用 `tabled` 打印峰表

use crate::cli::info::InfoArgs;
use crate::error::{Result, XrdStackError};
use crate::models::Peak;
use crate::parsers;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    if !args.input.is_file() {
        return Err(XrdStackError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let dataset = parsers::parse_pattern_file(&args.input)?;

    output::print_header(&format!("Pattern: {}", dataset.label));

    if let Some(ref sublabel) = dataset.sublabel {
        output::print_info(&format!("Annotation: {}", sublabel));
    }
    output::print_info(&format!(
        "Wavelength: {} {:.4} Å",
        dataset.pattern.wavelength.element, dataset.pattern.wavelength.in_angstroms
    ));
    output::print_info(&format!("Peaks: {}", dataset.pattern.peaks.len()));

    let limit = if args.limit == 0 {
        dataset.pattern.peaks.len()
    } else {
        args.limit
    };
    print_peak_table(&dataset.pattern.peaks, limit);

    Ok(())
}

/// 打印峰位表格
fn print_peak_table(peaks: &[Peak], count: usize) {
    #[derive(Tabled)]
    struct PeakRow {
        #[tabled(rename = "2θ (°)")]
        position: String,
        #[tabled(rename = "d (Å)")]
        d_spacing: String,
        #[tabled(rename = "I (%)")]
        amplitude: String,
        #[tabled(rename = "plane")]
        plane: String,
    }

    let rows: Vec<PeakRow> = peaks
        .iter()
        .take(count)
        .map(|p| PeakRow {
            position: format!("{:.3}", p.position),
            d_spacing: format!("{:.4}", p.d_spacing),
            amplitude: format!("{:.1}", p.amplitude),
            plane: p.plane.clone(),
        })
        .collect();

    if !rows.is_empty() {
        let table = Table::new(&rows);
        println!("{}", table);
    }
}
