//! # 图样数据导出
//!
//! 导出峰列表和合成曲线到 CSV 和 XY 格式。
//!
//! ## 支持格式
//! - CSV: 峰列表（position, d_spacing, amplitude, plane）或曲线（two_theta, intensity）
//! - XY: 标准 XRD 数据交换格式（注释头 + 两列制表符分隔）
//!
//! ## 依赖关系
//! - 被 `commands/export.rs` 调用
//! - 使用 `models/pattern.rs` 的 Pattern 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, XrdStackError};
use crate::models::{Pattern, Wavelength};

use std::fs::File;
use std::io::Write;
use std::path::Path;

fn write_err(path: &Path, e: std::io::Error) -> XrdStackError {
    XrdStackError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    }
}

/// 导出峰列表为 CSV 格式（按峰位升序）
pub fn peaks_to_csv(pattern: &Pattern, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["position", "d_spacing", "amplitude", "plane"])?;

    let mut peaks = pattern.peaks.clone();
    peaks.sort_by(|a, b| a.position.total_cmp(&b.position));

    for peak in &peaks {
        wtr.write_record(&[
            format!("{:.4}", peak.position),
            format!("{:.6}", peak.d_spacing),
            format!("{:.2}", peak.amplitude),
            peak.plane.clone(),
        ])?;
    }

    wtr.flush().map_err(|e| write_err(output_path, e))?;
    Ok(())
}

/// 导出合成曲线为 CSV 格式
pub fn curve_to_csv(curve: &[(f64, f64)], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["two_theta", "intensity"])?;

    for (two_theta, intensity) in curve {
        wtr.write_record(&[format!("{:.4}", two_theta), format!("{:.4}", intensity)])?;
    }

    wtr.flush().map_err(|e| write_err(output_path, e))?;
    Ok(())
}

/// 导出峰列表为 XY 格式
pub fn peaks_to_xy(pattern: &Pattern, name: &str, output_path: &Path) -> Result<()> {
    let mut file = File::create(output_path).map_err(|e| write_err(output_path, e))?;

    write_xy_header(&mut file, name, &pattern.wavelength, output_path)?;

    let mut peaks = pattern.peaks.clone();
    peaks.sort_by(|a, b| a.position.total_cmp(&b.position));

    for peak in &peaks {
        writeln!(file, "{:.4}\t{:.2}", peak.position, peak.amplitude)
            .map_err(|e| write_err(output_path, e))?;
    }

    Ok(())
}

/// 导出合成曲线为 XY 格式
pub fn curve_to_xy(
    curve: &[(f64, f64)],
    name: &str,
    wavelength: &Wavelength,
    output_path: &Path,
) -> Result<()> {
    let mut file = File::create(output_path).map_err(|e| write_err(output_path, e))?;

    write_xy_header(&mut file, &format!("{} (synthesized)", name), wavelength, output_path)?;

    for (two_theta, intensity) in curve {
        writeln!(file, "{:.4}\t{:.4}", two_theta, intensity)
            .map_err(|e| write_err(output_path, e))?;
    }

    Ok(())
}

fn write_xy_header(
    file: &mut File,
    name: &str,
    wavelength: &Wavelength,
    output_path: &Path,
) -> Result<()> {
    writeln!(file, "# Diffraction pattern: {}", name).map_err(|e| write_err(output_path, e))?;
    writeln!(
        file,
        "# Wavelength: {} {:.6} Angstrom",
        wavelength.element, wavelength.in_angstroms
    )
    .map_err(|e| write_err(output_path, e))?;
    writeln!(file, "# Columns: 2theta (degrees), Intensity (relative)")
        .map_err(|e| write_err(output_path, e))?;
    writeln!(file, "#").map_err(|e| write_err(output_path, e))?;
    Ok(())
}
