//! # 伪衍射谱合成
//!
//! 从峰列表构造角度采样网格，并在网格上叠加混合峰形。
//!
//! ## 算法概述
//! 1. 取峰位最小/最大值 ± margin 得到网格范围
//! 2. 在 `[x_min, x_max)` 上等距取 `sample_count` 个点（左闭右开，
//!    步长 `(x_max - x_min) / sample_count`）
//! 3. 外层遍历网格点，内层对所有峰做 fold 累加
//!
//! 密集 O(samples × peaks) 叠加；峰数量级为几十个，每幅图只算一次，
//! 不在热路径上。
//!
//! ## 依赖关系
//! - 被 `commands/plot.rs`、`commands/export.rs` 调用
//! - 使用 `profile/shape.rs` 的峰形函数
//! - 使用 `models/pattern.rs` 的 Peak 结构

use crate::error::{Result, XrdStackError};
use crate::models::Peak;
use crate::profile::ShapeConfig;

/// 默认网格边距（角度单位）
pub const DEFAULT_MARGIN: f64 = 5.0;
/// 默认采样点数
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// 角度采样网格
///
/// 由单个图样的峰位范围派生，不跨图样共享。端点约定为左闭右开
/// `[x_min, x_max)`：第 i 个采样点为 `x_min + i * step`，
/// `step = (x_max - x_min) / sample_count`，最后一点落在
/// `x_max - step`。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisGrid {
    x_min: f64,
    x_max: f64,
    sample_count: usize,
}

impl SynthesisGrid {
    /// 从峰列表构造网格
    ///
    /// 峰列表不要求按峰位排序。空峰列表无法确定范围，
    /// 返回 `EmptyPattern` 而不是对空序列求 min/max。
    pub fn from_peaks(peaks: &[Peak], margin: f64, sample_count: usize) -> Result<Self> {
        if sample_count == 0 {
            return Err(XrdStackError::ConfigError(
                "sample count must be > 0".to_string(),
            ));
        }
        if !margin.is_finite() || margin <= 0.0 {
            return Err(XrdStackError::ConfigError(format!(
                "grid margin must be > 0, got {}",
                margin
            )));
        }
        if peaks.is_empty() {
            return Err(XrdStackError::EmptyPattern {
                name: "(unnamed)".to_string(),
            });
        }

        let min_pos = peaks.iter().map(|p| p.position).fold(f64::INFINITY, f64::min);
        let max_pos = peaks
            .iter()
            .map(|p| p.position)
            .fold(f64::NEG_INFINITY, f64::max);

        // margin > 0 保证即使所有峰位相同也有 x_min < x_max
        Ok(Self {
            x_min: min_pos - margin,
            x_max: max_pos + margin,
            sample_count,
        })
    }

    /// 网格下界
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// 网格上界（不含）
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// 采样点数
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// 采样步长
    pub fn step(&self) -> f64 {
        (self.x_max - self.x_min) / self.sample_count as f64
    }

    /// 按序遍历采样点
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step();
        (0..self.sample_count).map(move |i| self.x_min + i as f64 * step)
    }
}

/// 在给定网格上叠加峰形
///
/// 返回恰好 `sample_count` 个 (x, y) 点，x 严格递增。
/// 纯函数，可对不同图样并行调用。
pub fn synthesize_on_grid(
    grid: &SynthesisGrid,
    peaks: &[Peak],
    config: &ShapeConfig,
) -> Vec<(f64, f64)> {
    grid.points()
        .map(|x| {
            let y = peaks.iter().fold(0.0, |acc, peak| {
                acc + config.mixed(x, peak.position, peak.amplitude)
            });
            (x, y)
        })
        .collect()
}

/// 合成伪衍射谱曲线：构造网格 + 叠加
pub fn synthesize(
    peaks: &[Peak],
    config: &ShapeConfig,
    margin: f64,
    sample_count: usize,
) -> Result<Vec<(f64, f64)>> {
    let grid = SynthesisGrid::from_peaks(peaks, margin, sample_count)?;
    Ok(synthesize_on_grid(&grid, peaks, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::shape::{gaussian, lorentzian};

    const TOL: f64 = 1e-9;

    fn peak(position: f64, amplitude: f64) -> Peak {
        Peak {
            position,
            amplitude,
            plane: "(1 0 0)".to_string(),
            d_spacing: 2.0,
        }
    }

    #[test]
    fn test_grid_exact_span() {
        // 峰位 {20, 25}，margin 5，100 点：[15, 30) 等距
        let peaks = vec![peak(20.0, 50.0), peak(25.0, 80.0)];
        let grid = SynthesisGrid::from_peaks(&peaks, 5.0, 100).unwrap();

        assert_eq!(grid.x_min(), 15.0);
        assert_eq!(grid.x_max(), 30.0);
        assert!((grid.step() - 0.15).abs() < TOL);

        let xs: Vec<f64> = grid.points().collect();
        assert_eq!(xs.len(), 100);
        assert!((xs[0] - 15.0).abs() < TOL);
        assert!((xs[99] - 29.85).abs() < TOL);
    }

    #[test]
    fn test_grid_ignores_peak_order() {
        let sorted = vec![peak(20.0, 50.0), peak(25.0, 80.0)];
        let shuffled = vec![peak(25.0, 80.0), peak(20.0, 50.0)];
        let a = SynthesisGrid::from_peaks(&sorted, 5.0, 100).unwrap();
        let b = SynthesisGrid::from_peaks(&shuffled, 5.0, 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_pattern_is_an_error() {
        let err = SynthesisGrid::from_peaks(&[], 5.0, 100).unwrap_err();
        assert!(matches!(err, XrdStackError::EmptyPattern { .. }));

        let config = ShapeConfig::default();
        let err = synthesize(&[], &config, 5.0, 100).unwrap_err();
        assert!(matches!(err, XrdStackError::EmptyPattern { .. }));
    }

    #[test]
    fn test_grid_rejects_bad_parameters() {
        let peaks = vec![peak(10.0, 100.0)];
        assert!(SynthesisGrid::from_peaks(&peaks, 5.0, 0).is_err());
        assert!(SynthesisGrid::from_peaks(&peaks, 0.0, 100).is_err());
        assert!(SynthesisGrid::from_peaks(&peaks, -1.0, 100).is_err());
    }

    #[test]
    fn test_curve_length_and_monotone_x() {
        let peaks = vec![peak(10.0, 100.0), peak(40.0, 30.0)];
        let config = ShapeConfig::default();
        let curve = synthesize(&peaks, &config, 5.0, 1000).unwrap();

        assert_eq!(curve.len(), 1000);
        for pair in curve.windows(2) {
            assert!(pair[0].0 < pair[1].0, "x values must be strictly increasing");
        }
    }

    #[test]
    fn test_pure_gaussian_single_peak() {
        // mix = 1.0 退化为纯 Gaussian
        let peaks = vec![peak(10.0, 100.0)];
        let config = ShapeConfig::new(1.0, 1.0, 0.8).unwrap();
        let curve = synthesize(&peaks, &config, 5.0, 500).unwrap();

        for (x, y) in curve {
            let expected = gaussian(x, 10.0, 100.0, 1.0);
            assert!((y - expected).abs() < TOL, "mismatch at x = {}", x);
        }
    }

    #[test]
    fn test_pure_lorentzian_single_peak() {
        // mix = 0.0 退化为纯 Lorentzian
        let peaks = vec![peak(10.0, 100.0)];
        let config = ShapeConfig::new(0.0, 1.0, 0.8).unwrap();
        let curve = synthesize(&peaks, &config, 5.0, 500).unwrap();

        for (x, y) in curve {
            let expected = lorentzian(x, 10.0, 100.0, 0.8);
            assert!((y - expected).abs() < TOL, "mismatch at x = {}", x);
        }
    }

    #[test]
    fn test_superposition_linearity() {
        let first = vec![peak(20.0, 50.0)];
        let second = vec![peak(25.0, 80.0)];
        let both = vec![peak(20.0, 50.0), peak(25.0, 80.0)];

        // 三次合成使用同一网格，保证逐点可比
        let grid = SynthesisGrid::from_peaks(&both, 5.0, 200).unwrap();
        let config = ShapeConfig::default();

        let curve_a = synthesize_on_grid(&grid, &first, &config);
        let curve_b = synthesize_on_grid(&grid, &second, &config);
        let combined = synthesize_on_grid(&grid, &both, &config);

        for i in 0..combined.len() {
            let summed = curve_a[i].1 + curve_b[i].1;
            assert!(
                (combined[i].1 - summed).abs() < TOL,
                "superposition not linear at x = {}",
                combined[i].0
            );
        }
    }

    #[test]
    fn test_coincident_peaks_are_valid() {
        // 所有峰位相同不是错误，曲线应是单峰形状的两倍
        let peaks = vec![peak(30.0, 40.0), peak(30.0, 40.0)];
        let config = ShapeConfig::default();
        let curve = synthesize(&peaks, &config, 5.0, 100).unwrap();

        let single = synthesize(&[peak(30.0, 40.0)], &config, 5.0, 100).unwrap();
        for i in 0..curve.len() {
            assert!((curve[i].1 - 2.0 * single[i].1).abs() < TOL);
        }
    }
}
