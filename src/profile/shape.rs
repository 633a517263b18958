//! # Gauss-Lorentz 混合峰形
//!
//! 实现伪衍射谱的解析峰形函数（pseudo-Voigt 风格的 Gauss/Lorentz 混合）。
//! 峰形仅用于可视化展宽，不是 Rietveld 意义上的物理拟合。
//!
//! ## 峰形定义
//! - Gaussian:   `A * exp(-(x-c)² / (2σ²))`
//! - Lorentzian: `A / (1 + ((x-c)/γ)²)`
//! - Mixed:      `f * Gauss + (1-f) * Lorentz`，`f ∈ [0,1]`
//!
//! 三者在 `x == c` 处都精确等于 `A`，且关于峰心对称、随距离单调不增。
//!
//! ## 依赖关系
//! - 被 `profile/synthesis.rs` 调用
//! - 无外部模块依赖（纯数值函数）

use crate::error::{Result, XrdStackError};

/// 默认混合因子 f*Gauss + (1-f)*Lorentz
pub const DEFAULT_MIX_FACTOR: f64 = 0.5;
/// 默认 Gauss 峰宽 σ
pub const DEFAULT_GAUSS_WIDTH: f64 = 1.0;
/// 默认 Lorentz 峰宽 γ
pub const DEFAULT_LORENTZ_WIDTH: f64 = 0.8;

/// Gaussian 峰形贡献
pub fn gaussian(x: f64, center: f64, amplitude: f64, sigma: f64) -> f64 {
    let delta = x - center;
    amplitude * (-delta * delta / (2.0 * sigma * sigma)).exp()
}

/// Lorentzian 峰形贡献
pub fn lorentzian(x: f64, center: f64, amplitude: f64, gamma: f64) -> f64 {
    let reduced = (x - center) / gamma;
    amplitude / (1.0 + reduced * reduced)
}

/// 峰形配置
///
/// 一次运行内全局不变；在构造时完成全部校验，合成阶段不再检查。
/// 字段私有以保证校验后的不变量（宽度为正、混合因子在 [0,1] 内）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    mix_factor: f64,
    gauss_width: f64,
    lorentz_width: f64,
}

impl ShapeConfig {
    /// 创建新的峰形配置
    ///
    /// 混合因子越界直接拒绝（不截断），宽度必须为正有限值。
    pub fn new(mix_factor: f64, gauss_width: f64, lorentz_width: f64) -> Result<Self> {
        if !mix_factor.is_finite() || !(0.0..=1.0).contains(&mix_factor) {
            return Err(XrdStackError::ConfigError(format!(
                "mix factor must be in [0, 1], got {}",
                mix_factor
            )));
        }
        if !gauss_width.is_finite() || gauss_width <= 0.0 {
            return Err(XrdStackError::ConfigError(format!(
                "Gaussian width must be > 0, got {}",
                gauss_width
            )));
        }
        if !lorentz_width.is_finite() || lorentz_width <= 0.0 {
            return Err(XrdStackError::ConfigError(format!(
                "Lorentzian width must be > 0, got {}",
                lorentz_width
            )));
        }

        Ok(Self {
            mix_factor,
            gauss_width,
            lorentz_width,
        })
    }

    /// 混合因子 f
    pub fn mix_factor(&self) -> f64 {
        self.mix_factor
    }

    /// Gauss 峰宽 σ
    pub fn gauss_width(&self) -> f64 {
        self.gauss_width
    }

    /// Lorentz 峰宽 γ
    pub fn lorentz_width(&self) -> f64 {
        self.lorentz_width
    }

    /// 混合峰形贡献 `f * Gauss + (1-f) * Lorentz`
    ///
    /// 在 `x == center` 处精确返回 `amplitude`。
    pub fn mixed(&self, x: f64, center: f64, amplitude: f64) -> f64 {
        self.mix_factor * gaussian(x, center, amplitude, self.gauss_width)
            + (1.0 - self.mix_factor) * lorentzian(x, center, amplitude, self.lorentz_width)
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            mix_factor: DEFAULT_MIX_FACTOR,
            gauss_width: DEFAULT_GAUSS_WIDTH,
            lorentz_width: DEFAULT_LORENTZ_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_gaussian_at_center() {
        assert!((gaussian(10.0, 10.0, 100.0, 1.0) - 100.0).abs() < TOL);
    }

    #[test]
    fn test_lorentzian_at_center() {
        assert!((lorentzian(33.3, 33.3, 42.0, 0.8) - 42.0).abs() < TOL);
    }

    #[test]
    fn test_lorentzian_formula() {
        // A / (1 + ((x-c)/γ)²)，取 x-c = γ 时应为 A/2
        let v = lorentzian(10.8, 10.0, 100.0, 0.8);
        assert!((v - 50.0).abs() < TOL);
    }

    #[test]
    fn test_mixed_at_center_equals_amplitude() {
        for mix in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let config = ShapeConfig::new(mix, 1.0, 0.8).unwrap();
            assert!((config.mixed(20.0, 20.0, 100.0) - 100.0).abs() < TOL);
        }
    }

    #[test]
    fn test_mixed_symmetry() {
        let config = ShapeConfig::default();
        for d in [0.1, 0.5, 1.0, 3.0, 10.0] {
            let left = config.mixed(20.0 - d, 20.0, 100.0);
            let right = config.mixed(20.0 + d, 20.0, 100.0);
            assert!((left - right).abs() < TOL, "asymmetric at d = {}", d);
        }
    }

    #[test]
    fn test_mixed_monotone_decay() {
        let config = ShapeConfig::default();
        let mut prev = config.mixed(20.0, 20.0, 100.0);
        let mut d = 0.05;
        while d < 15.0 {
            let v = config.mixed(20.0 + d, 20.0, 100.0);
            assert!(v <= prev, "not non-increasing at d = {}", d);
            assert!(v > 0.0, "profile must stay positive");
            prev = v;
            d += 0.05;
        }
    }

    #[test]
    fn test_config_rejects_bad_mix() {
        assert!(ShapeConfig::new(-0.1, 1.0, 0.8).is_err());
        assert!(ShapeConfig::new(1.1, 1.0, 0.8).is_err());
        assert!(ShapeConfig::new(f64::NAN, 1.0, 0.8).is_err());
    }

    #[test]
    fn test_config_rejects_bad_widths() {
        assert!(ShapeConfig::new(0.5, 0.0, 0.8).is_err());
        assert!(ShapeConfig::new(0.5, -1.0, 0.8).is_err());
        assert!(ShapeConfig::new(0.5, 1.0, 0.0).is_err());
        assert!(ShapeConfig::new(0.5, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_config_matches_constants() {
        let config = ShapeConfig::default();
        assert_eq!(config.mix_factor(), DEFAULT_MIX_FACTOR);
        assert_eq!(config.gauss_width(), DEFAULT_GAUSS_WIDTH);
        assert_eq!(config.lorentz_width(), DEFAULT_LORENTZ_WIDTH);
    }
}
