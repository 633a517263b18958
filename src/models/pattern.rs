//! # 衍射图样数据模型
//!
//! 定义峰、波长和图样的命名记录类型。
//!
//! JSON 线格式中的峰是位置元组 `[amplitude, plane, position, d_spacing]`
//! （索引 0 = 强度，1 = 晶面标签，2 = 峰位，3 = d 间距）；
//! 在反序列化边界转换为命名字段，内部代码不再按下标访问。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`profile/`、`render/`、`export.rs` 使用
//! - 使用 `serde` 派生反序列化

use serde::Deserialize;
use serde_json::Value;

/// 单个衍射峰
///
/// 解析后不可变。强度由上游数据源归一化到 0-100，此处不再归一化。
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawPeak")]
pub struct Peak {
    /// 峰位 2θ（度）
    pub position: f64,
    /// 相对强度（0-100）
    pub amplitude: f64,
    /// 晶面标签（如 Miller 指数），仅作元数据
    pub plane: String,
    /// d 间距（Å），仅作元数据
    pub d_spacing: f64,
}

/// 线格式峰元组: [amplitude, plane, position, d_spacing]
#[derive(Deserialize)]
struct RawPeak(f64, Value, f64, f64);

impl From<RawPeak> for Peak {
    fn from(raw: RawPeak) -> Self {
        Peak {
            amplitude: raw.0,
            plane: plane_label(&raw.1),
            position: raw.2,
            d_spacing: raw.3,
        }
    }
}

/// 晶面标签可以是字符串、指数数组或任意 JSON 值，统一转为显示文本
fn plane_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => {
            let indices: Vec<String> = items.iter().map(json_atom).collect();
            format!("({})", indices.join(" "))
        }
        other => other.to_string(),
    }
}

fn json_atom(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 辐射源波长
#[derive(Debug, Clone, Deserialize)]
pub struct Wavelength {
    /// 靶材元素（如 "Cu"）
    pub element: String,
    /// 波长（Å）
    pub in_angstroms: f64,
}

/// 一个样品/波长组合的完整峰列表，渲染为一个面板
///
/// 峰顺序为数据源的插入顺序，不保证按峰位排序。
#[derive(Debug, Clone, Deserialize)]
pub struct Pattern {
    pub wavelength: Wavelength,
    #[serde(rename = "pattern")]
    pub peaks: Vec<Peak>,
}

/// 一份输入文件：图样 + 面板标签
#[derive(Debug, Clone)]
pub struct Dataset {
    /// 面板主标签（文件名主干）
    pub label: String,
    /// 右侧副标签（文件名中 `!` 之后的部分）
    pub sublabel: Option<String>,
    pub pattern: Pattern,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "wavelength": { "element": "Cu", "in_angstroms": 1.5406 },
            "pattern": [
                [100.0, "(111)", 38.2, 2.35],
                [46.5, [2, 0, 0], 44.4, 2.03]
            ]
        }"#;

        let pattern: Pattern = serde_json::from_str(json).unwrap();
        assert_eq!(pattern.wavelength.element, "Cu");
        assert!((pattern.wavelength.in_angstroms - 1.5406).abs() < 1e-12);
        assert_eq!(pattern.peaks.len(), 2);

        // 位置元组的下标约定: 0=强度, 1=晶面, 2=峰位, 3=d间距
        let first = &pattern.peaks[0];
        assert_eq!(first.amplitude, 100.0);
        assert_eq!(first.plane, "(111)");
        assert_eq!(first.position, 38.2);
        assert_eq!(first.d_spacing, 2.35);
    }

    #[test]
    fn test_plane_label_from_index_array() {
        let second: Peak = serde_json::from_str(r#"[46.5, [2, 0, 0], 44.4, 2.03]"#).unwrap();
        assert_eq!(second.plane, "(2 0 0)");
    }

    #[test]
    fn test_plane_label_from_other_value() {
        let peak: Peak = serde_json::from_str(r#"[10.0, 111, 38.2, 2.35]"#).unwrap();
        assert_eq!(peak.plane, "111");
    }

    #[test]
    fn test_peak_order_is_insertion_order() {
        let json = r#"{
            "wavelength": { "element": "Mo", "in_angstroms": 0.7107 },
            "pattern": [
                [50.0, "b", 25.0, 1.0],
                [80.0, "a", 20.0, 2.0]
            ]
        }"#;
        let pattern: Pattern = serde_json::from_str(json).unwrap();
        assert_eq!(pattern.peaks[0].position, 25.0);
        assert_eq!(pattern.peaks[1].position, 20.0);
    }
}
