//! # JSON 峰列表解析器
//!
//! 读取一个 JSON 峰列表文件为 `Dataset`。
//!
//! ## 文件名约定
//! 面板主标签取文件名主干；主干中出现 `!` 时拆分为
//! 主标签 + 右侧副标签（如 `rutile!simulated.json`）。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/pattern.rs` 的 Dataset, Pattern 结构
//! - 使用 `serde_json` 反序列化

use crate::error::{Result, XrdStackError};
use crate::models::{Dataset, Pattern};

use std::fs;
use std::path::Path;

/// 解析单个峰列表文件
pub fn parse_pattern_file(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path).map_err(|e| XrdStackError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let pattern: Pattern =
        serde_json::from_str(&content).map_err(|e| XrdStackError::ParseError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    // 强度约定为 0-100 的非负相对值
    if let Some(peak) = pattern.peaks.iter().find(|p| p.amplitude < 0.0) {
        return Err(XrdStackError::ParseError {
            path: path.display().to_string(),
            reason: format!(
                "negative amplitude {} at position {}",
                peak.amplitude, peak.position
            ),
        });
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("pattern");
    let (label, sublabel) = split_label(stem);

    Ok(Dataset {
        label,
        sublabel,
        pattern,
    })
}

/// 按 `!` 拆分文件名主干为主标签和副标签
fn split_label(stem: &str) -> (String, Option<String>) {
    match stem.split_once('!') {
        Some((main, sub)) => (main.to_string(), Some(sub.to_string())),
        None => (stem.to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_label_plain() {
        let (label, sublabel) = split_label("anatase");
        assert_eq!(label, "anatase");
        assert!(sublabel.is_none());
    }

    #[test]
    fn test_split_label_with_annotation() {
        let (label, sublabel) = split_label("rutile!simulated Cu-Ka");
        assert_eq!(label, "rutile");
        assert_eq!(sublabel.as_deref(), Some("simulated Cu-Ka"));
    }

    #[test]
    fn test_parse_pattern_file() {
        let dir = std::env::temp_dir().join("xrdstack_parser_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("quartz!measured.json");
        fs::write(
            &path,
            r#"{
                "wavelength": { "element": "Cu", "in_angstroms": 1.5406 },
                "pattern": [[100.0, "(101)", 26.6, 3.34]]
            }"#,
        )
        .unwrap();

        let dataset = parse_pattern_file(&path).unwrap();
        assert_eq!(dataset.label, "quartz");
        assert_eq!(dataset.sublabel.as_deref(), Some("measured"));
        assert_eq!(dataset.pattern.peaks.len(), 1);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_negative_amplitude_rejected() {
        let dir = std::env::temp_dir().join("xrdstack_parser_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs::write(
            &path,
            r#"{
                "wavelength": { "element": "Cu", "in_angstroms": 1.5406 },
                "pattern": [[-5.0, "(101)", 26.6, 3.34]]
            }"#,
        )
        .unwrap();

        let err = parse_pattern_file(&path).unwrap_err();
        assert!(matches!(err, XrdStackError::ParseError { .. }));

        fs::remove_file(&path).ok();
    }
}
