use crate::component::sequence_synthesizer::Shot;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// 編譯時嵌入的範例鏡頭資料（不需要外部檔案）
const SAMPLE_SHOTS_JSON: &str = include_str!("../data/sample_shots.json");

pub fn parse_shots(json: &str) -> Result<Vec<Shot>> {
    serde_json::from_str(json).context("無法解析鏡頭資料")
}

/// 從 JSON 檔案載入鏡頭資料
pub fn load_shots(path: &Path) -> Result<Vec<Shot>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("無法讀取鏡頭資料: {}", path.display()))?;

    let shots = parse_shots(&content).with_context(|| format!("檔案: {}", path.display()))?;
    debug!("載入 {} 個鏡頭: {}", shots.len(), path.display());
    Ok(shots)
}

pub fn sample_shots() -> Result<Vec<Shot>> {
    parse_shots(SAMPLE_SHOTS_JSON).context("無法解析嵌入的範例資料")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_shots() {
        let shots = sample_shots().unwrap();

        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].id, 1);
        assert_eq!(shots[0].videos.len(), 2);
        assert!((shots[1].videos[1].duration - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_shots_with_id_key() {
        let json = r#"[{"id": 4, "duration": 1.5, "videos": [{"id": "a", "path": "a.mp4", "duration": 9.5}]}]"#;
        let shots = parse_shots(json).unwrap();

        assert_eq!(shots[0].id, 4);
        assert!((shots[0].duration - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_shots_invalid() {
        assert!(parse_shots("{}").is_err());
        assert!(parse_shots(r#"[{"lens": 1}]"#).is_err());
    }

    #[test]
    fn test_load_shots_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shots.json");
        fs::write(&path, SAMPLE_SHOTS_JSON).unwrap();

        let shots = load_shots(&path).unwrap();
        assert_eq!(shots.len(), 2);
    }

    #[test]
    fn test_load_shots_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_shots(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
