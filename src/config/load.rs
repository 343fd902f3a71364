use crate::config::types::{Config, SynthesisSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let settings = Self::load_from(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("設定檔無法使用，改用預設值: {e:#}");
            SynthesisSettings::default()
        });

        Ok(Self { settings })
    }

    /// 從指定路徑載入設定，檔案不存在時回傳預設值
    pub fn load_from(path: &Path) -> Result<SynthesisSettings> {
        if !path.exists() {
            return Ok(SynthesisSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AssemblyMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let settings = Config::load_from(&dir.path().join("missing.json")).unwrap();
        assert_eq!(settings.target_count, 5);
        assert_eq!(settings.mode, AssemblyMode::Exhaustive);
    }

    #[test]
    fn test_load_invalid_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse settings"));
    }
}
