use crate::config::types::{MAX_RECENT_INPUTS, SynthesisSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn save_settings(settings: &SynthesisSettings, path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}

/// 更新最近使用的輸入檔案
/// 將新路徑加入最前面，去重並限制數量
pub fn add_recent_input(settings: &mut SynthesisSettings, path: &str) {
    settings.recent_inputs.retain(|p| p != path);
    settings.recent_inputs.insert(0, path.to_string());
    settings.recent_inputs.truncate(MAX_RECENT_INPUTS);
}
