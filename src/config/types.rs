use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 最近使用的輸入檔案保留數量
pub const MAX_RECENT_INPUTS: usize = 10;

/// 最短可用影片長度（秒）
pub const DEFAULT_MIN_VIDEO_DURATION: f64 = 2.0;

/// 預設目標序列數量
pub const DEFAULT_TARGET_COUNT: usize = 5;

/// 序列組合模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssemblyMode {
    /// 窮舉所有組合（笛卡爾積）
    #[default]
    Exhaustive,
    /// 隨機抽樣
    Random,
}

impl fmt::Display for AssemblyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "{}", t!("mode.exhaustive")),
            Self::Random => write!(f, "{}", t!("mode.random")),
        }
    }
}

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-TW")]
    TraditionalChinese,
    #[serde(rename = "en-US")]
    English,
}

impl Language {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TraditionalChinese => "zh-TW",
            Self::English => "en-US",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TraditionalChinese => write!(f, "繁體中文"),
            Self::English => write!(f, "English"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    pub min_video_duration: f64,
    /// 允許的影片副檔名（區分大小寫的後綴比對）
    pub allowed_extensions: Vec<String>,
    /// 單一影片最多產生的片段數量，`None` 表示不限制
    pub max_segments_per_video: Option<usize>,
    pub target_count: usize,
    pub mode: AssemblyMode,
    /// 隨機模式的種子，設定後結果可重現
    pub seed: Option<u64>,
    pub language: Language,
    pub recent_inputs: Vec<String>,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            min_video_duration: DEFAULT_MIN_VIDEO_DURATION,
            allowed_extensions: vec![".mp4".to_string()],
            max_segments_per_video: None,
            target_count: DEFAULT_TARGET_COUNT,
            mode: AssemblyMode::default(),
            seed: None,
            language: Language::default(),
            recent_inputs: Vec::new(),
        }
    }
}

impl SynthesisSettings {
    #[must_use]
    pub fn is_allowed_format(&self, path: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|ext| path.ends_with(ext.as_str()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: SynthesisSettings,
}
