//! 非致命警告的收集
//!
//! 管線中被排除的資料不會中斷流程，而是記錄為 [`Warning`]，
//! 同時輸出到 log 供觀察。

use log::warn;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// 影片時長小於最短長度，或不是有限值
    VideoTooShort {
        shot_id: u32,
        video_id: String,
        duration: f64,
        min_duration: f64,
    },
    /// 影片副檔名不在允許清單中
    UnsupportedFormat {
        shot_id: u32,
        video_id: String,
        path: String,
    },
    /// 鏡頭的片段長度不是正數
    InvalidShotDuration { shot_id: u32, duration: f64 },
    /// 鏡頭內沒有任何有效影片
    EmptyShot { shot_id: u32 },
    /// 沒有任何有效鏡頭
    NoValidShots,
    /// 鏡頭無法產生任何片段
    NoSegments { shot_id: u32 },
    /// 片段結束時間超過影片時長
    SegmentOutOfBounds {
        output_name: String,
        end: f64,
        duration: f64,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VideoTooShort {
                shot_id,
                video_id,
                duration,
                min_duration,
            } => write!(
                f,
                "鏡頭 {shot_id} 的影片 {video_id} 時長 {duration}s 小於 {min_duration}s，已刪除"
            ),
            Self::UnsupportedFormat {
                shot_id,
                video_id,
                path,
            } => write!(f, "鏡頭 {shot_id} 的影片 {video_id} 檔案不合法（{path}），已刪除"),
            Self::InvalidShotDuration { shot_id, duration } => {
                write!(f, "鏡頭 {shot_id} 的片段長度 {duration} 無效，已刪除")
            }
            Self::EmptyShot { shot_id } => write!(f, "鏡頭 {shot_id} 沒有有效影片，已刪除"),
            Self::NoValidShots => write!(f, "沒有有效的鏡頭資料"),
            Self::NoSegments { shot_id } => write!(f, "鏡頭 {shot_id} 無法產生任何片段"),
            Self::SegmentOutOfBounds {
                output_name,
                end,
                duration,
            } => write!(
                f,
                "片段 {output_name} 的結束時間 {end} 超過影片時長 {duration}，序列已刪除"
            ),
        }
    }
}

/// 單次執行收集到的警告
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            warnings: Vec::new(),
        }
    }

    pub fn push(&mut self, warning: Warning) {
        warn!("警告：{warning}");
        self.warnings.push(warning);
    }

    pub fn extend(&mut self, warnings: impl IntoIterator<Item = Warning>) {
        for warning in warnings {
            self.push(warning);
        }
    }

    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    /// 是否包含符合條件的警告
    pub fn contains(&self, predicate: impl Fn(&Warning) -> bool) -> bool {
        self.warnings.iter().any(predicate)
    }
}

/// 依條件分離有效項目，無效項目由 `check` 回傳原因
///
/// `check` 回傳 `Ok(())` 表示保留，`Err(reason)` 表示排除。
pub fn filter_valid<T, R>(
    items: impl IntoIterator<Item = T>,
    mut check: impl FnMut(&T) -> Result<(), R>,
) -> (Vec<T>, Vec<R>) {
    let mut kept = Vec::new();
    let mut reasons = Vec::new();

    for item in items {
        match check(&item) {
            Ok(()) => kept.push(item),
            Err(reason) => reasons.push(reason),
        }
    }

    (kept, reasons)
}
