//! 輸入資料有效性檢查

use super::types::{Shot, Video};
use crate::config::SynthesisSettings;
use crate::tools::{Diagnostics, Warning, filter_valid};
use log::debug;

/// 過濾無效影片與鏡頭
///
/// - 影片時長需 >= `min_video_duration`，且副檔名在允許清單中
/// - 片段長度不是正數的鏡頭整個排除
/// - 沒有剩餘影片的鏡頭排除
///
/// 不修改輸入，回傳過濾後的複本。
pub fn validate_data(
    shots: &[Shot],
    settings: &SynthesisSettings,
    diagnostics: &mut Diagnostics,
) -> Vec<Shot> {
    let mut valid_shots = Vec::with_capacity(shots.len());

    for shot in shots {
        if !(shot.duration.is_finite() && shot.duration > 0.0) {
            diagnostics.push(Warning::InvalidShotDuration {
                shot_id: shot.id,
                duration: shot.duration,
            });
            continue;
        }

        let (videos, reasons) = filter_valid(shot.videos.iter().cloned(), |video| {
            check_video(shot.id, video, settings)
        });
        diagnostics.extend(reasons);

        if videos.is_empty() {
            diagnostics.push(Warning::EmptyShot { shot_id: shot.id });
            continue;
        }

        valid_shots.push(Shot {
            id: shot.id,
            duration: shot.duration,
            videos,
        });
    }

    debug!("有效鏡頭 {}/{}", valid_shots.len(), shots.len());
    valid_shots
}

fn check_video(shot_id: u32, video: &Video, settings: &SynthesisSettings) -> Result<(), Warning> {
    if !video.duration.is_finite() || video.duration < settings.min_video_duration {
        return Err(Warning::VideoTooShort {
            shot_id,
            video_id: video.id.clone(),
            duration: video.duration,
            min_duration: settings.min_video_duration,
        });
    }

    if !settings.is_allowed_format(&video.path) {
        return Err(Warning::UnsupportedFormat {
            shot_id,
            video_id: video.id.clone(),
            path: video.path.clone(),
        });
    }

    Ok(())
}
