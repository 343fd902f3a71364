//! 鏡頭、影片、片段與序列的資料結構

use serde::{Deserialize, Serialize};

/// 來源影片
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub path: String,
    /// 影片時長（秒）
    pub duration: f64,
}

/// 鏡頭：輸出序列中的一個位置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    #[serde(alias = "lens")]
    pub id: u32,
    /// 此鏡頭的片段長度（秒）
    pub duration: f64,
    pub videos: Vec<Video>,
}

/// 半開區間 `[start, end)`，單位為秒
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// 從某支影片擷取、屬於某個鏡頭的片段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub shot_id: u32,
    pub video_id: String,
    pub path: String,
    /// 來源影片時長（秒）
    pub duration: f64,
    pub window: TimeWindow,
    pub output_name: String,
}

impl Segment {
    #[must_use]
    pub fn new(shot: &Shot, video: &Video, window: TimeWindow) -> Self {
        Self {
            shot_id: shot.id,
            video_id: video.id.clone(),
            path: video.path.clone(),
            duration: video.duration,
            window,
            output_name: output_name(shot.id, &video.id),
        }
    }

    /// 片段結束時間是否落在來源影片範圍內
    #[must_use]
    pub fn is_within_bounds(&self) -> bool {
        self.window.end <= self.duration
    }
}

/// 輸出檔名：`lens_{shotId}_video_{videoId}.mp4`
#[must_use]
pub fn output_name(shot_id: u32, video_id: &str) -> String {
    format!("lens_{shot_id}_video_{video_id}.mp4")
}

/// 微序列：每個鏡頭恰好一個片段，依鏡頭順序排列
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence {
    pub segments: Vec<Segment>,
}

impl Sequence {
    #[must_use]
    pub const fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// 第一個超出影片範圍的片段
    #[must_use]
    pub fn first_out_of_bounds(&self) -> Option<&Segment> {
        self.segments.iter().find(|s| !s.is_within_bounds())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_out_of_bounds().is_none()
    }
}

impl From<Vec<Segment>> for Sequence {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shot() -> Shot {
        Shot {
            id: 3,
            duration: 2.0,
            videos: vec![Video {
                id: "video_9".to_string(),
                path: "video_9.mp4".to_string(),
                duration: 4.0,
            }],
        }
    }

    #[test]
    fn test_output_name() {
        assert_eq!(output_name(1, "video_2"), "lens_1_video_video_2.mp4");
    }

    #[test]
    fn test_shot_accepts_lens_key() {
        let json = r#"{"lens": 7, "duration": 2, "videos": []}"#;
        let shot: Shot = serde_json::from_str(json).unwrap();
        assert_eq!(shot.id, 7);
        assert!(shot.videos.is_empty());
    }

    #[test]
    fn test_segment_serializes_camel_case() {
        let shot = make_shot();
        let segment = Segment::new(&shot, &shot.videos[0], TimeWindow::new(0.0, 2.0));
        let value = serde_json::to_value(&segment).unwrap();

        assert_eq!(value["shotId"], 3);
        assert_eq!(value["videoId"], "video_9");
        assert_eq!(value["window"]["start"], 0.0);
        assert_eq!(value["window"]["end"], 2.0);
        assert_eq!(value["outputName"], "lens_3_video_video_9.mp4");
    }

    #[test]
    fn test_sequence_serializes_as_array() {
        let shot = make_shot();
        let segment = Segment::new(&shot, &shot.videos[0], TimeWindow::new(2.0, 4.0));
        let sequence = Sequence::new(vec![segment]);
        let value = serde_json::to_value(&sequence).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_sequence_validity() {
        let shot = make_shot();
        let inside = Segment::new(&shot, &shot.videos[0], TimeWindow::new(2.0, 4.0));
        let outside = Segment::new(&shot, &shot.videos[0], TimeWindow::new(3.0, 5.0));

        assert!(Sequence::new(vec![inside.clone()]).is_valid());
        let bad = Sequence::new(vec![inside, outside]);
        assert!(!bad.is_valid());
        assert!((bad.first_out_of_bounds().unwrap().window.end - 5.0).abs() < f64::EPSILON);
    }
}
