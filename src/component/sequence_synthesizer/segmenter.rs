//! 影片切片
//!
//! 以鏡頭的片段長度為步長，從 0 秒開始切出不重疊的時間窗。

use super::types::{Segment, Shot, TimeWindow, Video};
use rand::Rng;

/// 單一影片可切出的片段數量，不實際產生片段
///
/// 第 i 個片段為 `[i * S, i * S + S)`，結束時間不可超過影片時長。
/// 片段長度或影片時長不是有限值時回傳 0。
#[must_use]
pub fn segment_count(video: &Video, shot: &Shot, max_segments: Option<usize>) -> usize {
    let step = shot.duration;
    if !(step.is_finite() && step > 0.0) || !video.duration.is_finite() {
        return 0;
    }

    let fits = |count: usize| count == 0 || window_at(count - 1, step).end <= video.duration;

    let mut count = (video.duration / step).floor().max(0.0) as usize;
    // 以與切片相同的算式修正浮點誤差
    while count > 0 && !fits(count) {
        count -= 1;
    }
    while fits(count + 1) {
        count += 1;
    }

    max_segments.map_or(count, |cap| count.min(cap))
}

fn window_at(index: usize, step: f64) -> TimeWindow {
    let start = index as f64 * step;
    TimeWindow::new(start, start + step)
}

/// 依序產生單一影片的片段
pub fn iter_segments<'a>(
    video: &'a Video,
    shot: &'a Shot,
    max_segments: Option<usize>,
) -> impl Iterator<Item = Segment> + 'a {
    let step = shot.duration;
    (0..segment_count(video, shot, max_segments))
        .map(move |index| Segment::new(shot, video, window_at(index, step)))
}

/// 產生單一影片在指定鏡頭下的所有片段
///
/// `max_segments` 可限制長影片的輸出數量。
#[must_use]
pub fn generate_segments(video: &Video, shot: &Shot, max_segments: Option<usize>) -> Vec<Segment> {
    iter_segments(video, shot, max_segments).collect()
}

/// 鏡頭內所有影片的片段數量總和
#[must_use]
pub fn shot_segment_count(shot: &Shot, max_segments: Option<usize>) -> usize {
    shot.videos.iter().fold(0usize, |total, video| {
        total.saturating_add(segment_count(video, shot, max_segments))
    })
}

/// 依影片順序串接鏡頭內所有片段的迭代器
pub fn iter_shot_segments(
    shot: &Shot,
    max_segments: Option<usize>,
) -> impl Iterator<Item = Segment> + '_ {
    shot.videos
        .iter()
        .flat_map(move |video| iter_segments(video, shot, max_segments))
}

/// 鏡頭內所有影片的片段，依影片順序串接
#[must_use]
pub fn generate_shot_segments(shot: &Shot, max_segments: Option<usize>) -> Vec<Segment> {
    iter_shot_segments(shot, max_segments).collect()
}

/// 隨機選取一支影片與起點，產生一個片段
///
/// 鏡頭沒有影片，或選中的影片時長不是有限值時回傳 `None`。
///
/// 起點在 `[0, D - S)` 間均勻分布；`D - S <= 0` 時起點為 0。
/// 影片比鏡頭長度短時，片段會超出影片範圍，交由序列檢查排除。
pub fn random_segment<R: Rng + ?Sized>(shot: &Shot, rng: &mut R) -> Option<Segment> {
    if shot.videos.is_empty() {
        return None;
    }

    let video = &shot.videos[rng.gen_range(0..shot.videos.len())];
    if !video.duration.is_finite() {
        return None;
    }
    let slack = video.duration - shot.duration;
    let start = if slack > 0.0 {
        rng.gen_range(0.0..slack)
    } else {
        0.0
    };

    Some(Segment::new(
        shot,
        video,
        TimeWindow::new(start, start + shot.duration),
    ))
}
