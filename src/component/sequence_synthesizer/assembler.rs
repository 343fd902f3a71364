//! 序列組合
//!
//! 兩種策略：
//! 1. 窮舉：各鏡頭片段的笛卡爾積，取前 `target_count` 個
//! 2. 隨機：每個序列獨立為每個鏡頭隨機挑選片段

use super::segmenter::{iter_shot_segments, random_segment, shot_segment_count};
use super::types::{Segment, Sequence, Shot};
use crate::tools::{Diagnostics, Warning};
use log::debug;
use rand::Rng;

/// 笛卡爾積的索引迭代器
///
/// 依序列舉每組索引，最後一組變化最快（與巢狀迴圈順序相同）。
/// 任何一組長度為 0 時不產生任何組合；沒有任何組時也不產生組合。
pub struct ProductIndices {
    lengths: Vec<usize>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl ProductIndices {
    #[must_use]
    pub fn new(lengths: Vec<usize>) -> Self {
        let exhausted = lengths.is_empty() || lengths.contains(&0);
        Self {
            indices: vec![0; lengths.len()],
            lengths,
            exhausted,
        }
    }

    /// 組合總數，溢位時回傳 `None`
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        if self.lengths.is_empty() {
            return Some(0);
        }
        self.lengths
            .iter()
            .try_fold(1usize, |acc, &len| acc.checked_mul(len))
    }

    fn advance(&mut self) {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.lengths[position] {
                return;
            }
            self.indices[position] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for ProductIndices {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let item = self.indices.clone();
        self.advance();
        Some(item)
    }
}

/// 笛卡爾積迭代器，從每組各取一個元素
pub struct CartesianProduct<'a, T> {
    pools: &'a [Vec<T>],
    indices: ProductIndices,
}

impl<'a, T> CartesianProduct<'a, T> {
    #[must_use]
    pub fn new(pools: &'a [Vec<T>]) -> Self {
        Self {
            pools,
            indices: ProductIndices::new(pools.iter().map(Vec::len).collect()),
        }
    }

    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.indices.total()
    }
}

impl<T: Clone> Iterator for CartesianProduct<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.indices.next()?;
        Some(
            indices
                .iter()
                .zip(self.pools)
                .map(|(&index, pool)| pool[index].clone())
                .collect(),
        )
    }
}

/// 窮舉組合，最多回傳 `target_count` 個序列
///
/// 組合順序依各鏡頭的完整片段數量決定，但前 `target_count` 個組合中
/// 每個鏡頭的索引都小於 `target_count`，因此每個鏡頭只產生前
/// `target_count` 個片段。
pub fn assemble_exhaustive(
    shots: &[Shot],
    target_count: usize,
    max_segments: Option<usize>,
    diagnostics: &mut Diagnostics,
) -> Vec<Sequence> {
    let lengths: Vec<usize> = shots
        .iter()
        .map(|shot| shot_segment_count(shot, max_segments))
        .collect();

    for (shot, &len) in shots.iter().zip(&lengths) {
        if len == 0 {
            diagnostics.push(Warning::NoSegments { shot_id: shot.id });
        }
    }

    let product = ProductIndices::new(lengths.clone());
    debug!(
        "各鏡頭片段數量 {:?}，組合總數 {:?}，目標 {}",
        lengths,
        product.total(),
        target_count
    );

    let pools: Vec<Vec<Segment>> = shots
        .iter()
        .map(|shot| {
            iter_shot_segments(shot, max_segments)
                .take(target_count)
                .collect()
        })
        .collect();

    product
        .take(target_count)
        .map(|indices| {
            Sequence::new(
                indices
                    .iter()
                    .zip(&pools)
                    .map(|(&index, pool)| pool[index].clone())
                    .collect(),
            )
        })
        .collect()
}

/// 隨機組合，產生恰好 `target_count` 個序列
///
/// 沒有鏡頭，或任一鏡頭無法抽出片段時回傳空。
pub fn assemble_random<R: Rng + ?Sized>(
    shots: &[Shot],
    target_count: usize,
    rng: &mut R,
    diagnostics: &mut Diagnostics,
) -> Vec<Sequence> {
    if shots.is_empty() {
        return Vec::new();
    }

    let mut sequences = Vec::new();
    for _ in 0..target_count {
        let mut segments = Vec::with_capacity(shots.len());
        for shot in shots {
            let Some(segment) = random_segment(shot, rng) else {
                diagnostics.push(Warning::NoSegments { shot_id: shot.id });
                return Vec::new();
            };
            segments.push(segment);
        }
        sequences.push(Sequence::new(segments));
    }

    sequences
}
