//! 微序列生成主模組
//!
//! 協調資料檢查、切片、組合與序列檢查的整體流程

use super::assembler::{assemble_exhaustive, assemble_random};
use super::sequence_validator::validate_sequences;
use super::types::{Sequence, Shot};
use super::validator::validate_data;
use crate::config::{AssemblyMode, SynthesisSettings};
use crate::tools::{Diagnostics, Warning};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 單次生成的結果
#[derive(Debug, Clone, Default)]
pub struct SynthesisResult {
    pub sequences: Vec<Sequence>,
    pub diagnostics: Diagnostics,
}

/// 微序列生成器
#[derive(Debug, Clone, Default)]
pub struct SequenceSynthesizer {
    settings: SynthesisSettings,
}

impl SequenceSynthesizer {
    #[must_use]
    pub const fn new(settings: SynthesisSettings) -> Self {
        Self { settings }
    }

    /// 執行完整流程
    ///
    /// 1. 過濾無效影片與鏡頭
    /// 2. 依模式組合序列（窮舉取前 `target_count` 個，或隨機產生 `target_count` 個）
    /// 3. 排除超出影片範圍的序列
    pub fn generate<R: Rng + ?Sized>(
        &self,
        shots: &[Shot],
        target_count: usize,
        mode: AssemblyMode,
        rng: &mut R,
    ) -> SynthesisResult {
        let mut diagnostics = Diagnostics::new();

        let valid_shots = validate_data(shots, &self.settings, &mut diagnostics);
        if valid_shots.is_empty() {
            diagnostics.push(Warning::NoValidShots);
            return SynthesisResult {
                sequences: Vec::new(),
                diagnostics,
            };
        }

        let assembled = match mode {
            AssemblyMode::Exhaustive => assemble_exhaustive(
                &valid_shots,
                target_count,
                self.settings.max_segments_per_video,
                &mut diagnostics,
            ),
            AssemblyMode::Random => {
                assemble_random(&valid_shots, target_count, rng, &mut diagnostics)
            }
        };

        let sequences = validate_sequences(assembled, &mut diagnostics);

        info!(
            "生成完成（{mode}）：{} 個序列，{} 個警告",
            sequences.len(),
            diagnostics.len()
        );

        SynthesisResult {
            sequences,
            diagnostics,
        }
    }

    /// 使用固定種子執行，結果可重現
    #[must_use]
    pub fn generate_seeded(
        &self,
        shots: &[Shot],
        target_count: usize,
        mode: AssemblyMode,
        seed: u64,
    ) -> SynthesisResult {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(shots, target_count, mode, &mut rng)
    }

    /// 依設定的種子選擇亂數來源
    #[must_use]
    pub fn generate_with_settings(
        &self,
        shots: &[Shot],
        target_count: usize,
        mode: AssemblyMode,
    ) -> SynthesisResult {
        match self.settings.seed {
            Some(seed) => self.generate_seeded(shots, target_count, mode, seed),
            None => self.generate(shots, target_count, mode, &mut rand::thread_rng()),
        }
    }
}

/// 以預設設定生成微序列
#[must_use]
pub fn generate_sequences(shots: &[Shot], target_count: usize, use_random: bool) -> Vec<Sequence> {
    let mode = if use_random {
        AssemblyMode::Random
    } else {
        AssemblyMode::Exhaustive
    };

    SequenceSynthesizer::default()
        .generate(shots, target_count, mode, &mut rand::thread_rng())
        .sequences
}
