//! 微序列生成元件
//!
//! 四階段流程：
//! A. 資料有效性檢查
//! B. 依鏡頭長度切片
//! C. 組合序列（窮舉或隨機）
//! D. 序列合法性檢查

mod assembler;
mod main;
mod segmenter;
mod sequence_validator;
mod types;
mod validator;

pub use assembler::{CartesianProduct, ProductIndices, assemble_exhaustive, assemble_random};
pub use main::{SequenceSynthesizer, SynthesisResult, generate_sequences};
pub use segmenter::{
    generate_segments, generate_shot_segments, iter_segments, iter_shot_segments, random_segment,
    segment_count, shot_segment_count,
};
pub use sequence_validator::validate_sequences;
pub use types::{Segment, Sequence, Shot, TimeWindow, Video, output_name};
pub use validator::validate_data;
