use super::types::Sequence;
use crate::tools::{Diagnostics, Warning, filter_valid};
use log::debug;

/// 排除含有超出影片範圍片段（`end > duration`）的序列
pub fn validate_sequences(
    sequences: Vec<Sequence>,
    diagnostics: &mut Diagnostics,
) -> Vec<Sequence> {
    let total = sequences.len();
    let (kept, reasons) = filter_valid(sequences, |sequence: &Sequence| {
        sequence
            .first_out_of_bounds()
            .map_or(Ok(()), |segment| {
                Err(Warning::SegmentOutOfBounds {
                    output_name: segment.output_name.clone(),
                    end: segment.window.end,
                    duration: segment.duration,
                })
            })
    });
    diagnostics.extend(reasons);

    debug!("序列檢查：保留 {}/{}", kept.len(), total);
    kept
}
