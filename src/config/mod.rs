pub mod load;
pub mod save;
pub mod types;

pub use types::{
    AssemblyMode, Config, DEFAULT_MIN_VIDEO_DURATION, DEFAULT_TARGET_COUNT, Language,
    MAX_RECENT_INPUTS, SynthesisSettings,
};
