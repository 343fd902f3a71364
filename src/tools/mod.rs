mod diagnostics;
mod shot_loader;

pub use diagnostics::{Diagnostics, Warning, filter_valid};
pub use shot_loader::{load_shots, parse_shots, sample_shots};
