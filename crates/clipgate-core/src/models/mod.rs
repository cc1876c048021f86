mod detection;
mod pattern_kind;

pub use detection::{Classification, Detection, JwtParts};
pub use pattern_kind::{PatternCategory, PatternKind};
