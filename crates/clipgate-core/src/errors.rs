/// Classification-layer errors.
///
/// The matchers themselves are total: every input yields a (possibly empty)
/// classification. Errors cover infrastructure conditions the host
/// application should surface loudly, not per-input failures.
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    #[error("pattern '{name}' unavailable: {reason}")]
    PatternUnavailable { name: &'static str, reason: String },
}

pub type ClipResult<T> = Result<T, ClipError>;
