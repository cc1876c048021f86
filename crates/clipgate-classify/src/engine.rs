use clipgate_core::constants::DEFAULT_MAX_SCAN_BYTES;
use clipgate_core::errors::{ClipError, ClipResult};
use clipgate_core::traits::IClassifier;
use clipgate_core::Classification;

use crate::patterns;

/// Classification engine that runs every registered pattern over a piece
/// of clipboard text.
///
/// Implements `IClassifier` from clipgate-core. Stateless apart from the
/// scan cap, so one engine can be shared across threads and invoked on
/// every clipboard-change event without coordination.
pub struct ClassifierEngine {
    /// Scan at most this many bytes of input.
    max_scan_bytes: usize,
}

impl ClassifierEngine {
    pub fn new() -> Self {
        Self {
            max_scan_bytes: DEFAULT_MAX_SCAN_BYTES,
        }
    }

    /// Override the scan cap. Oversized input is truncated at a char
    /// boundary before matching, never rejected.
    pub fn with_max_scan_bytes(max_scan_bytes: usize) -> Self {
        Self { max_scan_bytes }
    }

    /// Classify with pattern health reporting. Patterns whose regexes
    /// failed to compile at init simply produce no matches
    /// (`LazyLock<Option<Regex>>` = None); their names are returned so the
    /// host can surface the gap instead of silently under-detecting.
    pub fn classify_with_health(
        &self,
        text: &str,
    ) -> ClipResult<(Classification, Vec<&'static str>)> {
        let failed = pattern_health();
        for name in &failed {
            tracing::warn!(pattern = %name, "classification pattern unavailable");
        }

        let text = clamp_to_char_boundary(text, self.max_scan_bytes);
        let detections = patterns::scan_all(text);

        Ok((Classification { detections }, failed))
    }
}

impl Default for ClassifierEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IClassifier for ClassifierEngine {
    fn classify(&self, text: &str) -> ClipResult<Classification> {
        let (result, _failed) = self.classify_with_health(text)?;
        Ok(result)
    }
}

/// Names of registered patterns whose regexes failed to compile.
pub fn pattern_health() -> Vec<&'static str> {
    let mut failed = Vec::new();
    for pat in patterns::sensitive::all_patterns() {
        if pat.regex.is_none() {
            failed.push(pat.kind.name());
        }
    }
    for pat in patterns::transformable::all_patterns() {
        if pat.regex.is_none() {
            failed.push(pat.kind.name());
        }
    }
    failed
}

/// Fail fast if any pattern regex failed to compile. Intended for host
/// startup, where a missing pattern should be loud rather than a silent
/// detection gap.
pub fn ensure_patterns() -> ClipResult<()> {
    match pattern_health().into_iter().next() {
        Some(name) => Err(ClipError::PatternUnavailable {
            name,
            reason: "regex compilation failed".to_string(),
        }),
        None => Ok(()),
    }
}

/// Cut `text` to at most `max` bytes without splitting a character.
fn clamp_to_char_boundary(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
