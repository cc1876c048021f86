use crate::errors::ClipResult;
use crate::models::Classification;

/// Clipboard text classification.
pub trait IClassifier: Send + Sync {
    /// Classify text, reporting every pattern match found.
    fn classify(&self, text: &str) -> ClipResult<Classification>;
}
