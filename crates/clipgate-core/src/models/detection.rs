use serde::{Deserialize, Serialize};

use super::{PatternCategory, PatternKind};

/// A single pattern match inside one piece of clipboard text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub kind: PatternKind,
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// The matched substring, owned so results outlive the scanned text.
    pub text: String,
}

/// Everything the matcher found in one piece of text, sorted left to right.
///
/// Produced per query and never stored; the input text is not retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub detections: Vec<Detection>,
}

impl Classification {
    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    pub fn contains(&self, kind: PatternKind) -> bool {
        self.detections.iter().any(|d| d.kind == kind)
    }

    /// True when automatic transmission of the text should be withheld.
    pub fn is_sensitive(&self) -> bool {
        self.detections
            .iter()
            .any(|d| d.kind.category() == PatternCategory::Sensitive)
    }

    /// Matches the security gate acts on.
    pub fn sensitive(&self) -> impl Iterator<Item = &Detection> {
        self.detections
            .iter()
            .filter(|d| d.kind.category() == PatternCategory::Sensitive)
    }

    /// Matches the content transformer can offer an affordance for.
    pub fn transformable(&self) -> impl Iterator<Item = &Detection> {
        self.detections.iter().filter(|d| d.kind.offers_transform())
    }
}

/// The three dot-separated segments of a JWT-shaped token.
///
/// Segments are the raw base64url text; decoding the payload for display
/// is the transformer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtParts {
    pub header: String,
    pub payload: String,
    pub signature: String,
}
