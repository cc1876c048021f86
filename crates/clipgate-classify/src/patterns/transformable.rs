use clipgate_core::PatternKind;
use regex::Regex;
use std::sync::LazyLock;

/// A compiled transformable-content pattern.
pub struct TransformPattern {
    pub kind: PatternKind,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! transform_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── JSON shape ─────────────────────────────────────────────────────────────
// Bracket-delimited text after trimming surrounding whitespace, with a
// non-greedy interior so nested-bracket floods stay linear. Deliberately
// loose: `{not valid json}` passes the shape check, and the pretty-printer
// re-parses before trusting the content, treating failure as "not JSON".
// The `span` group is the trimmed text the transform operates on.
transform_pattern!(RE_JSON, r"(?s)^\s*(?P<span>[\[{].*?[\]}])\s*$");

// ── Hex color ──────────────────────────────────────────────────────────────
// `#` plus exactly 3, 6, or 8 hex digits, with nothing word-like glued
// after the digit run. Longest alternative first.
transform_pattern!(
    RE_HEX_COLOR,
    r"#(?:[0-9a-fA-F]{8}|[0-9a-fA-F]{6}|[0-9a-fA-F]{3})\b"
);

/// All transformable patterns in detection order.
pub fn all_patterns() -> Vec<TransformPattern> {
    vec![
        TransformPattern {
            kind: PatternKind::Json,
            regex: &RE_JSON,
        },
        TransformPattern {
            kind: PatternKind::HexColor,
            regex: &RE_HEX_COLOR,
        },
    ]
}

/// True when the whole text, modulo surrounding whitespace, is
/// bracket-delimited like a JSON document. Shape check only: callers must
/// still attempt a real parse before treating the content as JSON.
pub fn matches_json(text: &str) -> bool {
    RE_JSON.as_ref().is_some_and(|re| re.is_match(text))
}

/// True when the text contains a hex color token.
pub fn matches_hex_color(text: &str) -> bool {
    RE_HEX_COLOR.as_ref().is_some_and(|re| re.is_match(text))
}

/// Every hex color in the text, non-overlapping, left to right.
pub fn extract_hex_colors(text: &str) -> Vec<String> {
    let Some(re) = RE_HEX_COLOR.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
