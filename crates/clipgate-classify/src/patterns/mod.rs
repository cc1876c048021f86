pub mod sensitive;
pub mod transformable;

use clipgate_core::{Detection, PatternKind};
use regex::Regex;
use std::sync::LazyLock;

/// Run every registered pattern against the input, returning detections
/// sorted by start position (ascending, left to right).
pub fn scan_all(text: &str) -> Vec<Detection> {
    let mut detections = Vec::new();

    for pat in sensitive::all_patterns() {
        collect_matches(text, pat.regex, pat.kind, &mut detections);
    }
    for pat in transformable::all_patterns() {
        collect_matches(text, pat.regex, pat.kind, &mut detections);
    }

    detections.sort_by_key(|d| (d.start, d.end));
    detections
}

fn collect_matches(
    text: &str,
    regex: &LazyLock<Option<Regex>>,
    kind: PatternKind,
    out: &mut Vec<Detection>,
) {
    let Some(re) = regex.as_ref() else { return };
    for caps in re.captures_iter(text) {
        // Patterns that wrap their reportable span in a named `span` group
        // (the JSON rule, which strips surrounding whitespace) report that
        // group; everything else reports the whole match.
        let Some(m) = caps.name("span").or_else(|| caps.get(0)) else {
            continue;
        };
        out.push(Detection {
            kind,
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        });
    }
}
