//! Process-wide constants.

/// Default upper bound on how many bytes of clipboard text the engine scans.
///
/// Clipboard payloads are normally tiny; the cap bounds worst-case work when
/// something enormous lands on the clipboard. Text past the cap is ignored,
/// never rejected.
pub const DEFAULT_MAX_SCAN_BYTES: usize = 1024 * 1024;
