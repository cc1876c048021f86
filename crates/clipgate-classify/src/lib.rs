//! # clipgate-classify
//!
//! Content classification for the ClipGate clipboard utility.
//! A fixed set of compiled-once patterns splits clipboard text into
//! sensitive matches (withheld from automatic transmission) and
//! transformable matches (offered a preview, decode, or prettify
//! affordance).
//!
//! ## Patterns
//! - **jwt** — three dot-separated base64url segments opening with `eyJ`
//! - **api_key** — known provider secret-key prefixes and fixed shapes
//! - **credit_card** — 13–19 digit card-shaped runs
//! - **json** — bracket-delimited text; consumers re-parse before trusting
//! - **hex_color** — `#` plus exactly 3, 6, or 8 hex digits
//!
//! Every matcher is a pure function over its input: no text can make one
//! fail, repeated calls agree, and no call touches another call's state.
//! All regexes use non-greedy or fixed-width spans so adversarial input
//! stays linear.

pub mod engine;
pub mod patterns;

pub use engine::{ensure_patterns, pattern_health, ClassifierEngine};
pub use patterns::sensitive::{extract_jwt, matches_api_key, matches_credit_card, matches_jwt};
pub use patterns::transformable::{extract_hex_colors, matches_hex_color, matches_json};
