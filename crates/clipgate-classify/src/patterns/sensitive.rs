use clipgate_core::{JwtParts, PatternKind};
use regex::Regex;
use std::sync::LazyLock;

/// A compiled sensitive-content pattern.
pub struct SensitivePattern {
    pub kind: PatternKind,
    pub regex: &'static LazyLock<Option<Regex>>,
}

macro_rules! sensitive_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── JWT ────────────────────────────────────────────────────────────────────
// Three dot-separated base64url segments; the first must open with the
// literal `eyJ` (base64url for `{"`). Shape only, never decoded or verified
// here. Capture groups feed `extract_jwt`.
sensitive_pattern!(
    RE_JWT,
    r"\b(eyJ[A-Za-z0-9_-]*)\.([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)"
);

// ── API keys ───────────────────────────────────────────────────────────────
// Known provider secret-key prefixes (Stripe, GitHub) plus fixed-shape AWS
// and Google keys, with any trailing key material glued on.
sensitive_pattern!(
    RE_API_KEY,
    r"\b(?:sk_live_|pk_live_|sk_test_|pk_test_|ghp_|gho_|AKIA[0-9A-Z]{16}|AIza[0-9A-Za-z_-]{35})\w*"
);

// ── Credit card ────────────────────────────────────────────────────────────
// 13–19 digits as 4-4-4-(1..7), bare or with single space/dash separators.
// Shape only, no Luhn: a false positive merely prompts manual confirmation.
sensitive_pattern!(RE_CREDIT_CARD, r"\b\d{4}[ -]?\d{4}[ -]?\d{4}[ -]?\d{1,7}\b");

/// All sensitive patterns in detection order.
pub fn all_patterns() -> Vec<SensitivePattern> {
    vec![
        SensitivePattern {
            kind: PatternKind::Jwt,
            regex: &RE_JWT,
        },
        SensitivePattern {
            kind: PatternKind::ApiKey,
            regex: &RE_API_KEY,
        },
        SensitivePattern {
            kind: PatternKind::CreditCard,
            regex: &RE_CREDIT_CARD,
        },
    ]
}

/// True when the text contains a JWT-shaped token.
pub fn matches_jwt(text: &str) -> bool {
    RE_JWT.as_ref().is_some_and(|re| re.is_match(text))
}

/// Split the first JWT-shaped token in the text into its three segments.
pub fn extract_jwt(text: &str) -> Option<JwtParts> {
    let re = RE_JWT.as_ref()?;
    let caps = re.captures(text)?;
    Some(JwtParts {
        header: caps.get(1)?.as_str().to_string(),
        payload: caps.get(2)?.as_str().to_string(),
        signature: caps.get(3)?.as_str().to_string(),
    })
}

/// True when the text contains a provider-shaped API key.
pub fn matches_api_key(text: &str) -> bool {
    RE_API_KEY.as_ref().is_some_and(|re| re.is_match(text))
}

/// True when the text contains a card-shaped digit run.
pub fn matches_credit_card(text: &str) -> bool {
    RE_CREDIT_CARD.as_ref().is_some_and(|re| re.is_match(text))
}
