use clipgate_core::traits::IClassifier;
use clipgate_classify::{
    extract_hex_colors, extract_jwt, matches_api_key, matches_credit_card, matches_hex_color,
    matches_json, matches_jwt, ClassifierEngine,
};
use proptest::prelude::*;

// ── JWT shape ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn jwt_shaped_tokens_always_match(
        header in "[A-Za-z0-9_-]{0,30}",
        payload in "[A-Za-z0-9_-]{1,30}",
        signature in "[A-Za-z0-9_-]{1,30}"
    ) {
        let token = format!("eyJ{header}.{payload}.{signature}");
        prop_assert!(matches_jwt(&token));

        let parts = extract_jwt(&token).expect("shaped token must extract");
        prop_assert_eq!(parts.header, format!("eyJ{header}"));
        prop_assert_eq!(parts.payload, payload);
        prop_assert_eq!(parts.signature, signature);
    }

    #[test]
    fn two_segment_tokens_never_match(
        header in "[A-Za-z0-9_-]{0,30}",
        payload in "[A-Za-z0-9_-]{1,30}"
    ) {
        let token = format!("eyJ{header}.{payload}");
        prop_assert!(!matches_jwt(&token));
    }
}

// ── Credit card digit counts ──────────────────────────────────────────────

proptest! {
    #[test]
    fn bare_runs_of_13_to_19_digits_match(digits in "[0-9]{13,19}") {
        prop_assert!(matches_credit_card(&digits));
    }

    #[test]
    fn short_digit_runs_never_match(digits in "[0-9]{1,12}") {
        prop_assert!(!matches_credit_card(&digits));
    }

    #[test]
    fn long_digit_runs_never_match(digits in "[0-9]{20,30}") {
        prop_assert!(!matches_credit_card(&digits));
    }
}

// ── Hex color extraction ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_listed_color_is_extracted(
        colors in proptest::collection::vec("[0-9a-fA-F]{6}", 1..5)
    ) {
        let tokens: Vec<String> = colors.iter().map(|c| format!("#{c}")).collect();
        let text = tokens.join(" and ");
        prop_assert!(matches_hex_color(&text));
        prop_assert_eq!(extract_hex_colors(&text), tokens);
    }
}

// ── Purity over arbitrary input ───────────────────────────────────────────

proptest! {
    #[test]
    fn matchers_are_total_and_deterministic(text in ".{0,200}") {
        // No input may error or panic, and repeated evaluation agrees.
        prop_assert_eq!(matches_jwt(&text), matches_jwt(&text));
        prop_assert_eq!(matches_json(&text), matches_json(&text));
        prop_assert_eq!(matches_hex_color(&text), matches_hex_color(&text));
        prop_assert_eq!(matches_api_key(&text), matches_api_key(&text));
        prop_assert_eq!(matches_credit_card(&text), matches_credit_card(&text));
    }

    #[test]
    fn engine_classification_is_deterministic(text in ".{0,200}") {
        let engine = ClassifierEngine::new();
        let first = engine.classify(&text).unwrap();
        let second = engine.classify(&text).unwrap();
        prop_assert_eq!(first, second);
    }
}
