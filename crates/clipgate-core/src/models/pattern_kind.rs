use serde::{Deserialize, Serialize};

/// The closed set of rules the matcher evaluates.
///
/// Fixed at build time: there is no runtime pattern registration, so
/// consumers can match exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Jwt,
    Json,
    HexColor,
    ApiKey,
    CreditCard,
}

/// What a match means to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Withhold the containing text from automatic transmission.
    Sensitive,
    /// Offer a preview/decode/prettify affordance.
    Transformable,
}

impl PatternKind {
    pub const ALL: [PatternKind; 5] = [
        PatternKind::Jwt,
        PatternKind::Json,
        PatternKind::HexColor,
        PatternKind::ApiKey,
        PatternKind::CreditCard,
    ];

    /// Stable identifier used in logs and serialized results.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Jwt => "jwt",
            PatternKind::Json => "json",
            PatternKind::HexColor => "hex_color",
            PatternKind::ApiKey => "api_key",
            PatternKind::CreditCard => "credit_card",
        }
    }

    /// Primary category, driving the security gate.
    pub fn category(self) -> PatternCategory {
        match self {
            PatternKind::Jwt | PatternKind::ApiKey | PatternKind::CreditCard => {
                PatternCategory::Sensitive
            }
            PatternKind::Json | PatternKind::HexColor => PatternCategory::Transformable,
        }
    }

    /// Whether a match of this kind carries a transform affordance.
    ///
    /// JWTs are sensitive (never auto-sent) but still get a decoded-payload
    /// view on demand, so they appear on both sides.
    pub fn offers_transform(self) -> bool {
        matches!(
            self,
            PatternKind::Jwt | PatternKind::Json | PatternKind::HexColor
        )
    }
}
