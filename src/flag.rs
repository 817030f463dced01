//! Country indicators for ISO 3166-1 alpha-2 codes

use serde::{Deserialize, Serialize};
use std::fmt;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// How country codes are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagStyle {
    /// Regional-indicator pair (🇸🇪); terminals without emoji show two letters
    #[default]
    Emoji,
    /// Bracketed code (`[SE]`)
    Code,
}

impl fmt::Display for FlagStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emoji => f.write_str("emoji"),
            Self::Code => f.write_str("code"),
        }
    }
}

impl std::str::FromStr for FlagStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emoji" => Ok(Self::Emoji),
            "code" => Ok(Self::Code),
            other => Err(format!("Invalid flag style '{other}'. Use 'emoji' or 'code'")),
        }
    }
}

/// Country indicator for a code
///
/// Codes that are not two ASCII letters are always shown bracketed.
#[must_use]
pub fn indicator(code: &str, style: FlagStyle) -> String {
    let code = code.trim().to_ascii_uppercase();
    let is_alpha2 = code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase());

    match style {
        FlagStyle::Emoji if is_alpha2 => code
            .bytes()
            .filter_map(|b| char::from_u32(REGIONAL_INDICATOR_A + u32::from(b - b'A')))
            .collect(),
        _ => format!("[{code}]"),
    }
}
