//! The two canonical verdict strings.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::constants::{VERDICT_HIGH, VERDICT_LOW};

/// Outlook verdict attached to every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "High Chance of Success")]
    High,
    #[serde(rename = "Low Chance of Success")]
    Low,
}

impl Verdict {
    /// Persisted, wire-visible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => VERDICT_HIGH,
            Self::Low => VERDICT_LOW,
        }
    }

    /// Exact match against the canonical strings.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            VERDICT_HIGH => Some(Self::High),
            VERDICT_LOW => Some(Self::Low),
            _ => None,
        }
    }

    /// Presentation color for a single record.
    pub fn color(&self) -> Color {
        Color::for_verdict_text(self.as_str())
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
