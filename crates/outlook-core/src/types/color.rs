//! Color tokens consumed by the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::constants::{BAND_LOW_MAX, BAND_MID_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Brown,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Brown => "brown",
        }
    }

    /// Per-record color: `green` iff the verdict text contains "High".
    pub fn for_verdict_text(verdict: &str) -> Self {
        if verdict.contains("High") {
            Self::Green
        } else {
            Self::Red
        }
    }

    /// History band for a final exam score.
    ///
    /// `<= 40` red, `(40, 70]` brown, `> 70` green. NaN falls through to red.
    pub fn band_for_score(score: f64) -> Self {
        if score > BAND_MID_MAX {
            Self::Green
        } else if score > BAND_LOW_MAX {
            Self::Brown
        } else {
            Self::Red
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(Color::band_for_score(40.0), Color::Red);
        assert_eq!(Color::band_for_score(40.01), Color::Brown);
        assert_eq!(Color::band_for_score(70.0), Color::Brown);
        assert_eq!(Color::band_for_score(70.01), Color::Green);
        assert_eq!(Color::band_for_score(0.0), Color::Red);
        assert_eq!(Color::band_for_score(100.0), Color::Green);
    }

    #[test]
    fn verdict_text_rule() {
        assert_eq!(Color::for_verdict_text("High Chance of Success"), Color::Green);
        assert_eq!(Color::for_verdict_text("Low Chance of Success"), Color::Red);
        assert_eq!(Color::for_verdict_text("unknown"), Color::Red);
    }

    proptest! {
        #[test]
        fn band_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
            let rank = |c: Color| match c { Color::Red => 0, Color::Brown => 1, Color::Green => 2 };
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(rank(Color::band_for_score(lo)) <= rank(Color::band_for_score(hi)));
        }
    }
}
