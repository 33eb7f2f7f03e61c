//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the feeds send, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

pub use fmt::{format_signed_tick, format_tick, Delta, SENTINEL};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Symbol ──────────────────────────────────────────────────────────────────

/// Newtype for the listed symbol (e.g. `"TSX-V: TUO"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self(crate::network::DEFAULT_SYMBOL.to_string())
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Symbol(s.to_string()))
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol(s))
    }
}

// ─── Polarity ────────────────────────────────────────────────────────────────

/// Direction of a non-zero price move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Up,
    Down,
}

impl Polarity {
    /// `None` for zero and non-finite values.
    pub fn of(value: f64) -> Option<Self> {
        if !value.is_finite() || value == 0.0 {
            None
        } else if value > 0.0 {
            Some(Polarity::Up)
        } else {
            Some(Polarity::Down)
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Polarity::Up => write!(f, "up"),
            Polarity::Down => write!(f, "down"),
        }
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Chart period selected on the presentation surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[serde(rename = "1D")]
    Day1,
    #[serde(rename = "1W")]
    Week1,
    #[serde(rename = "1M")]
    Month1,
    #[serde(rename = "3M")]
    Month3,
    #[serde(rename = "1Y")]
    Year1,
    #[serde(rename = "ALL")]
    All,
}

impl Period {
    /// Every period in selector order.
    pub const ALL: [Period; 6] = [
        Period::Day1,
        Period::Week1,
        Period::Month1,
        Period::Month3,
        Period::Year1,
        Period::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1D",
            Self::Week1 => "1W",
            Self::Month1 => "1M",
            Self::Month3 => "3M",
            Self::Year1 => "1Y",
            Self::All => "ALL",
        }
    }

    /// Whether a synthetic path exists for this period.
    ///
    /// Long-range periods show a "no data" placeholder instead of fabricated history.
    pub fn has_synthetic_path(&self) -> bool {
        matches!(self, Self::Day1 | Self::Week1)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown period: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_serde() {
        let sym = Symbol::from("TSX-V: TUO");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"TSX-V: TUO\"");
        let back: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(sym, back);
    }

    #[test]
    fn test_period_serde() {
        let p: Period = serde_json::from_str("\"1W\"").unwrap();
        assert_eq!(p, Period::Week1);
        assert_eq!(serde_json::to_string(&Period::All).unwrap(), "\"ALL\"");
    }

    #[test]
    fn test_period_from_str() {
        assert_eq!("1d".parse::<Period>().unwrap(), Period::Day1);
        assert_eq!("ALL".parse::<Period>().unwrap(), Period::All);
        assert!("5D".parse::<Period>().is_err());
    }

    #[test]
    fn test_only_short_periods_have_paths() {
        let with_path: Vec<_> = Period::ALL
            .into_iter()
            .filter(Period::has_synthetic_path)
            .collect();
        assert_eq!(with_path, [Period::Day1, Period::Week1]);
    }

    #[test]
    fn test_polarity_of() {
        assert_eq!(Polarity::of(0.01), Some(Polarity::Up));
        assert_eq!(Polarity::of(-0.5), Some(Polarity::Down));
        assert_eq!(Polarity::of(0.0), None);
        assert_eq!(Polarity::of(-0.0), None);
        assert_eq!(Polarity::of(f64::NAN), None);
    }
}
