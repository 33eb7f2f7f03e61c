//! Custom serde helpers for feed wire formats.
//!
//! The quote feed is assembled from whichever upstream answered, so the same key
//! can arrive as a pre-formatted string (`"47.16K"`) or as a raw number
//! (`47160`). These helpers normalize both shapes into display text.
//!
//! Every helper here is lenient: a value of the wrong shape decodes as `None`
//! so one bad optional field never sinks the rest of the payload.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] serde::de::IgnoredAny),
}

/// Volume-like fields: raw numbers are abbreviated with K/M suffixes.
pub mod volume_text {
    use super::*;
    use crate::shared::fmt::decimal::abbr_volume;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<NumberOrText>::deserialize(deserializer)?.and_then(|v| match v {
                NumberOrText::Number(n) => Some(abbr_volume(n)),
                NumberOrText::Text(s) => Some(s),
                NumberOrText::Other(_) => None,
            }),
        )
    }
}

/// Market-cap fields: raw numbers are rendered as dollars in millions.
pub mod cap_text {
    use super::*;
    use crate::shared::fmt::decimal::dollars_in_millions;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(
            Option::<NumberOrText>::deserialize(deserializer)?.and_then(|v| match v {
                NumberOrText::Number(n) => Some(dollars_in_millions(n)),
                NumberOrText::Text(s) => Some(s),
                NumberOrText::Other(_) => None,
            }),
        )
    }
}

/// Share counts: raw integers, or strings with thousands separators (`"3,849,792"`).
pub mod share_count {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) if n.is_finite() && n >= 0.0 => Some(n.round() as u64),
            Some(NumberOrText::Text(s)) => s.replace(',', "").trim().parse::<u64>().ok(),
            _ => None,
        })
    }
}

/// Optional prices and ratios: numbers, or numeric strings (`"0.26"`, `"1,234.5"`).
pub mod lenient_f64 {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(NumberOrText::Number(n)) => Some(n),
            Some(NumberOrText::Text(s)) => s.replace(',', "").trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(value.filter(|v| v.is_finite()))
    }
}

/// Timestamps: RFC 3339, a bare `YYYY-MM-DD HH:MM:SS` (taken as UTC), or epoch
/// seconds / milliseconds.
pub mod lenient_timestamp {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
    // Anything past this is milliseconds (year 5138 in seconds).
    const MILLIS_THRESHOLD: f64 = 1e11;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
            Some(NumberOrText::Text(s)) => parse_text(s.trim()),
            Some(NumberOrText::Number(n)) if n.is_finite() => {
                if n.abs() >= MILLIS_THRESHOLD {
                    DateTime::from_timestamp_millis(n as i64)
                } else {
                    DateTime::from_timestamp(n as i64, 0)
                }
            }
            _ => None,
        })
    }

    fn parse_text(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "super::volume_text::deserialize")]
        volume: Option<String>,
        #[serde(default, deserialize_with = "super::cap_text::deserialize")]
        cap: Option<String>,
        #[serde(default, deserialize_with = "super::share_count::deserialize")]
        shares: Option<u64>,
        #[serde(default, deserialize_with = "super::lenient_f64::deserialize")]
        high: Option<f64>,
        #[serde(default, deserialize_with = "super::lenient_timestamp::deserialize")]
        at: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[test]
    fn test_numbers_are_formatted() {
        let p: Fields =
            serde_json::from_str(r#"{"volume": 47160, "cap": 3849792, "shares": 36594622}"#)
                .unwrap();
        assert_eq!(p.volume.as_deref(), Some("47.16K"));
        assert_eq!(p.cap.as_deref(), Some("$3.8M"));
        assert_eq!(p.shares, Some(36_594_622));
    }

    #[test]
    fn test_strings_pass_through() {
        let p: Fields = serde_json::from_str(
            r#"{"volume": "47.16K", "cap": "3,849,792", "shares": "36,594,622"}"#,
        )
        .unwrap();
        assert_eq!(p.volume.as_deref(), Some("47.16K"));
        assert_eq!(p.cap.as_deref(), Some("3,849,792"));
        assert_eq!(p.shares, Some(36_594_622));
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let p: Fields = serde_json::from_str(r#"{"volume": null}"#).unwrap();
        assert!(p.volume.is_none());
        assert!(p.cap.is_none());
        assert!(p.shares.is_none());
    }

    #[test]
    fn test_bad_share_count_is_none() {
        let p: Fields = serde_json::from_str(r#"{"shares": "N/A"}"#).unwrap();
        assert!(p.shares.is_none());
        let p: Fields = serde_json::from_str(r#"{"shares": -5}"#).unwrap();
        assert!(p.shares.is_none());
    }

    #[test]
    fn test_numeric_strings_parse_as_f64() {
        let p: Fields = serde_json::from_str(r#"{"high": "0.26"}"#).unwrap();
        assert_eq!(p.high, Some(0.26));
        let p: Fields = serde_json::from_str(r#"{"high": 0.26}"#).unwrap();
        assert_eq!(p.high, Some(0.26));
        let p: Fields = serde_json::from_str(r#"{"high": "n/a"}"#).unwrap();
        assert!(p.high.is_none());
    }

    #[test]
    fn test_wrong_shapes_are_none() {
        let p: Fields = serde_json::from_str(
            r#"{"volume": true, "cap": [1, 2], "shares": {}, "high": false, "at": []}"#,
        )
        .unwrap();
        assert!(p.volume.is_none());
        assert!(p.cap.is_none());
        assert!(p.shares.is_none());
        assert!(p.high.is_none());
        assert!(p.at.is_none());
    }

    #[test]
    fn test_timestamp_shapes() {
        let expected = chrono::DateTime::parse_from_rfc3339("2025-01-15T16:00:00Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        for json in [
            r#"{"at": "2025-01-15T16:00:00Z"}"#,
            r#"{"at": "2025-01-15T16:00:00.000Z"}"#,
            r#"{"at": "2025-01-15 16:00:00"}"#,
            r#"{"at": 1736956800}"#,
            r#"{"at": 1736956800000}"#,
        ] {
            let p: Fields = serde_json::from_str(json).unwrap();
            assert_eq!(p.at, Some(expected), "{}", json);
        }
        let p: Fields = serde_json::from_str(r#"{"at": "yesterday"}"#).unwrap();
        assert!(p.at.is_none());
    }
}
