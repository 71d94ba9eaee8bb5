//! Hierarchy-aware region keys
//!
//! A region key names a country, a state within a country, or a city within
//! a state, written most-specific first and joined with hyphens:
//! `CHENNAI-TAMIL NADU-INDIA`, `TAMIL NADU-INDIA`, `INDIA`.
//!
//! Keys are normalized on parse (trimmed, uppercased), so two keys are equal
//! exactly when they name the same place.

use crate::error::{Result, TypesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between region segments
pub const SEGMENT_SEPARATOR: char = '-';

/// Maximum number of segments in a key (city-state-country)
pub const MAX_SEGMENTS: usize = 3;

/// Level of a region in the geography hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RegionLevel {
    Country,
    State,
    City,
}

impl RegionLevel {
    /// Number of segments a key at this level carries
    pub fn segment_count(self) -> usize {
        match self {
            Self::Country => 1,
            Self::State => 2,
            Self::City => 3,
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country => write!(f, "country"),
            Self::State => write!(f, "state"),
            Self::City => write!(f, "city"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Segments {
    Country {
        country: String,
    },
    State {
        state: String,
        country: String,
    },
    City {
        city: String,
        state: String,
        country: String,
    },
}

/// Normalized region identifier
///
/// Keys order by level first: countries, then states, then cities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionKey(Segments);

/// Ancestor keys of a region, derived from its segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionAncestry {
    /// Country keys have no ancestors
    Country,

    /// A state key and the country it belongs to
    State { country: RegionKey },

    /// A city key with its state and country
    City { state: RegionKey, country: RegionKey },
}

impl RegionKey {
    /// Parse and normalize a raw region string
    ///
    /// Whitespace around the whole string and around each segment is
    /// trimmed and every segment is uppercased. Blank input, empty segments
    /// and more than three segments are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(TypesError::malformed(raw, "region must not be empty"));
        }

        let segments: Vec<&str> = normalized.split(SEGMENT_SEPARATOR).map(str::trim).collect();
        if segments.len() > MAX_SEGMENTS {
            return Err(TypesError::malformed(
                raw,
                format!(
                    "expected at most {} segments, found {}",
                    MAX_SEGMENTS,
                    segments.len()
                ),
            ));
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(TypesError::malformed(raw, "region segments must not be empty"));
        }

        let key = match segments.as_slice() {
            [country] => Segments::Country {
                country: country.to_string(),
            },
            [state, country] => Segments::State {
                state: state.to_string(),
                country: country.to_string(),
            },
            [city, state, country] => Segments::City {
                city: city.to_string(),
                state: state.to_string(),
                country: country.to_string(),
            },
            _ => return Err(TypesError::malformed(raw, "unexpected segment count")),
        };

        Ok(Self(key))
    }

    /// Level of this key in the hierarchy
    pub fn level(&self) -> RegionLevel {
        match &self.0 {
            Segments::Country { .. } => RegionLevel::Country,
            Segments::State { .. } => RegionLevel::State,
            Segments::City { .. } => RegionLevel::City,
        }
    }

    /// Country segment
    pub fn country_name(&self) -> &str {
        match &self.0 {
            Segments::Country { country }
            | Segments::State { country, .. }
            | Segments::City { country, .. } => country,
        }
    }

    /// State segment, if the key is at state or city level
    pub fn state_name(&self) -> Option<&str> {
        match &self.0 {
            Segments::Country { .. } => None,
            Segments::State { state, .. } | Segments::City { state, .. } => Some(state.as_str()),
        }
    }

    /// City segment, if the key is at city level
    pub fn city_name(&self) -> Option<&str> {
        match &self.0 {
            Segments::City { city, .. } => Some(city.as_str()),
            _ => None,
        }
    }

    /// Segments, most specific first
    pub fn segments(&self) -> Vec<&str> {
        match &self.0 {
            Segments::Country { country } => vec![country.as_str()],
            Segments::State { state, country } => vec![state.as_str(), country.as_str()],
            Segments::City {
                city,
                state,
                country,
            } => vec![city.as_str(), state.as_str(), country.as_str()],
        }
    }

    /// Ancestor keys of this region
    pub fn ancestry(&self) -> RegionAncestry {
        match &self.0 {
            Segments::Country { .. } => RegionAncestry::Country,
            Segments::State { country, .. } => RegionAncestry::State {
                country: Self::country_key(country),
            },
            Segments::City { state, country, .. } => RegionAncestry::City {
                state: Self(Segments::State {
                    state: state.clone(),
                    country: country.clone(),
                }),
                country: Self::country_key(country),
            },
        }
    }

    /// Whether `self` is `other` or lies within it
    pub fn is_within(&self, other: &RegionKey) -> bool {
        if self == other {
            return true;
        }
        match self.ancestry() {
            RegionAncestry::Country => false,
            RegionAncestry::State { country } => &country == other,
            RegionAncestry::City { state, country } => &state == other || &country == other,
        }
    }

    fn country_key(country: &str) -> Self {
        Self(Segments::Country {
            country: country.to_string(),
        })
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Segments::Country { country } => write!(f, "{}", country),
            Segments::State { state, country } => write!(f, "{}-{}", state, country),
            Segments::City {
                city,
                state,
                country,
            } => write!(f, "{}-{}-{}", city, state, country),
        }
    }
}

impl FromStr for RegionKey {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegionKey {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RegionKey> for String {
    fn from(key: RegionKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> RegionKey {
        RegionKey::parse(raw).unwrap()
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let k = key("  chennai - Tamil Nadu -india ");
        assert_eq!(k.to_string(), "CHENNAI-TAMIL NADU-INDIA");
        assert_eq!(k, key("CHENNAI-TAMIL NADU-INDIA"));
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!(key("India").level(), RegionLevel::Country);
        assert_eq!(key("Karnataka-India").level(), RegionLevel::State);
        assert_eq!(key("Hubli-Karnataka-India").level(), RegionLevel::City);
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(matches!(
            RegionKey::parse("   "),
            Err(TypesError::MalformedRegion { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_too_many_segments() {
        let err = RegionKey::parse("a-b-c-d").unwrap_err();
        assert!(err.to_string().contains("at most 3 segments, found 4"));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        assert!(RegionKey::parse("Chennai--India").is_err());
        assert!(RegionKey::parse("-India").is_err());
        assert!(RegionKey::parse("India-").is_err());
    }

    #[test]
    fn test_segment_accessors() {
        let k = key("Chennai-Tamil Nadu-India");
        assert_eq!(k.country_name(), "INDIA");
        assert_eq!(k.state_name(), Some("TAMIL NADU"));
        assert_eq!(k.city_name(), Some("CHENNAI"));
        assert_eq!(k.segments(), vec!["CHENNAI", "TAMIL NADU", "INDIA"]);

        let c = key("India");
        assert_eq!(c.state_name(), None);
        assert_eq!(c.city_name(), None);
    }

    #[test]
    fn test_ancestry() {
        match key("Chennai-Tamil Nadu-India").ancestry() {
            RegionAncestry::City { state, country } => {
                assert_eq!(state, key("Tamil Nadu-India"));
                assert_eq!(country, key("India"));
            }
            other => panic!("unexpected ancestry: {:?}", other),
        }

        assert_eq!(
            key("Tamil Nadu-India").ancestry(),
            RegionAncestry::State {
                country: key("India")
            }
        );
        assert_eq!(key("India").ancestry(), RegionAncestry::Country);
    }

    #[test]
    fn test_is_within() {
        let city = key("Chennai-Tamil Nadu-India");
        assert!(city.is_within(&key("India")));
        assert!(city.is_within(&key("Tamil Nadu-India")));
        assert!(city.is_within(&city));
        assert!(!city.is_within(&key("Karnataka-India")));
        assert!(!key("India").is_within(&city));
    }

    #[test]
    fn test_serde_as_string() {
        let k = key("Karnataka-India");
        let json = serde_json::to_string(&k).unwrap();
        assert_eq!(json, "\"KARNATAKA-INDIA\"");

        let back: RegionKey = serde_json::from_str("\"karnataka-india\"").unwrap();
        assert_eq!(back, k);

        assert!(serde_json::from_str::<RegionKey>("\"a-b-c-d\"").is_err());
    }
}
