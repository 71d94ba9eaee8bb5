//! Property tests for region key normalization.

use geogrant_types::{RegionKey, RegionLevel};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A place name: letters with optional inner spaces, mixed case.
fn arb_segment() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,10}( [A-Za-z]{1,8})?"
}

/// A raw region string with 1 to 3 segments and stray whitespace.
fn arb_raw_region() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_segment(), 1..=3),
        "[ \t]{0,2}",
        "[ \t]{0,2}",
    )
        .prop_map(|(segments, lead, trail)| format!("{}{}{}", lead, segments.join(" - "), trail))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Re-parsing the display form of a key yields the same key.
    #[test]
    fn parse_display_roundtrip_is_idempotent(raw in arb_raw_region()) {
        let key = RegionKey::parse(&raw).unwrap();
        let again = RegionKey::parse(&key.to_string()).unwrap();
        prop_assert_eq!(&again, &key);
        prop_assert_eq!(again.to_string(), key.to_string());
    }

    /// Level follows the number of segments.
    #[test]
    fn level_matches_segment_count(raw in arb_raw_region()) {
        let key = RegionKey::parse(&raw).unwrap();
        prop_assert_eq!(key.segments().len(), key.level().segment_count());
    }

    /// Parsing is insensitive to case.
    #[test]
    fn parse_ignores_case(raw in arb_raw_region()) {
        let lower = RegionKey::parse(&raw.to_lowercase()).unwrap();
        let upper = RegionKey::parse(&raw.to_uppercase()).unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// Four or more segments are always rejected.
    #[test]
    fn too_many_segments_rejected(segments in prop::collection::vec(arb_segment(), 4..7)) {
        prop_assert!(RegionKey::parse(&segments.join("-")).is_err());
    }

    /// Every key lies within its own country.
    #[test]
    fn key_within_its_country(raw in arb_raw_region()) {
        let key = RegionKey::parse(&raw).unwrap();
        let country = RegionKey::parse(key.country_name()).unwrap();
        prop_assert_eq!(country.level(), RegionLevel::Country);
        prop_assert!(key.is_within(&country));
    }
}
