//! # Temporal Types
//!
//! A second-precision UTC [`Timestamp`] used everywhere the stack records
//! or compares wall-clock time (verdict timestamps, attestation issuance,
//! credential expiry).
//!
//! ## Design
//!
//! Sub-second precision is truncated at construction so that a timestamp
//! always round-trips byte-for-byte through its serialized form. That
//! stability matters: credential signatures cover serialized bytes that
//! include timestamps.

use chrono::{DateTime, SubsecRound, Utc};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical render format: RFC 3339 at second precision, `Z` suffix.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A UTC timestamp truncated to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current time.
    pub fn now() -> Self {
        Timestamp(Utc::now().trunc_subsecs(0))
    }

    /// Wrap an existing instant, truncating sub-second precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.trunc_subsecs(0))
    }

    /// This timestamp shifted by a (possibly negative) number of days.
    pub fn plus_days(&self, days: i64) -> Self {
        Timestamp(self.0 + chrono::Duration::days(days))
    }

    /// The underlying instant.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render in canonical form, e.g. `2026-08-25T12:00:00Z`.
    pub fn to_canonical_string(&self) -> String {
        self.0.format(CANONICAL_FORMAT).to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp::from_datetime(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let parsed = DateTime::parse_from_rfc3339(&s)
            .map_err(|e| D::Error::custom(format!("invalid timestamp '{s}': {e}")))?;
        Ok(Timestamp::from_datetime(parsed.with_timezone(&Utc)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 8, 25, 12, 30, 45).unwrap())
    }

    #[test]
    fn canonical_string_has_second_precision_and_z_suffix() {
        assert_eq!(fixed().to_canonical_string(), "2026-08-25T12:30:45Z");
    }

    #[test]
    fn display_matches_canonical_string() {
        assert_eq!(format!("{}", fixed()), fixed().to_canonical_string());
    }

    #[test]
    fn construction_truncates_subseconds() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(750);
        let ts = Timestamp::from_datetime(dt);
        assert_eq!(ts.to_canonical_string(), "2026-01-01T00:00:00Z");
    }

    #[test]
    fn serde_round_trip_is_stable() {
        let ts = fixed();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2026-08-25T12:30:45Z\"");
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, back);
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }

    #[test]
    fn deserialize_normalizes_offsets_to_utc() {
        let ts: Timestamp = serde_json::from_str("\"2026-08-25T17:30:45+05:00\"").unwrap();
        assert_eq!(ts, fixed());
    }

    #[test]
    fn deserialize_rejects_garbage() {
        let result: Result<Timestamp, _> = serde_json::from_str("\"yesterday\"");
        assert!(result.is_err());
    }

    #[test]
    fn plus_days_shifts_in_both_directions() {
        let ts = fixed();
        assert_eq!(
            ts.plus_days(30).to_canonical_string(),
            "2026-09-24T12:30:45Z"
        );
        assert_eq!(
            ts.plus_days(-1).to_canonical_string(),
            "2026-08-24T12:30:45Z"
        );
    }

    #[test]
    fn ordering_follows_time() {
        let ts = fixed();
        assert!(ts.plus_days(1) > ts);
        assert!(ts.plus_days(-1) < ts);
    }
}
