//! # Identity Types and Canonical Normalization
//!
//! Validated newtypes for the fields that feed screening and commitment
//! computation, plus the canonicalization step that turns raw caller
//! input ([`IdentityQuery`]) into a [`CanonicalIdentity`].
//!
//! ## Security Invariant
//!
//! Commitments are only deterministic if every party canonicalizes
//! identically. Canonical form is: trimmed, uppercased full name (Unicode
//! uppercasing), strict zero-padded `YYYY-MM-DD` birth date, and trimmed
//! optional salt fields with empty strings collapsed to absent. The `:`
//! character is reserved as the commitment preimage delimiter and is
//! rejected in names outright rather than escaped.
//!
//! Construction of [`CanonicalName`], [`BirthDate`], and [`ListId`] goes
//! through validating constructors; there is no way to hold a
//! non-canonical value of these types.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Validated newtypes
// ---------------------------------------------------------------------------

/// A trimmed, uppercased personal or entity name.
///
/// Rejects empty input and input containing `:`, which is reserved as the
/// field delimiter inside commitment preimages.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalName(String);

impl CanonicalName {
    /// Validate and canonicalize a raw name.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyFullName);
        }
        if trimmed.contains(':') {
            return Err(ValidationError::ReservedDelimiter(trimmed.to_string()));
        }
        Ok(CanonicalName(trimmed.to_uppercase()))
    }

    /// The canonical (uppercase) name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A strictly formatted `YYYY-MM-DD` date of birth.
///
/// Dates are compared as exact strings throughout the stack, so the
/// constructor rejects anything that does not re-render to the input:
/// non-calendar dates, missing zero padding, and two-digit years all fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BirthDate(String);

impl BirthDate {
    /// Validate a raw date-of-birth string.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let parsed = chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
            ValidationError::InvalidBirthDate {
                value: trimmed.to_string(),
                reason: "not a calendar date".to_string(),
            }
        })?;
        // chrono accepts non-padded components; exact re-rendering does not.
        let canonical = parsed.format("%Y-%m-%d").to_string();
        if canonical != trimmed {
            return Err(ValidationError::InvalidBirthDate {
                value: trimmed.to_string(),
                reason: "must be zero-padded YYYY-MM-DD".to_string(),
            });
        }
        Ok(BirthDate(canonical))
    }

    /// The canonical `YYYY-MM-DD` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a watchlist, e.g. `ofac_sdn`.
///
/// Trimmed and non-empty; case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(String);

impl ListId {
    /// Validate a raw list identifier.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyListId);
        }
        Ok(ListId(trimmed.to_string()))
    }

    /// The identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ListId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ListId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ListId::new(&s).map_err(D::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Watchlist records
// ---------------------------------------------------------------------------

/// A single designated party on a watchlist.
///
/// Raw rows deserialized from list files carry whatever casing and
/// spacing the source used and an empty `source_list_id`; calling
/// [`EntityRecord::canonicalize`] produces the validated form that the
/// matcher and commitment computation operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Listed name. Canonically uppercase after validation.
    pub name: String,
    /// Date of birth in `YYYY-MM-DD` form.
    pub date_of_birth: String,
    /// Sanctions program tag, e.g. `UKRAINE-EO13662`.
    #[serde(default)]
    pub program_tag: String,
    /// Identifier of the watchlist this record came from. Stamped during
    /// canonicalization; empty in raw file rows.
    #[serde(default)]
    pub source_list_id: String,
}

impl EntityRecord {
    /// Build a raw (not yet canonicalized) record.
    pub fn new(
        name: impl Into<String>,
        date_of_birth: impl Into<String>,
        program_tag: impl Into<String>,
    ) -> Self {
        EntityRecord {
            name: name.into(),
            date_of_birth: date_of_birth.into(),
            program_tag: program_tag.into(),
            source_list_id: String::new(),
        }
    }

    /// Validate this record and stamp its source list.
    ///
    /// The returned record has an uppercase trimmed name, a validated
    /// date of birth, a trimmed program tag, and `source_list_id` set to
    /// `source`.
    pub fn canonicalize(&self, source: &ListId) -> Result<EntityRecord, ValidationError> {
        let name = CanonicalName::new(&self.name)?;
        let date_of_birth = BirthDate::new(&self.date_of_birth)?;
        Ok(EntityRecord {
            name: name.into_string(),
            date_of_birth: date_of_birth.into_string(),
            program_tag: self.program_tag.trim().to_string(),
            source_list_id: source.as_str().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Subject identities
// ---------------------------------------------------------------------------

/// Raw screening input for one subject, as supplied by the caller.
///
/// `address`, `wallet_reference`, and `bank_reference` never influence
/// match decisions; they only salt the subject commitment so that
/// distinct account holders with identical names produce distinct
/// commitments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityQuery {
    /// Full name, in any casing or spacing.
    pub full_name: String,
    /// Date of birth, expected as `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Optional address commitment salt.
    pub address: Option<String>,
    /// Optional wallet reference commitment salt.
    pub wallet_reference: Option<String>,
    /// Optional bank reference commitment salt.
    pub bank_reference: Option<String>,
}

impl IdentityQuery {
    /// Build a query from the two mandatory fields.
    pub fn new(full_name: impl Into<String>, date_of_birth: impl Into<String>) -> Self {
        IdentityQuery {
            full_name: full_name.into(),
            date_of_birth: date_of_birth.into(),
            address: None,
            wallet_reference: None,
            bank_reference: None,
        }
    }

    /// Attach an address salt.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Attach a wallet reference salt.
    pub fn with_wallet_reference(mut self, wallet: impl Into<String>) -> Self {
        self.wallet_reference = Some(wallet.into());
        self
    }

    /// Attach a bank reference salt.
    pub fn with_bank_reference(mut self, bank: impl Into<String>) -> Self {
        self.bank_reference = Some(bank.into());
        self
    }

    /// Validate and normalize into a [`CanonicalIdentity`].
    ///
    /// # Errors
    ///
    /// Fails if the name is empty or contains `:`, or if the date of
    /// birth is not a strict `YYYY-MM-DD` calendar date.
    pub fn canonicalize(&self) -> Result<CanonicalIdentity, ValidationError> {
        Ok(CanonicalIdentity {
            name: CanonicalName::new(&self.full_name)?,
            birth_date: BirthDate::new(&self.date_of_birth)?,
            address: clean_salt(self.address.as_deref()),
            wallet_reference: clean_salt(self.wallet_reference.as_deref()),
            bank_reference: clean_salt(self.bank_reference.as_deref()),
        })
    }
}

/// Trim an optional salt field, collapsing empty values to `None`.
fn clean_salt(raw: Option<&str>) -> Option<String> {
    match raw {
        Some(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}

/// A validated, normalized subject identity.
///
/// Only obtainable through [`IdentityQuery::canonicalize`], so holding
/// one guarantees the canonical-form invariants documented on the field
/// types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalIdentity {
    name: CanonicalName,
    birth_date: BirthDate,
    address: Option<String>,
    wallet_reference: Option<String>,
    bank_reference: Option<String>,
}

impl CanonicalIdentity {
    /// The canonical full name.
    pub fn name(&self) -> &CanonicalName {
        &self.name
    }

    /// The validated birth date.
    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    /// The trimmed address salt, if any.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// The trimmed wallet reference salt, if any.
    pub fn wallet_reference(&self) -> Option<&str> {
        self.wallet_reference.as_deref()
    }

    /// The trimmed bank reference salt, if any.
    pub fn bank_reference(&self) -> Option<&str> {
        self.bank_reference.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ---- CanonicalName ----

    #[test]
    fn test_name_uppercases_and_trims() {
        let name = CanonicalName::new("  Alice Smith ").unwrap();
        assert_eq!(name.as_str(), "ALICE SMITH");
    }

    #[test]
    fn test_name_preserves_interior_whitespace() {
        let name = CanonicalName::new("alice  smith").unwrap();
        assert_eq!(name.as_str(), "ALICE  SMITH");
    }

    #[test]
    fn test_name_rejects_empty_and_whitespace() {
        assert_eq!(
            CanonicalName::new("").unwrap_err(),
            ValidationError::EmptyFullName
        );
        assert_eq!(
            CanonicalName::new("   ").unwrap_err(),
            ValidationError::EmptyFullName
        );
    }

    #[test]
    fn test_name_rejects_reserved_delimiter() {
        let err = CanonicalName::new("evil:name").unwrap_err();
        assert_eq!(err, ValidationError::ReservedDelimiter("evil:name".to_string()));
    }

    #[test]
    fn test_name_unicode_uppercasing() {
        let name = CanonicalName::new("José Álvarez").unwrap();
        assert_eq!(name.as_str(), "JOSÉ ÁLVAREZ");
    }

    #[test]
    fn test_name_display() {
        let name = CanonicalName::new("bob").unwrap();
        assert_eq!(format!("{name}"), "BOB");
    }

    // ---- BirthDate ----

    #[test]
    fn test_birth_date_accepts_valid() {
        let date = BirthDate::new("1990-01-01").unwrap();
        assert_eq!(date.as_str(), "1990-01-01");
    }

    #[test]
    fn test_birth_date_trims_surrounding_whitespace() {
        let date = BirthDate::new(" 1952-10-07 ").unwrap();
        assert_eq!(date.as_str(), "1952-10-07");
    }

    #[test]
    fn test_birth_date_rejects_non_calendar_dates() {
        assert!(BirthDate::new("1990-13-01").is_err());
        assert!(BirthDate::new("1990-02-30").is_err());
        assert!(BirthDate::new("not-a-date").is_err());
        assert!(BirthDate::new("").is_err());
    }

    #[test]
    fn test_birth_date_rejects_unpadded_components() {
        // chrono parses these; strict canonical form does not.
        let err = BirthDate::new("1990-1-1").unwrap_err();
        match err {
            ValidationError::InvalidBirthDate { value, reason } => {
                assert_eq!(value, "1990-1-1");
                assert!(reason.contains("zero-padded"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_birth_date_rejects_two_digit_year() {
        assert!(BirthDate::new("90-01-01").is_err());
    }

    #[test]
    fn test_birth_date_rejects_datetime_suffix() {
        assert!(BirthDate::new("1990-01-01T00:00:00").is_err());
    }

    #[test]
    fn test_leap_day_is_valid() {
        assert!(BirthDate::new("2000-02-29").is_ok());
        assert!(BirthDate::new("1900-02-29").is_err());
    }

    // ---- ListId ----

    #[test]
    fn test_list_id_trims_and_preserves_case() {
        let id = ListId::new("  ofac_sdn ").unwrap();
        assert_eq!(id.as_str(), "ofac_sdn");
    }

    #[test]
    fn test_list_id_rejects_empty() {
        assert_eq!(ListId::new("").unwrap_err(), ValidationError::EmptyListId);
        assert_eq!(ListId::new("  ").unwrap_err(), ValidationError::EmptyListId);
    }

    #[test]
    fn test_list_id_serde_round_trip() {
        let id = ListId::new("eu_sanctions").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"eu_sanctions\"");
        let back: ListId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_list_id_deserialize_rejects_empty() {
        let result: Result<ListId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    // ---- EntityRecord ----

    #[test]
    fn test_record_canonicalize_normalizes_and_stamps_source() {
        let raw = EntityRecord::new("  vladimir putin ", "1952-10-07", " UKRAINE-EO13662 ");
        let source = ListId::new("ofac_sdn").unwrap();
        let canonical = raw.canonicalize(&source).unwrap();
        assert_eq!(canonical.name, "VLADIMIR PUTIN");
        assert_eq!(canonical.date_of_birth, "1952-10-07");
        assert_eq!(canonical.program_tag, "UKRAINE-EO13662");
        assert_eq!(canonical.source_list_id, "ofac_sdn");
    }

    #[test]
    fn test_record_canonicalize_rejects_bad_fields() {
        let source = ListId::new("test").unwrap();
        assert!(EntityRecord::new("", "1990-01-01", "X")
            .canonicalize(&source)
            .is_err());
        assert!(EntityRecord::new("NAME", "1990-1-1", "X")
            .canonicalize(&source)
            .is_err());
    }

    #[test]
    fn test_record_deserializes_with_defaulted_fields() {
        let json = r#"{"name": "ARMS DEALER", "date_of_birth": "1955-01-01"}"#;
        let record: EntityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "ARMS DEALER");
        assert_eq!(record.program_tag, "");
        assert_eq!(record.source_list_id, "");
    }

    // ---- IdentityQuery / CanonicalIdentity ----

    #[test]
    fn test_query_canonicalize_happy_path() {
        let identity = IdentityQuery::new("alice smith", "1990-01-01")
            .with_address("42 Main St")
            .canonicalize()
            .unwrap();
        assert_eq!(identity.name().as_str(), "ALICE SMITH");
        assert_eq!(identity.birth_date().as_str(), "1990-01-01");
        assert_eq!(identity.address(), Some("42 Main St"));
        assert_eq!(identity.wallet_reference(), None);
        assert_eq!(identity.bank_reference(), None);
    }

    #[test]
    fn test_query_equivalent_inputs_canonicalize_identically() {
        let a = IdentityQuery::new("Alice Smith", "1990-01-01")
            .canonicalize()
            .unwrap();
        let b = IdentityQuery::new("  aLiCe sMiTh  ", "1990-01-01")
            .canonicalize()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_query_empty_salt_collapses_to_none() {
        let identity = IdentityQuery::new("bob", "1980-05-05")
            .with_address("   ")
            .with_wallet_reference("")
            .canonicalize()
            .unwrap();
        assert_eq!(identity.address(), None);
        assert_eq!(identity.wallet_reference(), None);
    }

    #[test]
    fn test_query_salt_is_trimmed_but_case_preserved() {
        let identity = IdentityQuery::new("bob", "1980-05-05")
            .with_wallet_reference(" 0xAbCd ")
            .canonicalize()
            .unwrap();
        assert_eq!(identity.wallet_reference(), Some("0xAbCd"));
    }

    #[test]
    fn test_query_propagates_name_and_date_errors() {
        assert!(IdentityQuery::new("", "1990-01-01").canonicalize().is_err());
        assert!(IdentityQuery::new("ok", "bad").canonicalize().is_err());
    }

    proptest! {
        #[test]
        fn prop_name_canonicalization_is_idempotent(raw in "[A-Za-z][A-Za-z ]{0,40}") {
            if let Ok(once) = CanonicalName::new(&raw) {
                let twice = CanonicalName::new(once.as_str()).unwrap();
                prop_assert_eq!(once, twice);
            }
        }

        #[test]
        fn prop_valid_dates_round_trip(y in 1900u32..2100, m in 1u32..=12, d in 1u32..=28) {
            let s = format!("{y:04}-{m:02}-{d:02}");
            let date = BirthDate::new(&s).unwrap();
            prop_assert_eq!(date.as_str(), s.as_str());
        }
    }
}
