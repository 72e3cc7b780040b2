//! # vigil-match — Fuzzy Matching Policy
//!
//! Name similarity scoring and the confidence thresholds that decide
//! whether a watchlist row counts as a match. Scores are integer
//! percentages in `[0, 100]` derived from normalized Levenshtein edit
//! distance over Unicode scalar values.
//!
//! ## Security Invariant
//!
//! The thresholds are released policy, not tuning knobs: a name score at
//! or above [`HIGH_CONFIDENCE`] combined with an exact date-of-birth
//! match designates the subject; scores in `[LOW_CONFIDENCE,
//! HIGH_CONFIDENCE)` are surfaced for analyst review but never change a
//! screening verdict. Date of birth is compared as an exact canonical
//! string, never fuzzily.
//!
//! Callers are expected to pass canonicalized (uppercase, trimmed) names;
//! this crate does no normalization of its own.

/// Minimum similarity score for a designating match.
pub const HIGH_CONFIDENCE: u8 = 85;

/// Minimum similarity score for the analyst review band.
pub const LOW_CONFIDENCE: u8 = 75;

/// Similarity between two names as an integer percentage.
///
/// `100` means identical, `0` means nothing in common. Defined as
/// `round(100 * (1 - distance / max_char_len))`; two empty strings score
/// `100` and an empty string against a non-empty one scores `0`.
pub fn similarity(a: &str, b: &str) -> u8 {
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Which policy band a similarity score falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// At or above [`HIGH_CONFIDENCE`]: designating if the date of birth
    /// also matches.
    High,
    /// In `[LOW_CONFIDENCE, HIGH_CONFIDENCE)`: logged for analyst review,
    /// never designating.
    Review,
    /// Below [`LOW_CONFIDENCE`]: no action.
    Clear,
}

impl ScoreBand {
    /// Classify a similarity score.
    pub fn classify(score: u8) -> ScoreBand {
        if score >= HIGH_CONFIDENCE {
            ScoreBand::High
        } else if score >= LOW_CONFIDENCE {
            ScoreBand::Review
        } else {
            ScoreBand::Clear
        }
    }
}

/// Whether a scored row designates the subject.
///
/// Both conditions are required: a high-confidence name score and an
/// exact date-of-birth match.
pub fn qualifies(score: u8, birth_date_matches: bool) -> bool {
    score >= HIGH_CONFIDENCE && birth_date_matches
}
