//! # Built-in Designation Lists
//!
//! The watchlist set shipped with the engine for standalone operation:
//! a condensed OFAC SDN excerpt plus EU and UN designation samples.
//! Deployments with a live list feed replace these via
//! [`WatchlistStore::reload`](crate::store::WatchlistStore::reload).

use vigil_core::EntityRecord;

use crate::list::Watchlist;

/// Identifier of the built-in OFAC SDN excerpt.
pub const OFAC_SDN: &str = "ofac_sdn";

/// Identifier of the built-in EU designation sample.
pub const EU_SANCTIONS: &str = "eu_sanctions";

/// Identifier of the built-in UN Security Council sample.
pub const UN_SECURITY: &str = "un_security";

/// The built-in watchlists, in load order.
pub fn builtin_watchlists() -> Vec<Watchlist> {
    let ofac = Watchlist::new(
        OFAC_SDN,
        vec![
            EntityRecord::new("VLADIMIR PUTIN", "1952-10-07", "UKRAINE-EO13662"),
            EntityRecord::new("KIM JONG UN", "1984-01-08", "DPRK"),
            EntityRecord::new("ALI KHAMENEI", "1939-04-19", "IRAN"),
            EntityRecord::new("BASHAR AL-ASSAD", "1965-09-11", "SYRIA"),
            EntityRecord::new("DRUG CARTEL LEADER", "1975-01-01", "NARCOTICS"),
            EntityRecord::new("TERRORIST OPERATIVE", "1980-01-01", "SDGT"),
        ],
    );
    let eu = Watchlist::new(
        EU_SANCTIONS,
        vec![
            EntityRecord::new("MONEY LAUNDERER", "1970-01-01", "AML"),
            EntityRecord::new("SANCTIONS EVADER", "1985-01-01", "EVASION"),
            EntityRecord::new("CORRUPT OFFICIAL", "1965-01-01", "CORRUPTION"),
        ],
    );
    let un = Watchlist::new(
        UN_SECURITY,
        vec![
            EntityRecord::new("WAR CRIMINAL", "1960-01-01", "ATROCITIES"),
            EntityRecord::new("ARMS DEALER", "1955-01-01", "PROLIFERATION"),
        ],
    );
    // Static data validated by the tests below.
    vec![
        ofac.expect("built-in OFAC excerpt is valid"),
        eu.expect("built-in EU sample is valid"),
        un.expect("built-in UN sample is valid"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lists_load_in_declared_order() {
        let lists = builtin_watchlists();
        let ids: Vec<&str> = lists.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec![OFAC_SDN, EU_SANCTIONS, UN_SECURITY]);
    }

    #[test]
    fn test_builtin_entry_counts() {
        let lists = builtin_watchlists();
        let counts: Vec<usize> = lists.iter().map(Watchlist::len).collect();
        assert_eq!(counts, vec![6, 3, 2]);
        assert_eq!(counts.iter().sum::<usize>(), 11);
    }

    #[test]
    fn test_builtin_entries_are_canonical() {
        for list in builtin_watchlists() {
            for entry in list.entries() {
                assert_eq!(entry.name, entry.name.to_uppercase());
                assert_eq!(entry.source_list_id, list.id().as_str());
                assert!(!entry.program_tag.is_empty());
            }
        }
    }

    #[test]
    fn test_builtin_contains_known_designations() {
        let lists = builtin_watchlists();
        let ofac = &lists[0];
        assert!(ofac
            .entries()
            .iter()
            .any(|e| e.name == "VLADIMIR PUTIN" && e.date_of_birth == "1952-10-07"));
        let un = &lists[2];
        assert!(un
            .entries()
            .iter()
            .any(|e| e.name == "ARMS DEALER" && e.program_tag == "PROLIFERATION"));
    }
}
