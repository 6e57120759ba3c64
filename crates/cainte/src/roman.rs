//! Roman numeral to Arabic digit conversion.
//!
//! The converter is built from four digit-rank tables (units, tens,
//! hundreds, thousands), each mapping Roman letter sequences to a single
//! digit. Ranks compose in strictly descending order; an absent rank is
//! zero-filled by a near-zero-weight insertion so variable-length numerals
//! still yield a fixed-width digit string, while a real match at the rank is
//! always preferred.

use std::path::Path;

use cainte_relation::{Relation, TableError, load_pairs, parse_pairs};

/// Weight of a zero-fill insertion; any real rank match outweighs it.
const ZERO_FILL_WEIGHT: f64 = 0.01;

/// The four digit-rank tables of the Roman numeral grammar.
#[derive(Debug, Clone)]
pub struct RomanTables {
    units: Vec<(String, String)>,
    tens: Vec<(String, String)>,
    hundreds: Vec<(String, String)>,
    thousands: Vec<(String, String)>,
}

impl RomanTables {
    /// The tables bundled with the crate (values one through one thousand).
    pub fn bundled() -> Self {
        Self {
            units: parse_pairs(include_str!("../data/roman/digit.tsv"))
                .expect("bundled roman digit table is well-formed"),
            tens: parse_pairs(include_str!("../data/roman/ties.tsv"))
                .expect("bundled roman ties table is well-formed"),
            hundreds: parse_pairs(include_str!("../data/roman/hundreds.tsv"))
                .expect("bundled roman hundreds table is well-formed"),
            thousands: parse_pairs(include_str!("../data/roman/thousands.tsv"))
                .expect("bundled roman thousands table is well-formed"),
        }
    }

    /// Load `digit.tsv`, `ties.tsv`, `hundreds.tsv`, and `thousands.tsv`
    /// from a directory. Malformed tables abort construction.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TableError> {
        let dir = dir.as_ref();
        Ok(Self {
            units: load_pairs(dir.join("digit.tsv"))?,
            tens: load_pairs(dir.join("ties.tsv"))?,
            hundreds: load_pairs(dir.join("hundreds.tsv"))?,
            thousands: load_pairs(dir.join("thousands.tsv"))?,
        })
    }
}

/// A relation converting Roman numerals (either letter case) into Arabic
/// digit strings, for magnitudes one through one thousand.
///
/// # Example
///
/// ```
/// use cainte::roman::{RomanConverter, RomanTables};
///
/// let converter = RomanConverter::new(&RomanTables::bundled());
/// assert_eq!(converter.convert("XLII"), Some("42".to_string()));
/// assert_eq!(converter.convert("MCMXCIX"), Some("1999".to_string()));
/// assert_eq!(converter.convert("IIX"), None);
/// ```
#[derive(Debug, Clone)]
pub struct RomanConverter {
    relation: Relation,
}

impl RomanConverter {
    /// Build the descending-rank grammar from `tables`.
    pub fn new(tables: &RomanTables) -> Self {
        let units = rank_relation(&tables.units);
        let tens = rank_relation(&tables.tens);
        let hundreds = rank_relation(&tables.hundreds);
        let thousands = rank_relation(&tables.thousands);
        let zero = || Relation::insert("0").with_weight(ZERO_FILL_WEIGHT);

        let relation = Relation::union(vec![
            units.clone(),
            tens.clone().then(units.clone().or(zero())),
            hundreds
                .clone()
                .then(tens.clone().or(zero()))
                .then(units.clone().or(zero())),
            thousands
                .then(hundreds.or(zero()))
                .then(tens.or(zero()))
                .then(units.or(zero())),
        ]);
        Self { relation }
    }

    /// The bare Roman→digit relation.
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// The converter composed onto `next`, so Roman input feeds whatever
    /// relation expects Arabic digit strings.
    pub fn compose(&self, next: Relation) -> Relation {
        self.relation.clone().compose(next)
    }

    /// Convert one Roman numeral. Input outside the grammar (malformed
    /// sequences, values above one thousand) yields `None`.
    pub fn convert(&self, input: &str) -> Option<String> {
        self.relation.apply(input)
    }
}

/// One rank's table as a relation, duplicated to accept both letter cases.
fn rank_relation(pairs: &[(String, String)]) -> Relation {
    let cased = pairs
        .iter()
        .map(|(token, digit)| (token.clone(), digit.clone()))
        .chain(
            pairs
                .iter()
                .map(|(token, digit)| (token.to_uppercase(), digit.clone())),
        );
    Relation::string_map(cased)
}
