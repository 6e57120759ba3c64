//! Measure tagging: numeral-plus-unit spans into flat tagged output.
//!
//! The composer combines externally supplied numeral relations (cardinal,
//! decimal, fraction) with a unit vocabulary into one relation that accepts
//! any supported surface pattern and emits the corresponding tagged form,
//! e.g. `"1 oz"` → `cardinal { integer: "aon" } units: "unsa"
//! preserve_order: true`. Text matching no pattern yields no result; the
//! composer never falls back to partial matches.

use std::cmp::Ordering;
use std::path::Path;

use bon::Builder;
use cainte_relation::{Relation, TableError, load_pairs, parse_pairs};

use crate::alphabet;

/// Non-breaking space, the joiner inside multi-word unit names.
const NBSP: char = '\u{a0}';

/// The spoken per-marker separating a unit from its denominator.
const PER_MARKER: &str = "in aghaidh";

/// Minimum similarity for [`UnitTable::suggest`] hits.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// A unit vocabulary mapping surface spellings to canonical unit names.
///
/// Multi-word canonical names are joined with non-breaking spaces when the
/// vocabulary is turned into a relation, so downstream serialization treats
/// them as one field.
#[derive(Debug, Clone)]
pub struct UnitTable {
    pairs: Vec<(String, String)>,
}

impl UnitTable {
    /// The vocabulary bundled with the crate.
    pub fn bundled() -> Self {
        Self {
            pairs: parse_pairs(include_str!("../data/measures/measurements.tsv"))
                .expect("bundled measurements table is well-formed"),
        }
    }

    /// Load a vocabulary from a two-column table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TableError> {
        Ok(Self {
            pairs: load_pairs(path)?,
        })
    }

    /// Parse a vocabulary from two-column table content.
    pub fn from_table(content: &str) -> Result<Self, TableError> {
        Ok(Self {
            pairs: parse_pairs(content)?,
        })
    }

    /// The surface→canonical relation, spaces converted to non-breaking.
    pub fn relation(&self) -> Relation {
        Relation::string_map(self.pairs.iter().map(|(surface, canonical)| {
            (surface.clone(), canonical.replace(' ', &NBSP.to_string()))
        }))
    }

    /// Near-miss surface spellings for an unrecognized token, best first.
    ///
    /// Diagnostics only; tagging itself never guesses.
    pub fn suggest(&self, token: &str) -> Vec<String> {
        let mut scored: Vec<(f64, &str)> = self
            .pairs
            .iter()
            .map(|(surface, _)| (strsim::jaro_winkler(token, surface), surface.as_str()))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        scored
            .into_iter()
            .take(3)
            .map(|(_, surface)| surface.to_string())
            .collect()
    }
}

/// Externally supplied numeral relations and their documented sub-products.
///
/// The measure composer treats these as opaque: `cardinal` is the bare
/// integer relation (no tag wrapper), `decimal` and `fraction` are fully
/// tagged (`decimal { … }`, `fraction { … }`), and `decimal_no_negative` is
/// the decimal field list without wrapper or sign, for contexts where the
/// composer writes the wrapper itself.
#[derive(Debug, Clone, Builder)]
pub struct NumeralRelations {
    pub cardinal: Relation,
    pub decimal: Relation,
    pub decimal_no_negative: Relation,
    pub fraction: Relation,
}

/// The measure-tagging relation.
///
/// # Example
///
/// ```
/// use cainte::measure::{MeasureTagger, NumeralRelations, UnitTable};
/// use cainte::Relation;
///
/// let numerals = NumeralRelations::builder()
///     .cardinal(Relation::string_map([("1", "aon")]))
///     .decimal(Relation::string_map([("1.5", "decimal { integer_part: \"aon\" fractional_part: \"a cúig\" }")]))
///     .decimal_no_negative(Relation::string_map([("1.5", "integer_part: \"aon\" fractional_part: \"a cúig\"")]))
///     .fraction(Relation::string_map([("1/2", "fraction { numerator: \"aon\" denominator: \"a dó\" }")]))
///     .build();
/// let tagger = MeasureTagger::new(&numerals, &UnitTable::bundled());
///
/// assert_eq!(
///     tagger.tag("1 oz"),
///     Some("cardinal { integer: \"aon\" } units: \"unsa\" preserve_order: true".to_string()),
/// );
/// assert_eq!(tagger.tag("1 parsec"), None);
/// ```
#[derive(Debug, Clone)]
pub struct MeasureTagger {
    relation: Relation,
}

impl MeasureTagger {
    /// Assemble the tagging relation from numeral relations and a unit
    /// vocabulary. Build once and share; construction is the expensive part.
    pub fn new(numerals: &NumeralRelations, units: &UnitTable) -> Self {
        let unit_singular = units.relation();

        let optional_negative = Relation::cross("-", "negative: \"true\" ").optional();

        let unit_denominator = Relation::cross("/", PER_MARKER)
            .then(Relation::insert(NBSP.to_string()))
            .then(unit_singular.clone());
        let optional_denominator = Relation::insert(NBSP.to_string())
            .then(unit_denominator.clone())
            .optional();

        let unit_field = Relation::insert("units: \"")
            .then(
                unit_singular
                    .then(optional_denominator)
                    .or(unit_denominator),
            )
            .then(Relation::insert("\""));

        let alpha = Relation::class(alphabet::ascii_letters()).repeat(1, None);
        let times = Relation::accept("x").or(Relation::accept("X"));

        let subgraph_decimal = numerals
            .decimal
            .clone()
            .then(Relation::insert(" "))
            .then(Relation::delete(" ").optional())
            .then(unit_field.clone());

        let subgraph_cardinal = Relation::insert("cardinal { ")
            .then(optional_negative)
            .then(Relation::insert("integer: \""))
            .then(numerals.cardinal.clone())
            .then(delete_space())
            .then(Relation::insert("\""))
            .then(Relation::insert(" } "))
            .then(unit_field.clone());

        let subgraph_fraction = numerals
            .fraction
            .clone()
            .then(Relation::insert(" "))
            .then(Relation::delete(" ").optional())
            .then(unit_field);

        let cardinal_dash_alpha = Relation::insert("cardinal { integer: \"")
            .then(numerals.cardinal.clone())
            .then(Relation::delete("-"))
            .then(Relation::insert("\" } units: \""))
            .then(alpha.clone())
            .then(Relation::insert("\""));

        let alpha_dash_cardinal = Relation::insert("units: \"")
            .then(alpha.clone())
            .then(Relation::delete("-"))
            .then(Relation::insert("\""))
            .then(Relation::insert(" cardinal { integer: \""))
            .then(numerals.cardinal.clone())
            .then(Relation::insert("\" }"));

        let decimal_dash_alpha = Relation::insert("decimal { ")
            .then(numerals.decimal_no_negative.clone())
            .then(Relation::delete("-"))
            .then(Relation::insert(" } units: \""))
            .then(alpha.clone())
            .then(Relation::insert("\""));

        let alpha_dash_decimal = Relation::insert("units: \"")
            .then(alpha)
            .then(Relation::delete("-"))
            .then(Relation::insert("\""))
            .then(Relation::insert(" decimal { "))
            .then(numerals.decimal_no_negative.clone())
            .then(Relation::insert(" }"));

        let decimal_times = Relation::insert("decimal { ")
            .then(numerals.decimal_no_negative.clone())
            .then(Relation::insert(" } units: \""))
            .then(times.clone())
            .then(Relation::insert("\""));

        let cardinal_times = Relation::insert("cardinal { integer: \"")
            .then(numerals.cardinal.clone())
            .then(Relation::insert("\" } units: \""))
            .then(times)
            .then(Relation::insert("\""));

        let relation = Relation::union(vec![
            subgraph_decimal,
            subgraph_cardinal,
            cardinal_dash_alpha,
            alpha_dash_cardinal,
            decimal_dash_alpha,
            decimal_times,
            alpha_dash_decimal,
            subgraph_fraction,
            cardinal_times,
        ])
        .then(Relation::insert(" preserve_order: true"));

        Self { relation }
    }

    /// The assembled tagging relation.
    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    /// Tag one span. Text matching no accepted pattern yields `None`.
    pub fn tag(&self, input: &str) -> Option<String> {
        self.relation.apply(input)
    }
}

/// Delete any run of whitespace, including none.
fn delete_space() -> Relation {
    Relation::union(vec![
        Relation::delete(" "),
        Relation::delete("\t"),
        Relation::delete(NBSP.to_string()),
    ])
    .closure()
}
