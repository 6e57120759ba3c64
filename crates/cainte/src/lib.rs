//! Spoken-form text normalization primitives.
//!
//! `cainte` converts written tokens into canonical, spoken-style
//! representations for speech pipelines: Irish initial mutations (eclipsis,
//! lenition, prothesis) and case normalization, Roman-to-Arabic numeral
//! conversion, measure tagging (numeral + unit spans into flat tagged
//! output), and Polish ordinal-adjective paradigm derivation.
//!
//! All relations are built once, eagerly, and are immutable and freely
//! shareable afterwards; applying one to unsupported text yields an empty
//! result rather than an error, so callers can fall back to another tagger
//! or leave the span untouched.
//!
//! # Example
//!
//! ```
//! use cainte::mutation::eclipsis;
//! use cainte::roman::{RomanConverter, RomanTables};
//!
//! let ecl = eclipsis();
//! assert_eq!(ecl.apply("Banana"), Some("mBanana".to_string()));
//!
//! let roman = RomanConverter::new(&RomanTables::bundled());
//! assert_eq!(roman.convert("IV"), Some("4".to_string()));
//! ```

pub mod alphabet;
pub mod measure;
pub mod mutation;
pub mod paradigm;
pub mod roman;

pub use cainte_relation::{Candidate, Relation, Rewrite, TableError};
pub use measure::{MeasureTagger, NumeralRelations, UnitTable};
pub use paradigm::{AdjectiveParadigm, ParadigmError, derive_paradigm};
pub use roman::{RomanConverter, RomanTables};
