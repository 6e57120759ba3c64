//! Irish initial-mutation relation builders.
//!
//! Eclipsis, lenition, and h-/t-/n- prothesis all rewrite a word-initial
//! segment and leave the rest untouched, so each is a start-anchored rule
//! table wrapped as a [`Relation`]. The tables are data; the builders only
//! assemble them. A word whose first letter triggers no rule passes through
//! unchanged.

use cainte_relation::{Relation, Rewrite};

use crate::alphabet;

/// Eclipsis of upper-case initials: `Banana` → `mBanana`.
const UPPER_ECLIPSIS: &[(&str, &str)] = &[
    ("B", "mB"),
    ("C", "gC"),
    ("D", "nD"),
    ("F", "bhF"),
    ("G", "nG"),
    ("P", "bP"),
    ("T", "dT"),
    ("A", "nA"),
    ("E", "nE"),
    ("I", "nI"),
    ("O", "nO"),
    ("U", "nU"),
    ("Á", "nÁ"),
    ("É", "nÉ"),
    ("Í", "nÍ"),
    ("Ó", "nÓ"),
    ("Ú", "nÚ"),
];

/// Eclipsis of lower-case initials; vowel markers take a hyphen.
const LOWER_ECLIPSIS: &[(&str, &str)] = &[
    ("b", "mb"),
    ("c", "gc"),
    ("d", "nd"),
    ("f", "bhf"),
    ("g", "ng"),
    ("p", "bp"),
    ("t", "dt"),
    ("a", "n-a"),
    ("e", "n-e"),
    ("i", "n-i"),
    ("o", "n-o"),
    ("u", "n-u"),
    ("á", "n-á"),
    ("é", "n-é"),
    ("í", "n-í"),
    ("ó", "n-ó"),
    ("ú", "n-ú"),
];

const LENITION: &[(&str, &str)] = &[
    ("b", "bh"),
    ("c", "ch"),
    ("d", "dh"),
    ("f", "fh"),
    ("g", "gh"),
    ("m", "mh"),
    ("p", "ph"),
    ("s", "sh"),
    ("t", "th"),
];

const LENITION_NO_F_NO_S: &[(&str, &str)] = &[
    ("b", "bh"),
    ("c", "ch"),
    ("d", "dh"),
    ("g", "gh"),
    ("m", "mh"),
    ("p", "ph"),
    ("t", "th"),
];

/// Clusters that lenition must not leave behind after a historical `s`.
const S_CLUSTER_FIXES: &[(&str, &str)] = &[
    ("shc", "sc"),
    ("shf", "sf"),
    ("shm", "sm"),
    ("shp", "sp"),
    ("sht", "st"),
];

/// Capitalized mutation prefixes and their hyphenated lower-case spelling.
const LOWERCASE_STARTS: &[(&str, &str)] = &[
    ("nA", "n-a"),
    ("nE", "n-e"),
    ("nI", "n-i"),
    ("nO", "n-o"),
    ("nU", "n-u"),
    ("nÁ", "n-á"),
    ("nÉ", "n-é"),
    ("nÍ", "n-í"),
    ("nÓ", "n-ó"),
    ("nÚ", "n-ú"),
    ("tA", "t-a"),
    ("tE", "t-e"),
    ("tI", "t-i"),
    ("tO", "t-o"),
    ("tU", "t-u"),
    ("tÁ", "t-á"),
    ("tÉ", "t-é"),
    ("tÍ", "t-í"),
    ("tÓ", "t-ó"),
    ("tÚ", "t-ú"),
];

fn table(pairs: &[(&str, &str)]) -> Rewrite {
    Rewrite::replacements(pairs.iter().copied())
}

/// Eclipsis of upper-case initial letters.
pub fn upper_eclipsis() -> Relation {
    Relation::from_rewrite(table(UPPER_ECLIPSIS))
}

/// Eclipsis of lower-case initial letters.
pub fn lower_eclipsis() -> Relation {
    Relation::from_rewrite(table(LOWER_ECLIPSIS))
}

/// Eclipsis of either case.
///
/// The upper and lower letter inventories are disjoint, so the union is an
/// ordered merge of the two rule tables and at most one rule can fire.
///
/// # Example
///
/// ```
/// use cainte::mutation::eclipsis;
///
/// let ecl = eclipsis();
/// assert_eq!(ecl.apply("bád"), Some("mbád".to_string()));
/// assert_eq!(ecl.apply("Arán"), Some("nArán".to_string()));
/// ```
pub fn eclipsis() -> Relation {
    Relation::from_rewrite(table(UPPER_ECLIPSIS).extend(table(LOWER_ECLIPSIS)))
}

/// Lenition: `h` after a lenitable initial consonant, with the cleanup pass
/// that repairs clusters produced after a historical `s`.
pub fn lenition() -> Relation {
    Relation::from_rewrite(table(LENITION))
        .compose(Relation::from_rewrite(table(S_CLUSTER_FIXES)))
}

/// Lenition variant for contexts where `f` and `s` do not lenite.
pub fn lenition_no_f_no_s() -> Relation {
    Relation::from_rewrite(table(LENITION_NO_F_NO_S))
}

/// Prothetic `h` before a word-initial vowel of either case.
pub fn prefix_h() -> Relation {
    Relation::from_rewrite(Rewrite::insertion("h", alphabet::vowels()))
}

/// Prothetic `n`: bare before an upper-case vowel, hyphenated before a
/// lower-case one. At most one of the two passes fires.
pub fn prefix_n() -> Relation {
    Relation::from_rewrite(Rewrite::insertion("n", alphabet::UPPER_VOWELS))
        .compose(Relation::from_rewrite(Rewrite::insertion(
            "n-",
            alphabet::LOWER_VOWELS,
        )))
}

/// Prothetic `t`: bare before an upper-case vowel, hyphenated before a
/// lower-case one.
pub fn prefix_t() -> Relation {
    Relation::from_rewrite(Rewrite::insertion("t", alphabet::UPPER_VOWELS))
        .compose(Relation::from_rewrite(Rewrite::insertion(
            "t-",
            alphabet::LOWER_VOWELS,
        )))
}

/// Lower-casing over the Irish alphabet.
///
/// A capitalized mutation prefix (`nA…`, `tÁ…`) is first rewritten to its
/// hyphenated lower-case spelling, so the marker de-capitalizes consistently
/// with the mutation that produced it; the generic per-letter closure then
/// lowers the remainder. Strings containing characters outside the closure
/// alphabet (letters, apostrophe, hyphen) have no accepting path.
pub fn to_lower() -> Relation {
    let starts = Relation::from_rewrite(table(LOWERCASE_STARTS));
    let letter = Relation::union(vec![
        Relation::string_map(alphabet::lower_pairs()),
        Relation::class(alphabet::lower_base()),
        Relation::accept("'"),
        Relation::accept("-"),
    ]);
    starts.compose(letter.closure())
}
