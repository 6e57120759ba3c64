//! The Irish character inventory shared by the mutation builders.
//!
//! The alphabet covers ASCII letters, the five acute-accented ("fada")
//! vowels, and the nine dot-above ("ponc") consonants of traditional
//! orthography, in both cases. The lower-casing pair table is derived with
//! locale-aware Unicode case mapping rather than hand-written crosses.

use icu_casemap::CaseMapper;
use icu_locale_core::langid;

/// Upper-case vowels, plain and fada.
pub const UPPER_VOWELS: [char; 10] = ['A', 'E', 'I', 'O', 'U', 'Á', 'É', 'Í', 'Ó', 'Ú'];

/// Lower-case vowels, plain and fada.
pub const LOWER_VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'á', 'é', 'í', 'ó', 'ú'];

const UPPER_PONC: [char; 9] = ['Ḃ', 'Ċ', 'Ḋ', 'Ḟ', 'Ġ', 'Ṁ', 'Ṗ', 'Ṡ', 'Ṫ'];
const LOWER_PONC: [char; 9] = ['ḃ', 'ċ', 'ḋ', 'ḟ', 'ġ', 'ṁ', 'ṗ', 'ṡ', 'ṫ'];

/// Vowels of either case.
pub fn vowels() -> impl Iterator<Item = char> {
    UPPER_VOWELS.into_iter().chain(LOWER_VOWELS)
}

/// ASCII letters of either case.
pub fn ascii_letters() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('a'..='z')
}

/// Upper-case base letters: ASCII plus fada vowels.
pub fn upper_base() -> impl Iterator<Item = char> {
    ('A'..='Z').chain(['Á', 'É', 'Í', 'Ó', 'Ú'])
}

/// Lower-case base letters: ASCII plus fada vowels.
pub fn lower_base() -> impl Iterator<Item = char> {
    ('a'..='z').chain(['á', 'é', 'í', 'ó', 'ú'])
}

/// All upper-case letters: base plus ponc consonants.
pub fn upper_all() -> impl Iterator<Item = char> {
    upper_base().chain(UPPER_PONC)
}

/// All lower-case letters: base plus ponc consonants.
pub fn lower_all() -> impl Iterator<Item = char> {
    lower_base().chain(LOWER_PONC)
}

/// Upper→lower pairs over the full alphabet, in base/fada/ponc order.
///
/// Case mapping is delegated to ICU under the `ga` language identifier, so
/// fada and ponc letters fold the same way the rest of the pipeline expects.
pub fn lower_pairs() -> Vec<(String, String)> {
    let mapper = CaseMapper::new();
    let ga = langid!("ga");
    upper_all()
        .map(|upper| {
            let source = upper.to_string();
            let lowered = mapper.lowercase_to_string(&source, &ga).into_owned();
            (source, lowered)
        })
        .collect()
}
