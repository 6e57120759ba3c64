//! Polish ordinal-adjective paradigm derivation.
//!
//! A base adjective's ending selects one derivation rule from an explicit
//! ordered table; the rule yields a stem, an optional feminine stem
//! variant, a linking vowel, and the two literal nominative forms, and a
//! fixed template fills the remaining inflected forms. Longer overlapping
//! suffixes are declared before shorter ones (`sty` before `ty`), so
//! declaration order can never silently select the wrong paradigm. An
//! ending matching no rule is an error, never a default guess.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

/// Errors raised while deriving an adjective paradigm.
#[derive(Debug, Error)]
pub enum ParadigmError {
    /// The base word's ending matches no registered pattern.
    #[error("no paradigm ending pattern matches '{word}'")]
    UnsupportedEnding { word: String },

    /// A derived form came out empty; the paradigm would be unusable.
    #[error("derived form '{label}' is empty for '{word}'")]
    EmptyForm { word: String, label: &'static str },
}

/// The full inflection table derived from one base adjective.
///
/// Every field is populated on success; derivation fails rather than leave
/// a form empty or missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjectiveParadigm {
    /// Masculine singular nominative (usually the base word itself).
    pub mi_sg_nom: String,
    /// Masculine singular genitive.
    pub mi_sg_gen: String,
    /// Masculine singular dative.
    pub mi_sg_dat: String,
    /// Masculine singular instrumental.
    pub mi_sg_ins: String,
    /// Neuter singular nominative.
    pub nt_sg_nom: String,
    /// Feminine singular nominative.
    pub f_sg_nom: String,
    /// Feminine singular genitive.
    pub f_sg_gen: String,
    /// Feminine singular instrumental.
    pub f_sg_ins: String,
    /// Masculine-personal plural nominative.
    pub mp_pl_nom: String,
    /// Plural instrumental.
    pub pl_ins: String,
    /// Plural locative.
    pub pl_loc: String,
    /// Combining form used in compound adjectives.
    pub compound: String,
}

impl AdjectiveParadigm {
    /// All forms as (label, form) pairs, in declaration order.
    pub fn forms(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("mi_sg_nom", self.mi_sg_nom.as_str()),
            ("mi_sg_gen", self.mi_sg_gen.as_str()),
            ("mi_sg_dat", self.mi_sg_dat.as_str()),
            ("mi_sg_ins", self.mi_sg_ins.as_str()),
            ("nt_sg_nom", self.nt_sg_nom.as_str()),
            ("f_sg_nom", self.f_sg_nom.as_str()),
            ("f_sg_gen", self.f_sg_gen.as_str()),
            ("f_sg_ins", self.f_sg_ins.as_str()),
            ("mp_pl_nom", self.mp_pl_nom.as_str()),
            ("pl_ins", self.pl_ins.as_str()),
            ("pl_loc", self.pl_loc.as_str()),
            ("compound", self.compound.as_str()),
        ]
    }

    /// Look up one form by its label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.forms()
            .into_iter()
            .find(|(name, _)| *name == label)
            .map(|(_, form)| form)
    }
}

/// The stems and literal forms one ending rule extracts from a base word.
struct StemParts {
    stem: String,
    /// Feminine stem variant; `None` means the main stem is reused.
    fem_stem: Option<String>,
    mi_sg_nom: String,
    mp_pl_nom: String,
    /// Linking vowel for instrumental/locative endings.
    vowel: &'static str,
}

/// One row of the dispatch table: ending patterns and their derivation.
struct EndingRule {
    endings: &'static [&'static str],
    derive: fn(&str) -> StemParts,
}

/// Ordered dispatch table. Order is load-bearing: `sty` precedes `ty` so
/// words carrying the longer suffix never fall into the shorter paradigm.
static ENDING_RULES: &[EndingRule] = &[
    EndingRule {
        endings: &["en"],
        derive: rule_en,
    },
    EndingRule {
        endings: &["ni", "ci"],
        derive: rule_soft,
    },
    EndingRule {
        endings: &["szy"],
        derive: rule_szy,
    },
    EndingRule {
        endings: &["sty"],
        derive: rule_sty,
    },
    EndingRule {
        endings: &["gi"],
        derive: rule_gi,
    },
    EndingRule {
        endings: &["ty"],
        derive: rule_ty,
    },
];

fn rule_en(word: &str) -> StemParts {
    let stem = format!("{}n", strip_graphemes(word, 2));
    StemParts {
        mp_pl_nom: format!("{stem}i"),
        stem,
        fem_stem: None,
        mi_sg_nom: word.to_string(),
        vowel: "y",
    }
}

fn rule_soft(word: &str) -> StemParts {
    StemParts {
        stem: word.to_string(),
        fem_stem: None,
        mi_sg_nom: word.to_string(),
        mp_pl_nom: word.to_string(),
        vowel: "",
    }
}

fn rule_szy(word: &str) -> StemParts {
    StemParts {
        stem: strip_graphemes(word, 1).to_string(),
        fem_stem: None,
        mi_sg_nom: word.to_string(),
        mp_pl_nom: format!("{}i", strip_graphemes(word, 2)),
        vowel: "y",
    }
}

fn rule_sty(word: &str) -> StemParts {
    StemParts {
        stem: strip_graphemes(word, 1).to_string(),
        fem_stem: None,
        mi_sg_nom: word.to_string(),
        mp_pl_nom: format!("{}ści", strip_graphemes(word, 3)),
        vowel: "y",
    }
}

fn rule_gi(word: &str) -> StemParts {
    StemParts {
        stem: word.to_string(),
        fem_stem: Some(strip_graphemes(word, 1).to_string()),
        mi_sg_nom: word.to_string(),
        mp_pl_nom: format!("{}dzy", strip_graphemes(word, 2)),
        vowel: "",
    }
}

fn rule_ty(word: &str) -> StemParts {
    StemParts {
        stem: strip_graphemes(word, 1).to_string(),
        fem_stem: None,
        mi_sg_nom: word.to_string(),
        mp_pl_nom: format!("{}ci", strip_graphemes(word, 2)),
        vowel: "y",
    }
}

/// Derive the full inflection table for a base adjective.
///
/// # Example
///
/// ```
/// use cainte::paradigm::derive_paradigm;
///
/// let drugi = derive_paradigm("drugi").unwrap();
/// assert_eq!(drugi.mi_sg_gen, "drugiego");
/// assert_eq!(drugi.f_sg_nom, "druga");
/// assert_eq!(drugi.mp_pl_nom, "drudzy");
///
/// assert!(derive_paradigm("dom").is_err());
/// ```
pub fn derive_paradigm(word: &str) -> Result<AdjectiveParadigm, ParadigmError> {
    let rule = ENDING_RULES
        .iter()
        .find(|rule| rule.endings.iter().any(|ending| word.ends_with(ending)))
        .ok_or_else(|| ParadigmError::UnsupportedEnding {
            word: word.to_string(),
        })?;
    let paradigm = fill_template((rule.derive)(word));
    ensure_populated(word, &paradigm)?;
    Ok(paradigm)
}

/// Fill the fixed form template from extracted stems.
fn fill_template(parts: StemParts) -> AdjectiveParadigm {
    let StemParts {
        stem,
        fem_stem,
        mi_sg_nom,
        mp_pl_nom,
        vowel,
    } = parts;
    let fem = fem_stem.unwrap_or_else(|| stem.clone());
    AdjectiveParadigm {
        mi_sg_nom,
        mi_sg_gen: format!("{stem}ego"),
        mi_sg_dat: format!("{stem}emu"),
        mi_sg_ins: format!("{stem}{vowel}m"),
        nt_sg_nom: format!("{stem}e"),
        f_sg_nom: format!("{fem}a"),
        f_sg_gen: format!("{stem}ej"),
        f_sg_ins: format!("{fem}ą"),
        mp_pl_nom,
        pl_ins: format!("{stem}{vowel}mi"),
        pl_loc: format!("{stem}{vowel}ch"),
        compound: format!("{fem}o"),
    }
}

fn ensure_populated(word: &str, paradigm: &AdjectiveParadigm) -> Result<(), ParadigmError> {
    for (label, form) in paradigm.forms() {
        if form.is_empty() {
            return Err(ParadigmError::EmptyForm {
                word: word.to_string(),
                label,
            });
        }
    }
    Ok(())
}

/// Drop the last `count` grapheme clusters from `word`.
fn strip_graphemes(word: &str, count: usize) -> &str {
    let mut clusters = word.grapheme_indices(true);
    for _ in 0..count {
        if clusters.next_back().is_none() {
            return "";
        }
    }
    match clusters.next_back() {
        Some((offset, cluster)) => &word[..offset + cluster.len()],
        None => "",
    }
}
