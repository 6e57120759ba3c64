//! Tests for the Polish ordinal-adjective paradigm generator.

use cainte::paradigm::{ParadigmError, derive_paradigm};

// === Full tables per ending pattern ===

#[test]
fn en_pattern_full_table() {
    let p = derive_paradigm("jeden").unwrap();
    assert_eq!(p.mi_sg_nom, "jeden");
    assert_eq!(p.mi_sg_gen, "jednego");
    assert_eq!(p.mi_sg_dat, "jednemu");
    assert_eq!(p.mi_sg_ins, "jednym");
    assert_eq!(p.nt_sg_nom, "jedne");
    assert_eq!(p.f_sg_nom, "jedna");
    assert_eq!(p.f_sg_gen, "jednej");
    assert_eq!(p.f_sg_ins, "jedną");
    assert_eq!(p.mp_pl_nom, "jedni");
    assert_eq!(p.pl_ins, "jednymi");
    assert_eq!(p.pl_loc, "jednych");
    assert_eq!(p.compound, "jedno");
}

#[test]
fn soft_pattern_keeps_the_base_as_stem() {
    let p = derive_paradigm("trzeci").unwrap();
    assert_eq!(p.mi_sg_nom, "trzeci");
    assert_eq!(p.mi_sg_gen, "trzeciego");
    assert_eq!(p.mi_sg_ins, "trzecim");
    assert_eq!(p.f_sg_nom, "trzecia");
    assert_eq!(p.mp_pl_nom, "trzeci");
    assert_eq!(p.pl_ins, "trzecimi");
    assert_eq!(p.pl_loc, "trzecich");
    assert_eq!(p.compound, "trzecio");

    let ostatni = derive_paradigm("ostatni").unwrap();
    assert_eq!(ostatni.mi_sg_gen, "ostatniego");
    assert_eq!(ostatni.mp_pl_nom, "ostatni");
}

#[test]
fn szy_pattern_full_table() {
    let p = derive_paradigm("pierwszy").unwrap();
    assert_eq!(p.mi_sg_nom, "pierwszy");
    assert_eq!(p.mi_sg_gen, "pierwszego");
    assert_eq!(p.mi_sg_ins, "pierwszym");
    assert_eq!(p.f_sg_nom, "pierwsza");
    assert_eq!(p.f_sg_ins, "pierwszą");
    assert_eq!(p.mp_pl_nom, "pierwsi");
    assert_eq!(p.pl_loc, "pierwszych");
    assert_eq!(p.compound, "pierwszo");
}

#[test]
fn sty_pattern_full_table() {
    let p = derive_paradigm("szósty").unwrap();
    assert_eq!(p.mi_sg_nom, "szósty");
    assert_eq!(p.mi_sg_gen, "szóstego");
    assert_eq!(p.mi_sg_ins, "szóstym");
    assert_eq!(p.f_sg_nom, "szósta");
    assert_eq!(p.mp_pl_nom, "szóści");
    assert_eq!(p.pl_ins, "szóstymi");
}

#[test]
fn gi_pattern_uses_feminine_stem_variant() {
    let p = derive_paradigm("drugi").unwrap();
    assert_eq!(p.mi_sg_nom, "drugi");
    assert_eq!(p.mi_sg_gen, "drugiego");
    assert_eq!(p.mi_sg_ins, "drugim");
    // Feminine forms drop the -i- of the stem.
    assert_eq!(p.f_sg_nom, "druga");
    assert_eq!(p.f_sg_ins, "drugą");
    assert_eq!(p.mp_pl_nom, "drudzy");
    assert_eq!(p.pl_ins, "drugimi");
    assert_eq!(p.compound, "drugo");
}

#[test]
fn ty_pattern_full_table() {
    let p = derive_paradigm("piąty").unwrap();
    assert_eq!(p.mi_sg_nom, "piąty");
    assert_eq!(p.mi_sg_gen, "piątego");
    assert_eq!(p.mi_sg_dat, "piątemu");
    assert_eq!(p.f_sg_nom, "piąta");
    assert_eq!(p.mp_pl_nom, "piąci");
    assert_eq!(p.pl_loc, "piątych");
}

// === Dispatch ordering ===

#[test]
fn longer_suffix_outranks_shorter_overlap() {
    // "szósty" ends in both "sty" and "ty"; the dispatch table must select
    // the longer pattern, whose plural differs from the "ty" derivation.
    let p = derive_paradigm("szósty").unwrap();
    assert_eq!(p.mp_pl_nom, "szóści");
    assert_ne!(p.mp_pl_nom, "szósci");
}

#[test]
fn every_pattern_populates_every_label() {
    for word in ["jeden", "ostatni", "trzeci", "pierwszy", "szósty", "drugi", "piąty"] {
        let p = derive_paradigm(word).unwrap();
        let forms = p.forms();
        assert_eq!(forms.len(), 12, "label set changed for '{word}'");
        for (label, form) in forms {
            assert!(!form.is_empty(), "'{word}' derived empty '{label}'");
        }
    }
}

// === Failure behavior ===

#[test]
fn unmatched_ending_is_an_error_not_a_guess() {
    let err = derive_paradigm("dom").unwrap_err();
    assert!(matches!(err, ParadigmError::UnsupportedEnding { .. }));
    assert!(err.to_string().contains("dom"));
}

#[test]
fn empty_word_is_rejected() {
    assert!(derive_paradigm("").is_err());
}

// === Label access and serialization ===

#[test]
fn forms_are_addressable_by_label() {
    let p = derive_paradigm("drugi").unwrap();
    assert_eq!(p.get("mi_sg_gen"), Some("drugiego"));
    assert_eq!(p.get("compound"), Some("drugo"));
    assert_eq!(p.get("vocative"), None);
}

#[test]
fn paradigm_serializes_round_trip() {
    let p = derive_paradigm("pierwszy").unwrap();
    let json = serde_json::to_string(&p).unwrap();
    let back: cainte::AdjectiveParadigm = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
