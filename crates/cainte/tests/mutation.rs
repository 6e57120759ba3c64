//! Tests for the Irish initial-mutation builders.

use cainte::mutation::{
    eclipsis, lenition, lenition_no_f_no_s, lower_eclipsis, prefix_h, prefix_n, prefix_t,
    to_lower, upper_eclipsis,
};

// === Eclipsis ===

#[test]
fn eclipsis_upper_consonant() {
    assert_eq!(eclipsis().apply("Banana"), Some("mBanana".to_string()));
    assert_eq!(eclipsis().apply("Cat"), Some("gCat".to_string()));
}

#[test]
fn eclipsis_lower_consonant() {
    assert_eq!(eclipsis().apply("bád"), Some("mbád".to_string()));
    assert_eq!(eclipsis().apply("doras"), Some("ndoras".to_string()));
    assert_eq!(eclipsis().apply("focal"), Some("bhfocal".to_string()));
}

#[test]
fn eclipsis_vowels_differ_by_case() {
    // Lower-case vowel mutation inserts a hyphen; upper-case does not.
    assert_eq!(eclipsis().apply("arán"), Some("n-arán".to_string()));
    assert_eq!(eclipsis().apply("Arán"), Some("nArán".to_string()));
    assert_eq!(eclipsis().apply("éan"), Some("n-éan".to_string()));
    assert_eq!(eclipsis().apply("Éan"), Some("nÉan".to_string()));
}

#[test]
fn eclipsis_is_union_of_case_scoped_tables() {
    assert_eq!(upper_eclipsis().apply("bád"), Some("bád".to_string()));
    assert_eq!(lower_eclipsis().apply("bád"), Some("mbád".to_string()));
}

#[test]
fn eclipsis_passes_through_non_triggering_letters() {
    assert_eq!(eclipsis().apply("rud"), Some("rud".to_string()));
    assert_eq!(eclipsis().apply("lá"), Some("lá".to_string()));
}

#[test]
fn eclipsis_does_not_double_mutate() {
    // An already-eclipsed word starts with a marker letter outside the
    // trigger set, so a second application is the identity.
    let ecl = eclipsis();
    let once = ecl.apply("Banana").unwrap();
    assert_eq!(once, "mBanana");
    assert_eq!(ecl.apply(&once), Some("mBanana".to_string()));

    let lower_once = ecl.apply("arán").unwrap();
    assert_eq!(ecl.apply(&lower_once), Some("n-arán".to_string()));
}

#[test]
fn eclipsis_is_deterministic_under_repetition() {
    let ecl = eclipsis();
    let outputs: Vec<_> = (0..5).map(|_| ecl.apply("bád")).collect();
    assert!(outputs.iter().all(|o| o == &Some("mbád".to_string())));
}

// === Lenition ===

#[test]
fn lenition_inserts_h_after_initial_consonant() {
    assert_eq!(lenition().apply("cóta"), Some("chóta".to_string()));
    assert_eq!(lenition().apply("bán"), Some("bhán".to_string()));
    assert_eq!(lenition().apply("máthair"), Some("mháthair".to_string()));
}

#[test]
fn lenition_cleanup_repairs_s_clusters() {
    // s + stop clusters do not show lenition; the cleanup pass collapses
    // the illegal "sh" the naive rule produces.
    for (word, expected) in [
        ("scéal", "scéal"),
        ("sport", "sport"),
        ("smacht", "smacht"),
        ("stad", "stad"),
    ] {
        assert_eq!(lenition().apply(word), Some(expected.to_string()));
    }
}

#[test]
fn lenition_output_never_contains_illegal_clusters() {
    let len = lenition();
    for word in ["scéal", "sport", "smacht", "stad", "sféar", "suí", "cóta"] {
        let output = len.apply(word).unwrap();
        for cluster in ["shc", "shf", "shm", "shp", "sht"] {
            assert!(
                !output.contains(cluster),
                "'{word}' lenited to '{output}' containing '{cluster}'"
            );
        }
    }
}

#[test]
fn lenition_variant_skips_f_and_s() {
    let variant = lenition_no_f_no_s();
    assert_eq!(variant.apply("fear"), Some("fear".to_string()));
    assert_eq!(variant.apply("súil"), Some("súil".to_string()));
    assert_eq!(variant.apply("cóta"), Some("chóta".to_string()));
}

// === Prothesis ===

#[test]
fn prefix_h_before_vowels_only() {
    assert_eq!(prefix_h().apply("úll"), Some("húll".to_string()));
    assert_eq!(prefix_h().apply("Éire"), Some("hÉire".to_string()));
    assert_eq!(prefix_h().apply("bó"), Some("bó".to_string()));
}

#[test]
fn prefix_n_hyphenates_lower_case() {
    assert_eq!(prefix_n().apply("úll"), Some("n-úll".to_string()));
    assert_eq!(prefix_n().apply("Úll"), Some("nÚll".to_string()));
    assert_eq!(prefix_n().apply("bó"), Some("bó".to_string()));
}

#[test]
fn prefix_t_hyphenates_lower_case() {
    assert_eq!(prefix_t().apply("aisce"), Some("t-aisce".to_string()));
    assert_eq!(prefix_t().apply("Arán"), Some("tArán".to_string()));
}

#[test]
fn prothesis_does_not_reapply_to_marked_words() {
    let pn = prefix_n();
    let once = pn.apply("úll").unwrap();
    // "n-úll" now starts with a consonant, so the rule cannot fire again.
    assert_eq!(pn.apply(&once), Some("n-úll".to_string()));
}

// === Case normalization ===

#[test]
fn to_lower_lowers_plain_and_fada_letters() {
    assert_eq!(to_lower().apply("BÁD"), Some("bád".to_string()));
    assert_eq!(to_lower().apply("Éan"), Some("éan".to_string()));
}

#[test]
fn to_lower_rewrites_capitalized_mutation_prefixes() {
    // The eclipsis/prothesis marker de-capitalizes consistently with the
    // mutation that produced it.
    assert_eq!(to_lower().apply("nArán"), Some("n-arán".to_string()));
    assert_eq!(to_lower().apply("tÚll"), Some("t-úll".to_string()));
}

#[test]
fn to_lower_keeps_apostrophe_and_hyphen() {
    assert_eq!(to_lower().apply("n-arán"), Some("n-arán".to_string()));
    assert_eq!(to_lower().apply("d'Éag"), Some("d'éag".to_string()));
}

#[test]
fn to_lower_lowers_ponc_consonants() {
    assert_eq!(to_lower().apply("Ḃán"), Some("ḃán".to_string()));
}

#[test]
fn to_lower_rejects_out_of_alphabet_characters() {
    assert_eq!(to_lower().apply("BÁD 42"), None);
}
