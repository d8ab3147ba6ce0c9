//! Precomputed irregular tables for the closed 17-verb set (spec.md §4.1).
//!
//! `PRESENT_SUBJ` is looked up directly (algorithm step 1 in spec.md §4.2).
//! `PRETERITE_STEM` feeds the generic imperfect-subjunctive ending
//! attachment for 15 of the 17 verbs. `ver` and `dar` are special-cased:
//! their forms across all three tenses are stored directly and stem
//! derivation is never attempted for them (spec.md §4.2 "Special case").

use super::types::{Person, Tense};
use std::collections::HashMap;
use std::sync::OnceLock;

type PersonForms = [&'static str; 6];

fn present_subj_table() -> &'static HashMap<&'static str, PersonForms> {
    static TABLE: OnceLock<HashMap<&'static str, PersonForms>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("ser", ["sea", "seas", "sea", "seamos", "seáis", "sean"]),
            ("estar", ["esté", "estés", "esté", "estemos", "estéis", "estén"]),
            ("ir", ["vaya", "vayas", "vaya", "vayamos", "vayáis", "vayan"]),
            ("haber", ["haya", "hayas", "haya", "hayamos", "hayáis", "hayan"]),
            ("dar", ["dé", "des", "dé", "demos", "deis", "den"]),
            ("saber", ["sepa", "sepas", "sepa", "sepamos", "sepáis", "sepan"]),
            ("ver", ["vea", "veas", "vea", "veamos", "veáis", "vean"]),
            ("hacer", ["haga", "hagas", "haga", "hagamos", "hagáis", "hagan"]),
            ("tener", ["tenga", "tengas", "tenga", "tengamos", "tengáis", "tengan"]),
            ("poner", ["ponga", "pongas", "ponga", "pongamos", "pongáis", "pongan"]),
            ("poder", ["pueda", "puedas", "pueda", "podamos", "podáis", "puedan"]),
            ("querer", ["quiera", "quieras", "quiera", "queramos", "queráis", "quieran"]),
            ("venir", ["venga", "vengas", "venga", "vengamos", "vengáis", "vengan"]),
            ("salir", ["salga", "salgas", "salga", "salgamos", "salgáis", "salgan"]),
            ("traer", ["traiga", "traigas", "traiga", "traigamos", "traigáis", "traigan"]),
            ("caer", ["caiga", "caigas", "caiga", "caigamos", "caigáis", "caigan"]),
            ("conocer", ["conozca", "conozcas", "conozca", "conozcamos", "conozcáis", "conozcan"]),
        ])
    })
}

/// Preterite stem (3PL preterite minus "-ron") for the 15 irregulars whose
/// imperfect subjunctive is derived generically. `ver` and `dar` are
/// excluded — see `dar_ver_stored`.
fn preterite_stem_table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            ("ser", "fue"),
            ("estar", "estuvie"),
            ("ir", "fue"),
            ("haber", "hubie"),
            ("saber", "supie"),
            ("hacer", "hicie"),
            ("tener", "tuvie"),
            ("poner", "pusie"),
            ("poder", "pudie"),
            ("querer", "quisie"),
            ("venir", "vinie"),
            ("salir", "salie"),
            ("traer", "traje"),
            ("caer", "caye"),
            ("conocer", "conocie"),
        ])
    })
}

/// `ver`/`dar` store every tense's forms directly; no stem derivation is
/// attempted for them at all (spec.md §4.2).
fn dar_ver_stored() -> &'static HashMap<(&'static str, Tense), PersonForms> {
    static TABLE: OnceLock<HashMap<(&'static str, Tense), PersonForms>> = OnceLock::new();
    TABLE.get_or_init(|| {
        HashMap::from([
            (("dar", Tense::PresentSubj), ["dé", "des", "dé", "demos", "deis", "den"]),
            (
                ("dar", Tense::ImperfectSubjRa),
                ["diera", "dieras", "diera", "diéramos", "dierais", "dieran"],
            ),
            (
                ("dar", Tense::ImperfectSubjSe),
                ["diese", "dieses", "diese", "diésemos", "dieseis", "diesen"],
            ),
            (("ver", Tense::PresentSubj), ["vea", "veas", "vea", "veamos", "veáis", "vean"]),
            (
                ("ver", Tense::ImperfectSubjRa),
                ["viera", "vieras", "viera", "viéramos", "vierais", "vieran"],
            ),
            (
                ("ver", Tense::ImperfectSubjSe),
                ["viese", "vieses", "viese", "viésemos", "vieseis", "viesen"],
            ),
        ])
    })
}

/// Step 1 of the Conjugator algorithm: an explicit stored form, if any.
pub fn stored_form(infinitive: &str, tense: Tense, person: Person) -> Option<&'static str> {
    if infinitive == "dar" || infinitive == "ver" {
        return dar_ver_stored().get(&(infinitive, tense)).map(|forms| forms[person.index()]);
    }
    if tense == Tense::PresentSubj {
        return present_subj_table().get(infinitive).map(|forms| forms[person.index()]);
    }
    None
}

/// The irregular 3PL-preterite-minus-"-ron" stem, for imperfect derivation.
pub fn preterite_stem(infinitive: &str) -> Option<&'static str> {
    preterite_stem_table().get(infinitive).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ser_present_subj_full_table() {
        for (person, expected) in Person::ALL.into_iter().zip(["sea", "seas", "sea", "seamos", "seáis", "sean"]) {
            assert_eq!(stored_form("ser", Tense::PresentSubj, person), Some(expected));
        }
    }

    #[test]
    fn dar_and_ver_cover_all_tenses() {
        for tense in Tense::ALL {
            assert!(stored_form("dar", tense, Person::FirstSg).is_some());
            assert!(stored_form("ver", tense, Person::FirstSg).is_some());
        }
    }

    #[test]
    fn other_irregulars_have_no_stored_imperfect() {
        assert!(stored_form("tener", Tense::ImperfectSubjRa, Person::FirstSg).is_none());
        assert_eq!(preterite_stem("tener"), Some("tuvie"));
    }
}
