//! The Conjugator: `conjugate(verb, tense, person) -> form` and
//! `full_table(verb, tense) -> person -> form`, implementing the
//! stored-form-first, stem-then-spelling-then-ending algorithm.

use crate::error::{EngineError, EngineResult};
use crate::grammar::types::{EndingClass, Person, SpellingChange, StemPattern, Tense};
use crate::grammar::verbs::{self, Verb};
use crate::grammar::{endings, irregulars};

/// Produce the canonical subjunctive form for a declared verb.
///
/// Algorithm: check the irregular table first; otherwise derive a stem
/// (present-indicative stem for PRESENT_SUBJ, preterite stem for the two
/// imperfect tenses), apply any spelling change, and attach the regular
/// ending.
pub fn conjugate(infinitive: &str, tense: Tense, person: Person) -> EngineResult<String> {
    let verb = verbs::lookup(infinitive).ok_or_else(|| EngineError::UnknownVerb(infinitive.to_string()))?;

    if let Some(form) = irregulars::stored_form(verb.infinitive, tense, person) {
        return Ok(form.to_string());
    }

    Ok(form_for_tense(&verb, tense, person))
}

/// Regular derivation for (tense, person), ignoring the irregular table.
/// Shared by `conjugate` and by the Validator's "what would this look like
/// without the stem/spelling change" diagnostics.
fn form_for_tense(verb: &Verb, tense: Tense, person: Person) -> String {
    let stem = match tense {
        Tense::PresentSubj => present_subj_stem(verb, person),
        Tense::ImperfectSubjRa | Tense::ImperfectSubjSe => {
            let preterite_stem = preterite_stem(verb);
            if person == Person::FirstPl {
                verbs::accent_last_vowel(&preterite_stem)
            } else {
                preterite_stem
            }
        }
    };
    let ending = endings::regular_ending(verb.class, tense, person);
    format!("{stem}{ending}")
}

/// What `conjugate` would produce if the verb's stem-change were ignored.
/// Used by the Validator to recognize STEM_CHANGE_MISSING submissions.
pub(crate) fn form_without_stem_change(verb: &Verb, tense: Tense, person: Person) -> String {
    let mut naive = *verb;
    naive.stem_change = None;
    form_for_tense(&naive, tense, person)
}

/// What `conjugate` would produce if the verb's spelling-change rule were
/// ignored. Used by the Validator to recognize SPELLING_CHANGE_MISSING.
pub(crate) fn form_without_spelling_change(verb: &Verb, tense: Tense, person: Person) -> String {
    let mut naive = *verb;
    naive.spelling_change = None;
    form_for_tense(&naive, tense, person)
}

/// The (stem, ending) split behind a regularly-derived form, or `None` for
/// a verb/tense/person combination served from the irregular table (where
/// no such split exists). Used by the Validator's ENDING_MISMATCH check.
pub(crate) fn stem_and_ending(verb: &Verb, tense: Tense, person: Person) -> Option<(String, &'static str)> {
    if irregulars::stored_form(verb.infinitive, tense, person).is_some() {
        return None;
    }
    let stem = match tense {
        Tense::PresentSubj => present_subj_stem(verb, person),
        Tense::ImperfectSubjRa | Tense::ImperfectSubjSe => {
            let preterite_stem = preterite_stem(verb);
            if person == Person::FirstPl {
                verbs::accent_last_vowel(&preterite_stem)
            } else {
                preterite_stem
            }
        }
    };
    Some((stem, endings::regular_ending(verb.class, tense, person)))
}

/// The present-indicative stem for a declared regular stem-changer, used by
/// `grammar::indicative` to back the Validator's mood-confusion checks.
/// Present indicative takes the full diphthong change outside 1PL/2PL in
/// every ending class, with no reduced variant inside them (unlike present
/// subjunctive's -IR reduction).
pub(crate) fn present_indicative_stem(verb: &Verb, person: Person) -> String {
    let base = verb.base_stem();
    match verb.stem_change {
        Some(sc) if person.takes_full_stem_change() => full_vowel_change(base, sc.pattern),
        _ => base.to_string(),
    }
}

/// The preterite-indicative stem for a declared regular stem-changer. Only
/// -IR stem-changers carry a preterite stem change at all, and only in
/// 3SG/3PL, taking the reduced vowel (pedir -> pidió/pidieron).
pub(crate) fn preterite_indicative_stem(verb: &Verb, person: Person) -> String {
    let base = verb.base_stem();
    match verb.stem_change {
        Some(sc) if verb.class == EndingClass::Ir && matches!(person, Person::ThirdSg | Person::ThirdPl) => {
            reduced_vowel_change(base, sc.pattern)
        }
        _ => base.to_string(),
    }
}

/// All six persons for a (verb, tense) pair.
pub fn full_table(infinitive: &str, tense: Tense) -> EngineResult<[String; 6]> {
    verbs::lookup(infinitive).ok_or_else(|| EngineError::UnknownVerb(infinitive.to_string()))?;
    let mut out: [String; 6] = Default::default();
    for person in Person::ALL {
        out[person.index()] = conjugate(infinitive, tense, person)?;
    }
    Ok(out)
}

/// The present-subjunctive stem for a non-stored verb: base stem, with the
/// stem-change pattern applied per person, then any spelling change.
fn present_subj_stem(verb: &Verb, person: Person) -> String {
    let base = verb.base_stem();
    let changed = match verb.stem_change {
        None => base.to_string(),
        Some(sc) => match verb.class {
            EndingClass::Ar | EndingClass::Er => {
                if person.takes_full_stem_change() {
                    full_vowel_change(base, sc.pattern)
                } else {
                    base.to_string()
                }
            }
            EndingClass::Ir => {
                if person.takes_full_stem_change() {
                    full_vowel_change(base, sc.pattern)
                } else {
                    reduced_vowel_change(base, sc.pattern)
                }
            }
        },
    };
    match verb.spelling_change {
        Some(rule) => apply_spelling_change(&changed, rule),
        None => changed,
    }
}

/// The 3PL-preterite-minus-"-ron" stem feeding both imperfect subjunctive
/// variants. Irregular verbs use their stored stem; -IR stem-changers carry
/// their preterite-only reduced vowel change (e.g. sentir -> sintie-,
/// dormir -> durmie-); `huir`'s stem-final vowel hiatus (hu- + -ieron ->
/// huyeron) is handled directly since it doesn't fit the consonant-based
/// spelling rules below.
fn preterite_stem(verb: &Verb) -> String {
    if let Some(stem) = irregulars::preterite_stem(verb.infinitive) {
        return stem.to_string();
    }
    let base = verb.base_stem();
    match verb.class {
        EndingClass::Ar => format!("{base}a"),
        EndingClass::Er => format!("{base}ie"),
        EndingClass::Ir => {
            if verb.spelling_change == Some(SpellingChange::ItoY) {
                format!("{base}ye")
            } else if let Some(sc) = verb.stem_change {
                format!("{}ie", reduced_vowel_change(base, sc.pattern))
            } else {
                format!("{base}ie")
            }
        }
    }
}

/// Replace the last occurrence of `target` in `stem` with `replacement`.
fn replace_last_vowel(stem: &str, target: char, replacement: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    match chars.iter().rposition(|c| *c == target) {
        Some(pos) => {
            let mut out = String::new();
            out.extend(&chars[..pos]);
            out.push_str(replacement);
            out.extend(&chars[pos + 1..]);
            out
        }
        None => stem.to_string(),
    }
}

/// The full diphthong change used outside 1PL/2PL (e→ie, o→ue, u→ue) or in
/// every person for the e→i pattern.
fn full_vowel_change(stem: &str, pattern: StemPattern) -> String {
    match pattern {
        StemPattern::EIe => replace_last_vowel(stem, 'e', "ie"),
        StemPattern::OUe => replace_last_vowel(stem, 'o', "ue"),
        StemPattern::EI => replace_last_vowel(stem, 'e', "i"),
        StemPattern::UUe => replace_last_vowel(stem, 'u', "ue"),
    }
}

/// The reduced change -IR verbs take in 1PL/2PL present subjunctive and
/// throughout the preterite-derived stem (e→i, o→u).
fn reduced_vowel_change(stem: &str, pattern: StemPattern) -> String {
    match pattern {
        StemPattern::EIe | StemPattern::EI => replace_last_vowel(stem, 'e', "i"),
        StemPattern::OUe | StemPattern::UUe => replace_last_vowel(stem, 'o', "u"),
    }
}

/// Orthographic adjustment applied after stem selection, before the ending
/// (spec: applies to the stem's final consonant, or — for `huir` — inserts
/// the glide consonant a vowel-final stem needs before a vowel ending).
fn apply_spelling_change(stem: &str, rule: SpellingChange) -> String {
    match rule {
        SpellingChange::GtoGu => replace_last_consonant(stem, "g", "gu"),
        SpellingChange::CtoQu => replace_last_consonant(stem, "c", "qu"),
        SpellingChange::ZtoC => replace_last_consonant(stem, "z", "c"),
        SpellingChange::GutoGu2 => replace_last_consonant(stem, "gu", "g\u{fc}"),
        SpellingChange::CtoZ => replace_last_consonant(stem, "c", "z"),
        SpellingChange::ItoY => format!("{stem}y"),
    }
}

fn replace_last_consonant(stem: &str, suffix: &str, replacement: &str) -> String {
    match stem.strip_suffix(suffix) {
        Some(head) => format!("{head}{replacement}"),
        None => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hablar_regular_ar() {
        assert_eq!(conjugate("hablar", Tense::PresentSubj, Person::FirstSg).unwrap(), "hable");
        assert_eq!(conjugate("hablar", Tense::PresentSubj, Person::SecondPl).unwrap(), "habléis");
    }

    #[test]
    fn ser_full_table() {
        let table = full_table("ser", Tense::PresentSubj).unwrap();
        assert_eq!(table, ["sea", "seas", "sea", "seamos", "seáis", "sean"]);
    }

    #[test]
    fn querer_stem_change_skips_1pl() {
        assert_eq!(conjugate("querer", Tense::PresentSubj, Person::FirstSg).unwrap(), "quiera");
        assert_eq!(conjugate("querer", Tense::PresentSubj, Person::FirstPl).unwrap(), "queramos");
    }

    #[test]
    fn buscar_spelling_change() {
        assert_eq!(conjugate("buscar", Tense::PresentSubj, Person::FirstSg).unwrap(), "busque");
    }

    #[test]
    fn unknown_verb_is_an_error() {
        assert!(matches!(
            conjugate("xyzzy", Tense::PresentSubj, Person::FirstSg),
            Err(EngineError::UnknownVerb(_))
        ));
    }

    #[test]
    fn ir_stem_changer_reduces_in_plural() {
        assert_eq!(conjugate("dormir", Tense::PresentSubj, Person::FirstSg).unwrap(), "duerma");
        assert_eq!(conjugate("dormir", Tense::PresentSubj, Person::FirstPl).unwrap(), "durmamos");
        assert_eq!(conjugate("pedir", Tense::PresentSubj, Person::SecondPl).unwrap(), "pidáis");
    }

    #[test]
    fn huir_inserts_y_in_every_person() {
        assert_eq!(conjugate("huir", Tense::PresentSubj, Person::FirstPl).unwrap(), "huyamos");
        assert_eq!(conjugate("huir", Tense::ImperfectSubjRa, Person::FirstSg).unwrap(), "huyera");
    }

    #[test]
    fn imperfect_subjunctive_variants_and_accent() {
        assert_eq!(conjugate("hablar", Tense::ImperfectSubjRa, Person::FirstPl).unwrap(), "habláramos");
        assert_eq!(conjugate("hablar", Tense::ImperfectSubjSe, Person::FirstSg).unwrap(), "hablase");
        assert_eq!(conjugate("sentir", Tense::ImperfectSubjRa, Person::ThirdSg).unwrap(), "sintiera");
    }

    #[test]
    fn jugar_combines_stem_and_spelling_change() {
        assert_eq!(conjugate("jugar", Tense::PresentSubj, Person::FirstSg).unwrap(), "juegue");
    }
}
