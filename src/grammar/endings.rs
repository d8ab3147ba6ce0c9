//! Regular endings: 3 ending classes x 3 tenses x 6 persons = 54 entries
//! (spec.md §4.1). The imperfect endings don't vary by ending class, but we
//! keep the full cross product explicit rather than collapsing it, so every
//! one of the 54 cells the spec calls for is a literal entry here.

use super::types::{EndingClass, Person, Tense};

/// Look up the regular ending for (class, tense, person).
///
/// For `ImperfectSubjRa`/`ImperfectSubjSe`, the ending is attached to a
/// preterite-derived stem (see `grammar::verbs::preterite_stem`), and the
/// 1PL form additionally requires an accent on the stem's last vowel
/// (`grammar::verbs::accent_last_vowel`) before this suffix is appended.
pub fn regular_ending(class: EndingClass, tense: Tense, person: Person) -> &'static str {
    use EndingClass::*;
    use Person::*;
    use Tense::*;

    match (class, tense, person) {
        // --- AR, present subjunctive ---
        (Ar, PresentSubj, FirstSg) => "e",
        (Ar, PresentSubj, SecondSg) => "es",
        (Ar, PresentSubj, ThirdSg) => "e",
        (Ar, PresentSubj, FirstPl) => "emos",
        (Ar, PresentSubj, SecondPl) => "éis",
        (Ar, PresentSubj, ThirdPl) => "en",

        // --- ER, present subjunctive ---
        (Er, PresentSubj, FirstSg) => "a",
        (Er, PresentSubj, SecondSg) => "as",
        (Er, PresentSubj, ThirdSg) => "a",
        (Er, PresentSubj, FirstPl) => "amos",
        (Er, PresentSubj, SecondPl) => "áis",
        (Er, PresentSubj, ThirdPl) => "an",

        // --- IR, present subjunctive (same as ER) ---
        (Ir, PresentSubj, FirstSg) => "a",
        (Ir, PresentSubj, SecondSg) => "as",
        (Ir, PresentSubj, ThirdSg) => "a",
        (Ir, PresentSubj, FirstPl) => "amos",
        (Ir, PresentSubj, SecondPl) => "áis",
        (Ir, PresentSubj, ThirdPl) => "an",

        // --- AR, imperfect -ra (class-invariant, but spelled out) ---
        (Ar, ImperfectSubjRa, FirstSg) => "ra",
        (Ar, ImperfectSubjRa, SecondSg) => "ras",
        (Ar, ImperfectSubjRa, ThirdSg) => "ra",
        (Ar, ImperfectSubjRa, FirstPl) => "ramos",
        (Ar, ImperfectSubjRa, SecondPl) => "rais",
        (Ar, ImperfectSubjRa, ThirdPl) => "ran",

        // --- ER, imperfect -ra ---
        (Er, ImperfectSubjRa, FirstSg) => "ra",
        (Er, ImperfectSubjRa, SecondSg) => "ras",
        (Er, ImperfectSubjRa, ThirdSg) => "ra",
        (Er, ImperfectSubjRa, FirstPl) => "ramos",
        (Er, ImperfectSubjRa, SecondPl) => "rais",
        (Er, ImperfectSubjRa, ThirdPl) => "ran",

        // --- IR, imperfect -ra ---
        (Ir, ImperfectSubjRa, FirstSg) => "ra",
        (Ir, ImperfectSubjRa, SecondSg) => "ras",
        (Ir, ImperfectSubjRa, ThirdSg) => "ra",
        (Ir, ImperfectSubjRa, FirstPl) => "ramos",
        (Ir, ImperfectSubjRa, SecondPl) => "rais",
        (Ir, ImperfectSubjRa, ThirdPl) => "ran",

        // --- AR, imperfect -se ---
        (Ar, ImperfectSubjSe, FirstSg) => "se",
        (Ar, ImperfectSubjSe, SecondSg) => "ses",
        (Ar, ImperfectSubjSe, ThirdSg) => "se",
        (Ar, ImperfectSubjSe, FirstPl) => "semos",
        (Ar, ImperfectSubjSe, SecondPl) => "seis",
        (Ar, ImperfectSubjSe, ThirdPl) => "sen",

        // --- ER, imperfect -se ---
        (Er, ImperfectSubjSe, FirstSg) => "se",
        (Er, ImperfectSubjSe, SecondSg) => "ses",
        (Er, ImperfectSubjSe, ThirdSg) => "se",
        (Er, ImperfectSubjSe, FirstPl) => "semos",
        (Er, ImperfectSubjSe, SecondPl) => "seis",
        (Er, ImperfectSubjSe, ThirdPl) => "sen",

        // --- IR, imperfect -se ---
        (Ir, ImperfectSubjSe, FirstSg) => "se",
        (Ir, ImperfectSubjSe, SecondSg) => "ses",
        (Ir, ImperfectSubjSe, ThirdSg) => "se",
        (Ir, ImperfectSubjSe, FirstPl) => "semos",
        (Ir, ImperfectSubjSe, SecondPl) => "seis",
        (Ir, ImperfectSubjSe, ThirdPl) => "sen",
    }
}

/// Present-indicative endings, for regular verbs, used only by
/// `grammar::indicative` to back the Validator's MOOD_CONFUSION check.
pub fn indicative_present_ending(class: EndingClass, person: Person) -> &'static str {
    use EndingClass::*;
    use Person::*;
    match (class, person) {
        (Ar, FirstSg) => "o",
        (Ar, SecondSg) => "as",
        (Ar, ThirdSg) => "a",
        (Ar, FirstPl) => "amos",
        (Ar, SecondPl) => "áis",
        (Ar, ThirdPl) => "an",
        (Er, FirstSg) => "o",
        (Er, SecondSg) => "es",
        (Er, ThirdSg) => "e",
        (Er, FirstPl) => "emos",
        (Er, SecondPl) => "éis",
        (Er, ThirdPl) => "en",
        (Ir, FirstSg) => "o",
        (Ir, SecondSg) => "es",
        (Ir, ThirdSg) => "e",
        (Ir, FirstPl) => "imos",
        (Ir, SecondPl) => "ís",
        (Ir, ThirdPl) => "en",
    }
}

/// Preterite endings, for regular verbs, used only by `grammar::indicative`.
pub fn indicative_preterite_ending(class: EndingClass, person: Person) -> &'static str {
    use EndingClass::*;
    use Person::*;
    match (class, person) {
        (Ar, FirstSg) => "é",
        (Ar, SecondSg) => "aste",
        (Ar, ThirdSg) => "ó",
        (Ar, FirstPl) => "amos",
        (Ar, SecondPl) => "asteis",
        (Ar, ThirdPl) => "aron",
        (Er, FirstSg) | (Ir, FirstSg) => "í",
        (Er, SecondSg) | (Ir, SecondSg) => "iste",
        (Er, ThirdSg) | (Ir, ThirdSg) => "ió",
        (Er, FirstPl) | (Ir, FirstPl) => "imos",
        (Er, SecondPl) | (Ir, SecondPl) => "isteis",
        (Er, ThirdPl) | (Ir, ThirdPl) => "ieron",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ar_present_subj_matches_hablar() {
        assert_eq!(regular_ending(EndingClass::Ar, Tense::PresentSubj, Person::FirstSg), "e");
        assert_eq!(regular_ending(EndingClass::Ar, Tense::PresentSubj, Person::SecondPl), "éis");
    }

    #[test]
    fn er_and_ir_present_subj_are_identical() {
        for person in Person::ALL {
            assert_eq!(
                regular_ending(EndingClass::Er, Tense::PresentSubj, person),
                regular_ending(EndingClass::Ir, Tense::PresentSubj, person)
            );
        }
    }
}
