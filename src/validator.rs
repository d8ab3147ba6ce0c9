//! The Validator: `validate(...) -> ValidationResult`, comparing a
//! learner's submission to the expected form and, when it's wrong,
//! classifying why.

use crate::conjugator::{self, conjugate};
use crate::grammar::indicative;
use crate::grammar::types::{Person, Tense};
use crate::grammar::verbs::Verb;
use crate::rules::RuleRef;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// The eight-kind error taxonomy of a wrong submission, in the priority
/// order the classifier checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    AccentOnly,
    MoodConfusion,
    WrongPerson,
    WrongTense,
    StemChangeMissing,
    SpellingChangeMissing,
    EndingMismatch,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_correct: bool,
    pub matched_form: Option<String>,
    pub error: Option<ErrorKind>,
    pub suggestion: Option<RuleRef>,
}

impl ValidationResult {
    fn correct(matched_form: String) -> Self {
        Self { is_correct: true, matched_form: Some(matched_form), error: None, suggestion: None }
    }

    fn incorrect(error: ErrorKind, suggestion: RuleRef) -> Self {
        Self { is_correct: false, matched_form: None, error: Some(error), suggestion: Some(suggestion) }
    }
}

/// Trim, lowercase, NFC-normalize. Diacritics are left intact — they're
/// significant everywhere except the ACCENT_ONLY check.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().nfc().collect()
}

/// Strip combining diacritical marks after NFD decomposition, for the
/// ACCENT_ONLY comparison only.
fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Compare `submitted` against `expected`/`alternatives` for (verb, tense,
/// person) and, if wrong, classify the error. Never fails: an unrecognized
/// submission is a classification, not an error.
pub fn validate(
    verb: &Verb,
    tense: Tense,
    person: Person,
    expected: &str,
    alternatives: &[String],
    submitted: &str,
) -> ValidationResult {
    let norm_submitted = normalize(submitted);
    let norm_expected = normalize(expected);

    if norm_submitted == norm_expected {
        return ValidationResult::correct(expected.to_string());
    }
    for alt in alternatives {
        if norm_submitted == normalize(alt) {
            return ValidationResult::correct(alt.clone());
        }
    }

    let stripped_submitted = strip_diacritics(&norm_submitted);
    let accent_only = stripped_submitted == strip_diacritics(&norm_expected)
        || alternatives.iter().any(|alt| stripped_submitted == strip_diacritics(&normalize(alt)));
    if accent_only {
        return ValidationResult::incorrect(ErrorKind::AccentOnly, RuleRef::AccentPlacement);
    }

    let present_indicative = normalize(&indicative::present_indicative(verb, person));
    let preterite = normalize(&indicative::preterite(verb, person));
    if norm_submitted == present_indicative || norm_submitted == preterite {
        return ValidationResult::incorrect(ErrorKind::MoodConfusion, RuleRef::SubjunctiveTriggerReminder);
    }

    for other_person in Person::ALL {
        if other_person == person {
            continue;
        }
        if let Ok(form) = conjugate(verb.infinitive, tense, other_person) {
            if norm_submitted == normalize(&form) {
                return ValidationResult::incorrect(ErrorKind::WrongPerson, RuleRef::EndingForPersonAndTense);
            }
        }
    }

    for other_tense in Tense::ALL {
        if other_tense == tense {
            continue;
        }
        if let Ok(form) = conjugate(verb.infinitive, other_tense, person) {
            if norm_submitted == normalize(&form) {
                return ValidationResult::incorrect(ErrorKind::WrongTense, RuleRef::EndingForPersonAndTense);
            }
        }
    }

    if verb.stem_change.is_some() {
        let naive = conjugator::form_without_stem_change(verb, tense, person);
        if norm_submitted == normalize(&naive) {
            return ValidationResult::incorrect(
                ErrorKind::StemChangeMissing,
                RuleRef::StemChange(verb.stem_change.unwrap().pattern),
            );
        }
    }

    if let Some(rule) = verb.spelling_change {
        let naive = conjugator::form_without_spelling_change(verb, tense, person);
        if norm_submitted == normalize(&naive) {
            return ValidationResult::incorrect(ErrorKind::SpellingChangeMissing, RuleRef::SpellingChange(rule));
        }
    }

    if let Some((stem, _ending)) = conjugator::stem_and_ending(verb, tense, person) {
        let norm_stem = normalize(&stem);
        if norm_submitted.starts_with(&norm_stem) && norm_submitted.len() > norm_stem.len() {
            return ValidationResult::incorrect(ErrorKind::EndingMismatch, RuleRef::EndingForPersonAndTense);
        }
    }

    ValidationResult::incorrect(ErrorKind::Unrecognized, RuleRef::Irregular)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::verbs;

    #[test]
    fn identity_is_correct() {
        let hablar = verbs::lookup("hablar").unwrap();
        let result = validate(&hablar, Tense::PresentSubj, Person::FirstSg, "hable", &[], "hable");
        assert!(result.is_correct);
    }

    #[test]
    fn case_insensitive() {
        let hablar = verbs::lookup("hablar").unwrap();
        let result = validate(&hablar, Tense::PresentSubj, Person::FirstSg, "hable", &[], "HABLE");
        assert!(result.is_correct);
    }

    #[test]
    fn mood_confusion_scenario() {
        let hablar = verbs::lookup("hablar").unwrap();
        let result = validate(&hablar, Tense::PresentSubj, Person::FirstSg, "hable", &[], "hablo");
        assert_eq!(result.error, Some(ErrorKind::MoodConfusion));
    }

    #[test]
    fn wrong_person_scenario() {
        let hablar = verbs::lookup("hablar").unwrap();
        let result = validate(&hablar, Tense::PresentSubj, Person::FirstSg, "hable", &[], "hables");
        assert_eq!(result.error, Some(ErrorKind::WrongPerson));
    }

    #[test]
    fn accent_only_is_classified_not_correct() {
        let hablar = verbs::lookup("hablar").unwrap();
        let result = validate(&hablar, Tense::ImperfectSubjRa, Person::FirstPl, "habláramos", &[], "hablaramos");
        assert_eq!(result.error, Some(ErrorKind::AccentOnly));
    }

    #[test]
    fn stem_change_missing_scenario() {
        let querer = verbs::lookup("querer").unwrap();
        let result = validate(&querer, Tense::PresentSubj, Person::FirstSg, "quiera", &[], "quera");
        assert_eq!(result.error, Some(ErrorKind::StemChangeMissing));
    }

    #[test]
    fn spelling_change_missing_scenario() {
        let buscar = verbs::lookup("buscar").unwrap();
        let result = validate(&buscar, Tense::PresentSubj, Person::FirstSg, "busque", &[], "busce");
        assert_eq!(result.error, Some(ErrorKind::SpellingChangeMissing));
    }
}
