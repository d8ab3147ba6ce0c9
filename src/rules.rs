//! `RuleRef`: a structured, language-independent key identifying the
//! grammar rule behind a hint, explanation, or validation suggestion.
//! These are data, not rendered prose — an outer presentation layer picks
//! the copy for a given key and locale.

use crate::grammar::types::{EndingClass, SpellingChange, StemPattern};
use crate::grammar::triggers::TriggerCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleRef {
    StemChange(StemPattern),
    SpellingChange(SpellingChange),
    Irregular,
    TriggerCategory(TriggerCategory),
    AccentPlacement,
    EndingForPersonAndTense,
    /// The verb's AR/ER/IR ending class, for the Generator's verb-class hint.
    VerbClass(EndingClass),
    /// Submission matched an indicative/preterite form: remind the learner
    /// that a WEIRDO trigger calls for the subjunctive mood.
    SubjunctiveTriggerReminder,
}
