//! Static Spanish-subjunctive grammar data: verbs, endings, stem/spelling
//! rules, irregular tables, indicative forms (for validation), and the
//! WEIRDO trigger catalog. Nothing in this module touches scheduling or
//! I/O; it is the data the Conjugator, Validator, and Generator draw on.

pub mod endings;
pub mod indicative;
pub mod irregulars;
pub mod triggers;
pub mod types;
pub mod verbs;

pub use types::{EndingClass, Person, SpellingChange, StemPattern, Tense};
pub use verbs::Verb;
