use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical person, closed set of six.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Person {
    FirstSg,
    SecondSg,
    ThirdSg,
    FirstPl,
    SecondPl,
    ThirdPl,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSg,
        Person::SecondSg,
        Person::ThirdSg,
        Person::FirstPl,
        Person::SecondPl,
        Person::ThirdPl,
    ];

    /// Index into the six-entry person-keyed arrays used throughout `grammar`.
    pub fn index(self) -> usize {
        match self {
            Person::FirstSg => 0,
            Person::SecondSg => 1,
            Person::ThirdSg => 2,
            Person::FirstPl => 3,
            Person::SecondPl => 4,
            Person::ThirdPl => 5,
        }
    }

    /// Whether stem-change reduction in -IR verbs applies to this person
    /// (i.e. this person is NOT 1PL/2PL).
    pub fn takes_full_stem_change(self) -> bool {
        !matches!(self, Person::FirstPl | Person::SecondPl)
    }

    /// Pronoun used when substituting the `{P}` slot in a trigger template.
    pub fn pronoun(self) -> &'static str {
        match self {
            Person::FirstSg => "yo",
            Person::SecondSg => "tú",
            Person::ThirdSg => "él/ella/usted",
            Person::FirstPl => "nosotros",
            Person::SecondPl => "vosotros",
            Person::ThirdPl => "ellos/ellas/ustedes",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Person::FirstSg => "1SG",
            Person::SecondSg => "2SG",
            Person::ThirdSg => "3SG",
            Person::FirstPl => "1PL",
            Person::SecondPl => "2PL",
            Person::ThirdPl => "3PL",
        };
        write!(f, "{s}")
    }
}

/// Closed set of tenses the public Conjugator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tense {
    PresentSubj,
    ImperfectSubjRa,
    ImperfectSubjSe,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::PresentSubj, Tense::ImperfectSubjRa, Tense::ImperfectSubjSe];

    pub fn is_imperfect(self) -> bool {
        matches!(self, Tense::ImperfectSubjRa | Tense::ImperfectSubjSe)
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tense::PresentSubj => "present_subj",
            Tense::ImperfectSubjRa => "imperfect_subj_ra",
            Tense::ImperfectSubjSe => "imperfect_subj_se",
        };
        write!(f, "{s}")
    }
}

/// Ending class by infinitive suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndingClass {
    Ar,
    Er,
    Ir,
}

/// Stem-change pattern a verb's stressed stem vowel undergoes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemPattern {
    EIe,
    OUe,
    EI,
    UUe,
}

impl fmt::Display for StemPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StemPattern::EIe => "e\u{2192}ie",
            StemPattern::OUe => "o\u{2192}ue",
            StemPattern::EI => "e\u{2192}i",
            StemPattern::UUe => "u\u{2192}ue",
        };
        write!(f, "{s}")
    }
}

/// Orthographic spelling-change rule, applied after stem selection and
/// before ending attachment (spec.md §4.1/§4.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellingChange {
    /// g -> gu, before e (pagar -> pague)
    GtoGu,
    /// c -> qu, before e (buscar -> busque)
    CtoQu,
    /// z -> c, before e (cruzar -> cruce)
    ZtoC,
    /// gu -> gü, before e (averiguar -> averigüe)
    GutoGu2,
    /// c -> z, before a (vencer -> venza)
    CtoZ,
    /// i -> y, stem-final i becomes y before the a/e of every person's
    /// ending (huir -> huya, huyamos, huyáis)
    ItoY,
}

impl fmt::Display for SpellingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SpellingChange::GtoGu => "g\u{2192}gu",
            SpellingChange::CtoQu => "c\u{2192}qu",
            SpellingChange::ZtoC => "z\u{2192}c",
            SpellingChange::GutoGu2 => "gu\u{2192}g\u{fc}",
            SpellingChange::CtoZ => "c\u{2192}z",
            SpellingChange::ItoY => "i\u{2192}y",
        };
        write!(f, "{s}")
    }
}
