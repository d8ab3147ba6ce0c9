//! WEIRDO trigger catalog (spec.md §4.3): the categories of main-clause
//! expression that license a subjunctive in the embedded clause, each with
//! a handful of fill-in-the-blank templates.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerCategory {
    Wishes,
    Emotions,
    Impersonal,
    Recommendations,
    DoubtDenial,
    Ojala,
}

impl TriggerCategory {
    pub const ALL: [TriggerCategory; 6] = [
        TriggerCategory::Wishes,
        TriggerCategory::Emotions,
        TriggerCategory::Impersonal,
        TriggerCategory::Recommendations,
        TriggerCategory::DoubtDenial,
        TriggerCategory::Ojala,
    ];

    /// Selection weight used by the Generator's category sampling
    /// (spec.md §4.3: WISHES 30%, EMOTIONS 30%, RECOMMENDATIONS 15%,
    /// IMPERSONAL 15%, DOUBT_DENIAL 10%). OJALA rides inside WISHES'
    /// templates rather than drawing its own weight.
    pub fn weight(self) -> u32 {
        match self {
            TriggerCategory::Wishes => 30,
            TriggerCategory::Emotions => 30,
            TriggerCategory::Recommendations => 15,
            TriggerCategory::Impersonal => 15,
            TriggerCategory::DoubtDenial => 10,
            TriggerCategory::Ojala => 0,
        }
    }
}

impl fmt::Display for TriggerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TriggerCategory::Wishes => "WISHES",
            TriggerCategory::Emotions => "EMOTIONS",
            TriggerCategory::Impersonal => "IMPERSONAL",
            TriggerCategory::Recommendations => "RECOMMENDATIONS",
            TriggerCategory::DoubtDenial => "DOUBT_DENIAL",
            TriggerCategory::Ojala => "OJALA",
        };
        write!(f, "{s}")
    }
}

/// A single fill-in-the-blank template. `lead_in` is the main-clause text
/// preceding the embedded-clause blank; `{P}` is replaced with the target
/// person's pronoun and `{V}` with the conjugated verb.
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    pub category: TriggerCategory,
    pub lead_in: &'static str,
    pub template: &'static str,
}

const TRIGGERS: &[Trigger] = &[
    // WISHES
    Trigger { category: TriggerCategory::Wishes, lead_in: "Quiero que", template: "Quiero que {P} {V}." },
    Trigger { category: TriggerCategory::Wishes, lead_in: "Espero que", template: "Espero que {P} {V}." },
    Trigger { category: TriggerCategory::Wishes, lead_in: "Deseo que", template: "Deseo que {P} {V}." },
    // OJALA rides in the WISHES family but is tagged separately so the
    // Generator/Validator can cite the right rule.
    Trigger { category: TriggerCategory::Ojala, lead_in: "Ojalá que", template: "Ojalá que {P} {V}." },
    Trigger { category: TriggerCategory::Ojala, lead_in: "Ojalá", template: "Ojalá {P} {V}." },
    // EMOTIONS
    Trigger { category: TriggerCategory::Emotions, lead_in: "Me alegro de que", template: "Me alegro de que {P} {V}." },
    Trigger { category: TriggerCategory::Emotions, lead_in: "Temo que", template: "Temo que {P} {V}." },
    Trigger { category: TriggerCategory::Emotions, lead_in: "Siento que", template: "Siento que {P} {V}." },
    // IMPERSONAL
    Trigger { category: TriggerCategory::Impersonal, lead_in: "Es importante que", template: "Es importante que {P} {V}." },
    Trigger { category: TriggerCategory::Impersonal, lead_in: "Es necesario que", template: "Es necesario que {P} {V}." },
    Trigger { category: TriggerCategory::Impersonal, lead_in: "Es posible que", template: "Es posible que {P} {V}." },
    // RECOMMENDATIONS
    Trigger { category: TriggerCategory::Recommendations, lead_in: "Recomiendo que", template: "Recomiendo que {P} {V}." },
    Trigger { category: TriggerCategory::Recommendations, lead_in: "Sugiero que", template: "Sugiero que {P} {V}." },
    Trigger { category: TriggerCategory::Recommendations, lead_in: "Te aconsejo que", template: "Te aconsejo que {P} {V}." },
    // DOUBT_DENIAL
    Trigger { category: TriggerCategory::DoubtDenial, lead_in: "Dudo que", template: "Dudo que {P} {V}." },
    Trigger { category: TriggerCategory::DoubtDenial, lead_in: "No creo que", template: "No creo que {P} {V}." },
    Trigger { category: TriggerCategory::DoubtDenial, lead_in: "Niego que", template: "Niego que {P} {V}." },
];

/// All templates declared for a category.
pub fn templates_for(category: TriggerCategory) -> impl Iterator<Item = &'static Trigger> {
    TRIGGERS.iter().filter(move |t| t.category == category)
}

pub fn all_triggers() -> impl Iterator<Item = &'static Trigger> {
    TRIGGERS.iter()
}

impl Trigger {
    /// Render the prompt text, substituting the pronoun and verb form.
    pub fn render(&self, pronoun: &str, verb_form: &str) -> String {
        self.template.replace("{P}", pronoun).replace("{V}", verb_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_at_least_one_template() {
        for category in TriggerCategory::ALL {
            assert!(templates_for(category).count() >= 1, "{category} has no templates");
        }
    }

    #[test]
    fn render_substitutes_both_slots() {
        let t = templates_for(TriggerCategory::Wishes).next().unwrap();
        let rendered = t.render("yo", "hable");
        assert!(rendered.contains("yo"));
        assert!(rendered.contains("hable"));
    }
}
