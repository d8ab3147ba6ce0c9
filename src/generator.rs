//! The Exercise Generator: assembles an `Exercise` from a trigger template
//! and a conjugated verb form, respecting a requested difficulty level.

use crate::conjugator::conjugate;
use crate::error::{EngineError, EngineResult};
use crate::grammar::triggers::{self, Trigger, TriggerCategory};
use crate::grammar::types::{Person, Tense};
use crate::grammar::verbs::{self, Verb};
use crate::rules::RuleRef;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// The four pedagogical difficulty levels (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// The 4-5 high-frequency irregulars folded into the Intermediate pool
/// (spec §4.4 level 2: "common stem-changers and 4-5 high-frequency
/// irregulars").
const INTERMEDIATE_IRREGULARS: &[&str] = &["ser", "estar", "ir", "tener", "hacer"];

impl Difficulty {
    fn allows_verb(self, verb: &Verb) -> bool {
        match self {
            Difficulty::Beginner => verb.stem_change.is_none() && verb.spelling_change.is_none() && !verb.irregular,
            Difficulty::Intermediate => {
                !verb.irregular || INTERMEDIATE_IRREGULARS.contains(&verb.infinitive)
            }
            Difficulty::Advanced | Difficulty::Expert => true,
        }
    }

    fn allowed_persons(self) -> &'static [Person] {
        match self {
            Difficulty::Beginner => &[Person::FirstSg, Person::SecondSg, Person::ThirdSg],
            _ => &Person::ALL,
        }
    }

    fn allowed_tenses(self) -> &'static [Tense] {
        match self {
            Difficulty::Beginner | Difficulty::Intermediate => &[Tense::PresentSubj],
            Difficulty::Advanced | Difficulty::Expert => &Tense::ALL,
        }
    }

    fn hints_enabled_by_default(self) -> bool {
        matches!(self, Difficulty::Beginner | Difficulty::Intermediate)
    }

    /// How many hint steps to keep, in the fixed order (trigger category,
    /// rule summary, verb class). Beginner keeps all three; Expert keeps
    /// at most one even when hints are requested.
    fn hint_budget(self) -> usize {
        match self {
            Difficulty::Beginner => 3,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 1,
            Difficulty::Expert => 1,
        }
    }
}

/// Optional constraints narrowing `generate`'s candidate pool.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub category: Option<TriggerCategory>,
    pub tense: Option<Tense>,
    pub forbid_verbs: Vec<String>,
    /// For Expert-level selection: explicit (verb, tense, person) weights,
    /// e.g. `1.0 - mastery`, biasing toward low-mastery/error-prone cards.
    /// Pairs absent from this list fall back to uniform weight 1.0.
    pub bias: Vec<(String, Tense, Person, f64)>,
    pub want_hints: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub verb: String,
    pub tense: Tense,
    pub person: Person,
    pub category: TriggerCategory,
    pub prompt: String,
    pub expected: String,
    pub alternatives: Vec<String>,
    pub hints: Vec<RuleRef>,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// Build one exercise at the requested difficulty, deterministic under a
/// fixed `seed` and `opts`.
pub fn generate(difficulty: Difficulty, seed: u64, opts: &GenerateOptions) -> EngineResult<Exercise> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let pool: Vec<&Verb> = verbs::all_verbs()
        .filter(|v| difficulty.allows_verb(v))
        .filter(|v| !opts.forbid_verbs.iter().any(|f| f == v.infinitive))
        .collect();
    if pool.is_empty() {
        return Err(EngineError::NoCandidate);
    }

    let trigger = choose_trigger(&mut rng, opts.category)?;

    let candidates: Vec<(&Verb, Person)> = pool
        .iter()
        .flat_map(|v| difficulty.allowed_persons().iter().map(move |p| (*v, *p)))
        .collect();
    if candidates.is_empty() {
        return Err(EngineError::NoCandidate);
    }
    let (verb, person) = weighted_choice(&mut rng, &candidates, &opts.bias);

    let tense = match opts.tense {
        Some(t) if difficulty.allowed_tenses().contains(&t) => t,
        Some(_) => return Err(EngineError::NoCandidate),
        None => *difficulty.allowed_tenses().choose(&mut rng).expect("non-empty"),
    };

    let expected = conjugate(verb.infinitive, tense, person)?;
    let alternatives = match tense {
        Tense::ImperfectSubjRa => vec![conjugate(verb.infinitive, Tense::ImperfectSubjSe, person)?],
        Tense::ImperfectSubjSe => vec![conjugate(verb.infinitive, Tense::ImperfectSubjRa, person)?],
        Tense::PresentSubj => Vec::new(),
    };

    let blank = format!("[{}]", verb.infinitive);
    let prompt = trigger.render(person.pronoun(), &blank);

    let want_hints = opts.want_hints.unwrap_or_else(|| difficulty.hints_enabled_by_default());
    let hints = if want_hints { assemble_hints(verb, trigger, difficulty) } else { Vec::new() };

    let explanation = explain(verb, trigger, tense, person);

    Ok(Exercise {
        verb: verb.infinitive.to_string(),
        tense,
        person,
        category: trigger.category,
        prompt,
        expected,
        alternatives,
        hints,
        explanation,
        difficulty,
    })
}

fn choose_trigger(rng: &mut ChaCha8Rng, category: Option<TriggerCategory>) -> EngineResult<&'static Trigger> {
    if let Some(category) = category {
        let candidates: Vec<&Trigger> = triggers::templates_for(category).collect();
        return candidates.choose(rng).copied().ok_or(EngineError::NoCandidate);
    }
    let weighted: Vec<TriggerCategory> =
        TriggerCategory::ALL.into_iter().filter(|c| c.weight() > 0).collect();
    let total: u32 = weighted.iter().map(|c| c.weight()).sum();
    let mut roll = rng.gen_range(0..total);
    let mut chosen = weighted[0];
    for c in &weighted {
        if roll < c.weight() {
            chosen = *c;
            break;
        }
        roll -= c.weight();
    }
    triggers::templates_for(chosen).collect::<Vec<_>>().choose(rng).copied().ok_or(EngineError::NoCandidate)
}

fn weighted_choice<'a>(
    rng: &mut ChaCha8Rng,
    candidates: &[(&'a Verb, Person)],
    bias: &[(String, Tense, Person, f64)],
) -> (&'a Verb, Person) {
    if bias.is_empty() {
        return *candidates.choose(rng).expect("non-empty");
    }
    let weights: Vec<f64> = candidates
        .iter()
        .map(|(v, p)| {
            bias.iter()
                .find(|(bv, _, bp, _)| bv.as_str() == v.infinitive && *bp == *p)
                .map(|(_, _, _, w)| w.max(0.01))
                .unwrap_or(1.0)
        })
        .collect();
    let total: f64 = weights.iter().sum();
    let mut roll = rng.gen_range(0.0..total);
    for (i, w) in weights.iter().enumerate() {
        if roll < *w {
            return candidates[i];
        }
        roll -= w;
    }
    candidates[candidates.len() - 1]
}

/// Hints in the fixed order (trigger category, rule summary, verb class),
/// truncated to the difficulty's budget.
fn assemble_hints(verb: &Verb, trigger: &Trigger, difficulty: Difficulty) -> Vec<RuleRef> {
    let mut hints = vec![RuleRef::TriggerCategory(trigger.category)];
    if let Some(sc) = verb.stem_change {
        hints.push(RuleRef::StemChange(sc.pattern));
    } else if let Some(rule) = verb.spelling_change {
        hints.push(RuleRef::SpellingChange(rule));
    } else if verb.irregular {
        hints.push(RuleRef::Irregular);
    }
    hints.push(RuleRef::VerbClass(verb.class));
    hints.truncate(difficulty.hint_budget());
    hints
}

fn explain(verb: &Verb, trigger: &Trigger, tense: Tense, person: Person) -> String {
    let mut parts = vec![format!("trigger={}", trigger.category), format!("verb={}", verb.infinitive)];
    if let Some(sc) = verb.stem_change {
        parts.push(format!("stem_change={}", sc.pattern));
    }
    if let Some(rule) = verb.spelling_change {
        parts.push(format!("spelling_change={rule}"));
    }
    parts.push(format!("tense={tense}"));
    parts.push(format!("person={person}"));
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beginner_only_uses_regular_verbs() {
        let opts = GenerateOptions::default();
        for seed in 0..20 {
            let ex = generate(Difficulty::Beginner, seed, &opts).unwrap();
            let verb = verbs::lookup(&ex.verb).unwrap();
            assert!(verb.stem_change.is_none() && verb.spelling_change.is_none() && !verb.irregular);
            assert_eq!(ex.tense, Tense::PresentSubj);
        }
    }

    #[test]
    fn same_seed_is_deterministic() {
        let opts = GenerateOptions::default();
        let a = generate(Difficulty::Advanced, 42, &opts).unwrap();
        let b = generate(Difficulty::Advanced, 42, &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn forbid_verbs_can_exhaust_the_pool() {
        let all_regular: Vec<String> = verbs::all_verbs()
            .filter(|v| v.stem_change.is_none() && v.spelling_change.is_none() && !v.irregular)
            .map(|v| v.infinitive.to_string())
            .collect();
        let opts = GenerateOptions { forbid_verbs: all_regular, ..Default::default() };
        assert!(matches!(generate(Difficulty::Beginner, 1, &opts), Err(EngineError::NoCandidate)));
    }

    #[test]
    fn imperfect_populates_the_sibling_alternative() {
        let opts = GenerateOptions { tense: Some(Tense::ImperfectSubjRa), ..Default::default() };
        let ex = generate(Difficulty::Advanced, 7, &opts).unwrap();
        assert_eq!(ex.alternatives.len(), 1);
    }
}
