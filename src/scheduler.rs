//! The Scheduler: per-card SM-2 state, an adaptive-difficulty overlay, and
//! the only mutable state in the engine (spec §4.5).

use crate::error::{EngineError, EngineResult};
use crate::generator::Difficulty;
use crate::grammar::types::{Person, Tense};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

const TARGET_RESPONSE_MS: u32 = 4000;
const ROLLING_WINDOW: usize = 20;
const MIN_EASE: f64 = 1.3;
const MAX_EASE: f64 = 4.0;
const MAX_INTERVAL_DAYS: i64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    New,
    Learning,
    Review,
    Mastered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub card_id: String,
    pub verb: String,
    pub tense: Tense,
    pub person: Person,
    pub ease_factor: f64,
    pub interval_days: i64,
    pub repetitions: u32,
    pub due_at: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub total_reviews: u32,
    pub correct_reviews: u32,
    pub average_response_ms: u32,
    pub mastery: f64,
    pub current_phase: Phase,
}

/// Identity of a card: opaque, derived from (verb, tense, person). Not
/// meaningful as anything but a stable map key and sort key.
pub fn card_id(verb: &str, tense: Tense, person: Person) -> String {
    format!("{verb}|{tense}|{person}")
}

impl Card {
    fn new(verb: &str, tense: Tense, person: Person) -> Self {
        Self {
            card_id: card_id(verb, tense, person),
            verb: verb.to_string(),
            tense,
            person,
            ease_factor: 2.5,
            interval_days: 0,
            repetitions: 0,
            due_at: DateTime::<Utc>::from_timestamp(0, 0).expect("unix epoch is representable"),
            last_reviewed: None,
            total_reviews: 0,
            correct_reviews: 0,
            average_response_ms: 0,
            mastery: 0.0,
            current_phase: Phase::New,
        }
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    cards: HashMap<String, Card>,
    /// Rolling window of (was_correct, response_ms) over the last
    /// `ROLLING_WINDOW` reviews, feeding the adaptive-difficulty
    /// recommendation. Not part of the exported snapshot.
    rolling: VecDeque<(bool, u32)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent creation of a card at SM-2 defaults.
    pub fn ensure_card(&mut self, verb: &str, tense: Tense, person: Person) -> Card {
        let id = card_id(verb, tense, person);
        self.cards.entry(id).or_insert_with(|| Card::new(verb, tense, person)).clone()
    }

    pub fn get(&self, card_id: &str) -> Option<&Card> {
        self.cards.get(card_id)
    }

    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Insert or replace a card wholesale. Used by snapshot import; bypasses
    /// SM-2 arithmetic entirely.
    pub(crate) fn put_card(&mut self, card: Card) {
        self.cards.insert(card.card_id.clone(), card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.rolling.clear();
    }

    /// Apply one SM-2 + adaptive-difficulty update. No partial updates: on
    /// `InvalidQuality`/`UnknownCard`, the card map is untouched.
    pub fn record_result(
        &mut self,
        card_id: &str,
        quality: u8,
        response_ms: u32,
        now: DateTime<Utc>,
    ) -> EngineResult<Card> {
        if quality > 5 {
            return Err(EngineError::InvalidQuality(quality));
        }
        let mut card = self.cards.get(card_id).cloned().ok_or_else(|| EngineError::UnknownCard(card_id.to_string()))?;

        sm2_update(&mut card, quality);
        apply_adaptive_overlay(&mut card, response_ms);
        card.due_at = now + Duration::days(card.interval_days);
        card.last_reviewed = Some(now);

        card.total_reviews += 1;
        if quality >= 3 {
            card.correct_reviews += 1;
        }
        let prior_total = (card.total_reviews - 1) as u64;
        card.average_response_ms =
            ((card.average_response_ms as u64 * prior_total + response_ms as u64) / card.total_reviews as u64) as u32;

        let mastery_delta = if quality >= 4 {
            0.1
        } else if quality < 3 {
            -0.15
        } else {
            0.0
        };
        card.mastery = (card.mastery + mastery_delta).clamp(0.0, 1.0);

        advance_phase(&mut card, quality);

        self.cards.insert(card.card_id.clone(), card.clone());

        if self.rolling.len() == ROLLING_WINDOW {
            self.rolling.pop_front();
        }
        self.rolling.push_back((quality >= 3, response_ms));

        log::debug!(
            "record_result card={} quality={} interval_days={} ease={:.2} phase={:?}",
            card.card_id,
            quality,
            card.interval_days,
            card.ease_factor,
            card.current_phase
        );

        Ok(card)
    }

    /// Due cards (`due_at <= now`), most-overdue first with the tiebreak
    /// cascade, followed by never-reviewed cards, truncated to `limit`.
    pub fn due(&self, now: DateTime<Utc>, limit: Option<usize>) -> Vec<String> {
        let mut due: Vec<&Card> =
            self.cards.values().filter(|c| c.current_phase != Phase::New && c.due_at <= now).collect();
        due.sort_by(|a, b| {
            let overdue_a = now - a.due_at;
            let overdue_b = now - b.due_at;
            overdue_b
                .cmp(&overdue_a)
                .then_with(|| a.mastery.partial_cmp(&b.mastery).unwrap_or(std::cmp::Ordering::Equal))
                .then_with(|| a.ease_factor.partial_cmp(&b.ease_factor).unwrap_or(std::cmp::Ordering::Equal))
                .then_with(|| a.card_id.cmp(&b.card_id))
        });

        let mut new_cards: Vec<&Card> = self.cards.values().filter(|c| c.current_phase == Phase::New).collect();
        new_cards.sort_by(|a, b| a.card_id.cmp(&b.card_id));

        let mut ordered: Vec<String> = due.into_iter().chain(new_cards).map(|c| c.card_id.clone()).collect();
        if let Some(limit) = limit {
            ordered.truncate(limit);
        }
        ordered
    }

    /// Session-level difficulty recommendation from the rolling window
    /// (spec §4.5). Advisory only: the caller may override it.
    pub fn recommended_difficulty(&self, current: Difficulty) -> Difficulty {
        if self.rolling.is_empty() {
            return current;
        }
        let correct = self.rolling.iter().filter(|(ok, _)| *ok).count();
        let accuracy = correct as f64 / self.rolling.len() as f64;
        let mean_response_ms =
            self.rolling.iter().map(|(_, ms)| *ms as u64).sum::<u64>() / self.rolling.len() as u64;

        if accuracy >= 0.85 && (mean_response_ms as u32) < TARGET_RESPONSE_MS {
            raise_difficulty(current)
        } else if accuracy < 0.60 {
            lower_difficulty(current)
        } else {
            current
        }
    }
}

fn raise_difficulty(d: Difficulty) -> Difficulty {
    match d {
        Difficulty::Beginner => Difficulty::Intermediate,
        Difficulty::Intermediate => Difficulty::Advanced,
        Difficulty::Advanced => Difficulty::Expert,
        Difficulty::Expert => Difficulty::Expert,
    }
}

fn lower_difficulty(d: Difficulty) -> Difficulty {
    match d {
        Difficulty::Beginner => Difficulty::Beginner,
        Difficulty::Intermediate => Difficulty::Beginner,
        Difficulty::Advanced => Difficulty::Intermediate,
        Difficulty::Expert => Difficulty::Advanced,
    }
}

fn sm2_update(card: &mut Card, quality: u8) {
    if quality < 3 {
        card.repetitions = 0;
        card.interval_days = 1;
    } else {
        card.interval_days = match card.repetitions {
            0 => 1,
            1 => 6,
            _ => (card.interval_days as f64 * card.ease_factor).round() as i64,
        };
        card.repetitions += 1;
    }

    let q = quality as f64;
    let delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
    card.ease_factor = (card.ease_factor + delta).clamp(MIN_EASE, MAX_EASE);
    card.interval_days = card.interval_days.min(MAX_INTERVAL_DAYS);
}

fn apply_adaptive_overlay(card: &mut Card, response_ms: u32) {
    let response_multiplier = if response_ms as f64 > 2.0 * TARGET_RESPONSE_MS as f64 {
        0.8
    } else if (response_ms as f64) < 0.5 * TARGET_RESPONSE_MS as f64 {
        1.2
    } else {
        1.0
    };
    let category_multiplier = if card.tense.is_imperfect() { 0.9 } else { 1.0 };
    card.interval_days =
        ((card.interval_days as f64 * response_multiplier * category_multiplier).round() as i64).max(1);
}

fn advance_phase(card: &mut Card, quality: u8) {
    if card.current_phase == Phase::New {
        card.current_phase = Phase::Learning;
    }
    if card.current_phase == Phase::Learning && card.repetitions >= 2 {
        card.current_phase = Phase::Review;
    }
    if card.current_phase == Phase::Review && card.mastery >= 0.9 && card.interval_days >= 21 {
        card.current_phase = Phase::Mastered;
    }
    if card.current_phase == Phase::Mastered && quality < 3 {
        card.current_phase = Phase::Review;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(days: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::days(days)
    }

    #[test]
    fn quality_two_resets_repetitions_and_interval() {
        let mut sched = Scheduler::new();
        let card = sched.ensure_card("hablar", Tense::PresentSubj, Person::FirstSg);
        sched.record_result(&card.card_id, 5, 4000, t(0)).unwrap();
        let updated = sched.record_result(&card.card_id, 2, 4000, t(1)).unwrap();
        assert_eq!(updated.repetitions, 0);
        assert_eq!(updated.interval_days, 1);
    }

    #[test]
    fn two_perfect_answers_follow_one_then_six() {
        let mut sched = Scheduler::new();
        let card = sched.ensure_card("hablar", Tense::PresentSubj, Person::FirstSg);
        let first = sched.record_result(&card.card_id, 5, 4000, t(0)).unwrap();
        assert_eq!(first.interval_days, 1);
        let second = sched.record_result(&card.card_id, 5, 4000, t(1)).unwrap();
        assert_eq!(second.interval_days, 6);
    }

    #[test]
    fn ease_factor_never_leaves_bounds() {
        let mut sched = Scheduler::new();
        let card = sched.ensure_card("hablar", Tense::PresentSubj, Person::FirstSg);
        let mut id = card.card_id;
        for day in 0..50 {
            let updated = sched.record_result(&id, 0, 4000, t(day)).unwrap();
            assert!(updated.ease_factor >= MIN_EASE && updated.ease_factor <= MAX_EASE);
            id = updated.card_id;
        }
    }

    #[test]
    fn invalid_quality_is_rejected_without_mutation() {
        let mut sched = Scheduler::new();
        let card = sched.ensure_card("hablar", Tense::PresentSubj, Person::FirstSg);
        let before = sched.get(&card.card_id).cloned().unwrap();
        assert!(matches!(sched.record_result(&card.card_id, 9, 4000, t(0)), Err(EngineError::InvalidQuality(9))));
        assert_eq!(sched.get(&card.card_id).cloned().unwrap(), before);
    }

    #[test]
    fn unknown_card_is_rejected() {
        let mut sched = Scheduler::new();
        assert!(matches!(sched.record_result("nonexistent", 5, 4000, t(0)), Err(EngineError::UnknownCard(_))));
    }

    #[test]
    fn due_returns_empty_for_fresh_scheduler() {
        let sched = Scheduler::new();
        assert!(sched.due(t(0), None).is_empty());
    }

    #[test]
    fn mastered_card_drops_back_to_review_on_failure() {
        let mut sched = Scheduler::new();
        let card = sched.ensure_card("ser", Tense::PresentSubj, Person::FirstSg);
        let mut id = card.card_id;
        for day in 0..10 {
            let updated = sched.record_result(&id, 5, 1000, t(day * 30)).unwrap();
            id = updated.card_id;
        }
        let forced_mastered = sched.get(&id).cloned().unwrap();
        assert_eq!(forced_mastered.current_phase, Phase::Mastered);
        let after_failure = sched.record_result(&id, 1, 4000, t(1000)).unwrap();
        assert_eq!(after_failure.current_phase, Phase::Review);
    }
}
