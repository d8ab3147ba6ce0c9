//! Cross-module flows: Generator -> Validator -> Scheduler, and snapshot
//! round-trips through a temp file.

use chrono::Utc;
use subjunctive_engine::conjugator;
use subjunctive_engine::generator::{self, GenerateOptions};
use subjunctive_engine::grammar::types::{Person, Tense};
use subjunctive_engine::grammar::verbs;
use subjunctive_engine::io::{export_state, import_state};
use subjunctive_engine::scheduler::Scheduler;
use subjunctive_engine::validator;

#[test]
fn a_correct_answer_advances_the_card_out_of_new() {
    let opts = GenerateOptions::default();
    let exercise = generator::generate(generator::Difficulty::Beginner, 3, &opts).unwrap();

    let mut scheduler = Scheduler::new();
    let card = scheduler.ensure_card(&exercise.verb, exercise.tense, exercise.person);

    let verb = verbs::lookup(&exercise.verb).unwrap();
    let result = validator::validate(
        &verb,
        exercise.tense,
        exercise.person,
        &exercise.expected,
        &exercise.alternatives,
        &exercise.expected,
    );
    assert!(result.is_correct);

    let updated = scheduler.record_result(&card.card_id, 5, 2500, Utc::now()).unwrap();
    assert_eq!(updated.repetitions, 1);
    assert_eq!(updated.total_reviews, 1);
    assert_eq!(updated.correct_reviews, 1);
}

#[test]
fn a_wrong_answer_is_classified_and_lowers_mastery() {
    let verb = verbs::lookup("querer").unwrap();
    let expected = conjugator::conjugate("querer", Tense::PresentSubj, Person::FirstSg).unwrap();
    let result = validator::validate(&verb, Tense::PresentSubj, Person::FirstSg, &expected, &[], "quera");
    assert!(!result.is_correct);

    let mut scheduler = Scheduler::new();
    let card = scheduler.ensure_card("querer", Tense::PresentSubj, Person::FirstSg);
    let updated = scheduler.record_result(&card.card_id, 1, 6000, Utc::now()).unwrap();
    assert_eq!(updated.mastery, 0.0);
    assert_eq!(updated.interval_days, 1);
}

#[test]
fn snapshot_round_trips_through_a_temp_file() {
    let mut scheduler = Scheduler::new();
    for (verb, tense, person) in [
        ("hablar", Tense::PresentSubj, Person::FirstSg),
        ("ser", Tense::ImperfectSubjRa, Person::ThirdPl),
        ("huir", Tense::PresentSubj, Person::FirstPl),
    ] {
        let card = scheduler.ensure_card(verb, tense, person);
        scheduler.record_result(&card.card_id, 4, 3200, Utc::now()).unwrap();
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.tsv");

    let file = std::fs::File::create(&path).unwrap();
    export_state(&scheduler, file).unwrap();

    let file = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
    let restored = import_state(file).unwrap();

    let mut original: Vec<_> = scheduler.all_cards().collect();
    let mut restored_cards: Vec<_> = restored.all_cards().collect();
    original.sort_by(|a, b| a.card_id.cmp(&b.card_id));
    restored_cards.sort_by(|a, b| a.card_id.cmp(&b.card_id));
    assert_eq!(original, restored_cards);
}

#[test]
fn beginner_exercises_never_require_an_irregular_or_changing_verb() {
    let opts = GenerateOptions::default();
    for seed in 0..30 {
        let exercise = generator::generate(generator::Difficulty::Beginner, seed, &opts).unwrap();
        let verb = verbs::lookup(&exercise.verb).unwrap();
        assert!(!verb.irregular);
        assert!(verb.stem_change.is_none());
        assert!(verb.spelling_change.is_none());
    }
}

#[test]
fn expert_generation_can_surface_the_full_irregular_and_imperfect_range() {
    let opts = GenerateOptions::default();
    let mut saw_irregular = false;
    let mut saw_imperfect = false;
    for seed in 0..60 {
        let exercise = generator::generate(generator::Difficulty::Expert, seed, &opts).unwrap();
        let verb = verbs::lookup(&exercise.verb).unwrap();
        saw_irregular |= verb.irregular;
        saw_imperfect |= exercise.tense.is_imperfect();
    }
    assert!(saw_irregular);
    assert!(saw_imperfect);
}
