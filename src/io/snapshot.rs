//! Bit-exact snapshot export/import (spec §6): newline-delimited,
//! tab-separated records of every card in a `Scheduler`.

use crate::error::{EngineError, EngineResult};
use crate::grammar::types::{Person, Tense};
use crate::scheduler::{Card, Phase, Scheduler};
use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};
use std::str::FromStr;

const HEADER: &str = "card_id\tverb\ttense\tperson\tease_factor\tinterval_days\trepetitions\tdue_at\tlast_reviewed\ttotal_reviews\tcorrect_reviews\taverage_response_ms\tmastery\tcurrent_phase";

/// Serialize every card to the fixed TSV format, header first.
pub fn export_state<W: Write>(scheduler: &Scheduler, mut out: W) -> EngineResult<()> {
    writeln!(out, "{HEADER}").map_err(io_to_corrupt)?;
    let mut cards: Vec<&Card> = scheduler.all_cards().collect();
    cards.sort_by(|a, b| a.card_id.cmp(&b.card_id));
    for card in cards {
        writeln!(out, "{}", format_row(card)).map_err(io_to_corrupt)?;
    }
    Ok(())
}

/// Parse a TSV snapshot back into a fresh `Scheduler`. Atomic: a malformed
/// header or any malformed row aborts before any card is inserted.
pub fn import_state<R: BufRead>(input: R) -> EngineResult<Scheduler> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| EngineError::CorruptSnapshot("empty file".to_string()))?
        .map_err(io_to_corrupt)?;
    if header != HEADER {
        return Err(EngineError::CorruptSnapshot(format!("unexpected header: {header}")));
    }

    let mut cards = Vec::new();
    for line in lines {
        let line = line.map_err(io_to_corrupt)?;
        if line.is_empty() {
            continue;
        }
        cards.push(parse_row(&line)?);
    }

    let mut scheduler = Scheduler::new();
    for card in cards {
        scheduler.put_card(card);
    }
    Ok(scheduler)
}

fn io_to_corrupt(e: std::io::Error) -> EngineError {
    EngineError::CorruptSnapshot(e.to_string())
}

fn format_row(card: &Card) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{:.5}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{:.5}\t{}",
        card.card_id,
        card.verb,
        card.tense,
        card.person,
        card.ease_factor,
        card.interval_days,
        card.repetitions,
        card.due_at.to_rfc3339(),
        card.last_reviewed.map(|t| t.to_rfc3339()).unwrap_or_default(),
        card.total_reviews,
        card.correct_reviews,
        card.average_response_ms,
        card.mastery,
        phase_str(card.current_phase),
    )
}

fn parse_row(line: &str) -> EngineResult<Card> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != 14 {
        return Err(EngineError::CorruptSnapshot(format!("expected 14 fields, got {}", fields.len())));
    }
    let bad = |field: &str| EngineError::CorruptSnapshot(format!("malformed field: {field}"));

    let tense = parse_tense(fields[2]).ok_or_else(|| bad(fields[2]))?;
    let person = parse_person(fields[3]).ok_or_else(|| bad(fields[3]))?;
    let due_at = DateTime::parse_from_rfc3339(fields[7]).map_err(|_| bad(fields[7]))?.with_timezone(&Utc);
    let last_reviewed = if fields[8].is_empty() {
        None
    } else {
        Some(DateTime::parse_from_rfc3339(fields[8]).map_err(|_| bad(fields[8]))?.with_timezone(&Utc))
    };

    Ok(Card {
        card_id: fields[0].to_string(),
        verb: fields[1].to_string(),
        tense,
        person,
        ease_factor: f64::from_str(fields[4]).map_err(|_| bad(fields[4]))?,
        interval_days: i64::from_str(fields[5]).map_err(|_| bad(fields[5]))?,
        repetitions: u32::from_str(fields[6]).map_err(|_| bad(fields[6]))?,
        due_at,
        last_reviewed,
        total_reviews: u32::from_str(fields[9]).map_err(|_| bad(fields[9]))?,
        correct_reviews: u32::from_str(fields[10]).map_err(|_| bad(fields[10]))?,
        average_response_ms: u32::from_str(fields[11]).map_err(|_| bad(fields[11]))?,
        mastery: f64::from_str(fields[12]).map_err(|_| bad(fields[12]))?,
        current_phase: parse_phase(fields[13]).ok_or_else(|| bad(fields[13]))?,
    })
}

fn phase_str(phase: Phase) -> &'static str {
    match phase {
        Phase::New => "NEW",
        Phase::Learning => "LEARNING",
        Phase::Review => "REVIEW",
        Phase::Mastered => "MASTERED",
    }
}

fn parse_phase(s: &str) -> Option<Phase> {
    match s {
        "NEW" => Some(Phase::New),
        "LEARNING" => Some(Phase::Learning),
        "REVIEW" => Some(Phase::Review),
        "MASTERED" => Some(Phase::Mastered),
        _ => None,
    }
}

fn parse_tense(s: &str) -> Option<Tense> {
    match s {
        "present_subj" => Some(Tense::PresentSubj),
        "imperfect_subj_ra" => Some(Tense::ImperfectSubjRa),
        "imperfect_subj_se" => Some(Tense::ImperfectSubjSe),
        _ => None,
    }
}

fn parse_person(s: &str) -> Option<Person> {
    match s {
        "1SG" => Some(Person::FirstSg),
        "2SG" => Some(Person::SecondSg),
        "3SG" => Some(Person::ThirdSg),
        "1PL" => Some(Person::FirstPl),
        "2PL" => Some(Person::SecondPl),
        "3PL" => Some(Person::ThirdPl),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_identity() {
        let mut scheduler = Scheduler::new();
        let card = scheduler.ensure_card("hablar", Tense::PresentSubj, Person::FirstSg);
        scheduler
            .record_result(&card.card_id, 5, 3000, Utc::now())
            .unwrap();
        scheduler.ensure_card("ser", Tense::ImperfectSubjRa, Person::ThirdPl);

        let mut buf = Vec::new();
        export_state(&scheduler, &mut buf).unwrap();

        let restored = import_state(buf.as_slice()).unwrap();
        let mut original: Vec<&Card> = scheduler.all_cards().collect();
        let mut restored_cards: Vec<&Card> = restored.all_cards().collect();
        original.sort_by(|a, b| a.card_id.cmp(&b.card_id));
        restored_cards.sort_by(|a, b| a.card_id.cmp(&b.card_id));
        assert_eq!(original, restored_cards);
    }

    #[test]
    fn wrong_header_is_rejected() {
        let bad = b"not\tthe\tright\theader\n".as_slice();
        assert!(matches!(import_state(bad), Err(EngineError::CorruptSnapshot(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(import_state([].as_slice()), Err(EngineError::CorruptSnapshot(_))));
    }
}
