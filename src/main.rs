use chrono::Utc;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use subjunctive_engine::cli::{Cli, Commands};
use subjunctive_engine::error::Result;
use subjunctive_engine::generator::{self, GenerateOptions};
use subjunctive_engine::grammar::types::{Person, Tense};
use subjunctive_engine::grammar::verbs;
use subjunctive_engine::io::{export_state, import_state};
use subjunctive_engine::scheduler::Scheduler;
use subjunctive_engine::validator::{self, ErrorKind};
use subjunctive_engine::{conjugator, AppError};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Conjugate { verb, tense, person } => {
            let form = conjugator::conjugate(&verb, tense.into(), person.into())?;
            println!("{form}");
        }

        Commands::Table { verb, tense } => {
            let table = conjugator::full_table(&verb, tense.into())?;
            for (person, form) in Person::ALL.into_iter().zip(table) {
                println!("{person:<5} {form}");
            }
        }

        Commands::Validate { verb, tense, person, submitted } => {
            let verb_data = verbs::lookup(&verb).ok_or_else(|| {
                AppError::InvalidInput(format!("unknown verb: {verb}"))
            })?;
            let tense: Tense = tense.into();
            let person: Person = person.into();
            let expected = conjugator::conjugate(&verb, tense, person)?;
            let alternatives = sibling_imperfect(&verb, tense, person)?;
            let result = validator::validate(&verb_data, tense, person, &expected, &alternatives, &submitted);
            print_validation(&result);
        }

        Commands::Generate { difficulty, category, seed } => {
            let opts = GenerateOptions { category: category.map(Into::into), ..Default::default() };
            let exercise = generator::generate(difficulty.into(), seed, &opts)?;
            println!("{}", exercise.prompt);
            println!("(expected: {})", exercise.expected);
            if !exercise.alternatives.is_empty() {
                println!("(also accepted: {})", exercise.alternatives.join(", "));
            }
            for hint in &exercise.hints {
                println!("hint: {hint:?}");
            }
        }

        Commands::Review { state_in, state_out, difficulty } => {
            run_review(state_in, state_out, difficulty.into())?;
        }
    }

    Ok(())
}

fn sibling_imperfect(verb: &str, tense: Tense, person: Person) -> Result<Vec<String>> {
    Ok(match tense {
        Tense::ImperfectSubjRa => vec![conjugator::conjugate(verb, Tense::ImperfectSubjSe, person)?],
        Tense::ImperfectSubjSe => vec![conjugator::conjugate(verb, Tense::ImperfectSubjRa, person)?],
        Tense::PresentSubj => Vec::new(),
    })
}

fn print_validation(result: &validator::ValidationResult) {
    if result.is_correct {
        println!("correct ({})", result.matched_form.as_deref().unwrap_or(""));
    } else {
        println!("incorrect: {:?}", result.error.unwrap_or(ErrorKind::Unrecognized));
        if let Some(suggestion) = &result.suggestion {
            println!("suggestion: {suggestion:?}");
        }
    }
}

fn run_review(
    state_in: Option<std::path::PathBuf>,
    state_out: Option<std::path::PathBuf>,
    difficulty: generator::Difficulty,
) -> Result<()> {
    let mut scheduler = match &state_in {
        Some(path) => {
            let file = std::io::BufReader::new(std::fs::File::open(path)?);
            import_state(file)?
        }
        None => Scheduler::new(),
    };

    println!("Review session. Type your answer, or 'quit' to stop.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut seed = 0u64;

    loop {
        let opts = GenerateOptions::default();
        let exercise = generator::generate(difficulty, seed, &opts)?;
        seed += 1;

        println!("\n{}", exercise.prompt);
        print!("> ");
        stdout.flush()?;

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer)?;
        let answer = answer.trim();
        if answer.eq_ignore_ascii_case("quit") {
            break;
        }

        let start = Instant::now();
        let verb_data = verbs::lookup(&exercise.verb).expect("exercise verb is always declared");
        let result =
            validator::validate(&verb_data, exercise.tense, exercise.person, &exercise.expected, &exercise.alternatives, answer);
        print_validation(&result);

        let quality = quality_from_result(&result);
        let response_ms = start.elapsed().as_millis().min(u32::MAX as u128) as u32;

        let card = scheduler.ensure_card(&exercise.verb, exercise.tense, exercise.person);
        scheduler.record_result(&card.card_id, quality, response_ms, Utc::now())?;
    }

    if let Some(path) = state_out {
        let file = std::fs::File::create(path)?;
        export_state(&scheduler, file)?;
    }

    Ok(())
}

/// Map a ValidationResult to the SM-2 quality scale for the review loop's
/// automatic scoring (no manual quality entry).
fn quality_from_result(result: &validator::ValidationResult) -> u8 {
    if result.is_correct {
        5
    } else {
        match result.error {
            Some(ErrorKind::AccentOnly) => 4,
            Some(ErrorKind::WrongPerson) | Some(ErrorKind::EndingMismatch) => 3,
            _ => 1,
        }
    }
}
