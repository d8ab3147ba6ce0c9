use crate::grammar::triggers::TriggerCategory;
use crate::grammar::types::{Person, Tense};
use crate::generator::Difficulty;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "subjunctive-cli",
    version,
    author = "Vyom A. Shah",
    about = "Spanish-subjunctive conjugation, validation, and exercise generation",
    long_about = "Conjugate Spanish verbs in the subjunctive mood, validate learner answers, generate WEIRDO-trigger exercises, and drive an SM-2 review schedule."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Conjugate a single verb for one (tense, person)
    Conjugate {
        /// Infinitive, from the declared verb set
        verb: String,

        #[arg(short, long, value_enum, default_value = "present-subj")]
        tense: TenseArg,

        #[arg(short, long, value_enum, default_value = "first-sg")]
        person: PersonArg,
    },

    /// Print the full six-person table for one (verb, tense)
    Table {
        verb: String,

        #[arg(short, long, value_enum, default_value = "present-subj")]
        tense: TenseArg,
    },

    /// Validate a learner's submitted answer
    Validate {
        verb: String,

        #[arg(short, long, value_enum, default_value = "present-subj")]
        tense: TenseArg,

        #[arg(short, long, value_enum, default_value = "first-sg")]
        person: PersonArg,

        /// What the learner typed
        submitted: String,
    },

    /// Generate one exercise at a difficulty level
    Generate {
        #[arg(value_enum)]
        difficulty: DifficultyArg,

        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Determinism seed; same seed + parameters reproduce the same exercise
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },

    /// Run an interactive review session over a fresh in-memory scheduler
    Review {
        /// Load scheduler state from a snapshot file before starting
        #[arg(long)]
        state_in: Option<PathBuf>,

        /// Save scheduler state to a snapshot file on exit
        #[arg(long)]
        state_out: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value = "beginner")]
        difficulty: DifficultyArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "kebab-case")]
pub enum TenseArg {
    PresentSubj,
    ImperfectSubjRa,
    ImperfectSubjSe,
}

impl From<TenseArg> for Tense {
    fn from(arg: TenseArg) -> Self {
        match arg {
            TenseArg::PresentSubj => Tense::PresentSubj,
            TenseArg::ImperfectSubjRa => Tense::ImperfectSubjRa,
            TenseArg::ImperfectSubjSe => Tense::ImperfectSubjSe,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "kebab-case")]
pub enum PersonArg {
    FirstSg,
    SecondSg,
    ThirdSg,
    FirstPl,
    SecondPl,
    ThirdPl,
}

impl From<PersonArg> for Person {
    fn from(arg: PersonArg) -> Self {
        match arg {
            PersonArg::FirstSg => Person::FirstSg,
            PersonArg::SecondSg => Person::SecondSg,
            PersonArg::ThirdSg => Person::ThirdSg,
            PersonArg::FirstPl => Person::FirstPl,
            PersonArg::SecondPl => Person::SecondPl,
            PersonArg::ThirdPl => Person::ThirdPl,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "kebab-case")]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[value(rename_all = "kebab-case")]
pub enum CategoryArg {
    Wishes,
    Emotions,
    Impersonal,
    Recommendations,
    DoubtDenial,
    Ojala,
}

impl From<CategoryArg> for TriggerCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Wishes => TriggerCategory::Wishes,
            CategoryArg::Emotions => TriggerCategory::Emotions,
            CategoryArg::Impersonal => TriggerCategory::Impersonal,
            CategoryArg::Recommendations => TriggerCategory::Recommendations,
            CategoryArg::DoubtDenial => TriggerCategory::DoubtDenial,
            CategoryArg::Ojala => TriggerCategory::Ojala,
        }
    }
}
