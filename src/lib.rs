pub mod cli;
pub mod conjugator;
pub mod error;
pub mod generator;
pub mod grammar;
pub mod io;
pub mod rules;
pub mod scheduler;
pub mod validator;

pub use conjugator::conjugate;
pub use error::{AppError, EngineError};
pub use rules::RuleRef;
