//! Take the intake triage quiz in the terminal.
//!
//! Run with: cargo run -p quiz-dialoguer-wizard --example triage
//! Set RUST_LOG=debug to watch visibility being recomputed.

use quiz_dialoguer_wizard::DialoguerFrontend;
use quiz_engine::{InMemoryBackend, QuizError, QuizSession};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let backend = InMemoryBackend::new().with_quiz(example_quizzes::anxiety_triage());
    let mut session = QuizSession::load(&backend, "anxiety-triage")?;

    match session.run(&DialoguerFrontend::new()) {
        Ok(()) => {
            println!();
            println!("Thank you! Our doctors will review your answers before your first session.");
        }
        Err(QuizError::Cancelled) => println!("No problem, come back any time."),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
