//! Take any quiz stored as a backend JSON payload and print the submission.
//!
//! Run with: cargo run -p quiz-dialoguer-wizard --example from_json -- path/to/quiz.json
//! Without a path, the bundled sleep quiz is used.

use anyhow::Context;
use quiz_dialoguer_wizard::DialoguerFrontend;
use quiz_engine::{InMemoryBackend, QuizDefinition, QuizSession, check_definition};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let quiz: QuizDefinition = match std::env::args().nth(1) {
        Some(path) => {
            let json =
                std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("parsing {path}"))?
        }
        None => example_quizzes::sleep()?,
    };

    for issue in check_definition(&quiz) {
        tracing::warn!("{issue}");
    }

    let slug = quiz.slug.clone();
    let quiz_id = quiz.id.clone();
    let backend = InMemoryBackend::new().with_quiz(quiz);
    let mut session = QuizSession::load(&backend, &slug)?;
    session.run(&DialoguerFrontend::new().confirm_submit(false))?;

    if let Some(response) = backend.response(&quiz_id) {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
