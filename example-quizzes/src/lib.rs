pub mod anxiety_triage;
pub mod sleep;
pub mod therapy_check;

// Re-export anxiety_triage quiz
pub use anxiety_triage::anxiety_triage;

// Re-export sleep quiz
pub use sleep::{SLEEP_JSON, sleep};

// Re-export therapy_check quiz
pub use therapy_check::therapy_check;
