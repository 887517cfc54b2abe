use rand::Rng;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Namespace for content-derived note ids. Fixed, so identical content maps
/// to the same id on every run.
const NOTE_NAMESPACE: Uuid = Uuid::NAMESPACE_OID;

/// Generate a stable id for a note from its content. Rows that carry no
/// explicit id receive the same generated id on every re-run.
#[instrument(skip(question, answer))]
pub fn note_guid(question: &str, answer: &str) -> String {
	let content = format!("{}__{}", question, answer);
	let id = Uuid::new_v5(&NOTE_NAMESPACE, content.as_bytes());
	debug!("Generated note id {}", id);
	id.to_string()
}

/// Fallback deck id for title lines that carry none. Not collision-free:
/// re-running without a stored id produces a different deck identity.
pub fn random_deck_id() -> i64 {
	rand::thread_rng().gen_range(100_000..=999_999)
}
