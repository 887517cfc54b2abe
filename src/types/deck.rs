use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::note::Note;

/// Deck name and optional explicit id, taken from the title line. Immutable
/// after extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckInfo {
	pub id:   Option<i64>,
	pub name: String,
}

/// Accumulates sanitized notes and referenced media over the single input
/// pass. Owns the table exclusively until it is frozen.
pub struct DeckBuilder {
	pub(crate) deck_id:        i64,
	pub(crate) deck_name:      String,
	pub(crate) notes:          Vec<Note>,
	pub(crate) media_files:    BTreeSet<String>,
	pub(crate) separator_seen: bool,
}

/// The frozen state handed to the writers once all input is consumed. Never
/// mutated; all three writers read the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckSnapshot {
	pub deck_id:     i64,
	pub deck_name:   String,
	pub notes:       Vec<Note>,
	pub media_files: BTreeSet<String>,
}
