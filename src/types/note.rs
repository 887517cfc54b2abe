use serde::{Deserialize, Serialize};

/// One matched table row, before id assignment and sanitization. Transient;
/// consumed immediately by the deck builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
	pub id:          String,
	pub question:    String,
	pub answer:      String,
	pub image_paths: Vec<String>,
}

/// A finished flashcard entry. The id is never empty once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
	pub id:       String,
	pub question: String,
	pub answer:   String,
}
