use std::path::Path;

use tracing::{info, instrument};

use crate::{error::DeckError, types::deck::DeckSnapshot};

/// Render the deck as a pipe-delimited markdown table, one row per note in
/// table order, headed by the deck name and resolved id.
pub fn render_markdown(snapshot: &DeckSnapshot) -> String {
	let mut doc = String::new();

	doc.push_str(&format!("# {} ({})\n\n", snapshot.deck_name, snapshot.deck_id));
	doc.push_str("| id | question | answer |\n");
	doc.push_str("| --- | --- | --- |\n");

	for note in &snapshot.notes {
		doc.push_str(&format!("| {} | {} | {} |\n", note.id, note.question, note.answer));
	}

	doc
}

/// Write `<out_base>.md`.
#[instrument(skip(snapshot))]
pub fn write_markdown(snapshot: &DeckSnapshot, out_base: &Path) -> Result<(), DeckError> {
	let out_path = format!("{}.md", out_base.display());
	fs_err::write(&out_path, render_markdown(snapshot))?;

	info!("Wrote markdown report {}", out_path);
	Ok(())
}
