use std::collections::BTreeSet;

use tracing::{debug, instrument, warn};

use crate::{
	error::DeckError,
	id_generator,
	sanitize::sanitize_field,
	types::{
		deck::{DeckBuilder, DeckInfo, DeckSnapshot},
		note::{Note, RawRow},
	},
};

impl DeckBuilder {
	#[instrument]
	pub fn new(info: DeckInfo) -> Self {
		let deck_id = match info.id {
			Some(id) => id,
			None => {
				let id = id_generator::random_deck_id();
				warn!("Title line carries no deck id; generated {} (not stable across runs)", id);
				id
			}
		};
		debug!("Deck '{}' with id {}", info.name, deck_id);

		Self {
			deck_id,
			deck_name: info.name,
			notes: Vec::new(),
			media_files: BTreeSet::new(),
			separator_seen: false,
		}
	}

	/// Rows seen before this call are the table header and are dropped.
	pub fn mark_separator(&mut self) {
		self.separator_seen = true;
	}

	/// Turn a raw row into a note: assign the id, sanitize both fields,
	/// append to the table and merge the image references into the media
	/// set. The table only ever grows; no row is removed or reordered.
	#[instrument(skip(self, row))]
	pub fn add_row(&mut self, row: RawRow) {
		if !self.separator_seen {
			debug!("Dropping pre-separator header row: {:?}", row);
			return;
		}

		let RawRow { id, question, answer, image_paths } = row;

		// A blank id cell means the row carries no id.
		let id = if id.trim().is_empty() {
			id_generator::note_guid(&question, &answer)
		} else {
			id
		};

		self.media_files.extend(image_paths);

		let note = Note {
			id,
			question: sanitize_field(&question),
			answer: sanitize_field(&answer),
		};
		debug!("Note added: {} {:?} {:?}", note.id, note.question, note.answer);
		self.notes.push(note);
	}

	/// Freeze the accumulated state for the writers. Errors when no data
	/// row was ever added, so empty decks never reach an output file.
	pub fn finish(self) -> Result<DeckSnapshot, DeckError> {
		if self.notes.is_empty() {
			return Err(DeckError::EmptyDeck);
		}

		Ok(DeckSnapshot {
			deck_id: self.deck_id,
			deck_name: self.deck_name,
			notes: self.notes,
			media_files: self.media_files,
		})
	}
}
