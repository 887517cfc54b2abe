use tracing::{debug, info, instrument};

use crate::{
	error::DeckError,
	parse::LineKind,
	types::{
		config::RunConfig,
		deck::{DeckBuilder, DeckSnapshot},
	},
};

pub mod cli;
pub mod error;
pub mod html_writer;
pub mod id_generator;
pub mod markdown_writer;
pub mod package_writer;
pub mod parse;
pub mod sanitize;
pub mod types;

/// Run the whole pipeline: one pass over the input file, then the three
/// writers against the frozen snapshot.
#[instrument(skip(config))]
pub fn convert(config: &RunConfig) -> Result<(), DeckError> {
	let snapshot = build_snapshot(config)?;

	package_writer::write_package(&snapshot, &config.anki_base(), &config.strip_prefixes)?;
	markdown_writer::write_markdown(&snapshot, &config.report_base())?;
	html_writer::write_html(&snapshot, &config.report_base())?;

	info!("Converted {} notes into deck '{}'", snapshot.notes.len(), snapshot.deck_name);
	Ok(())
}

/// Parse the input file into the frozen deck snapshot without writing any
/// output. Every fatal condition (missing file, unparsable title, empty
/// deck) surfaces here, before the first writer runs.
#[instrument(skip(config))]
pub fn build_snapshot(config: &RunConfig) -> Result<DeckSnapshot, DeckError> {
	let input_path = config.input_path();
	if !input_path.is_file() {
		return Err(DeckError::InputNotFound(input_path));
	}

	info!("Reading {}", input_path.display());
	let content = fs_err::read_to_string(&input_path)?;
	let mut lines = content.lines();

	// The title must be the first non-blank line; without it there is no
	// deck to build.
	let title_line = lines
		.by_ref()
		.find(|line| !line.trim().is_empty())
		.ok_or(DeckError::MissingDeckInfo)?;

	let info = match parse::classify_line(title_line, true) {
		Some(LineKind::DeckTitle(info)) => info,
		_ => return Err(DeckError::MissingDeckInfo),
	};

	let mut builder = DeckBuilder::new(info);

	for line in lines {
		match parse::classify_line(line, false) {
			Some(LineKind::TableSeparator) => builder.mark_separator(),
			Some(LineKind::TableRow(row)) => builder.add_row(row),
			// Prose around the table is tolerated and skipped.
			_ => debug!("Skipping line: {:?}", line),
		}
	}

	builder.finish()
}
