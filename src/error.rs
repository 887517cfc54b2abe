use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
	#[error("No markdown file was specified")]
	MissingInput,

	#[error("Unknown option '{0}'")]
	UnknownOption(String),

	#[error("Option '{0}' expects a value")]
	MissingOptionValue(&'static str),

	#[error("Unexpected argument '{0}'")]
	UnexpectedArgument(String),

	#[error("Markdown file was not found: \"{}\"", .0.display())]
	InputNotFound(PathBuf),

	#[error("No deck info was found")]
	MissingDeckInfo,

	#[error("No notes were found")]
	EmptyDeck,

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error("Failed to write the deck package: {0}")]
	Package(#[from] genanki_rs::Error),
}
