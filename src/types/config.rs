use std::path::PathBuf;

/// Configuration for one run, built once by the CLI parser and threaded by
/// reference through the pipeline. Read-only after argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
	pub basename:       String,
	pub debug:          bool,
	pub anki_out:       Option<PathBuf>,
	pub md_out:         Option<PathBuf>,
	pub strip_prefixes: Vec<String>,
}

impl RunConfig {
	/// The markdown document this run reads.
	pub fn input_path(&self) -> PathBuf {
		PathBuf::from(format!("{}.md", self.basename))
	}

	/// Base path (without extension) for the `.apkg` output.
	pub fn anki_base(&self) -> PathBuf {
		self.anki_out.clone().unwrap_or_else(|| PathBuf::from(&self.basename))
	}

	/// Base path (without extension) for the `.md` and `.html` reports.
	pub fn report_base(&self) -> PathBuf {
		self.md_out.clone().unwrap_or_else(|| PathBuf::from(&self.basename))
	}
}
