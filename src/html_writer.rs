use std::path::Path;

use tracing::{info, instrument};

use crate::{error::DeckError, package_writer::MATHJAX_SNIPPET, types::deck::DeckSnapshot};

const HIGHLIGHT_SNIPPET: &str = r#"<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/default.min.css">
<script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>
<script>hljs.highlightAll();</script>"#;

const STYLE: &str = r#"<style>
body { font-family: sans-serif; margin: 2em auto; max-width: 60em; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #ccc; padding: 0.5em 1em; text-align: left; vertical-align: top; }
th { background: #f0f0f0; }
pre { background: #f8f8f8; padding: 0.5em; overflow-x: auto; }
</style>"#;

/// Render the deck as a standalone styled document showing question and
/// answer only; ids are an authoring concern and stay out of the reading
/// view. Math rendering and code highlighting come from the embedded
/// boilerplate.
pub fn render_html(snapshot: &DeckSnapshot) -> String {
	let mut doc = String::new();

	doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
	doc.push_str(&format!("<title>{}</title>\n", snapshot.deck_name));
	doc.push_str(STYLE);
	doc.push('\n');
	doc.push_str(MATHJAX_SNIPPET);
	doc.push('\n');
	doc.push_str(HIGHLIGHT_SNIPPET);
	doc.push_str("\n</head>\n<body>\n");
	doc.push_str(&format!("<h1>{}</h1>\n", snapshot.deck_name));
	doc.push_str("<table>\n<tr><th>question</th><th>answer</th></tr>\n");

	for note in &snapshot.notes {
		doc.push_str(&format!("<tr><td>{}</td><td>{}</td></tr>\n", note.question, note.answer));
	}

	doc.push_str("</table>\n</body>\n</html>\n");
	doc
}

/// Write `<out_base>.html`.
#[instrument(skip(snapshot))]
pub fn write_html(snapshot: &DeckSnapshot, out_base: &Path) -> Result<(), DeckError> {
	let out_path = format!("{}.html", out_base.display());
	fs_err::write(&out_path, render_html(snapshot))?;

	info!("Wrote html report {}", out_path);
	Ok(())
}
