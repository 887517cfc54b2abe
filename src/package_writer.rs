//! The `.apkg` deck-package writer. Notes are rendered through a two-field
//! MathJax card model; media whose path carries a strip prefix is staged as
//! a temporary copy under its archived name, so the original file on disk
//! is never touched while the archive is built.

use std::path::Path;

use genanki_rs::{Deck, Field, Model, Note, Package, Template};
use tracing::{debug, info, instrument, warn};

use crate::{error::DeckError, types::deck::DeckSnapshot};

/// MathJax bootstrap shared by the card template and the HTML report.
pub(crate) const MATHJAX_SNIPPET: &str = r#"
<script type="text/x-mathjax-config">
MathJax.Hub.processSectionDelay = 0;
MathJax.Hub.Config({
messageStyle: 'none',
showProcessingMessages: false,
tex2jax: {
    inlineMath: [['$', '$']],
    displayMath: [['$$', '$$']],
    processEscapes: true
}
});
</script>
<script type="text/javascript">
(function() {
if (window.MathJax != null) {
    var card = document.querySelector('.card');
    MathJax.Hub.Queue(['Typeset', MathJax.Hub, card]);
    return;
}
var script = document.createElement('script');
script.type = 'text/javascript';
script.src = 'https://cdnjs.cloudflare.com/ajax/libs/mathjax/2.7.1/MathJax.js?config=TeX-MML-AM_CHTML';
document.body.appendChild(script);
})();
</script>"#;

const MODEL_ID: i64 = 6666666666;

fn card_model() -> Model {
	let question_format = format!("{{{{Question}}}}{}", MATHJAX_SNIPPET);
	let answer_format =
		format!("{{{{FrontSide}}}}<hr id=\"answer\">{{{{Answer}}}}{}", MATHJAX_SNIPPET);

	Model::new(
		MODEL_ID,
		"Card with MathJax",
		vec![Field::new("Question"), Field::new("Answer")],
		vec![Template::new("Card 1").qfmt(&question_format).afmt(&answer_format)],
	)
}

/// Remove every strip prefix from quoted resource paths inside a field, so
/// the packaged cards reference media by its archived name.
fn strip_resource_prefixes(field: &str, prefixes: &[String]) -> String {
	prefixes
		.iter()
		.fold(field.to_string(), |text, prefix| text.replace(&format!("\"{}/", prefix), "\""))
}

/// Archived name of a media file once its strip prefix is removed.
fn stripped_media_name(path: &str, prefix: &str) -> String {
	path.replace(&format!("{}/", prefix), "")
}

/// Write `<out_base>.apkg` from the frozen snapshot.
#[instrument(skip(snapshot))]
pub fn write_package(
	snapshot: &DeckSnapshot,
	out_base: &Path,
	strip_prefixes: &[String],
) -> Result<(), DeckError> {
	let model = card_model();
	let mut deck = Deck::new(snapshot.deck_id, &snapshot.deck_name, "");

	for note in &snapshot.notes {
		let question = strip_resource_prefixes(&note.question, strip_prefixes);
		let answer = strip_resource_prefixes(&note.answer, strip_prefixes);

		deck.add_note(Note::new_with_options(
			model.clone(),
			vec![question.as_str(), answer.as_str()],
			None,
			None,
			Some(note.id.as_str()),
		)?);
	}

	// Stage prefixed media as copies under the archived name. The copies
	// are deleted again below; the originals stay where they are.
	let mut staged = Vec::new();
	let mut media = Vec::new();

	for path in &snapshot.media_files {
		match strip_prefixes.iter().find(|prefix| path.contains(prefix.as_str())) {
			Some(prefix) => {
				let archived = stripped_media_name(path, prefix);
				debug!("Staging media copy {} -> {}", path, archived);
				fs_err::copy(path, &archived)?;
				staged.push(archived.clone());
				media.push(archived);
			}
			None => media.push(path.clone()),
		}
	}

	let out_path = format!("{}.apkg", out_base.display());
	let result = write_archive(deck, &media, &out_path);

	for copy in &staged {
		if let Err(error) = fs_err::remove_file(copy) {
			warn!("Could not remove staged media copy {}: {}", copy, error);
		}
	}

	result
}

fn write_archive(deck: Deck, media: &[String], out_path: &str) -> Result<(), DeckError> {
	let media_refs: Vec<&str> = media.iter().map(String::as_str).collect();

	let mut package = Package::new(vec![deck], media_refs)?;
	package.write_to_file(out_path)?;

	info!("Wrote deck package {}", out_path);
	Ok(())
}
