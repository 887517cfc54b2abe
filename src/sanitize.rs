//! Field sanitization. Question and answer cells pass through three ordered
//! steps before they become notes: line feeds are flattened to a `<br>`
//! marker, `<pre>` spans get their real newlines back, and everything
//! outside ASCII is rewritten to character references. The order matters;
//! `<pre>` unwrapping must run after line-break encoding and before entity
//! encoding.

/// Marker substituted for line feeds so multi-line cell content survives
/// single-line table storage.
pub const LINE_BREAK: &str = "<br>";

/// The deck renderer expects a constrained encoding; these characters keep
/// their named-entity form while every other non-ASCII character degrades
/// to a numeric escape.
const NAMED_ENTITIES: [(&str, &str); 7] = [
	("&#196;", "&Auml;"),
	("&#228;", "&auml;"),
	("&#214;", "&Ouml;"),
	("&#246;", "&ouml;"),
	("&#220;", "&Uuml;"),
	("&#252;", "&uuml;"),
	("&#223;", "&szlig;"),
];

/// Sanitize one question or answer field.
pub fn sanitize_field(text: &str) -> String {
	let flattened = encode_line_breaks(text);
	let unwrapped = restore_pre_line_breaks(&flattened);
	encode_entities(&unwrapped)
}

/// Step 1: CRLF and LF become the line-break marker; bare CR is stripped.
fn encode_line_breaks(text: &str) -> String {
	text.replace("\r\n", LINE_BREAK).replace('\r', "").replace('\n', LINE_BREAK)
}

/// Step 2: source code must keep literal newlines even though the cell
/// storage format flattens them, so `<pre>` spans get them back.
fn restore_pre_line_breaks(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	let mut rest = text;

	while let Some(open) = rest.find("<pre") {
		let Some(close) = rest[open..].find("</pre>") else {
			break;
		};
		let end = open + close + "</pre>".len();

		out.push_str(&rest[..open]);
		out.push_str(&rest[open..end].replace(LINE_BREAK, "\n"));
		rest = &rest[end..];
	}

	out.push_str(rest);
	out
}

/// Step 3: non-ASCII characters become decimal character references, after
/// which the seven fixed substitutions restore their named-entity form.
fn encode_entities(text: &str) -> String {
	let mut encoded = String::with_capacity(text.len());
	for character in text.chars() {
		if character.is_ascii() {
			encoded.push(character);
		} else {
			encoded.push_str(&format!("&#{};", character as u32));
		}
	}

	NAMED_ENTITIES
		.iter()
		.fold(encoded, |text, (numeric, named)| text.replace(numeric, named))
}
