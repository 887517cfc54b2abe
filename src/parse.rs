//! Line grammars for the markdown input: the deck title, the table rows
//! (math-aware, so `$...$` and `$$...$$` spans may contain pipes), and the
//! `<img src>` references embedded in cells. Lines that match nothing are
//! the caller's problem; everything here is purely syntactic.

use chumsky::prelude::*;

use crate::types::{deck::DeckInfo, note::RawRow};

/// Classification of a single input line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
	DeckTitle(DeckInfo),
	TableSeparator,
	TableRow(RawRow),
}

/// Classify one line. The deck title is only accepted on the first
/// non-blank line of the file; on every later line a separator beats a data
/// row, and anything else is no match.
pub fn classify_line(line: &str, first_line: bool) -> Option<LineKind> {
	if first_line {
		return extract_deck_info(line).map(LineKind::DeckTitle);
	}

	if is_table_separator(line) {
		return Some(LineKind::TableSeparator);
	}

	extract_row(line).map(LineKind::TableRow)
}

/// Extract the deck name and optional id from a `# Name (id)` or `# Name`
/// title line.
pub fn extract_deck_info(line: &str) -> Option<DeckInfo> {
	deck_title()
		.parse(line)
		.into_result()
		.ok()
		.filter(|info| !info.name.is_empty())
}

/// Extract one data row: id, question and answer cells plus the image
/// references found in question and answer, in source order.
pub fn extract_row(line: &str) -> Option<RawRow> {
	let cells = table_row().parse(line).into_result().ok()?;
	let mut cells = cells.into_iter();

	let id = cells.next()?;
	let question = cells.next()?;
	let answer = cells.next()?;

	let mut image_paths = extract_image_sources(&question);
	image_paths.extend(extract_image_sources(&answer));

	Some(RawRow { id, question, answer, image_paths })
}

/// Every local image referenced by `<img src="...">` in the text, in source
/// order. The `src` attribute must come first, as in the input convention.
pub fn extract_image_sources(text: &str) -> Vec<String> {
	image_sources().parse(text).into_result().unwrap_or_default()
}

/// A table delimiter row: dashes, pipes, alignment colons and whitespace
/// only. Distinguished from data rows so it never produces a note, and used
/// as the gate between header text and real data.
fn is_table_separator(line: &str) -> bool {
	let trimmed = line.trim();

	trimmed.contains('-')
		&& trimmed.contains('|')
		&& trimmed.chars().all(|c| c == '-' || c == '|' || c == ':' || c.is_whitespace())
}

fn deck_title<'a>() -> impl Parser<'a, &'a str, DeckInfo, extra::Err<Rich<'a, char>>> {
	just('#')
		.ignore_then(one_of(" \t").repeated().at_least(1))
		.ignore_then(none_of('\n').repeated().collect::<String>())
		.then_ignore(end())
		.map(|rest| split_deck_title(&rest))
}

/// The id is a trailing all-digit parenthesized group; a trailing group
/// that is not numeric stays part of the name.
fn split_deck_title(text: &str) -> DeckInfo {
	let text = text.trim();

	if let Some(stripped) = text.strip_suffix(')') {
		if let Some((name, id_text)) = stripped.rsplit_once('(') {
			let id_text = id_text.trim();
			if !id_text.is_empty() && id_text.chars().all(|c| c.is_ascii_digit()) {
				if let Ok(id) = id_text.parse::<i64>() {
					return DeckInfo { id: Some(id), name: name.trim().to_string() };
				}
			}
		}
	}

	DeckInfo { id: None, name: text.to_string() }
}

/// Pipe-delimited cells, at least three of them, with math spans shielding
/// their pipes from the splitter. Text before the first pipe and after the
/// last one is tolerated and dropped.
fn table_row<'a>() -> impl Parser<'a, &'a str, Vec<String>, extra::Err<Rich<'a, char>>> {
	let display_math = just("$$")
		.then(any().and_is(just("$$").not()).repeated())
		.then(just("$$"));

	let inline_math = just('$')
		.then(none_of("$\n").repeated().at_least(1))
		.then(just('$'));

	let cell_piece = choice((
		display_math.ignored(),
		inline_math.ignored(),
		none_of("|\n").ignored(),
	));

	let cell = cell_piece
		.repeated()
		.to_slice()
		.map(|text: &str| text.trim().to_string());

	let preamble = none_of("|\n").repeated();

	preamble
		.ignore_then(just('|'))
		.ignore_then(cell.then_ignore(just('|')).repeated().at_least(3).collect::<Vec<String>>())
		.then_ignore(any().repeated())
		.then_ignore(end())
}

fn image_sources<'a>() -> impl Parser<'a, &'a str, Vec<String>, extra::Err<Rich<'a, char>>> {
	let src = none_of('"').repeated().collect::<String>();

	let img = just("<img")
		.ignore_then(one_of(" \t").repeated())
		.ignore_then(just("src=\""))
		.ignore_then(src)
		.then_ignore(just('"'))
		.then_ignore(none_of('>').repeated())
		.then_ignore(just('>'));

	img.map(Some)
		.or(any().map(|_| None))
		.repeated()
		.collect::<Vec<Option<String>>>()
		.map(|found| found.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn row(line: &str) -> RawRow {
		extract_row(line).expect("expected a table row")
	}

	#[test]
	fn title_with_id() {
		let info = extract_deck_info("# Physics (42)").unwrap();
		assert_eq!(info, DeckInfo { id: Some(42), name: "Physics".to_string() });
	}

	#[test]
	fn title_without_id() {
		let info = extract_deck_info("# Physics").unwrap();
		assert_eq!(info, DeckInfo { id: None, name: "Physics".to_string() });
	}

	#[test]
	fn non_numeric_parenthetical_stays_in_the_name() {
		let info = extract_deck_info("# C (old)").unwrap();
		assert_eq!(info, DeckInfo { id: None, name: "C (old)".to_string() });
	}

	#[test]
	fn name_may_contain_parens_before_the_id() {
		let info = extract_deck_info("# C (old) (42)").unwrap();
		assert_eq!(info, DeckInfo { id: Some(42), name: "C (old)".to_string() });
	}

	#[test]
	fn only_level_one_headings_with_a_space_are_titles() {
		assert_eq!(extract_deck_info("## Physics"), None);
		assert_eq!(extract_deck_info("#Physics"), None);
		assert_eq!(extract_deck_info("Physics"), None);
		assert_eq!(extract_deck_info("# "), None);
	}

	#[test]
	fn row_cells_are_trimmed() {
		let row = row("| a1 |  What?  | 42 |");
		assert_eq!(row.id, "a1");
		assert_eq!(row.question, "What?");
		assert_eq!(row.answer, "42");
	}

	#[test]
	fn empty_id_cell_yields_an_empty_id() {
		let row = row("| | 2+2=? | 4 |");
		assert_eq!(row.id, "");
	}

	#[test]
	fn inline_math_shields_pipes() {
		let row = row("| m1 | $a|b$ | answer |");
		assert_eq!(row.question, "$a|b$");
		assert_eq!(row.answer, "answer");
	}

	#[test]
	fn display_math_shields_pipes() {
		let row = row(r"| m2 | $$\lvert x \rvert | y$$ | abs |");
		assert_eq!(row.question, r"$$\lvert x \rvert | y$$");
		assert_eq!(row.answer, "abs");
	}

	#[test]
	fn an_unclosed_dollar_still_splits_on_pipes() {
		let row = row("| m3 | costs $5 | bargain |");
		assert_eq!(row.question, "costs $5");
		assert_eq!(row.answer, "bargain");
	}

	#[test]
	fn extra_cells_are_ignored() {
		let row = row("| x | q | a | extra | more |");
		assert_eq!(row.answer, "a");
	}

	#[test]
	fn too_few_cells_is_not_a_row() {
		assert_eq!(extract_row("| q | a |"), None);
		assert_eq!(extract_row("no pipes here"), None);
		assert_eq!(extract_row(""), None);
	}

	#[test]
	fn text_before_the_first_pipe_is_dropped() {
		let row = row("stray prose | x | q | a |");
		assert_eq!(row.id, "x");
	}

	#[test]
	fn separator_lines_never_produce_rows() {
		let separators =
			["|---|---|---|", "| --- | --- | --- |", " |-|-|-| ", "| :---: | ---: | :--- |"];
		for line in separators {
			assert_eq!(classify_line(line, false), Some(LineKind::TableSeparator), "{line}");
		}
	}

	#[test]
	fn a_thematic_break_is_neither_separator_nor_row() {
		assert_eq!(classify_line("---", false), None);
	}

	#[test]
	fn image_sources_come_out_in_source_order() {
		let row = row(
			r#"| i | <img src="a.png"> and <img  src="b.png" width="5"> | <img src="pics/c.png"> |"#,
		);
		assert_eq!(row.image_paths, vec!["a.png", "b.png", "pics/c.png"]);
	}

	#[test]
	fn img_tags_with_other_attributes_first_are_not_references() {
		assert!(extract_image_sources(r#"<img class="big" src="a.png">"#).is_empty());
	}

	#[test]
	fn the_first_line_only_accepts_titles() {
		let expected = DeckInfo { id: Some(1), name: "Deck".to_string() };
		assert_eq!(classify_line("# Deck (1)", true), Some(LineKind::DeckTitle(expected)));
		assert_eq!(classify_line("| a | b | c |", true), None);
	}
}
