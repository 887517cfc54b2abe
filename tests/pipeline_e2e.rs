//! End-to-end pipeline scenarios: one input file in, three output files out,
//! and the fatal paths that must leave nothing behind.

use std::path::{Path, PathBuf};

use md2anki::{build_snapshot, convert, error::DeckError, types::config::RunConfig};
use pretty_assertions::assert_eq;

const PHYSICS: &str = "# Physics (42)\n| id | q | a |\n|---|---|---|\n| | 2+2=? | 4 |\n";

fn scratch_dir(name: &str) -> PathBuf {
	let dir = std::env::temp_dir().join("md2anki-tests").join(name);
	// A fresh directory per scenario keeps reruns deterministic.
	let _ = fs_err::remove_dir_all(&dir);
	fs_err::create_dir_all(&dir).unwrap();
	dir
}

fn config_for(dir: &Path, basename: &str) -> RunConfig {
	RunConfig {
		basename: dir.join(basename).display().to_string(),
		debug: false,
		anki_out: None,
		md_out: Some(dir.join("report")),
		strip_prefixes: Vec::new(),
	}
}

#[test]
fn physics_example_produces_one_note_and_three_files() {
	let dir = scratch_dir("physics");
	let config = config_for(&dir, "physics");
	fs_err::write(config.input_path(), PHYSICS).unwrap();

	let snapshot = build_snapshot(&config).unwrap();
	assert_eq!(snapshot.deck_id, 42);
	assert_eq!(snapshot.deck_name, "Physics");
	assert_eq!(snapshot.notes.len(), 1);
	assert!(!snapshot.notes[0].id.is_empty());
	assert_eq!(snapshot.notes[0].question, "2+2=?");
	assert_eq!(snapshot.notes[0].answer, "4");

	convert(&config).unwrap();
	assert!(dir.join("physics.apkg").is_file());
	assert!(dir.join("report.md").is_file());
	assert!(dir.join("report.html").is_file());
}

#[test]
fn title_only_input_fails_without_writing_output() {
	let dir = scratch_dir("title-only");
	let config = config_for(&dir, "empty");
	fs_err::write(config.input_path(), "# Lonely Title (7)\njust prose\n").unwrap();

	assert!(matches!(convert(&config), Err(DeckError::EmptyDeck)));
	assert!(!dir.join("empty.apkg").exists());
	assert!(!dir.join("report.md").exists());
	assert!(!dir.join("report.html").exists());
}

#[test]
fn missing_input_file_is_fatal() {
	let dir = scratch_dir("missing");
	let config = config_for(&dir, "nope");

	assert!(matches!(convert(&config), Err(DeckError::InputNotFound(_))));
}

#[test]
fn unparsable_title_is_fatal() {
	let dir = scratch_dir("bad-title");
	let config = config_for(&dir, "bad");
	fs_err::write(config.input_path(), "not a title\n| a | b | c |\n").unwrap();

	assert!(matches!(convert(&config), Err(DeckError::MissingDeckInfo)));
	assert!(!dir.join("report.md").exists());
}

#[test]
fn leading_blank_lines_before_the_title_are_skipped() {
	let dir = scratch_dir("leading-blanks");
	let config = config_for(&dir, "blanks");
	fs_err::write(config.input_path(), format!("\n   \n{}", PHYSICS)).unwrap();

	let snapshot = build_snapshot(&config).unwrap();
	assert_eq!(snapshot.deck_name, "Physics");
	assert_eq!(snapshot.notes.len(), 1);
}

#[test]
fn generated_note_ids_are_stable_across_runs() {
	let dir = scratch_dir("stable-ids");
	let config = config_for(&dir, "stable");
	fs_err::write(config.input_path(), PHYSICS).unwrap();

	let first = build_snapshot(&config).unwrap();
	let second = build_snapshot(&config).unwrap();
	assert_eq!(first.notes[0].id, second.notes[0].id);
}

#[test]
fn markdown_report_lists_notes_in_table_order() {
	let dir = scratch_dir("report-order");
	let config = config_for(&dir, "cards");
	fs_err::write(
		config.input_path(),
		"# Deck (9)\n\
		| id | q | a |\n\
		|---|---|---|\n\
		| n1 | first? | yes |\n\
		| n2 | second? | also |\n",
	)
	.unwrap();

	convert(&config).unwrap();

	let report = fs_err::read_to_string(dir.join("report.md")).unwrap();
	assert!(report.starts_with("# Deck (9)\n"));
	let n1 = report.find("| n1 | first? | yes |").unwrap();
	let n2 = report.find("| n2 | second? | also |").unwrap();
	assert!(n1 < n2);
}

#[test]
fn html_report_shows_answers_but_no_ids() {
	let dir = scratch_dir("html-report");
	let config = config_for(&dir, "cards");
	fs_err::write(
		config.input_path(),
		"# Deck\n| id | q | a |\n|---|---|---|\n| visible-id | why? | because |\n",
	)
	.unwrap();

	convert(&config).unwrap();

	let html = fs_err::read_to_string(dir.join("report.html")).unwrap();
	assert!(html.contains("<td>why?</td><td>because</td>"));
	assert!(!html.contains("visible-id"));
}

#[test]
fn prose_around_the_table_is_tolerated() {
	let dir = scratch_dir("prose");
	let config = config_for(&dir, "prose");
	fs_err::write(
		config.input_path(),
		"# Deck (3)\n\
		Some introduction text.\n\
		\n\
		| id | q | a |\n\
		|---|---|---|\n\
		| p1 | q1 | a1 |\n\
		\n\
		A closing remark.\n",
	)
	.unwrap();

	let snapshot = build_snapshot(&config).unwrap();
	assert_eq!(snapshot.notes.len(), 1);
	assert_eq!(snapshot.notes[0].id, "p1");
}

#[test]
fn strip_prefix_never_touches_the_original_media() {
	let dir = scratch_dir("strip-prefix");
	let pictures = dir.join("pictures");
	fs_err::create_dir_all(&pictures).unwrap();
	let original = pictures.join("diagram.png");
	fs_err::write(&original, b"not really a png").unwrap();

	let mut config = config_for(&dir, "strip");
	config.strip_prefixes = vec![pictures.display().to_string()];
	fs_err::write(
		config.input_path(),
		format!(
			"# Media (5)\n| id | q | a |\n|---|---|---|\n| m | look <img src=\"{}\"> | ok |\n",
			original.display()
		),
	)
	.unwrap();

	convert(&config).unwrap();

	// The original stays; the staged copy under the stripped name is gone.
	assert!(original.is_file());
	assert!(!Path::new("diagram.png").exists());
	assert!(dir.join("strip.apkg").is_file());
}
