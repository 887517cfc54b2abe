use std::path::PathBuf;

use crate::{error::DeckError, types::config::RunConfig};

pub const USAGE: &str = "\
Create an anki deck from a markdown table document

    md2anki <markdownFile> [options]

    -d                       Activate debug logging
    -out-anki <filePath>     Custom anki deck output file path
    -out-md <filePath>       Custom markdown doc output file path
    -rm-res-prefix <prefix>  Strip this path prefix from media references
                             in the packaged deck (repeatable)
    -h, --help               Show this help
    -v, --version            Show the version

The input is read from <markdownFile>.md. When the title line carries no
deck id, one is generated at random and is not stable across runs.
";

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
	Run(RunConfig),
	ShowHelp,
	ShowVersion,
}

/// Scan the raw arguments into a run configuration. Help and version
/// short-circuit everything else, wherever they appear.
pub fn parse_args<I>(args: I) -> Result<Invocation, DeckError>
where
	I: IntoIterator<Item = String>,
{
	let args: Vec<String> = args.into_iter().collect();

	for arg in &args {
		match arg.as_str() {
			"--help" | "-help" | "-h" => return Ok(Invocation::ShowHelp),
			"--version" | "-version" | "-v" => return Ok(Invocation::ShowVersion),
			_ => {}
		}
	}

	let mut basename: Option<String> = None;
	let mut debug = false;
	let mut anki_out: Option<PathBuf> = None;
	let mut md_out: Option<PathBuf> = None;
	let mut strip_prefixes: Vec<String> = Vec::new();

	let mut args = args.into_iter();
	while let Some(arg) = args.next() {
		match arg.as_str() {
			"-d" => debug = true,
			"-out-anki" => {
				let value = args.next().ok_or(DeckError::MissingOptionValue("-out-anki"))?;
				anki_out = Some(PathBuf::from(value));
			}
			"-out-md" => {
				let value = args.next().ok_or(DeckError::MissingOptionValue("-out-md"))?;
				md_out = Some(PathBuf::from(value));
			}
			"-rm-res-prefix" => {
				let value =
					args.next().ok_or(DeckError::MissingOptionValue("-rm-res-prefix"))?;
				strip_prefixes.push(value);
			}
			flag if flag.starts_with('-') => return Err(DeckError::UnknownOption(arg)),
			_ if basename.is_some() => return Err(DeckError::UnexpectedArgument(arg)),
			_ => basename = Some(arg),
		}
	}

	let basename = basename.ok_or(DeckError::MissingInput)?;

	Ok(Invocation::Run(RunConfig { basename, debug, anki_out, md_out, strip_prefixes }))
}
