use std::process::ExitCode;

use md2anki::cli::{self, Invocation};
use tracing::Level;

fn main() -> eyre::Result<ExitCode> {
	color_eyre::install()?;

	match cli::parse_args(std::env::args().skip(1))? {
		Invocation::ShowHelp => {
			print!("{}", cli::USAGE);
			Ok(ExitCode::SUCCESS)
		}
		Invocation::ShowVersion => {
			println!("{}", env!("CARGO_PKG_VERSION"));
			Ok(ExitCode::SUCCESS)
		}
		Invocation::Run(config) => {
			init_tracing(config.debug);
			md2anki::convert(&config)?;
			Ok(ExitCode::SUCCESS)
		}
	}
}

/// The `-d` flag routes everything down to DEBUG on standard output; the
/// default stays quiet outside warnings.
fn init_tracing(debug: bool) {
	let level = if debug { Level::DEBUG } else { Level::WARN };
	tracing_subscriber::fmt().with_max_level(level).init();
}
