//! CLI entry point for keysheet
//!
//! Validates, lints and fixes a single YAML shortcut sheet:
//! `keysheet <path_to_yaml_file>`.

use clap::{error::ErrorKind, Parser};
use keysheet::{config::SheetFile, driver::Driver};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: keysheet <path_to_yaml_file>";

#[derive(Parser)]
#[command(name = "keysheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML shortcut sheet (rewritten in place)
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    process_sheet(&cli.file)
}

/// Logs go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run the validate → lint → fix pipeline on one sheet
fn process_sheet(file: &Path) -> anyhow::Result<()> {
    // Expand tilde in path
    let expanded_path = shellexpand::tilde(
        file.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    let path = Path::new(expanded_path.as_ref());

    // Report the path as typed, not the expanded one
    let sheet = SheetFile::open(path)?.with_display_path(file);

    let stdout = io::stdout();
    let driver = Driver::new().with_color(stdout.is_terminal());
    driver.run(&sheet, &mut stdout.lock())?;

    Ok(())
}
