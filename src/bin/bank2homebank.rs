//! bank2homebank - CLI tool converting bank CSV exports to the Homebank format.

use clap::{ArgAction, Parser};
use homebank_converter::{conversion, dialect, Dialect, Result};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bank2homebank")]
#[command(about = "Convert a Baloise Bank SoBa or Cornercard CSV export to the Homebank CSV format", long_about = None)]
struct Cli {
    /// The CSV file to convert
    filename: PathBuf,

    /// Detect the input format from the file (default)
    #[arg(long, conflicts_with_all = ["baloise", "cornercard"])]
    auto: bool,

    /// Treat the input as a Baloise Bank SoBa export
    #[arg(long, conflicts_with = "cornercard")]
    baloise: bool,

    /// Treat the input as a Cornercard export
    #[arg(long)]
    cornercard: bool,

    /// Output file path (default: <input>-homebank.<ext> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn forced_dialect(&self) -> Option<Dialect> {
        if self.auto {
            None
        } else if self.baloise {
            Some(Dialect::Baloise)
        } else if self.cornercard {
            Some(Dialect::Cornercard)
        } else {
            None
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let detected = dialect::detect(&cli.filename);

    let (dialect, mismatch) = conversion::resolve_dialect(cli.forced_dialect(), detected)?;
    if mismatch {
        let seen = detected.map_or_else(|| "an unknown format".to_string(), |d| d.to_string());
        eprintln!(
            "Warning: '{}' looks like {}, converting it as {} anyway.",
            cli.filename.display(),
            seen,
            dialect
        );
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| conversion::derive_output_path(&cli.filename));
    conversion::convert(dialect, &cli.filename, &out_path)?;

    println!("{} file converted. Output file: '{}'", dialect, out_path.display());

    Ok(())
}
