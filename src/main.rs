use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Printed on stdout when positional arguments are missing.
const USAGE: &str = "usage:\ncsvgen <output.csv> <num-rows> <features>";

#[derive(Parser)]
#[command(
    name = "csvgen",
    about = "Generate a synthetic CSV fixture dataset",
    version
)]
struct Cli {
    /// Output file; created or truncated
    output: PathBuf,

    /// Number of rows to generate
    num_rows: u64,

    /// Number of random feature columns per row
    features: usize,

    /// Seed the generator for reproducible output (default: entropy-seeded)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Missing positionals: two-line usage on stdout, exit 1, no file
    // touched. Everything else (bad integers, unknown flags, --help)
    // goes through clap's own reporting.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            println!("{USAGE}");
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let file = File::create(&cli.output)
        .with_context(|| format!("failed to open output file: {}", cli.output.display()))?;
    let mut out = BufWriter::with_capacity(128 * 1024, file);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    csvgen::output::write_dataset(&mut out, cli.num_rows, cli.features, &mut rng)
        .with_context(|| format!("failed to write rows to: {}", cli.output.display()))?;
    out.flush()
        .with_context(|| format!("failed to flush output file: {}", cli.output.display()))?;

    Ok(())
}
