use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use aadup::aggregate::process_file;

#[derive(Parser, Debug)]
#[command(name = "aadup")]
#[command(version)]
#[command(
    about = "Translate DNA sequences with abundances into amino acids",
    long_about = "Translate every DNA sequence of an abundance file into amino acids (frame 1, \
                  stopping at the first stop codon) and write <input>_aa_dup.txt next to it, \
                  holding the record count, total abundance and one row per record."
)]
struct Cli {
    /// File of header lines and `<sequence> <abundance>` lines
    input: PathBuf,

    /// Log more detail. Repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet || cli.verbose > 0 {
        logger.filter_level(cli.log_level());
    }
    logger.init();

    process_file(&cli.input)
        .with_context(|| format!("Failed to translate {:?}", cli.input))?;
    Ok(())
}
