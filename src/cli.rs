use anyhow::{bail, Result};
use camino::Utf8PathBuf as PathBuf;
use clap::Parser;

use crate::digits::{DEFAULT_PICK, MAX_PICK};

#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Read the puzzle from this file instead of stdin ("-" means stdin)
    #[clap(long, env, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Log the duration of parsing and solving steps
    #[clap(long, env)]
    pub log_span_durations: bool,
}

impl CommonArgs {
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_str() != "-")
    }
}

/// Counts fresh ingredient ids and the ids covered by the fresh ranges
#[derive(Parser, Debug)]
#[command(version)]
pub struct FreshIdsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Sums the largest joltage each battery bank can produce
#[derive(Parser, Debug)]
#[command(version)]
pub struct JoltageArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of batteries turned on per bank for the second part
    #[clap(long, env, hide(true), value_parser = parse_pick, default_value_t = DEFAULT_PICK)]
    pub pick: usize,
}

fn parse_pick(s: &str) -> Result<usize> {
    let pick: usize = s.parse()?;
    if pick == 0 || pick > MAX_PICK {
        bail!("pick must be between 1 and {MAX_PICK}, got {pick}");
    }
    Ok(pick)
}
