//! Subcommands and their rendering.
//!
//! Every command builds a [`Seq`] from the integers on the command line, runs
//! one pipeline, and renders plain text for stdout.

use std::cell::Cell;
use std::fmt::Write as _;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use sundry_config::{DEFAULT_CYCLE_LIMIT, SundryConfig};
use sundry_seq::{CycleEnd, Seq};
use sundry_types::{Fault, Maybe, Outcome, ternary};

#[derive(Debug, Parser)]
#[command(name = "sundry", version, about = "Run sequence pipelines over integers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print count, sum, minimum and maximum
    Stats {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Drop repeated values, keeping first occurrences
    Dedup {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print every overlapping window of SIZE values
    Windows {
        #[arg(long)]
        size: usize,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print consecutive chunks of up to SIZE values
    Chunks {
        #[arg(long)]
        size: usize,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print the values in random order
    Shuffle {
        /// Seed for a reproducible order (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Group values by parity
    Group {
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Visit COUNT values in circular order
    Cycle {
        #[arg(long)]
        count: usize,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Print the value at zero-based INDEX
    Lookup {
        #[arg(long)]
        index: usize,
        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

/// Settings drawn from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub shuffle_seed: Option<u64>,
    pub cycle_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            cycle_limit: DEFAULT_CYCLE_LIMIT,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn from_config(config: Option<&SundryConfig>) -> Self {
        config.map_or_else(Self::default, |config| Self {
            shuffle_seed: config.shuffle_seed(),
            cycle_limit: config.cycle_limit(),
        })
    }
}

/// Run `command`, producing the text to print.
pub fn run(command: &Command, settings: Settings) -> Outcome<String> {
    match command {
        Command::Stats { values } => stats(&Seq::new(values)),
        Command::Dedup { values } => Outcome::success(line(&Seq::new(values).deduped())),
        Command::Windows { size, values } => {
            let mut out = String::new();
            Seq::new(values).windows(*size, |window| {
                let _ = writeln!(out, "{window:?}");
            });
            Outcome::success(out)
        }
        Command::Chunks { size, values } => {
            let mut out = String::new();
            Seq::new(values).chunks(*size, |chunk| {
                let _ = writeln!(out, "{chunk:?}");
            });
            Outcome::success(out)
        }
        Command::Shuffle { seed, values } => {
            let mut seq = Seq::new(values);
            match seed.or(settings.shuffle_seed) {
                Some(seed) => seq.shuffle_with(&mut StdRng::seed_from_u64(seed)),
                None => seq.shuffle(),
            }
            Outcome::success(line(&seq))
        }
        Command::Group { values } => {
            let groups = Seq::new(values).group_by(|v| ternary(v % 2 == 0, "even", "odd"));
            let mut out = String::new();
            for group in groups {
                let _ = writeln!(out, "{}: {}", group.key, join(&group.items));
            }
            Outcome::success(out)
        }
        Command::Cycle { count, values } => cycle(&Seq::new(values), *count, settings.cycle_limit),
        Command::Lookup { index, values } => {
            let seq = Seq::new(values);
            Maybe::from(seq.nth(*index).copied())
                .into_outcome_with(|| {
                    Fault::new(format!(
                        "index {index} is out of range for {} values",
                        seq.len()
                    ))
                })
                .map(|value| format!("{value}\n"))
        }
    }
}

fn stats(seq: &Seq<i64>) -> Outcome<String> {
    let Some(sum) = seq.checked_sum() else {
        return Outcome::failure(format!(
            "sum of {} values overflows a 64-bit integer",
            seq.len()
        ));
    };
    let show = |value: Option<i64>| value.map_or_else(|| "none".to_string(), |v| v.to_string());
    Outcome::success(format!(
        "count: {}\nsum: {sum}\nmin: {}\nmax: {}\n",
        seq.len(),
        show(seq.min()),
        show(seq.max())
    ))
}

fn cycle(seq: &Seq<i64>, count: usize, limit: usize) -> Outcome<String> {
    let visited = Cell::new(0usize);
    let mut out = Vec::new();
    let end = seq.cycle_bounded(
        limit,
        |value| {
            out.push(*value);
            visited.set(visited.get() + 1);
        },
        || visited.get() == count,
    );

    match end {
        CycleEnd::LimitReached { visits } => Outcome::failure(format!(
            "cycle stopped after {visits} visits; raise [sequence] cycle_limit to go further"
        )),
        CycleEnd::Empty | CycleEnd::Stopped { .. } => Outcome::success(format!("{}\n", join(&out))),
    }
}

fn line(seq: &Seq<i64>) -> String {
    format!("{}\n", join(seq.as_slice()))
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
