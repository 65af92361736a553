//! Front-end actions over the registry API
//!
//! Every action writes a short status line or a report to `out`. Verdicts
//! are output, not errors; only a failed write is an error.

use std::io::{self, BufRead, Write};

use serde::Serialize;
use username_registry::{
    compare_performance, run_edge_cases, FilterStats, MetricsSnapshot, NameStore, RegistryMetrics,
    UsernameApi, UsernameRegistry,
};

use crate::cli::Command;

#[derive(Serialize)]
struct StatsView {
    filter: FilterStats,
    metrics: MetricsSnapshot,
}

/// Shared state the actions run against
pub struct Session<'a, S: NameStore> {
    pub registry: &'a UsernameRegistry<S>,
    pub metrics: &'a RegistryMetrics,
    pub default_samples: usize,
}

impl<'a, S: NameStore> Session<'a, S> {
    pub fn execute<W: Write>(&self, command: &Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Check { name } => {
                let verdict = self.registry.check_username(name);
                writeln!(out, "Status: {}", verdict)
            }
            Command::Register { name } => {
                let outcome = self.registry.add_user(name);
                writeln!(out, "Status: {}", outcome)
            }
            Command::EdgeCases => write!(out, "{}", run_edge_cases(self.registry)),
            Command::Compare { samples, json } => {
                let samples = samples.unwrap_or(self.default_samples);
                let report = compare_performance(self.registry, samples, &mut rand::thread_rng());
                if *json {
                    writeln!(out, "{}", to_json(&report)?)
                } else {
                    write!(out, "{}", report)
                }
            }
            Command::Stats { json } => {
                let view = StatsView {
                    filter: self.registry.filter_stats(),
                    metrics: self.metrics.snapshot(),
                };
                if *json {
                    writeln!(out, "{}", to_json(&view)?)
                } else {
                    write_stats(&view, out)
                }
            }
            Command::Interactive => Ok(()),
        }
    }

    /// Read one command per line until `quit` or end of input
    pub fn run_interactive<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> io::Result<()> {
        writeln!(out, "Status: Ready ({} names registered)", self.registry.registered_count())?;
        write_help(out)?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            match parse_line(line) {
                Some(Input::Quit) => break,
                Some(Input::Help) => write_help(out)?,
                Some(Input::Run(command)) => self.execute(&command, out)?,
                None => writeln!(out, "Unknown command: {}", line.trim())?,
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Run(Command),
    Help,
    Quit,
}

/// Parse `verb [argument]`; the argument is the rest of the line verbatim
/// so names with spaces reach validation intact.
fn parse_line(line: &str) -> Option<Input> {
    let (verb, rest) = match line.trim_start().split_once(' ') {
        Some((verb, rest)) => (verb, rest),
        None => (line.trim(), ""),
    };

    let input = match verb {
        "check" => Input::Run(Command::Check { name: rest.to_string() }),
        "register" => Input::Run(Command::Register { name: rest.to_string() }),
        "edge-cases" => Input::Run(Command::EdgeCases),
        "compare" => Input::Run(Command::Compare {
            samples: rest.trim().parse().ok(),
            json: false,
        }),
        "stats" => Input::Run(Command::Stats { json: false }),
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => return None,
    };
    Some(input)
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Commands: check <name> | register <name> | edge-cases | compare [samples] | stats | help | quit"
    )
}

fn write_stats<W: Write>(view: &StatsView, out: &mut W) -> io::Result<()> {
    let filter = &view.filter;
    let metrics = &view.metrics;
    writeln!(out, "Registered names: {}", filter.registered)?;
    writeln!(
        out,
        "Filter: {} bits, {} hashes, {} set ({:.1}% full), estimated FPR {:.4}",
        filter.size_bits,
        filter.hash_count,
        filter.bits_set,
        filter.fill_ratio * 100.0,
        filter.estimated_fpr
    )?;
    writeln!(
        out,
        "Checks: {} ({} invalid, {} filter misses, {} false positives, {} taken)",
        metrics.checks_performed,
        metrics.invalid_rejections,
        metrics.filter_misses,
        metrics.false_positives,
        metrics.confirmed_taken
    )?;
    writeln!(
        out,
        "Registrations: {} ({} failed to persist)",
        metrics.registrations, metrics.persist_failures
    )
}

fn to_json<T: Serialize>(value: &T) -> io::Result<String> {
    serde_json::to_string_pretty(value).map_err(io::Error::from)
}
