//! Productivity analysis command.

use chrono::{FixedOffset, Local, Offset};
use clap::Args;
use std::path::PathBuf;

use taskpulse_core::{CompletedTask, Config, ProductivityAnalyzer};

use super::read_json;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file holding an array of completed tasks ("-" for stdin)
    #[arg(long, short)]
    input: PathBuf,
    /// UTC offset for bucketing (e.g. +09:00, -05:30, Z); defaults to the
    /// configured offset, then the local offset
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    utc_offset: Option<FixedOffset>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Parse `Z`, `+HH`, `+HH:MM` or `+HHMM` (and the `-` forms).
fn parse_offset(s: &str) -> Result<FixedOffset, String> {
    let invalid = || format!("invalid UTC offset '{s}', expected e.g. +09:00");

    if s.eq_ignore_ascii_case("z") {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, rest) = if let Some(rest) = s.strip_prefix('+') {
        (1, rest)
    } else if let Some(rest) = s.strip_prefix('-') {
        (-1, rest)
    } else {
        return Err(invalid());
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = match digits.len() {
        2 => (digits.parse::<i32>().map_err(|_| invalid())?, 0),
        4 => (
            digits[..2].parse::<i32>().map_err(|_| invalid())?,
            digits[2..].parse::<i32>().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };
    if minutes >= 60 {
        return Err(invalid());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let completions: Vec<CompletedTask> = read_json(&args.input)?;

    let offset = match args.utc_offset {
        Some(offset) => offset,
        None => config
            .utc_offset()?
            .unwrap_or_else(|| Local::now().offset().fix()),
    };

    tracing::debug!(%offset, records = completions.len(), "analyzing completions");

    let analyzer = ProductivityAnalyzer::new().with_offset(offset);
    let result = analyzer.analyze(&completions)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", result.render_ascii());
    }

    Ok(())
}
