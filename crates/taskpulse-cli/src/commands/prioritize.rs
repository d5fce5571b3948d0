//! Task prioritization command.

use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

use taskpulse_core::{Config, RankedTask, ScoreBreakdown, Task, TaskPrioritizer, UserState};

use super::read_json;

#[derive(Args)]
pub struct PrioritizeArgs {
    /// JSON file holding an array of tasks ("-" for stdin)
    #[arg(long, short)]
    input: PathBuf,
    /// Current mood (e.g. happy, stressed)
    #[arg(long)]
    mood: Option<String>,
    /// Current energy level (high, medium, low)
    #[arg(long)]
    energy: Option<String>,
    /// Evaluate deadlines at this RFC 3339 instant instead of now
    #[arg(long, value_parser = parse_instant)]
    now: Option<DateTime<Utc>>,
    /// Show per-factor score breakdowns
    #[arg(long)]
    explain: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

pub fn run(args: PrioritizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let tasks: Vec<Task> = read_json(&args.input)?;

    let state = UserState {
        mood: args.mood.or(config.defaults.mood.clone()),
        energy_level: args.energy.or(config.defaults.energy_level.clone()),
    };
    let now = args.now.unwrap_or_else(Utc::now);
    tracing::debug!(%now, tasks = tasks.len(), "prioritizing tasks");
    let prioritizer = TaskPrioritizer::try_with_config(config.prioritizer_config(now))?;

    if args.explain {
        let ranked = prioritizer.rank(&tasks, &state);
        let breakdowns: Vec<ScoreBreakdown> = ranked
            .iter()
            .map(|r| prioritizer.explain(&r.task, &state))
            .collect();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&breakdowns)?);
        } else {
            print_breakdowns(&ranked, &breakdowns);
        }
        return Ok(());
    }

    if args.json {
        let ordered = prioritizer.prioritize(&tasks, &state);
        println!("{}", serde_json::to_string_pretty(&ordered)?);
    } else {
        print_ranking(&prioritizer.rank(&tasks, &state));
    }

    Ok(())
}

fn print_ranking(ranked: &[RankedTask]) {
    if ranked.is_empty() {
        println!("No tasks.");
        return;
    }

    for (i, r) in ranked.iter().enumerate() {
        let status = if r.task.is_completed { " (done)" } else { "" };
        println!(
            "{:>3}. [{:>5.2}] {} {}{}",
            i + 1,
            r.score,
            r.task.id,
            r.task.title,
            status
        );
    }
}

fn print_breakdowns(ranked: &[RankedTask], breakdowns: &[ScoreBreakdown]) {
    if ranked.is_empty() {
        println!("No tasks.");
        return;
    }

    for (i, (r, b)) in ranked.iter().zip(breakdowns).enumerate() {
        println!("{:>3}. {} {}", i + 1, r.task.id, r.task.title);
        if b.completed {
            println!("       completed, score {:.2}", b.total);
            continue;
        }
        println!(
            "       priority   {:.2} x {:.2} = {:.3}  ({})",
            b.priority.raw, b.priority.weight, b.priority.weighted, r.task.priority
        );
        println!(
            "       deadline   {:.2} x {:.2} = {:.3}  ({} days)",
            b.deadline.raw, b.deadline.weight, b.deadline.weighted, b.days_until_deadline
        );
        println!(
            "       energy fit {:.2} x {:.2} = {:.3}  (needs {})",
            b.energy_fit.raw, b.energy_fit.weight, b.energy_fit.weighted, r.task.required_energy
        );
        println!(
            "       mood       {:.2} x {:.2} = {:.3}",
            b.mood.raw, b.mood.weight, b.mood.weighted
        );
        println!("       total      {:.3}", b.total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_instant_accepts_offsets() {
        let dt = parse_instant("2026-03-10T21:00:00+09:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-10T12:00:00+00:00");
        assert!(parse_instant("tomorrow").is_err());
    }
}
