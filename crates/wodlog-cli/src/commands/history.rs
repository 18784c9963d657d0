use clap::Subcommand;
use wodlog_core::session::format_elapsed;
use wodlog_core::WorkoutResult;

use super::{format_local, open_context, print_json, CliResult};

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Finished workouts, newest first
    List {
        /// Show at most this many entries
        #[arg(long, short = 'n')]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// The most recent finished workout
    Last {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: HistoryAction) -> CliResult {
    let ctx = open_context()?;
    let store = ctx.workouts()?;

    match action {
        HistoryAction::List { limit, json } => {
            let history = store.history();
            let shown = &history[..limit.unwrap_or(history.len()).min(history.len())];
            if json {
                print_json(shown)?;
            } else if shown.is_empty() {
                println!("No workouts yet.");
            } else {
                for result in shown {
                    print_line(result);
                }
            }
        }
        HistoryAction::Last { json } => match store.last_workout() {
            Some(result) if json => print_json(result)?,
            Some(result) => {
                print_line(result);
                for pr in &result.personal_records {
                    println!("    PR: {}", pr.exercise);
                }
                if let Some(notes) = &result.notes {
                    println!("    {notes}");
                }
            }
            None if json => println!("null"),
            None => println!("No workouts yet."),
        },
    }
    Ok(())
}

fn print_line(result: &WorkoutResult) {
    let rx = if result.rx { " Rx" } else { "" };
    println!(
        "{}  {:<20} {:<16} {}{rx}",
        format_local(&result.completed_at),
        result.workout_name,
        result.result,
        format_elapsed(result.duration)
    );
}
