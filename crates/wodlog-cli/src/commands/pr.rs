use clap::Subcommand;
use wodlog_core::AppContext;

use super::{confirm, format_local, open_context, print_json, CliResult};

#[derive(Subcommand)]
pub enum PrAction {
    /// List personal records, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Record a new personal record
    Add {
        /// Exercise name, e.g. "Back Squat"
        exercise: String,
        /// Weight, reps or time, e.g. "140kg"
        value: String,
    },
    /// Delete a personal record
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

pub fn run(action: PrAction) -> CliResult {
    let mut ctx = open_context()?;
    let outcome = apply(&mut ctx, action);
    let torn_down = ctx.teardown();
    outcome?;
    Ok(torn_down?)
}

fn apply(ctx: &mut AppContext, action: PrAction) -> CliResult {
    match action {
        PrAction::List { json } => {
            let records = ctx.workouts()?.personal_records();
            if json {
                print_json(records)?;
            } else if records.is_empty() {
                println!("No personal records yet.");
            } else {
                for pr in records {
                    let source = pr
                        .workout_name
                        .as_deref()
                        .map(|name| format!(" (from {name})"))
                        .unwrap_or_default();
                    println!(
                        "{}  {:<20} {:<10} {}{source}",
                        pr.id,
                        pr.exercise,
                        pr.value,
                        format_local(&pr.date)
                    );
                }
            }
        }
        PrAction::Add { exercise, value } => {
            let record = ctx.workouts_mut()?.add_personal_record(&exercise, &value)?;
            println!("Added {} {} ({})", record.exercise, record.value, record.id);
        }
        PrAction::Delete { id, yes } => {
            let exercise = ctx
                .workouts()?
                .personal_records()
                .iter()
                .find(|pr| pr.id == id)
                .map(|pr| pr.exercise.clone());
            let Some(exercise) = exercise else {
                println!("No personal record with id {id}.");
                return Ok(());
            };
            if !yes && !confirm(&format!("Delete {exercise} record?"))? {
                println!("Kept.");
                return Ok(());
            }
            ctx.workouts_mut()?.delete_personal_record(&id);
            println!("Deleted {exercise} record.");
        }
    }

    Ok(())
}
