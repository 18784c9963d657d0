use wodlog_core::session::format_elapsed;

use super::{format_local, open_context, print_json, CliResult};

pub fn run(json: bool) -> CliResult {
    let ctx = open_context()?;
    let stats = ctx.progress()?;

    if json {
        return print_json(&stats);
    }

    println!("Workouts:          {}", stats.total_workouts);
    println!("Time trained:      {}", format_elapsed(stats.total_duration_secs));
    println!("Personal records:  {}", stats.personal_records);
    println!("Active days:       {}", stats.active_days);
    match &stats.last_workout {
        Some(last) => println!(
            "Last workout:      {} - {} ({})",
            last.workout_name,
            last.result,
            format_local(&last.completed_at)
        ),
        None => println!("Last workout:      -"),
    }
    Ok(())
}
