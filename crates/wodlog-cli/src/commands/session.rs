use clap::Subcommand;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use wodlog_core::records::ResultDetails;
use wodlog_core::session::format_elapsed;
use wodlog_core::{AppContext, CoreError, Event, SessionState, TickSource, WorkoutSession};

use super::{open_context, print_json, CliResult};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Run a workout interactively with a live timer
    Run {
        /// Workout id (see `workout list`)
        id: String,
    },
    /// Record a finished workout without running the timer
    Record {
        id: String,
        /// Result text, e.g. "12:45" or "15 rounds + 3"
        #[arg(long)]
        result: String,
        /// Elapsed time in seconds
        #[arg(long, default_value = "0")]
        duration: u64,
        /// Completed movement ids (repeatable or comma-separated)
        #[arg(long = "done", value_delimiter = ',')]
        done: Vec<String>,
        /// Performed as prescribed
        #[arg(long)]
        rx: bool,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionAction) -> CliResult {
    let mut ctx = open_context()?;

    let outcome = match action {
        SessionAction::Run { id } => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(run_interactive(&mut ctx, &id))
        }
        SessionAction::Record {
            id,
            result,
            duration,
            done,
            rx,
            notes,
            json,
        } => record(
            &mut ctx,
            &id,
            &result,
            duration,
            &done,
            ResultDetails { rx, notes },
            json,
        ),
    };

    let torn_down = ctx.teardown();
    outcome?;
    Ok(torn_down?)
}

fn record(
    ctx: &mut AppContext,
    id: &str,
    result_text: &str,
    duration: u64,
    done: &[String],
    details: ResultDetails,
    json: bool,
) -> CliResult {
    let mut session = ctx.open_session_with(id, TickSource::Manual)?;
    for movement_id in done.iter().map(|m| m.trim()).filter(|m| !m.is_empty()) {
        session.toggle_movement(movement_id)?;
    }
    session.start()?;
    session.credit_elapsed(duration)?;
    session.finish()?;

    let result = session.save_result(ctx.workouts_mut()?, result_text, details)?;
    if json {
        print_json(&result)?;
    } else {
        println!(
            "Saved {} - {} in {} ({})",
            result.workout_name,
            result.result,
            format_elapsed(result.duration),
            result.id
        );
    }
    Ok(())
}

const HELP: &str = "\
commands:
  s          start / resume
  p          pause
  r          reset
  t <n|id>   toggle movement (number from the list or movement id)
  v <n|id>   show the demonstration video of a movement
  f          finish and save the result
  ?          status
  q          quit without saving";

enum Step {
    Continue,
    Quit,
}

enum Capture {
    Saved,
    Retry,
    Cancelled,
}

async fn run_interactive(ctx: &mut AppContext, id: &str) -> CliResult {
    let mut session = ctx.open_session(id)?;
    super::workout::print_workout(session.workout());
    println!();
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut awaiting_result = false;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    if !session.is_recorded() {
                        println!("Input closed, session discarded.");
                    }
                    break;
                };
                let line = line.trim();

                if awaiting_result {
                    match capture_result(ctx, &mut session, line)? {
                        Capture::Saved => break,
                        Capture::Retry => prompt_result()?,
                        Capture::Cancelled => {
                            awaiting_result = false;
                            println!("Not saved. Use r to start over or q to quit.");
                        }
                    }
                    continue;
                }

                let was_finished = session.state() == SessionState::Finished;
                match handle_command(&mut session, line) {
                    Ok(Step::Quit) => break,
                    Ok(Step::Continue) => {}
                    Err(e) => println!("{e}"),
                }
                if !was_finished && session.state() == SessionState::Finished {
                    awaiting_result = true;
                    prompt_result()?;
                }
            }
            event = session.next_tick() => {
                if let Some(Event::MinuteElapsed { minute, .. }) = event {
                    println!("\r{minute} min");
                }
                eprint!("\r{}  ", format_elapsed(session.elapsed_secs()));
            }
        }
    }
    Ok(())
}

fn prompt_result() -> std::io::Result<()> {
    print!("Result (e.g. 12:45 or 15 rounds), or /cancel: ");
    std::io::stdout().flush()
}

fn handle_command(session: &mut WorkoutSession, line: &str) -> Result<Step, CoreError> {
    let (cmd, arg) = match line.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (line, ""),
    };

    match cmd {
        "" => {}
        "s" | "start" => match session.start()? {
            Some(_) => println!("Running at {}", format_elapsed(session.elapsed_secs())),
            None => println!("Already running."),
        },
        "p" | "pause" => match session.pause() {
            Some(_) => println!("Paused at {}", format_elapsed(session.elapsed_secs())),
            None => println!("Not running."),
        },
        "r" | "reset" => {
            session.reset();
            println!("Reset to 00:00.");
        }
        "t" | "toggle" => {
            let movement_id = resolve_movement(session, arg)?;
            if let Event::MovementToggled {
                completed,
                all_completed,
                ..
            } = session.toggle_movement(&movement_id)?
            {
                let mark = if completed { "x" } else { " " };
                println!("[{mark}] {movement_id}");
                if all_completed {
                    println!("All movements done!");
                }
            }
        }
        "v" | "video" => {
            let movement_id = resolve_movement(session, arg)?;
            match session
                .workout()
                .movement(&movement_id)
                .and_then(|m| m.video_url())
            {
                Some(url) => println!("{url}"),
                None => println!("No demonstration video for this movement."),
            }
        }
        "f" | "finish" => {
            session.finish()?;
            println!("Finished in {}.", format_elapsed(session.elapsed_secs()));
        }
        "?" | "status" => print_status(session),
        "q" | "quit" => return Ok(Step::Quit),
        "h" | "help" => println!("{HELP}"),
        other => println!("Unknown command '{other}'. Type h for help."),
    }
    Ok(Step::Continue)
}

fn print_status(session: &WorkoutSession) {
    let Event::StateSnapshot {
        state,
        elapsed_display,
        completed_movements,
        all_completed,
        ..
    } = session.snapshot()
    else {
        return;
    };
    println!("{state} {elapsed_display}");
    for (i, m) in session.workout().movements.iter().enumerate() {
        let mark = if completed_movements.contains(&m.id) { "x" } else { " " };
        println!("  [{mark}] {}. {}", i + 1, m.name);
    }
    if all_completed {
        println!("All movements done!");
    }
}

fn resolve_movement(session: &WorkoutSession, arg: &str) -> Result<String, CoreError> {
    let movements = &session.workout().movements;
    if let Ok(n) = arg.parse::<usize>() {
        if let Some(m) = n.checked_sub(1).and_then(|i| movements.get(i)) {
            return Ok(m.id.clone());
        }
    }
    movements
        .iter()
        .find(|m| m.id == arg)
        .map(|m| m.id.clone())
        .ok_or_else(|| CoreError::not_found("movement", arg))
}

fn capture_result(
    ctx: &mut AppContext,
    session: &mut WorkoutSession,
    line: &str,
) -> Result<Capture, Box<dyn std::error::Error>> {
    if line == "/cancel" {
        return Ok(Capture::Cancelled);
    }
    match session.save_result(ctx.workouts_mut()?, line, ResultDetails::default()) {
        Ok(result) => {
            println!(
                "Workout done and result saved: {} in {}",
                result.result,
                format_elapsed(result.duration)
            );
            Ok(Capture::Saved)
        }
        Err(CoreError::Validation(e)) => {
            println!("{e}");
            Ok(Capture::Retry)
        }
        Err(e) => Err(e.into()),
    }
}
