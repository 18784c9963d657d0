use chrono::{Local, NaiveDate};
use clap::Subcommand;
use wodlog_core::catalog::DurationCategory;
use wodlog_core::{CoreError, Equipment, Workout, WorkoutFilter, WorkoutType};

use super::{open_context, print_json, CliResult};

#[derive(Subcommand)]
pub enum WorkoutAction {
    /// List workouts, optionally filtered
    List {
        /// Match against workout and movement names
        #[arg(long, short)]
        query: Option<String>,
        /// WOD style, e.g. "AMRAP" or "for time"
        #[arg(long = "type")]
        workout_type: Option<String>,
        /// short (<= 10 min), medium (11-20) or long (> 20)
        #[arg(long)]
        duration: Option<String>,
        /// Required equipment, e.g. "barbell"
        #[arg(long)]
        equipment: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one workout
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Today's workout of the day
    Today {
        /// Pick for another date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: WorkoutAction) -> CliResult {
    let ctx = open_context()?;
    let catalog = ctx.catalog();

    match action {
        WorkoutAction::List {
            query,
            workout_type,
            duration,
            equipment,
            json,
        } => {
            let filter = WorkoutFilter {
                query,
                workout_type: workout_type.as_deref().map(parse_type).transpose()?,
                duration: duration.as_deref().map(parse_duration).transpose()?,
                equipment: equipment.as_deref().map(parse_equipment).transpose()?,
            };
            let workouts: Vec<&Workout> = catalog.filter(&filter).collect();
            if json {
                print_json(&workouts)?;
            } else if workouts.is_empty() {
                println!("No workouts match.");
            } else {
                for w in workouts {
                    println!(
                        "{:<8} {:<22} {:<9} {:>3} min",
                        w.id, w.name, w.workout_type, w.estimated_duration
                    );
                }
            }
        }
        WorkoutAction::Show { id, json } => {
            let workout = catalog.require(&id)?;
            if json {
                print_json(workout)?;
            } else {
                print_workout(workout);
            }
        }
        WorkoutAction::Today { date, json } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let workout = ctx.today_wod(date);
            if json {
                print_json(workout)?;
            } else {
                println!("Workout of the day for {date}:");
                print_workout(workout);
            }
        }
    }
    Ok(())
}

pub fn print_workout(workout: &Workout) {
    println!(
        "{} [{}] - {} ({} min)",
        workout.name,
        workout.id,
        workout.workout_type,
        workout.estimated_duration
    );
    println!();
    println!("{}", workout.description);
    if let Some(scaled) = &workout.description_scaled {
        println!();
        println!("Scaled: {scaled}");
    }
    if !workout.equipment.is_empty() {
        let equipment: Vec<&str> = workout.equipment.iter().map(Equipment::as_str).collect();
        println!();
        println!("Equipment: {}", equipment.join(", "));
    }
    println!();
    println!("Movements:");
    for (i, m) in workout.movements.iter().enumerate() {
        match m.video_url() {
            Some(url) => println!("  {}. {} - {} ({url})", i + 1, m.name, m.reps),
            None => println!("  {}. {} - {}", i + 1, m.name, m.reps),
        }
    }
}

fn invalid(field: &'static str, value: &str) -> CoreError {
    wodlog_core::ValidationError::InvalidValue {
        field,
        message: format!("unknown value '{value}'"),
    }
    .into()
}

fn parse_type(value: &str) -> Result<WorkoutType, CoreError> {
    WorkoutType::parse(value).ok_or_else(|| invalid("type", value))
}

fn parse_duration(value: &str) -> Result<DurationCategory, CoreError> {
    DurationCategory::parse(value).ok_or_else(|| invalid("duration", value))
}

fn parse_equipment(value: &str) -> Result<Equipment, CoreError> {
    Equipment::parse(value).ok_or_else(|| invalid("equipment", value))
}
