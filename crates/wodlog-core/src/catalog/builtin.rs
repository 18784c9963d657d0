//! Built-in workout catalog.

use super::workout::{Difficulty, Equipment, Movement, Workout, WorkoutType};

fn movement(id: &str, name: &str, reps: &str, video_url: Option<&str>) -> Movement {
    Movement {
        id: id.into(),
        name: name.into(),
        reps: reps.into(),
        description: None,
        video_url: video_url.map(Into::into),
    }
}

const PULL_UP_VIDEO: &str = "https://www.youtube.com/embed/a-y_G-i2F18";
const BURPEE_VIDEO: &str = "https://www.youtube.com/embed/M0_S-d_g_pA";

/// The catalog shipped with the application.
pub fn builtin_workouts() -> Vec<Workout> {
    vec![
        Workout {
            id: "1".into(),
            name: "Fran".into(),
            workout_type: WorkoutType::ForTime,
            description: "21-15-9 reps for time of:\n- Thrusters (95/65 lb)\n- Pull-ups".into(),
            description_scaled: Some(
                "Use a load you are comfortable with. Swap pull-ups for ring rows or jumping pull-ups."
                    .into(),
            ),
            estimated_duration: 8,
            movements: vec![
                movement(
                    "fran-thrusters",
                    "Thrusters",
                    "21-15-9",
                    Some("https://www.youtube.com/embed/s2g6q_v_G7o"),
                ),
                movement("fran-pull-ups", "Pull-ups", "21-15-9", Some(PULL_UP_VIDEO)),
            ],
            equipment: vec![Equipment::Barbell, Equipment::PullUpBar],
            difficulty: Some(Difficulty::Intermediate),
            benchmark: true,
            tags: vec!["girl".into()],
        },
        Workout {
            id: "2".into(),
            name: "Cindy".into(),
            workout_type: WorkoutType::Amrap,
            description: "As Many Rounds as Possible (AMRAP) in 20 minutes of:\n- 5 Pull-ups\n- 10 Push-ups\n- 15 Air Squats".into(),
            description_scaled: Some(
                "Ring rows instead of pull-ups, push-ups from the knees.".into(),
            ),
            estimated_duration: 20,
            movements: vec![
                movement("cindy-pull-ups", "Pull-ups", "5", Some(PULL_UP_VIDEO)),
                movement(
                    "cindy-push-ups",
                    "Push-ups",
                    "10",
                    Some("https://www.youtube.com/embed/0pkjOkBqsII"),
                ),
                movement("cindy-air-squats", "Air Squats", "15", Some(PULL_UP_VIDEO)),
            ],
            equipment: vec![Equipment::PullUpBar],
            difficulty: Some(Difficulty::Beginner),
            benchmark: true,
            tags: vec!["girl".into()],
        },
        Workout {
            id: "3".into(),
            name: "Helen".into(),
            workout_type: WorkoutType::ForTime,
            description: "3 rounds for time of:\n- 400 meter run\n- 21 Kettlebell Swings (24/16 kg)\n- 12 Pull-ups".into(),
            description_scaled: Some(
                "Use a lighter kettlebell. Swap pull-ups for ring rows.".into(),
            ),
            estimated_duration: 15,
            movements: vec![
                movement("helen-run", "Run", "400m", None),
                movement(
                    "helen-kb-swings",
                    "Kettlebell Swings",
                    "21",
                    Some("https://www.youtube.com/embed/YSxH59uh_wU"),
                ),
                movement("helen-pull-ups", "Pull-ups", "12", Some(PULL_UP_VIDEO)),
            ],
            equipment: vec![Equipment::Kettlebell, Equipment::PullUpBar],
            difficulty: Some(Difficulty::Intermediate),
            benchmark: true,
            tags: vec!["girl".into()],
        },
        Workout {
            id: "comp-01".into(),
            name: "Open 24.1".into(),
            workout_type: WorkoutType::ForTime,
            description: "For time:\n21 dumbbell snatches, arm 1\n21 lateral burpees over dumbbell\n21 dumbbell snatches, arm 2\n21 lateral burpees over dumbbell\n15, 15, 15, 15\n9, 9, 9, 9".into(),
            description_scaled: Some(
                "Lighter dumbbell, and step over the dumbbell instead of jumping if needed.".into(),
            ),
            estimated_duration: 15,
            movements: vec![
                movement(
                    "open241-db-snatches",
                    "Dumbbell Snatches (22.5/15 kg)",
                    "21-15-9",
                    Some("https://www.youtube.com/embed/8-5_8_D_6To"),
                ),
                movement(
                    "open241-lateral-burpees",
                    "Lateral Burpees Over Dumbbell",
                    "21-15-9",
                    Some(BURPEE_VIDEO),
                ),
            ],
            equipment: vec![Equipment::Dumbbell],
            difficulty: Some(Difficulty::Advanced),
            benchmark: false,
            tags: vec!["open".into()],
        },
        Workout {
            id: "comp-02".into(),
            name: "Open 24.2".into(),
            workout_type: WorkoutType::Amrap,
            description: "As many rounds as possible in 20 minutes of:\n- 300-meter row\n- 10 deadlifts (185/125 lb)\n- 50 double-unders".into(),
            description_scaled: Some(
                "Reduce the deadlift load. Without double-unders, do twice the single-unders (100 reps)."
                    .into(),
            ),
            estimated_duration: 20,
            movements: vec![
                movement("open242-row", "Row", "300m", None),
                movement(
                    "open242-deadlifts",
                    "Deadlifts",
                    "10",
                    Some("https://www.youtube.com/embed/1_s_e_i_v5I"),
                ),
                movement(
                    "open242-double-unders",
                    "Double-Unders",
                    "50",
                    Some("https://www.youtube.com/embed/82j_Xg5_n-4"),
                ),
            ],
            equipment: vec![Equipment::Rower, Equipment::Barbell, Equipment::Rope],
            difficulty: Some(Difficulty::Advanced),
            benchmark: false,
            tags: vec!["open".into()],
        },
        Workout {
            id: "6".into(),
            name: "Travel Day".into(),
            workout_type: WorkoutType::Amrap,
            description: "As Many Rounds as Possible (AMRAP) in 15 minutes of:\n- 10 Burpees\n- 20 Alternating Lunges\n- 30 Sit-ups".into(),
            description_scaled: Some(
                "Keep a steady pace. The goal is not to stop during the 15 minutes.".into(),
            ),
            estimated_duration: 15,
            movements: vec![
                movement("travel-burpees", "Burpees", "10", Some(BURPEE_VIDEO)),
                movement(
                    "travel-lunges",
                    "Alternating Lunges",
                    "20",
                    Some("https://www.youtube.com/embed/Z2n58m2i4jg"),
                ),
                movement(
                    "travel-sit-ups",
                    "Sit-ups",
                    "30",
                    Some("https://www.youtube.com/embed/jO_v_p_I_zE"),
                ),
            ],
            equipment: vec![Equipment::None],
            difficulty: Some(Difficulty::Beginner),
            benchmark: false,
            tags: vec!["no-equipment".into()],
        },
    ]
}
