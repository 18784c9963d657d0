use serde::{Deserialize, Serialize};
use std::fmt;

/// WOD style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "AMRAP")]
    Amrap,
    #[serde(rename = "For Time")]
    ForTime,
    #[serde(rename = "EMOM")]
    Emom,
    Tabata,
    #[serde(rename = "RFT")]
    Rft,
    Chipper,
    Strength,
    Endurance,
    Skill,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 9] = [
        WorkoutType::Amrap,
        WorkoutType::ForTime,
        WorkoutType::Emom,
        WorkoutType::Tabata,
        WorkoutType::Rft,
        WorkoutType::Chipper,
        WorkoutType::Strength,
        WorkoutType::Endurance,
        WorkoutType::Skill,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Amrap => "AMRAP",
            WorkoutType::ForTime => "For Time",
            WorkoutType::Emom => "EMOM",
            WorkoutType::Tabata => "Tabata",
            WorkoutType::Rft => "RFT",
            WorkoutType::Chipper => "Chipper",
            WorkoutType::Strength => "Strength",
            WorkoutType::Endurance => "Endurance",
            WorkoutType::Skill => "Skill",
        }
    }

    /// Parse a user-supplied type name, ignoring case, spaces and dashes.
    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalize(value);
        Self::ALL
            .into_iter()
            .find(|t| normalize(t.as_str()) == wanted)
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Equipment tag required by a workout or movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    #[serde(rename = "pull-up bar")]
    PullUpBar,
    Rope,
    Box,
    Rings,
    WallBall,
    JumpRope,
    MedicineBall,
    AssaultBike,
    Rower,
    SkiErg,
    Sandbag,
    None,
}

impl Equipment {
    pub const ALL: [Equipment; 15] = [
        Equipment::Barbell,
        Equipment::Dumbbell,
        Equipment::Kettlebell,
        Equipment::PullUpBar,
        Equipment::Rope,
        Equipment::Box,
        Equipment::Rings,
        Equipment::WallBall,
        Equipment::JumpRope,
        Equipment::MedicineBall,
        Equipment::AssaultBike,
        Equipment::Rower,
        Equipment::SkiErg,
        Equipment::Sandbag,
        Equipment::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Equipment::Barbell => "barbell",
            Equipment::Dumbbell => "dumbbell",
            Equipment::Kettlebell => "kettlebell",
            Equipment::PullUpBar => "pull-up bar",
            Equipment::Rope => "rope",
            Equipment::Box => "box",
            Equipment::Rings => "rings",
            Equipment::WallBall => "wall-ball",
            Equipment::JumpRope => "jump-rope",
            Equipment::MedicineBall => "medicine-ball",
            Equipment::AssaultBike => "assault-bike",
            Equipment::Rower => "rower",
            Equipment::SkiErg => "ski-erg",
            Equipment::Sandbag => "sandbag",
            Equipment::None => "none",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let wanted = normalize(value);
        Self::ALL
            .into_iter()
            .find(|e| normalize(e.as_str()) == wanted)
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Bucket of estimated workout length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationCategory {
    /// Up to 10 minutes.
    Short,
    /// 11 to 20 minutes.
    Medium,
    /// Over 20 minutes.
    Long,
}

impl DurationCategory {
    pub fn for_minutes(minutes: u32) -> Self {
        match minutes {
            0..=10 => DurationCategory::Short,
            11..=20 => DurationCategory::Medium,
            _ => DurationCategory::Long,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Some(DurationCategory::Short),
            "medium" => Some(DurationCategory::Medium),
            "long" => Some(DurationCategory::Long),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Elite,
}

/// A single exercise inside a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub id: String,
    pub name: String,
    /// Rep scheme, e.g. "21-15-9" or "400m".
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Movement {
    /// Demonstration video reference, if one exists and is non-blank.
    pub fn video_url(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// Static workout definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub description: String,
    #[serde(
        default,
        rename = "description_scaled",
        skip_serializing_if = "Option::is_none"
    )]
    pub description_scaled: Option<String>,
    /// Estimated duration in minutes.
    pub estimated_duration: u32,
    pub movements: Vec<Movement>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub benchmark: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Workout {
    pub fn duration_category(&self) -> DurationCategory {
        DurationCategory::for_minutes(self.estimated_duration)
    }

    pub fn movement(&self, movement_id: &str) -> Option<&Movement> {
        self.movements.iter().find(|m| m.id == movement_id)
    }

    pub fn route_path(&self) -> String {
        format!("/workout/{}", self.id)
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_category_boundaries() {
        assert_eq!(DurationCategory::for_minutes(8), DurationCategory::Short);
        assert_eq!(DurationCategory::for_minutes(10), DurationCategory::Short);
        assert_eq!(DurationCategory::for_minutes(11), DurationCategory::Medium);
        assert_eq!(DurationCategory::for_minutes(20), DurationCategory::Medium);
        assert_eq!(DurationCategory::for_minutes(21), DurationCategory::Long);
    }

    #[test]
    fn workout_type_parse_is_lenient() {
        assert_eq!(WorkoutType::parse("for time"), Some(WorkoutType::ForTime));
        assert_eq!(WorkoutType::parse("for-time"), Some(WorkoutType::ForTime));
        assert_eq!(WorkoutType::parse("amrap"), Some(WorkoutType::Amrap));
        assert_eq!(WorkoutType::parse("crossfit"), None);
    }

    #[test]
    fn equipment_serializes_with_display_names() {
        let json = serde_json::to_string(&vec![Equipment::PullUpBar, Equipment::WallBall]).unwrap();
        assert_eq!(json, r#"["pull-up bar","wall-ball"]"#);
        assert_eq!(Equipment::parse("Pull-up Bar"), Some(Equipment::PullUpBar));
    }

    #[test]
    fn blank_video_url_counts_as_missing() {
        let movement = Movement {
            id: "run".into(),
            name: "Run".into(),
            reps: "400m".into(),
            description: None,
            video_url: Some("  ".into()),
        };
        assert_eq!(movement.video_url(), None);
    }

    #[test]
    fn workout_json_uses_camel_case() {
        let json = r#"{
            "id": "x",
            "name": "X",
            "type": "For Time",
            "description": "d",
            "estimatedDuration": 12,
            "movements": [{"id": "m", "name": "M", "reps": "10", "videoUrl": "https://v"}],
            "equipment": ["none"]
        }"#;
        let workout: Workout = serde_json::from_str(json).unwrap();
        assert_eq!(workout.workout_type, WorkoutType::ForTime);
        assert_eq!(workout.duration_category(), DurationCategory::Medium);
        assert_eq!(workout.movements[0].video_url(), Some("https://v"));
        assert_eq!(workout.route_path(), "/workout/x");
    }
}
