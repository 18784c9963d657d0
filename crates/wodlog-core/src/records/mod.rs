mod model;
mod stats;
mod store;

pub use model::{
    PersonalRecord, ResultDetails, SessionSummary, WorkoutResult, PR_PLACEHOLDER_VALUE,
};
pub use stats::ProgressStats;
pub use store::WorkoutStore;
