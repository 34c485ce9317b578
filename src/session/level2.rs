// Sequencing Level 2 definition: add half-hour precision.
use super::SequencingLevel;

pub static LEVEL2: SequencingLevel = SequencingLevel {
    level: 2,
    name: "Half Hours",
    description: "Add half-hour precision",
    tolerance_minutes: 15,
    hour_tolerance: 1,
    minute_pool: &[0, 30],
    hint: "The rabbit (minute hand) points straight down at half past",
};
