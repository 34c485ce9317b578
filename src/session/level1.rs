// Sequencing Level 1 definition: hour hand only, o'clock targets.
use super::SequencingLevel;

pub static LEVEL1: SequencingLevel = SequencingLevel {
    level: 1,
    name: "Hours Only",
    description: "Focus on hour hand positioning",
    tolerance_minutes: 30,
    hour_tolerance: 1,
    minute_pool: &[0],
    hint: "Focus on where the carrot (hour hand) points",
};
