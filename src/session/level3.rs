// Sequencing Level 3 definition: quarter-hour marks.
use super::SequencingLevel;

pub static LEVEL3: SequencingLevel = SequencingLevel {
    level: 3,
    name: "Quarter Hours",
    description: "Introduce 15 and 45 minute marks",
    tolerance_minutes: 7,
    hour_tolerance: 0,
    minute_pool: &[0, 15, 30, 45],
    hint: "Quarter past points at the 3, quarter to points at the 9",
};
