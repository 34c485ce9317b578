// Sequencing Level 4 definition: full minute precision.
use super::SequencingLevel;

// All sixty minute values; built in a const block since spelling the
// array out would be noise.
static LEVEL4_MINUTES: [u8; 60] = {
    let mut arr = [0u8; 60];
    let mut i = 0;
    while i < 60 {
        arr[i] = i as u8;
        i += 1;
    }
    arr
};

pub static LEVEL4: SequencingLevel = SequencingLevel {
    level: 4,
    name: "Exact Minutes",
    description: "Full precision with all minute values",
    tolerance_minutes: 2,
    hour_tolerance: 0,
    minute_pool: &LEVEL4_MINUTES,
    hint: "Count by fives around the face, then add the leftover minutes",
};
