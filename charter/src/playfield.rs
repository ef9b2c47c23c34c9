use crate::error::{CharterError, Result};
use crate::note::{CutDirection, Note};
use serde::{Deserialize, Serialize};
use std::fmt;

// Game world, in scene units
pub const TRACK_LENGTH: f64 = 50.0;
pub const SPAWN_Z: f64 = -30.0;
pub const PLAYER_Z: f64 = 0.0;
pub const MISS_Z: f64 = 5.0;
pub const LANE_WIDTH: f64 = 0.8;
pub const LAYER_HEIGHT: f64 = 0.8;
pub const NOTE_SIZE: f64 = 0.5;

/// Lane centres, symmetric around x = 0
pub const LANE_X_POSITIONS: [f64; 4] = [
    -1.5 * LANE_WIDTH,
    -0.5 * LANE_WIDTH,
    0.5 * LANE_WIDTH,
    1.5 * LANE_WIDTH,
];

/// Low, mid, high
pub const LAYER_Y_POSITIONS: [f64; 3] = [LAYER_HEIGHT, 2.0 * LAYER_HEIGHT, 3.0 * LAYER_HEIGHT];

impl CutDirection {
    /// Unit slice vector; zero for `Any`.
    pub fn vector(&self) -> [f64; 3] {
        match self {
            CutDirection::Up => [0.0, 1.0, 0.0],
            CutDirection::Down => [0.0, -1.0, 0.0],
            CutDirection::Left => [-1.0, 0.0, 0.0],
            CutDirection::Right => [1.0, 0.0, 0.0],
            CutDirection::Any => [0.0, 0.0, 0.0],
        }
    }
}

/// Note travel speed presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(CharterError::UnknownDifficulty(other.to_string())),
        }
    }

    /// Units per second along the track
    pub fn speed(&self) -> f64 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Medium => 10.0,
            Difficulty::Hard => 15.0,
        }
    }

    /// Seconds between a note spawning and reaching the player
    pub fn spawn_lead_time(&self) -> f64 {
        (PLAYER_Z - SPAWN_Z) / self.speed()
    }

    /// Seconds a note may run past the player before it counts as missed
    pub fn miss_window(&self) -> f64 {
        (MISS_Z - PLAYER_Z) / self.speed()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(name)
    }
}

/// (x, y) of a note's slot in the hit plane.
pub fn note_position(note: &Note) -> [f64; 2] {
    let x = LANE_X_POSITIONS[(note.lane as usize).min(LANE_X_POSITIONS.len() - 1)];
    let y = LAYER_Y_POSITIONS[(note.layer as usize).min(LAYER_Y_POSITIONS.len() - 1)];
    [x, y]
}

/// Depth of a note on the track at song time `now`. Reaches PLAYER_Z exactly at `note.time`.
pub fn note_z(note: &Note, now: f64, difficulty: Difficulty) -> f64 {
    PLAYER_Z - (note.time - now) * difficulty.speed()
}
