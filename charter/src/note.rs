use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of horizontal lanes on the play field.
pub const LANE_COUNT: u8 = 4;
/// Number of vertical layers (low, mid, high).
pub const LAYER_COUNT: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandType {
    Left,
    Right,
}

impl HandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandType::Left => "left",
            HandType::Right => "right",
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction the player has to slice through a note.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CutDirection {
    Up,
    Down,
    Left,
    Right,
    /// No directional constraint
    Any,
}

impl CutDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CutDirection::Up => "up",
            CutDirection::Down => "down",
            CutDirection::Left => "left",
            CutDirection::Right => "right",
            CutDirection::Any => "any",
        }
    }
}

impl fmt::Display for CutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub time: f64,  // seconds from song start
    pub lane: u8,   // 0-3, left to right
    pub layer: u8,  // 0-2, low to high
    pub hand: HandType,
    pub cut: CutDirection,
}

/// Notes for one song, sorted ascending by time.
pub type Chart = Vec<Note>;

/// Whether every note time is non-decreasing along the chart.
pub fn is_sorted(chart: &[Note]) -> bool {
    chart.windows(2).all(|w| w[0].time <= w[1].time)
}
