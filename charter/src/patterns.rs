use crate::note::{CutDirection, HandType, Note};

/// Rhythmic templates the generator strings together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Middle lanes, one hand after the other on every beat
    Alternating,
    /// Both hands together every other beat, outer lanes at mid height
    DoubleHits,
    /// Fast half-beat roll across all four lanes
    Stream,
    /// Both hands together on every beat, cutting outward
    Jumps,
    /// Breathing room
    Rest,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Alternating,
        Pattern::DoubleHits,
        Pattern::Stream,
        Pattern::Jumps,
        Pattern::Rest,
    ];

    /// Length of the pattern in beats
    pub fn beats(&self) -> f64 {
        match self {
            Pattern::Alternating | Pattern::DoubleHits | Pattern::Stream => 8.0,
            Pattern::Jumps | Pattern::Rest => 4.0,
        }
    }

    /// Write the pattern's notes starting at `t` and return the time right after it.
    pub fn apply(&self, t: f64, out: &mut NoteWriter) -> f64 {
        let beat = out.beat;
        match self {
            Pattern::Alternating => {
                for i in 0..8 {
                    let (lane, hand) = if i % 2 == 0 {
                        (1, HandType::Left)
                    } else {
                        (2, HandType::Right)
                    };
                    out.push(t + i as f64 * beat, lane, 0, hand, CutDirection::Down);
                }
            }
            Pattern::DoubleHits => {
                for i in 0..4 {
                    let time = t + i as f64 * beat * 2.0;
                    out.push(time, 0, 1, HandType::Left, CutDirection::Any);
                    out.push(time, 3, 1, HandType::Right, CutDirection::Any);
                }
            }
            Pattern::Stream => {
                let step = beat / 2.0;
                for i in 0..16u8 {
                    let lane = i % 4;
                    let hand = if lane < 2 { HandType::Left } else { HandType::Right };
                    out.push(t + i as f64 * step, lane, 0, hand, CutDirection::Any);
                }
            }
            Pattern::Jumps => {
                for i in 0..4 {
                    let time = t + i as f64 * beat;
                    out.push(time, 0, 0, HandType::Left, CutDirection::Left);
                    out.push(time, 3, 0, HandType::Right, CutDirection::Right);
                }
            }
            Pattern::Rest => {}
        }
        t + self.beats() * beat
    }
}

/// Accumulates notes for one chart and hands out sequential ids.
#[derive(Debug)]
pub struct NoteWriter {
    beat: f64,
    cutoff: Option<f64>,
    next_id: usize,
    notes: Vec<Note>,
}

impl NoteWriter {
    /// `cutoff` drops any note that would land after it.
    pub fn new(beat: f64, cutoff: Option<f64>) -> Self {
        NoteWriter {
            beat,
            cutoff,
            next_id: 0,
            notes: Vec::new(),
        }
    }

    pub fn push(&mut self, time: f64, lane: u8, layer: u8, hand: HandType, cut: CutDirection) {
        if self.cutoff.is_some_and(|c| time > c) {
            log::trace!("Dropping note at {:.3}s past cutoff", time);
            return;
        }

        self.notes.push(Note {
            id: format!("note-{}", self.next_id),
            time,
            lane,
            layer,
            hand,
            cut,
        });
        self.next_id += 1;
    }

    pub fn into_notes(self) -> Vec<Note> {
        self.notes
    }
}
