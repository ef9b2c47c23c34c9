pub mod audio;
pub mod error;
pub mod exporter;
pub mod note;
pub mod patterns;
pub mod playfield;
pub mod session;

pub use error::{CharterError, Result};
pub use note::{Chart, CutDirection, HandType, Note};
pub use patterns::Pattern;
pub use playfield::Difficulty;
pub use session::{GameStatus, PlaySession, SpawnCursor};

use patterns::NoteWriter;
use rand::Rng;

/// Song length assumed when the real one is unknown.
pub const DEFAULT_SONG_DURATION: f64 = 180.0;

/// Main charter configuration
///
/// With `trim_tail` on (the default) the final pattern stops emitting notes once it
/// passes the end offset, so every note lands inside the playable window. Turn it off
/// to let the last pattern play out in full past `duration - end_margin`.
#[derive(Clone, Debug)]
pub struct CharterConfig {
    pub bpm: f64,          // assumed tempo when the real one is unknown
    pub start_offset: f64, // seconds of lead-in before the first note
    pub end_margin: f64,   // seconds kept free before the song ends
    pub trim_tail: bool,   // drop notes the last pattern places past the end offset
}

impl Default for CharterConfig {
    fn default() -> Self {
        CharterConfig {
            bpm: 130.0,
            start_offset: 2.0,
            end_margin: 3.0,
            trim_tail: true,
        }
    }
}

impl CharterConfig {
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.bpm
    }

    /// A beat has to move the cursor forward from the start offset, or generation never ends.
    pub fn validate(&self) -> Result<()> {
        let beat = self.beat_duration();
        let start = self.start_offset;
        if beat.is_finite() && beat > 0.0 && start + beat > start {
            Ok(())
        } else {
            Err(CharterError::InvalidBpm(self.bpm))
        }
    }

    /// Playable window `(start, end)` for a song. `end` never precedes `start`.
    pub fn window(&self, duration: f64) -> (f64, f64) {
        let start = self.start_offset;
        let end = duration - self.end_margin;
        if !end.is_finite() {
            log::warn!("Non-finite song duration {}, generating an empty chart", duration);
            return (start, start);
        }
        (start, end.max(start))
    }
}

/// Pattern-based chart generator
pub struct Charter {
    config: CharterConfig,
}

impl Charter {
    pub fn new(config: CharterConfig) -> Self {
        Charter { config }
    }

    pub fn config(&self) -> &CharterConfig {
        &self.config
    }

    /// Generate a chart, drawing each pattern uniformly from `rng`.
    pub fn generate<R: Rng + ?Sized>(&self, duration: f64, rng: &mut R) -> Chart {
        self.generate_with(duration, || Pattern::ALL[rng.gen_range(0..Pattern::ALL.len())])
    }

    /// Generate a chart, taking the pattern sequence from `next_pattern`.
    pub fn generate_with<F>(&self, duration: f64, mut next_pattern: F) -> Chart
    where
        F: FnMut() -> Pattern,
    {
        if let Err(e) = self.config.validate() {
            log::warn!("{}, generating an empty chart", e);
            return Chart::new();
        }

        let (start, end) = self.config.window(duration);
        let beat = self.config.beat_duration();
        let cutoff = self.config.trim_tail.then_some(end);
        let mut writer = NoteWriter::new(beat, cutoff);

        log::debug!(
            "Generating chart for {:.2}s song: window {:.2}-{:.2}s at {} BPM",
            duration, start, end, self.config.bpm
        );

        let mut current = start;
        let mut phrases = 0usize;
        while current < end {
            let pattern = next_pattern();
            log::trace!("{:?} at {:.3}s", pattern, current);
            current = pattern.apply(current, &mut writer);
            phrases += 1;
        }

        let mut notes = writer.into_notes();
        // Stable: simultaneous notes keep their emission order
        notes.sort_by(|a, b| a.time.total_cmp(&b.time));

        log::debug!("Generated {} notes from {} patterns", notes.len(), phrases);
        notes
    }
}

impl Default for Charter {
    fn default() -> Self {
        Charter::new(CharterConfig::default())
    }
}
