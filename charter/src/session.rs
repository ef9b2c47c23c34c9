use crate::note::Note;
use crate::playfield::Difficulty;
use std::collections::HashMap;

pub const MAX_HEALTH: u32 = 100;
pub const HIT_POINTS: u32 = 100;
pub const GOOD_CUT_BONUS: u32 = 50;
pub const HIT_HEAL: u32 = 2;
pub const MISS_DAMAGE: u32 = 10;

/// Per-note runtime flags, kept apart from the chart itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoteState {
    pub hit: bool,
    pub missed: bool,
}

impl NoteState {
    pub fn is_pending(&self) -> bool {
        !self.hit && !self.missed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Loading,
    Idle,
    Playing,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitOutcome {
    pub points: u32,
    pub combo: u32,
    pub multiplier: u32,
}

/// Score multiplier earned by a running combo.
pub fn multiplier_for_combo(combo: u32) -> u32 {
    match combo {
        c if c > 30 => 8,
        c if c > 20 => 4,
        c if c > 10 => 2,
        _ => 1,
    }
}

/// One play-through of a chart: scoring, health and per-note hit/miss state.
#[derive(Debug)]
pub struct PlaySession<'a> {
    chart: &'a [Note],
    difficulty: Difficulty,
    zen_mode: bool,
    status: GameStatus,
    score: u64,
    combo: u32,
    max_combo: u32,
    multiplier: u32,
    health: u32,
    states: HashMap<String, NoteState>,
    miss_cursor: usize,
}

impl<'a> PlaySession<'a> {
    /// Starts in `Loading` until the input side reports ready.
    pub fn new(chart: &'a [Note], difficulty: Difficulty, zen_mode: bool) -> Self {
        let states = chart
            .iter()
            .map(|n| (n.id.clone(), NoteState::default()))
            .collect();

        PlaySession {
            chart,
            difficulty,
            zen_mode,
            status: GameStatus::Loading,
            score: 0,
            combo: 0,
            max_combo: 0,
            multiplier: 1,
            health: MAX_HEALTH,
            states,
            miss_cursor: 0,
        }
    }

    pub fn ready(&mut self) {
        if self.status == GameStatus::Loading {
            self.status = GameStatus::Idle;
        }
    }

    /// Begin a fresh run. Clears every note's flags.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::Loading {
            log::warn!("Cannot start while still loading");
            return false;
        }

        self.score = 0;
        self.combo = 0;
        self.max_combo = 0;
        self.multiplier = 1;
        self.health = MAX_HEALTH;
        self.miss_cursor = 0;
        for state in self.states.values_mut() {
            *state = NoteState::default();
        }
        self.status = GameStatus::Playing;

        log::info!(
            "Session started: {} notes, {}{}",
            self.chart.len(),
            self.difficulty,
            if self.zen_mode { ", zen mode" } else { "" }
        );
        true
    }

    pub fn register_hit(&mut self, id: &str, good_cut: bool) -> Option<HitOutcome> {
        if self.status != GameStatus::Playing {
            return None;
        }
        let state = self.states.get_mut(id).filter(|s| s.is_pending())?;
        state.hit = true;

        let base = if good_cut { HIT_POINTS + GOOD_CUT_BONUS } else { HIT_POINTS };
        // Scored at the multiplier earned before this hit
        let points = base * self.multiplier;
        self.score += points as u64;

        self.combo += 1;
        self.max_combo = self.max_combo.max(self.combo);
        self.multiplier = multiplier_for_combo(self.combo);
        self.health = (self.health + HIT_HEAL).min(MAX_HEALTH);

        log::trace!("Hit {} for {} points, combo {}", id, points, self.combo);
        Some(HitOutcome {
            points,
            combo: self.combo,
            multiplier: self.multiplier,
        })
    }

    /// Returns whether the miss was recorded.
    pub fn register_miss(&mut self, id: &str) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(state) = self.states.get_mut(id).filter(|s| s.is_pending()) else {
            return false;
        };
        state.missed = true;

        self.combo = 0;
        self.multiplier = 1;
        if !self.zen_mode {
            self.health = self.health.saturating_sub(MISS_DAMAGE);
            if self.health == 0 {
                log::info!("Health depleted, game over at score {}", self.score);
                self.status = GameStatus::GameOver;
            }
        }
        true
    }

    /// Miss every pending note whose miss window closed before `now`. Returns their ids.
    pub fn advance(&mut self, now: f64) -> Vec<String> {
        let window = self.difficulty.miss_window();
        let chart = self.chart;
        let mut missed = Vec::new();

        while self.status == GameStatus::Playing {
            let Some(note) = chart.get(self.miss_cursor) else {
                break;
            };
            if now <= note.time + window {
                break;
            }
            if self.register_miss(&note.id) {
                missed.push(note.id.clone());
            }
            self.miss_cursor += 1;
        }

        missed
    }

    /// The song ran out while the player was still alive.
    pub fn finish(&mut self) {
        if self.status == GameStatus::Playing {
            log::info!("Song complete: score {}, max combo {}", self.score, self.max_combo);
            self.status = GameStatus::Victory;
        }
    }

    pub fn reset_to_idle(&mut self) {
        self.status = GameStatus::Idle;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn zen_mode(&self) -> bool {
        self.zen_mode
    }

    pub fn note_state(&self, id: &str) -> Option<NoteState> {
        self.states.get(id).copied()
    }

    pub fn hits(&self) -> usize {
        self.states.values().filter(|s| s.hit).count()
    }

    pub fn misses(&self) -> usize {
        self.states.values().filter(|s| s.missed).count()
    }
}

/// Hands out notes in chart order once their spawn time arrives.
#[derive(Clone, Debug)]
pub struct SpawnCursor {
    lead_time: f64,
    next: usize,
}

impl SpawnCursor {
    pub fn new(difficulty: Difficulty) -> Self {
        SpawnCursor {
            lead_time: difficulty.spawn_lead_time(),
            next: 0,
        }
    }

    /// Notes that became due since the last call. Expects a time-sorted chart.
    pub fn due<'c>(&mut self, chart: &'c [Note], now: f64) -> &'c [Note] {
        let first = self.next.min(chart.len());
        let mut end = first;
        while end < chart.len() && chart[end].time - self.lead_time <= now {
            end += 1;
        }
        self.next = end;
        &chart[first..end]
    }

    pub fn reset(&mut self) {
        self.next = 0;
    }
}
