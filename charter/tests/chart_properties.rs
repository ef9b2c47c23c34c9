use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tempo_strike_charter::{
    note::{is_sorted, LANE_COUNT, LAYER_COUNT},
    Charter, CharterConfig, Difficulty, GameStatus, Pattern, PlaySession, SpawnCursor,
};

const SEEDS: [u64; 8] = [0, 1, 2, 3, 42, 1337, 9001, 0xDEAD_BEEF];
const DURATIONS: [f64; 6] = [60.0, 90.5, 120.0, 180.0, 241.3, 600.0];

fn each_chart(charter: &Charter, mut check: impl FnMut(f64, &[tempo_strike_charter::Note])) {
    for &seed in &SEEDS {
        for &duration in &DURATIONS {
            let chart = charter.generate(duration, &mut StdRng::seed_from_u64(seed));
            check(duration, &chart);
        }
    }
}

#[test]
fn charts_are_non_empty_and_sorted() {
    each_chart(&Charter::default(), |duration, chart| {
        assert!(!chart.is_empty(), "empty chart for {}s", duration);
        assert!(is_sorted(chart));
    });
}

#[test]
fn notes_stay_on_the_grid() {
    each_chart(&Charter::default(), |_, chart| {
        for note in chart {
            assert!(note.lane < LANE_COUNT);
            assert!(note.layer < LAYER_COUNT);
        }
    });
}

#[test]
fn notes_stay_inside_the_playable_window() {
    let charter = Charter::default();
    each_chart(&charter, |duration, chart| {
        let (start, end) = charter.config().window(duration);
        for note in chart {
            assert!(note.time >= start);
            assert!(note.time <= end);
            assert!(note.time < duration);
        }
    });
}

#[test]
fn untrimmed_notes_overrun_by_less_than_one_pattern() {
    let charter = Charter::new(CharterConfig {
        trim_tail: false,
        ..CharterConfig::default()
    });
    let beat = charter.config().beat_duration();
    each_chart(&charter, |duration, chart| {
        let (start, end) = charter.config().window(duration);
        for note in chart {
            assert!(note.time >= start);
            assert!(note.time < end + 8.0 * beat);
        }
    });
}

#[test]
fn identifiers_are_unique() {
    each_chart(&Charter::default(), |_, chart| {
        let ids: HashSet<&str> = chart.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids.len(), chart.len());
    });
}

#[test]
fn seeded_generation_is_repeatable() {
    let charter = Charter::default();
    for &seed in &SEEDS {
        let a = charter.generate(200.0, &mut StdRng::seed_from_u64(seed));
        let b = charter.generate(200.0, &mut StdRng::seed_from_u64(seed));
        assert_eq!(a, b);
    }
}

#[test]
fn every_pattern_gets_picked() {
    let charter = Charter::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut seen = HashSet::new();
    let mut picker = || {
        let p = Pattern::ALL[rand::Rng::gen_range(&mut rng, 0..Pattern::ALL.len())];
        seen.insert(p);
        p
    };
    charter.generate_with(600.0, &mut picker);
    assert_eq!(seen.len(), Pattern::ALL.len());
}

#[test]
fn tiny_songs_produce_empty_charts() {
    let charter = Charter::default();
    for duration in [0.0, 1.0, 4.9, 5.0] {
        let chart = charter.generate(duration, &mut StdRng::seed_from_u64(3));
        assert!(chart.is_empty(), "expected no notes for {}s", duration);
    }
}

#[test]
fn full_play_through_with_generated_chart() {
    let chart = Charter::default().generate(90.0, &mut StdRng::seed_from_u64(11));
    let difficulty = Difficulty::Hard;
    let mut session = PlaySession::new(&chart, difficulty, true);
    let mut spawner = SpawnCursor::new(difficulty);
    session.ready();
    assert!(session.start());

    // Hit every note the moment it is due, except odd-numbered ones which are left to fly past
    let mut spawned = 0;
    let mut t = 0.0;
    while t < 95.0 {
        spawned += spawner.due(&chart, t).len();
        for note in chart.iter().filter(|n| n.time <= t) {
            let index: usize = note.id.trim_start_matches("note-").parse().unwrap();
            if index % 2 == 0 {
                session.register_hit(&note.id, true);
            }
        }
        session.advance(t);
        t += 0.05;
    }
    session.finish();

    assert_eq!(spawned, chart.len());
    assert_eq!(session.status(), GameStatus::Victory);
    assert_eq!(session.hits() + session.misses(), chart.len());
    assert!(session.score() > 0);
}
