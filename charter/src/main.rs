use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tempo_strike_charter::{
    audio,
    exporter::{ChartExport, ChartFormat},
    Charter, CharterConfig, Difficulty, HandType, Note,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Pattern-based chart generator for Tempo Strike", long_about = None)]
struct Args {
    /// Song duration in seconds (defaults to 180 when neither this nor --audio is given)
    #[arg(short, long, conflicts_with = "audio")]
    duration: Option<f64>,

    /// WAV file to take the song duration from
    #[arg(short, long)]
    audio: Option<PathBuf>,

    /// Seed for the pattern picker (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Assumed tempo
    #[arg(long, default_value = "130")]
    bpm: f64,

    /// Difficulty written into the chart (easy, medium, hard)
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Chart format (json or chart)
    #[arg(long, default_value = "json")]
    format: String,

    /// Output directory for the chart
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Chart title, also used for the file name
    #[arg(short, long, default_value = "demo")]
    title: String,

    /// Keep notes the final pattern places after the end offset
    #[arg(long)]
    no_trim: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_default_env()
        .filter_level(level.parse()?)
        .init();

    let format = ChartFormat::from_str(&args.format)?;
    let difficulty = Difficulty::from_str(&args.difficulty)?;

    let duration = match &args.audio {
        Some(path) => {
            log::info!("Probing duration of {}", path.display());
            audio::resolve_duration(Some(audio::probe_duration(path)?))?
        }
        None => audio::resolve_duration(args.duration)?,
    };
    log::info!("Song duration: {:.2}s", duration);

    let config = CharterConfig {
        bpm: args.bpm,
        trim_tail: !args.no_trim,
        ..CharterConfig::default()
    };
    config.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("Pattern seed: {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let charter = Charter::new(config);
    let notes = charter.generate(duration, &mut rng);
    print_summary(&args.title, seed, &notes);

    let chart = ChartExport::new(args.title.clone(), charter.config().bpm, duration, difficulty, notes);
    let filename = format!("{}.{}", args.title.replace(' ', "_"), format.extension());
    let output_path = args.output.join(filename);

    chart.save(&output_path, format)?;
    log::info!("Saved chart to: {}", output_path.display());

    Ok(())
}

fn print_summary(title: &str, seed: u64, notes: &[Note]) {
    let left = notes.iter().filter(|n| n.hand == HandType::Left).count();
    let right = notes.len() - left;

    println!("\n=== Chart Summary ===");
    println!("{:<10} | {}", "Title", title);
    println!("{:<10} | {}", "Seed", seed);
    println!("{:<10} | {}", "Notes", notes.len());
    if let (Some(first), Some(last)) = (notes.first(), notes.last()) {
        println!("{:<10} | {:.3}s - {:.3}s", "Span", first.time, last.time);
    }
    println!("{:<10} | {} left / {} right", "Hands", left, right);
    println!("=== End Summary ===\n");
}
