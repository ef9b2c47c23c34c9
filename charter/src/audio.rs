use crate::error::{CharterError, Result};
use crate::DEFAULT_SONG_DURATION;
use std::path::Path;

/// Song length in seconds, read from the file header.
pub fn probe_duration(path: &Path) -> Result<f64> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "wav" => probe_wav(path),
        ext => Err(CharterError::UnsupportedFormat(ext.to_string())),
    }
}

fn probe_wav(path: &Path) -> Result<f64> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();

    // duration() counts frames, not samples
    let frames = reader.duration();
    let seconds = if spec.sample_rate == 0 {
        0.0
    } else {
        frames as f64 / spec.sample_rate as f64
    };

    log::debug!(
        "Probed {}: {} frames @ {} Hz x{} = {:.2}s",
        path.display(),
        frames,
        spec.sample_rate,
        spec.channels,
        seconds
    );
    Ok(seconds)
}

/// Turn an optionally-known duration into one the generator can use.
pub fn resolve_duration(duration: Option<f64>) -> Result<f64> {
    match duration {
        None => Ok(DEFAULT_SONG_DURATION),
        Some(d) if d.is_finite() && d >= 0.0 => Ok(d),
        Some(d) => Err(CharterError::InvalidDuration(d)),
    }
}
