use crate::error::{CharterError, Result};
use crate::note::Note;
use crate::playfield::Difficulty;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChartExport {
    pub title: String,
    pub bpm: f64,
    pub duration: f64,
    pub difficulty: Difficulty,
    pub generated_at: i64,
    pub notes: Vec<Note>,
}

impl ChartExport {
    pub fn new(title: String, bpm: f64, duration: f64, difficulty: Difficulty, notes: Vec<Note>) -> Self {
        let generated_at = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);

        ChartExport {
            title,
            bpm,
            duration,
            difficulty,
            generated_at,
            notes,
        }
    }

    /// Export to JSON format
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// Export to the plain-text .chart listing
    pub fn to_chart(&self) -> String {
        let mut output = String::new();

        output.push_str("[SONG]\n");
        output.push_str(&format!("  Title = \"{}\"\n", self.title));
        output.push_str(&format!("  BPM = {}\n", self.bpm));
        output.push_str(&format!("  Duration = {:.3}\n", self.duration));
        output.push_str(&format!("  Difficulty = {}\n\n", self.difficulty));

        output.push_str("[NOTES]\n");
        output.push_str(&format!("  Notes = {}\n", self.notes.len()));
        output.push_str(":\n");

        for note in &self.notes {
            output.push_str(&format!(
                "  {}|{:.3}|{}|{}|{}|{}\n",
                note.id, note.time, note.lane, note.layer, note.hand, note.cut
            ));
        }

        output.push_str(";\n");
        output
    }

    /// Save chart to file
    pub fn save(&self, path: &Path, format: ChartFormat) -> Result<()> {
        let content = match format {
            ChartFormat::Json => self.to_json()?,
            ChartFormat::Chart => self.to_chart(),
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartFormat {
    Json,
    Chart,
}

impl ChartFormat {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ChartFormat::Json),
            "chart" => Ok(ChartFormat::Chart),
            other => Err(CharterError::UnknownFormat(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Json => "json",
            ChartFormat::Chart => "chart",
        }
    }
}
