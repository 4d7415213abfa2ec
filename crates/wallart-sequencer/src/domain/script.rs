//! The demo script: narrative text, asset names, and pacing as data.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a script file.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read script file: {0}")]
    Io(#[from] std::io::Error),

    /// The script file was not valid YAML.
    #[error("failed to parse script file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Everything the scripted demo says and does, as data.
///
/// All fields default to the stock demo script, so a YAML file only needs
/// to name the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    /// First intro line, revealed before the choice controls appear.
    pub intro_greeting: String,
    /// Second intro line, revealed after the user confirms.
    pub intro_followup: String,
    /// Celebration line, revealed after the jump animation starts.
    pub congratulation: String,
    /// Closing line, revealed at the very end.
    pub closing_prompt: String,
    /// Image swapped onto the wall canvas once the projectile lands.
    pub wall_image: String,
    /// Identifier of the secondary drawing surface.
    pub drawing_surface: String,
    /// Projectile flight time in milliseconds.
    pub flight_duration_ms: u64,
    /// Pause before and inside the celebration, in milliseconds.
    pub celebration_delay_ms: u64,
}

impl Default for Script {
    fn default() -> Self {
        Self {
            intro_greeting: "Hey :) Let's create some doodle art together. Are you ready?"
                .to_owned(),
            intro_followup: "Awesome. Draw something and watch it come alive.".to_owned(),
            congratulation: "Awesome!".to_owned(),
            closing_prompt: "What else do you want to see us build?".to_owned(),
            wall_image: "sketch".to_owned(),
            drawing_surface: "doodle_canvas".to_owned(),
            flight_duration_ms: 3000,
            celebration_delay_ms: 500,
        }
    }
}

impl Script {
    /// Loads a script from a YAML file, filling unnamed fields from the
    /// stock script.
    ///
    /// # Errors
    ///
    /// Returns `ScriptError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Script, ScriptError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// The projectile flight time.
    #[must_use]
    pub fn flight_duration(&self) -> Duration {
        Duration::from_millis(self.flight_duration_ms)
    }

    /// The celebration pause.
    #[must_use]
    pub fn celebration_delay(&self) -> Duration {
        Duration::from_millis(self.celebration_delay_ms)
    }
}
