// config.rs - Window and audio settings loaded from settings.ron
//
// Settings are read once in main(), before the App is built, because the
// window title and resolution have to be known when WindowPlugin is
// configured. The parsed struct is then inserted as a Resource so systems
// (like the audio ones) can read the volumes.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Where the settings file lives, relative to the working directory.
pub const SETTINGS_PATH: &str = "settings.ron";

/// Game settings, deserialized from settings.ron.
///
/// #[serde(default)] on every level means a partial settings file still
/// parses: missing fields or sections fall back to their Default values
/// instead of producing a deserialization error.
#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub audio: AudioSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            audio: AudioSettings::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    /// Window size in logical pixels. The simulation assumes one world unit
    /// per logical pixel, so these also define the playfield extent.
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Drop!".into(),
            width: 800,
            height: 480,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AudioSettings {
    /// Linear volume for the looping rain track, 0.0 to 1.0.
    pub music_volume: f32,
    /// Linear volume for the one-shot catch sound, 0.0 to 1.0.
    pub sound_volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.6,
            sound_volume: 1.0,
        }
    }
}

impl Settings {
    /// Reads and parses a settings file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read settings: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Loads settings.ron, or returns compiled defaults if the file is
    /// missing or malformed. A bad settings file must never stop the game
    /// from starting, so the error is reported instead of propagated.
    ///
    /// This runs before the App (and its log subscriber) exists, so the
    /// report goes to stderr rather than through the tracing macros.
    pub fn load_or_default() -> Self {
        match Self::load_from(SETTINGS_PATH) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("settings: {e}; using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_settings_file() {
        let text = r#"(
            window: ( title: "Drop!", width: 800, height: 480 ),
            audio: ( music_volume: 0.5, sound_volume: 0.8 ),
        )"#;
        let settings: Settings = ron::from_str(text).expect("parse settings");
        assert_eq!(settings.window.title, "Drop!");
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 480);
        assert_eq!(settings.audio.music_volume, 0.5);
        assert_eq!(settings.audio.sound_volume, 0.8);
    }

    #[test]
    fn missing_fields_take_defaults() {
        // Only the title is given; everything else should come from Default.
        let settings: Settings =
            ron::from_str(r#"( window: ( title: "Rain" ) )"#).expect("parse partial settings");
        assert_eq!(settings.window.title, "Rain");
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.audio, AudioSettings::default());
    }

    #[test]
    fn load_from_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"( audio: ( music_volume: 0.25 ) )"#).expect("write temp file");
        let settings = Settings::load_from(file.path()).expect("load settings");
        assert_eq!(settings.audio.music_volume, 0.25);
        assert_eq!(settings.window, WindowSettings::default());
    }

    #[test]
    fn load_from_reports_missing_file_and_bad_ron() {
        assert!(Settings::load_from("no/such/settings.ron")
            .unwrap_err()
            .contains("read settings"));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not ron at all").expect("write temp file");
        assert!(Settings::load_from(file.path())
            .unwrap_err()
            .contains("parse RON"));
    }
}
