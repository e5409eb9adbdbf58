//! Game configuration.
//!
//! Timing constants are fixed for the lifetime of a game. They come from a
//! [`GameConfig`], which can be loaded from TOML or JSON and is validated
//! as a whole: every problem is reported at once rather than one per run.
//!
//! ```rust
//! use simon::config::GameConfig;
//!
//! let config = GameConfig::from_toml_str(
//!     r#"
//!     button_display_ms = 300
//!     strict_mode = true
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.button_display_ms, 300);
//! assert_eq!(config.win_length, 20);
//! assert!(config.strict_mode);
//! ```

mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::game::Button;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest sequence the two-digit counter can show.
pub const MAX_WIN_LENGTH: usize = 99;

/// Display timing constants, resolved from a [`GameConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// How long a button stays lit
    pub button_display: Duration,
    /// Pause before each playback step
    pub in_between_display: Duration,
    /// Pause when replay is entered
    pub replay_delay: Duration,
    /// How long the win message stays up
    pub win_message: Duration,
}

/// Sound asset per button color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundUrls {
    pub green: String,
    pub red: String,
    pub yellow: String,
    pub blue: String,
}

impl SoundUrls {
    pub fn get(&self, button: Button) -> &str {
        match button {
            Button::Green => &self.green,
            Button::Red => &self.red,
            Button::Yellow => &self.yellow,
            Button::Blue => &self.blue,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Button, &str)> + '_ {
        Button::ALL.into_iter().map(move |button| (button, self.get(button)))
    }
}

impl Default for SoundUrls {
    fn default() -> Self {
        Self {
            green: "https://s3.amazonaws.com/freecodecamp/simonSound1.mp3".to_string(),
            red: "https://s3.amazonaws.com/freecodecamp/simonSound2.mp3".to_string(),
            yellow: "https://s3.amazonaws.com/freecodecamp/simonSound3.mp3".to_string(),
            blue: "https://s3.amazonaws.com/freecodecamp/simonSound4.mp3".to_string(),
        }
    }
}

/// Everything fixed at game construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub button_display_ms: u64,
    pub in_between_display_ms: u64,
    pub replay_delay_ms: u64,
    pub win_message_ms: u64,
    /// Sequence length that wins the game
    pub win_length: usize,
    /// Strict mode at start; it can be toggled during play
    pub strict_mode: bool,
    /// Seed for reproducible sequences, fresh entropy when absent
    pub seed: Option<u64>,
    pub sounds: SoundUrls,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            button_display_ms: 450,
            in_between_display_ms: 200,
            replay_delay_ms: 300,
            win_message_ms: 5000,
            win_length: 20,
            strict_mode: false,
            seed: None,
            sounds: SoundUrls::default(),
        }
    }
}

impl GameConfig {
    /// Load and validate a config file.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validated()
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validated()
    }

    pub fn timings(&self) -> Timings {
        Timings {
            button_display: Duration::from_millis(self.button_display_ms),
            in_between_display: Duration::from_millis(self.in_between_display_ms),
            replay_delay: Duration::from_millis(self.replay_delay_ms),
            win_message: Duration::from_millis(self.win_message_ms),
        }
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            positive("button_display_ms", self.button_display_ms),
            positive("in_between_display_ms", self.in_between_display_ms),
            positive("replay_delay_ms", self.replay_delay_ms),
            positive("win_message_ms", self.win_message_ms),
        ];

        let win_length = if (1..=MAX_WIN_LENGTH).contains(&self.win_length) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::WinLengthOutOfRange {
                value: self.win_length,
                max: MAX_WIN_LENGTH,
            })
        };
        checks.push(win_length);

        for (button, url) in self.sounds.iter() {
            let check = if url.trim().is_empty() {
                Validation::fail(ConfigViolation::MissingSound { button })
            } else {
                Validation::success(())
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`GameConfig::validate`] as a `Result`.
    pub fn check(&self) -> Result<(), ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// `self` if valid, otherwise every violation found.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.check()?;
        Ok(self)
    }
}

fn positive(field: &'static str, value: u64) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if value > 0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::ZeroDuration { field })
    }
}
