//! Game configuration.
//!
//! Hosts configure the engine at startup by providing:
//! - `faces`: the K distinct face asset keys (each appears twice on the board)
//! - `flip_back_delay`: how long a mismatched pair stays visible
//! - `seed`: optional fixed seed for reproducible shuffles
//! - `columns`: grid width used by renderers
//! - `cues`: sound cue asset keys per feedback signal
//!
//! The engine never hardcodes the face count; the default configuration is
//! eight faces on a 4x4 board.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Default face asset keys.
pub const DEFAULT_FACES: [&str; 8] = [
    "Apple.jpg", "B.jpg", "C.jpg", "D.jpg", "E.jpg", "F.jpg", "G.jpg", "H.jpg",
];

/// Default time a mismatched pair stays revealed.
pub const DEFAULT_FLIP_BACK_DELAY: Duration = Duration::from_millis(1000);

/// Default grid width.
pub const DEFAULT_COLUMNS: usize = 4;

/// Sound cue asset keys, one per feedback signal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundCues {
    pub correct: String,
    pub incorrect: String,
    pub win: String,
}

impl Default for SoundCues {
    fn default() -> Self {
        Self {
            correct: "True.mp3".to_string(),
            incorrect: "False.mp3".to_string(),
            win: "Win.wav".to_string(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distinct face asset keys. The deck holds two cards per face.
    pub faces: Vec<String>,

    /// Delay before a mismatched pair flips back face down.
    #[serde(rename = "flip_back_delay_ms", with = "duration_ms")]
    pub flip_back_delay: Duration,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Grid width for renderers.
    pub columns: usize,

    /// Sound cues for feedback collaborators.
    pub cues: SoundCues,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            faces: DEFAULT_FACES.iter().map(|f| (*f).to_string()).collect(),
            flip_back_delay: DEFAULT_FLIP_BACK_DELAY,
            seed: None,
            columns: DEFAULT_COLUMNS,
            cues: SoundCues::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the face set.
    #[must_use]
    pub fn with_faces<I, S>(mut self, faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faces = faces.into_iter().map(Into::into).collect();
        self
    }

    /// Set the flip-back delay.
    #[must_use]
    pub fn with_flip_back_delay(mut self, delay: Duration) -> Self {
        self.flip_back_delay = delay;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the grid width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the sound cues.
    #[must_use]
    pub fn with_cues(mut self, cues: SoundCues) -> Self {
        self.cues = cues;
        self
    }

    /// Number of distinct faces (K).
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of cards on the board (2K).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.faces.len() * 2
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.faces.is_empty() {
            return Err(EngineError::InvalidConfig("at least one face is required".into()));
        }

        let mut seen = FxHashSet::default();
        for face in &self.faces {
            if face.is_empty() {
                return Err(EngineError::InvalidConfig("face keys must not be empty".into()));
            }
            if !seen.insert(face.as_str()) {
                return Err(EngineError::InvalidConfig(format!("duplicate face {face:?}")));
            }
        }

        if self.columns == 0 {
            return Err(EngineError::InvalidConfig("columns must be positive".into()));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
