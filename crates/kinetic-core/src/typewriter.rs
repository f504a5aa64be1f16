//! Typing/cycling text animation as an explicit state machine.
//!
//! ```text
//!   Typing ──(text complete)──► Paused ──► Deleting ──(text empty)──► Typing(next)
//!     ▲  │                                   ▲  │
//!     └──┘ one char per tick                 └──┘ one char per tick
//! ```
//!
//! The machine holds no timers. Each [`Typewriter::tick`] performs exactly one
//! transition and reports how long the caller should wait before the next one;
//! scheduling and cancellation belong to the caller (see [`crate::driver`]).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{KineticError, KineticResult};

/// Typewriter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypewriterConfig {
    /// Strings to cycle through, in order
    pub strings: Vec<String>,
    /// Delay per typed character
    pub typing_speed_ms: u64,
    /// Delay per deleted character
    pub deleting_speed_ms: u64,
    /// Hold time once a string is fully typed
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            strings: Vec::new(),
            typing_speed_ms: 100,
            deleting_speed_ms: 50,
            pause_ms: 2000,
        }
    }
}

impl TypewriterConfig {
    pub fn new<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Set all three timings at once.
    pub fn with_timing(mut self, typing_ms: u64, deleting_ms: u64, pause_ms: u64) -> Self {
        self.typing_speed_ms = typing_ms;
        self.deleting_speed_ms = deleting_ms;
        self.pause_ms = pause_ms;
        self
    }

    pub fn validate(&self) -> KineticResult<()> {
        if self.strings.is_empty() {
            return Err(KineticError::EmptyStrings);
        }
        Ok(())
    }
}

/// Current phase of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Adding characters towards the target string
    Typing,
    /// Holding the fully typed string
    Paused,
    /// Removing characters
    Deleting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Typing => "typing",
            Phase::Paused => "paused",
            Phase::Deleting => "deleting",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Phase after the transition
    pub phase: Phase,
    /// Wait before the next tick
    pub delay: Duration,
}

/// Cycling typewriter state
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    index: usize,
    text: String,
    phase: Phase,
}

impl Typewriter {
    /// Validate the configuration and start typing the first string.
    pub fn new(config: TypewriterConfig) -> KineticResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            index: 0,
            text: String::new(),
            phase: Phase::Typing,
        })
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    /// Currently rendered text (always a prefix of [`Self::current_target`]).
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the string being typed or deleted.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_target(&self) -> &str {
        &self.config.strings[self.index]
    }

    /// Number of ticks to type, hold and delete every string once.
    pub fn ticks_per_cycle(&self) -> usize {
        self.config
            .strings
            .iter()
            .map(|s| 2 * s.chars().count().max(1) + 1)
            .sum()
    }

    /// Delay before the first tick.
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.config.typing_speed_ms)
    }

    /// Perform one transition.
    pub fn tick(&mut self) -> Tick {
        let delay_ms = match self.phase {
            Phase::Typing => {
                let typed = self.text.chars().count();
                if let Some(next) = self.config.strings[self.index].chars().nth(typed) {
                    self.text.push(next);
                }
                if self.text.len() == self.current_target().len() {
                    self.phase = Phase::Paused;
                    self.config.pause_ms
                } else {
                    self.config.typing_speed_ms
                }
            }
            Phase::Paused => {
                self.phase = Phase::Deleting;
                self.config.deleting_speed_ms
            }
            Phase::Deleting => {
                self.text.pop();
                if self.text.is_empty() {
                    self.index = (self.index + 1) % self.config.strings.len();
                    self.phase = Phase::Typing;
                    tracing::trace!(index = self.index, "Typewriter advanced");
                    self.config.typing_speed_ms
                } else {
                    self.config.deleting_speed_ms
                }
            }
        };

        Tick {
            phase: self.phase,
            delay: Duration::from_millis(delay_ms),
        }
    }
}
