//! JSON configuration for the interaction defaults.
//!
//! Every section is optional; missing fields take the documented defaults.
//!
//! ```json
//! {
//!   "tilt": { "maxTiltDegrees": 10, "enableGlare": false },
//!   "typewriter": { "strings": ["fast", "safe"], "pauseMs": 1500 },
//!   "counter": { "endValue": 1000, "easing": "easeOutCubic" }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::counter::CounterConfig;
use crate::error::KineticResult;
use crate::tilt::TiltConfig;
use crate::typewriter::TypewriterConfig;

/// Defaults for every interaction, loadable from a JSON file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KineticConfig {
    pub tilt: TiltConfig,
    pub typewriter: TypewriterConfig,
    pub counter: CounterConfig,
}

impl KineticConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> KineticResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: KineticConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> KineticResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the sections that are always usable on their own.
    ///
    /// An empty typewriter list is allowed here; it is rejected when a
    /// typewriter is actually built from it.
    pub fn validate(&self) -> KineticResult<()> {
        self.tilt.validate()?;
        self.counter.validate()?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> KineticResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use crate::error::KineticError;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kinetic.json");
        std::fs::write(
            &path,
            r#"{"tilt": {"enableGlare": false}, "counter": {"endValue": 99, "easing": "easeOutCubic"}}"#,
        )
        .unwrap();

        let config = KineticConfig::load(&path).unwrap();
        assert!(!config.tilt.enable_glare);
        assert_eq!(config.tilt.max_tilt_degrees, 15.0);
        assert_eq!(config.counter.end_value, 99.0);
        assert_eq!(config.counter.easing, Easing::EaseOutCubic);
        assert_eq!(config.typewriter.pause_ms, 2000);
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let config = KineticConfig::load_or_default(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, KineticConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"counter": {"durationMs": -5}}"#).unwrap();
        assert!(matches!(
            KineticConfig::load(&path),
            Err(KineticError::InvalidConfig(_))
        ));

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            KineticConfig::load(&path),
            Err(KineticError::Serialization(_))
        ));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("kinetic.json");
        let mut config = KineticConfig::default();
        config.typewriter.strings = vec!["one".into(), "two".into()];
        config.save(&path).unwrap();
        assert_eq!(KineticConfig::load(&path).unwrap(), config);
    }
}
