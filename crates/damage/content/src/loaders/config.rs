//! Character progression loader.

use std::path::Path;

use damage_core::{CalcConfig, Progression};

use crate::loaders::{LoadResult, read_file};

/// Loader for character progression from TOML files.
///
/// Missing keys fall back to [`Progression::default`]. A constellation above
/// the maximum is rejected rather than clamped.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a progression from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a Progression
    pub fn load(path: &Path) -> LoadResult<Progression> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a progression from TOML text.
    pub fn parse(content: &str) -> LoadResult<Progression> {
        let progression: Progression = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse progression TOML: {}", e))?;

        if progression.constellation > CalcConfig::MAX_CONSTELLATION {
            anyhow::bail!(
                "Constellation {} exceeds maximum {}",
                progression.constellation,
                CalcConfig::MAX_CONSTELLATION
            );
        }

        Ok(progression)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_full_progression() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "level = 80\nattack_level = 6\nskill_level = 9\nburst_level = 10\nconstellation = 2"
        )
        .unwrap();

        let progression = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(progression.level, 80);
        assert_eq!(progression.attack_level, 6);
        assert_eq!(progression.skill_level, 9);
        assert_eq!(progression.burst_level, 10);
        assert_eq!(progression.constellation, 2);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let progression = ConfigLoader::parse("constellation = 1").unwrap();
        assert_eq!(progression, Progression::default().with_constellation(1));
    }

    #[test]
    fn rejects_constellation_above_six() {
        let err = ConfigLoader::parse("constellation = 7").unwrap_err();
        assert!(err.to_string().contains("Constellation 7"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
