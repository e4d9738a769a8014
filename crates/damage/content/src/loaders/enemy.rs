//! Enemy description loader.

use std::path::Path;

use damage_core::{Element, Enemy};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Enemy data structure for RON files.
///
/// Resistances are listed per element; unlisted elements use `default_resistance`.
#[derive(Debug, Clone, Deserialize)]
struct EnemyRon {
    level: u32,
    #[serde(default)]
    default_resistance: f64,
    #[serde(default)]
    resistances: Vec<(Element, f64)>,
    #[serde(default)]
    affected_by: Option<Element>,
}

/// Loader for enemy descriptions from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load an enemy from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an enemy description
    pub fn load(path: &Path) -> LoadResult<Enemy> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an enemy from RON text.
    pub fn parse(content: &str) -> LoadResult<Enemy> {
        let data: EnemyRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy RON: {}", e))?;

        let mut enemy = Enemy::new(data.level).with_uniform_resistance(data.default_resistance);
        for (element, resistance) in data.resistances {
            enemy = enemy.with_resistance(element, resistance);
        }
        if let Some(aura) = data.affected_by {
            enemy = enemy.with_aura(aura);
        }

        Ok(enemy)
    }
}
