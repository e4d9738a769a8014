//! Content loaders for reading calculation inputs from files.
//!
//! - [`ConfigLoader`]: character [`Progression`](damage_core::Progression) from TOML
//! - [`EnemyLoader`]: [`Enemy`](damage_core::Enemy) descriptions from RON

pub mod config;
pub mod enemy;

pub use config::ConfigLoader;
pub use enemy::EnemyLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(path = %path.display(), "reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
