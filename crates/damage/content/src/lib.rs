//! Concrete characters, weapons and artifact sets, plus data loaders.
//!
//! This crate houses the catalog `damage-core` is evaluated against:
//! - Character variants with their formula tables ([`Raiden`])
//! - Artifact sets with 2- and 4-piece effects ([`sets`])
//! - Weapons with context-dependent passives ([`weapons`])
//! - Progression (TOML) and enemy (RON) loaders, behind the `loaders` feature
//!
//! Catalog entries are stateless and can be shared between threads and builds.

pub mod characters;
pub mod sets;
pub mod weapons;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use characters::{Raiden, RaidenFormula};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, EnemyLoader, LoadResult};
