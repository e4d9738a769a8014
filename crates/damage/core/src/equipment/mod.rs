//! Weapons, artifacts and the build that holds them.

pub mod artifact;
pub mod build;
pub mod weapon;

pub use artifact::{Artifact, ArtifactSet, ArtifactSetId, ArtifactSlot, InertSet, SetCounter};
pub use build::Build;
pub use weapon::{Weapon, WeaponPassive};
