//! Candidate equipment loadouts.

use super::artifact::{Artifact, ArtifactSlot};
use super::weapon::Weapon;

/// One weapon plus five (possibly empty) artifact slots.
///
/// A build borrows its equipment from the catalog; the core only ever reads
/// it. `value` is scratch space owned by the search driver, the core never
/// reads or writes it.
#[derive(Clone, Debug)]
pub struct Build<'a> {
    pub weapon: &'a Weapon,
    artifacts: [Option<&'a Artifact>; ArtifactSlot::COUNT],
    /// Driver-owned fitness score.
    pub value: f64,
}

impl<'a> Build<'a> {
    /// Creates a build with every artifact slot empty.
    pub fn new(weapon: &'a Weapon) -> Self {
        Self {
            weapon,
            artifacts: [None; ArtifactSlot::COUNT],
            value: 0.0,
        }
    }

    /// Equips an artifact in its own slot (builder pattern).
    #[must_use]
    pub fn with_artifact(mut self, artifact: &'a Artifact) -> Self {
        self.equip(artifact);
        self
    }

    /// Equips an artifact in its own slot, returning what it replaced.
    pub fn equip(&mut self, artifact: &'a Artifact) -> Option<&'a Artifact> {
        self.artifacts[artifact.slot.as_index()].replace(artifact)
    }

    /// Empties a slot, returning what it held.
    pub fn unequip(&mut self, slot: ArtifactSlot) -> Option<&'a Artifact> {
        self.artifacts[slot.as_index()].take()
    }

    pub fn artifact(&self, slot: ArtifactSlot) -> Option<&'a Artifact> {
        self.artifacts[slot.as_index()]
    }

    /// Equipped artifacts in slot order (Flower → Circlet), empty slots skipped.
    pub fn artifacts(&self) -> impl Iterator<Item = &'a Artifact> + '_ {
        self.artifacts.iter().filter_map(|slot| *slot)
    }
}
