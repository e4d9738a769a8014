//! Artifacts, artifact sets and set-piece counting.

use std::fmt;
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::config::CalcConfig;
use crate::error::EvalError;
use crate::eval::Evaluation;
use crate::stats::{StatKind, StatVector};

/// Equipment slot of an artifact, in aggregation order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactSlot {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

impl ArtifactSlot {
    pub const COUNT: usize = CalcConfig::ARTIFACT_SLOTS;

    /// All slots in aggregation order.
    pub const ALL: [ArtifactSlot; Self::COUNT] = [
        Self::Flower,
        Self::Plume,
        Self::Sands,
        Self::Goblet,
        Self::Circlet,
    ];

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Identity of an artifact set. Set counting keys on this, never on slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArtifactSetId(pub &'static str);

impl fmt::Display for ArtifactSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Set bonus policy shared by every artifact of one set.
///
/// `bonus` is called once per equipped piece with the running count of that
/// set (1 for the first piece seen in slot order, 2 for the second, ...), so a
/// 2-piece effect is returned exactly when `count == 2` and a 4-piece effect
/// when `count == 4`.
///
/// # Implementation Rules
/// 1. Sets are stateless; one instance is shared across builds and threads
/// 2. `bonus` MAY read other stats through `eval.stat(..)` but MUST NOT read `kind`
pub trait ArtifactSet: Send + Sync {
    fn id(&self) -> ArtifactSetId;

    /// Contribution to `kind` when `count` pieces of this set have been seen.
    fn bonus(
        &self,
        _kind: StatKind,
        _eval: &mut Evaluation<'_>,
        _count: u8,
    ) -> Result<f64, EvalError> {
        Ok(0.0) // Default: no set effect
    }
}

/// Artifact set without any set effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InertSet(pub ArtifactSetId);

impl ArtifactSet for InertSet {
    fn id(&self) -> ArtifactSetId {
        self.0
    }
}

/// One artifact: its slot, its set and its rolled main/sub stats.
#[derive(Clone)]
pub struct Artifact {
    pub slot: ArtifactSlot,
    pub set: Arc<dyn ArtifactSet>,
    pub stats: StatVector,
}

impl Artifact {
    pub fn new(slot: ArtifactSlot, set: Arc<dyn ArtifactSet>) -> Self {
        Self {
            slot,
            set,
            stats: StatVector::zero(),
        }
    }

    /// Adds a rolled stat (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, value: f64) -> Self {
        self.stats.add(kind, value);
        self
    }
}

impl fmt::Debug for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Artifact")
            .field("slot", &self.slot)
            .field("set", &self.set.id())
            .field("stats", &self.stats.iter_nonzero().collect::<Vec<_>>())
            .finish()
    }
}

/// Running piece count per set, in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct SetCounter {
    entries: ArrayVec<(ArtifactSetId, u8), { CalcConfig::MAX_ACTIVE_SETS }>,
}

impl SetCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more piece of `id` and returns the count after the increment.
    ///
    /// Once [`CalcConfig::MAX_ACTIVE_SETS`] distinct sets are tracked, pieces of
    /// any further set are not counted and yield 0, which no set bonus matches.
    pub fn increment(&mut self, id: ArtifactSetId) -> u8 {
        if let Some((_, count)) = self.entries.iter_mut().find(|(seen, _)| *seen == id) {
            *count = count.saturating_add(1);
            return *count;
        }
        match self.entries.try_push((id, 1)) {
            Ok(()) => 1,
            Err(_) => {
                tracing::debug!(set = %id, "set counter full, piece not counted");
                0
            }
        }
    }

    /// Pieces of `id` counted so far.
    pub fn count(&self, id: ArtifactSetId) -> u8 {
        self.entries
            .iter()
            .find(|(seen, _)| *seen == id)
            .map_or(0, |(_, count)| *count)
    }

    /// Distinct sets seen so far.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }
}
