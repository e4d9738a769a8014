//! Per-evaluation stat memoization.
//!
//! A single formula evaluation resolves the same stats many times: the talent
//! formula wants ATK, the crit step wants crit rate, set bonuses and weapon
//! passives read energy recharge, and so on. `StatCache` stores each resolved
//! value once. It belongs to exactly one [`Evaluation`](crate::Evaluation) and
//! therefore to exactly one build; reusing it for another build requires
//! [`StatCache::clear`], which `Evaluation::with_cache` does for you.
//!
//! Two layers are cached separately:
//! - **Aggregated**: the additive base aggregation (character, weapon, artifacts,
//!   set bonuses)
//! - **Resolved**: the aggregated value after the character variant's override
//!
//! Each slot also records "in progress", which turns a stat that depends on
//! itself into [`EvalError::StatCycle`] instead of unbounded recursion.

use super::kind::StatKind;
use crate::error::EvalError;

/// Which layer of the stat stack a cache slot belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatLayer {
    Aggregated,
    Resolved,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Slot {
    #[default]
    Empty,
    Pending,
    Ready(f64),
}

/// Memoized stat values for one build evaluation.
#[derive(Clone, Debug)]
pub struct StatCache {
    aggregated: [Slot; StatKind::COUNT],
    resolved: [Slot; StatKind::COUNT],
}

impl Default for StatCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StatCache {
    pub const fn new() -> Self {
        Self {
            aggregated: [Slot::Empty; StatKind::COUNT],
            resolved: [Slot::Empty; StatKind::COUNT],
        }
    }

    /// Forgets every stored value.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the cached value, if the stat has been fully resolved.
    pub fn get(&self, layer: StatLayer, kind: StatKind) -> Option<f64> {
        match self.slots(layer)[kind.as_index()] {
            Slot::Ready(value) => Some(value),
            Slot::Empty | Slot::Pending => None,
        }
    }

    /// Number of fully resolved entries in a layer.
    pub fn len(&self, layer: StatLayer) -> usize {
        self.slots(layer)
            .iter()
            .filter(|slot| matches!(slot, Slot::Ready(_)))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len(StatLayer::Aggregated) == 0 && self.len(StatLayer::Resolved) == 0
    }

    /// Claims a slot for computation.
    ///
    /// Returns `Ok(Some(value))` on a hit, `Ok(None)` when the caller must
    /// compute the value and hand it to [`Self::settle`], and `StatCycle` when
    /// the slot is already being computed further up the call stack.
    pub(crate) fn claim(
        &mut self,
        layer: StatLayer,
        kind: StatKind,
    ) -> Result<Option<f64>, EvalError> {
        let slot = &mut self.slots_mut(layer)[kind.as_index()];
        match *slot {
            Slot::Ready(value) => Ok(Some(value)),
            Slot::Pending => {
                tracing::debug!(%kind, ?layer, "stat cycle detected");
                Err(EvalError::StatCycle(kind))
            }
            Slot::Empty => {
                *slot = Slot::Pending;
                Ok(None)
            }
        }
    }

    /// Stores the outcome of a claimed computation. Failures release the slot.
    pub(crate) fn settle(
        &mut self,
        layer: StatLayer,
        kind: StatKind,
        result: Result<f64, EvalError>,
    ) -> Result<f64, EvalError> {
        let slot = &mut self.slots_mut(layer)[kind.as_index()];
        *slot = match result {
            Ok(value) => Slot::Ready(value),
            Err(_) => Slot::Empty,
        };
        result
    }

    fn slots(&self, layer: StatLayer) -> &[Slot; StatKind::COUNT] {
        match layer {
            StatLayer::Aggregated => &self.aggregated,
            StatLayer::Resolved => &self.resolved,
        }
    }

    fn slots_mut(&mut self, layer: StatLayer) -> &mut [Slot; StatKind::COUNT] {
        match layer {
            StatLayer::Aggregated => &mut self.aggregated,
            StatLayer::Resolved => &mut self.resolved,
        }
    }
}
