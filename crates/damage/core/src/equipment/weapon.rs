//! Weapons and their context-dependent passives.

use std::fmt;
use std::sync::Arc;

use crate::error::EvalError;
use crate::eval::Evaluation;
use crate::stats::{StatKind, StatVector};

/// Context-dependent weapon effect (stacking buffs, stat conversions, ...).
///
/// # Implementation Rules
/// 1. `stat` MAY read other stats through `eval.stat(..)`
/// 2. `stat` MUST NOT read `kind` itself; doing so fails with `StatCycle`
/// 3. Passives are stateless and shared read-only between evaluations
pub trait WeaponPassive: Send + Sync {
    /// Passive name (for debugging/UI).
    fn name(&self) -> &str;

    /// Contribution of this passive to `kind` for the build being evaluated.
    fn stat(&self, kind: StatKind, eval: &mut Evaluation<'_>) -> Result<f64, EvalError>;
}

/// A weapon: base attack, static bonus stats and an optional passive.
#[derive(Clone)]
pub struct Weapon {
    pub name: &'static str,
    pub base_atk: f64,
    pub stats: StatVector,
    pub passive: Option<Arc<dyn WeaponPassive>>,
}

impl Weapon {
    pub fn new(name: &'static str, base_atk: f64) -> Self {
        Self {
            name,
            base_atk,
            stats: StatVector::zero(),
            passive: None,
        }
    }

    /// Adds a static bonus stat (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, value: f64) -> Self {
        self.stats.add(kind, value);
        self
    }

    /// Attaches a passive (builder pattern).
    #[must_use]
    pub fn with_passive(mut self, passive: impl WeaponPassive + 'static) -> Self {
        self.passive = Some(Arc::new(passive));
        self
    }
}

impl fmt::Debug for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weapon")
            .field("name", &self.name)
            .field("base_atk", &self.base_atk)
            .field("stats", &self.stats.iter_nonzero().collect::<Vec<_>>())
            .field("passive", &self.passive.as_ref().map(|p| p.name()))
            .finish()
    }
}
