//! Character variant layer.
//!
//! A character is a [`CharacterProfile`] (base stats, ascension, progression,
//! innate stat vector) plus optional overrides:
//!
//! - [`Character::stat`] adds conditional bonuses (constellation- or
//!   resource-gated) on top of the aggregated value
//! - [`Character::talent_scaling`] swaps the scaling tables
//! - [`Talents::calculate`] dispatches a closed set of per-character formulas
//!
//! Overrides always call into the base aggregation and add to it. Replacing
//! the aggregate would skip equipment and set bonuses.
//!
//! # Design Pattern: Strategy
//! Variants are plain structs implementing [`Character`]; the profile on its
//! own is the base variant with no overrides.

pub mod talent;

pub use talent::TalentCurve;

use core::fmt;

use crate::combat::Enemy;
use crate::config::{CalcConfig, Progression};
use crate::equipment::Build;
use crate::error::EvalError;
use crate::eval::Evaluation;
use crate::stats::{HitType, StatKind, StatVector};

/// Fixed bonus stat a character gains from ascension.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ascension {
    pub kind: StatKind,
    pub value: f64,
}

/// Immutable identity of a character.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterProfile {
    pub name: &'static str,
    pub progression: Progression,
    pub base_hp: f64,
    pub base_atk: f64,
    pub base_def: f64,
    pub ascension: Option<Ascension>,
    /// Innate stats. Defaults to 5% crit rate, 50% crit damage, 100% ER.
    pub stats: StatVector,
}

impl CharacterProfile {
    pub fn new(name: &'static str, base_hp: f64, base_atk: f64, base_def: f64) -> Self {
        Self {
            name,
            progression: Progression::new(),
            base_hp,
            base_atk,
            base_def,
            ascension: None,
            stats: StatVector::zero()
                .with(StatKind::CritRate, CalcConfig::BASE_CRIT_RATE)
                .with(StatKind::CritDamage, CalcConfig::BASE_CRIT_DAMAGE)
                .with(StatKind::EnergyRecharge, CalcConfig::BASE_ENERGY_RECHARGE),
        }
    }

    #[must_use]
    pub fn with_ascension(mut self, kind: StatKind, value: f64) -> Self {
        self.ascension = Some(Ascension { kind, value });
        self
    }

    #[must_use]
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.progression = progression;
        self
    }

    /// Adds an innate stat (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, value: f64) -> Self {
        self.stats.add(kind, value);
        self
    }

    /// Character level as used by the level-dependent formulas.
    #[inline]
    pub fn level(&self) -> f64 {
        f64::from(self.progression.level)
    }
}

/// Capability shared by every playable character.
///
/// # Implementation Rules
/// 1. `stat` overrides MUST start from `eval.base_stat(kind)` and add to it
/// 2. `stat` overrides MAY read other stats, never `kind` itself through `eval.stat`
/// 3. Variants are immutable during evaluation and safe to share between threads
pub trait Character: Send + Sync {
    fn profile(&self) -> &CharacterProfile;

    /// Resolved value of `kind`. Default: the plain aggregate.
    fn stat(&self, kind: StatKind, eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
        eval.base_stat(kind)
    }

    /// Talent multiplier at a 1-based level. Default: the shared tables.
    fn talent_scaling(&self, curve: TalentCurve, level: u8) -> Result<f64, EvalError> {
        curve.scaling(level)
    }
}

impl Character for CharacterProfile {
    fn profile(&self) -> &CharacterProfile {
        self
    }
}

/// Per-character formula table.
///
/// `Formula` is a closed enumeration of the values a character can compute
/// (skill hits, burst hits, energy restored, ...). Characters whose table is
/// not written yet keep the default, which reports the neutral value 0.
pub trait Talents: Character {
    type Formula: Copy + fmt::Debug;

    fn calculate(
        &self,
        _formula: Self::Formula,
        _eval: &mut Evaluation<'_>,
        _hit_type: HitType,
        _enemy: &Enemy,
    ) -> Result<f64, EvalError> {
        Ok(0.0) // Default: formula not covered yet
    }
}

/// Evaluates one talent formula for one build with a fresh stat cache.
///
/// This is the entry point search drivers call per candidate.
pub fn evaluate<C: Talents>(
    character: &C,
    formula: C::Formula,
    build: &Build<'_>,
    hit_type: HitType,
    enemy: &Enemy,
) -> Result<f64, EvalError> {
    let mut eval = Evaluation::new(character, build);
    let value = character.calculate(formula, &mut eval, hit_type, enemy)?;
    tracing::trace!(
        character = character.profile().name,
        ?formula,
        %hit_type,
        value,
        "formula evaluated"
    );
    Ok(value)
}
