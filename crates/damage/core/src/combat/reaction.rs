//! Elemental reactions.
//!
//! Two damage models consume a reaction:
//!
//! - **Amplifying** (Melt, Vaporize and their reverse forms) scales the hit
//!   itself through [`reaction_multiplier`]
//! - **Transformative** (Overloaded, Shattered, ElectroCharged, Swirl,
//!   Superconduct) is a separate damage instance from
//!   [`transformative_damage`], never folded into the hit multiplier
//!
//! Burning is detected by [`resolve`] but has no damage model here; both entry
//! points return their neutral value for it.
//!
//! Shattered is never produced by [`resolve`]. It is not an aura pairing, so
//! callers that model it (a heavy hit on a frozen target) pass it directly to
//! [`transformative_damage`].

use crate::config::CalcConfig;
use crate::error::EvalError;
use crate::eval::Evaluation;
use crate::stats::{Element, StatKind};

use super::damage::resistance_multiplier;
use super::enemy::Enemy;

/// Reaction triggered by an attack landing on an aura.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ElementalReaction {
    #[default]
    None,
    Melt,
    ReverseMelt,
    Vaporize,
    ReverseVaporize,
    Overloaded,
    Shattered,
    ElectroCharged,
    Swirl,
    Superconduct,
    Burning,
}

impl ElementalReaction {
    /// Base multiplier and bonus stat of an amplifying reaction.
    pub const fn amplifying(self) -> Option<(f64, StatKind)> {
        match self {
            Self::Melt => Some((2.0, StatKind::MeltDmgBonus)),
            Self::Vaporize => Some((2.0, StatKind::VaporizeDmgBonus)),
            Self::ReverseMelt => Some((1.5, StatKind::MeltDmgBonus)),
            Self::ReverseVaporize => Some((1.5, StatKind::VaporizeDmgBonus)),
            _ => None,
        }
    }

    /// Damage element, base multiplier and bonus stat of a transformative reaction.
    pub const fn transformative(self) -> Option<(Element, f64, StatKind)> {
        match self {
            Self::Overloaded => Some((Element::Pyro, 4.0, StatKind::OverloadedDmgBonus)),
            Self::Shattered => Some((Element::Physical, 3.0, StatKind::ShatterDmgBonus)),
            Self::ElectroCharged => {
                Some((Element::Electro, 2.4, StatKind::ElectroChargedDmgBonus))
            }
            Self::Swirl => Some((Element::Anemo, 1.2, StatKind::SwirlDmgBonus)),
            Self::Superconduct => Some((Element::Cryo, 1.0, StatKind::SuperconductDmgBonus)),
            _ => None,
        }
    }

    pub const fn is_amplifying(self) -> bool {
        self.amplifying().is_some()
    }

    pub const fn is_transformative(self) -> bool {
        self.transformative().is_some()
    }
}

/// Reaction caused by `source` hitting `enemy`'s current aura.
///
/// The table is asymmetric: Hydro on Pyro vaporizes at ×2 while
/// Pyro on Hydro is the ×1.5 reverse form, and Pyro on Dendro burns while
/// Dendro on Pyro does nothing.
pub fn resolve(source: Element, enemy: &Enemy) -> ElementalReaction {
    use Element::*;
    use ElementalReaction as R;

    let Some(aura) = enemy.affected_by else {
        return R::None;
    };

    match (source, aura) {
        (Hydro, Pyro) => R::Vaporize,
        (Pyro, Hydro) => R::ReverseVaporize,
        (Pyro, Cryo) => R::Melt,
        (Cryo, Pyro) => R::ReverseMelt,
        (Pyro, Electro) | (Electro, Pyro) => R::Overloaded,
        (Hydro, Electro) | (Electro, Hydro) => R::ElectroCharged,
        (Cryo, Electro) | (Electro, Cryo) => R::Superconduct,
        (Pyro, Dendro) => R::Burning,
        (Anemo, Cryo | Electro | Hydro | Pyro) => R::Swirl,
        _ => R::None,
    }
}

/// Elemental mastery bonus applied to amplifying reactions.
pub fn amplifying_mastery_bonus(em: f64) -> f64 {
    (2.78 * em) / (1400.0 + em)
}

/// Elemental mastery bonus applied to transformative reactions.
pub fn transformative_mastery_bonus(em: f64) -> f64 {
    (16.0 * em) / (2000.0 + em)
}

/// Multiplier an amplifying reaction applies to the hit. 1.0 for anything else.
///
/// `base × (1 + 2.78·EM / (1400 + EM) + reaction bonus)`
pub fn reaction_multiplier(
    eval: &mut Evaluation<'_>,
    reaction: ElementalReaction,
) -> Result<f64, EvalError> {
    let Some((base, bonus_kind)) = reaction.amplifying() else {
        return Ok(1.0);
    };

    let reaction_bonus = eval.stat(bonus_kind)?;
    let em = eval.stat(StatKind::ElementalMastery)?;

    Ok(base * (1.0 + amplifying_mastery_bonus(em) + reaction_bonus))
}

/// Level scaling of transformative reaction damage.
///
/// Two cubic fits joined at level 60.
pub fn transformative_level_multiplier(level: f64) -> f64 {
    if level < CalcConfig::TRANSFORMATIVE_LEVEL_BRANCH {
        0.0002325 * level * level * level + 0.05547 * level * level - 0.2523 * level + 14.47
    } else {
        0.00194 * level * level * level - 0.319 * level * level + 30.7 * level - 868.0
    }
}

/// Damage of a transformative reaction as its own damage instance.
///
/// `base × (1 + 16·EM / (2000 + EM) + reaction bonus) × level multiplier ×
/// resistance multiplier of the reaction's element`. Returns 0 for reactions
/// without a transformative model.
pub fn transformative_damage(
    eval: &mut Evaluation<'_>,
    reaction: ElementalReaction,
    enemy: &Enemy,
) -> Result<f64, EvalError> {
    let Some((element, base, bonus_kind)) = reaction.transformative() else {
        if reaction == ElementalReaction::Burning {
            tracing::debug!("burning has no transformative damage model");
        }
        return Ok(0.0);
    };

    let reaction_bonus = eval.stat(bonus_kind)?;
    let em = eval.stat(StatKind::ElementalMastery)?;
    let em_multiplier = 1.0 + transformative_mastery_bonus(em) + reaction_bonus;

    let level_multiplier = transformative_level_multiplier(eval.profile().level());
    let res_multiplier = resistance_multiplier(eval, element, enemy)?;

    Ok(base * em_multiplier * level_multiplier * res_multiplier)
}
