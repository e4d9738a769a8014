//! Weapon catalog.
//!
//! Static stats go on the weapon's vector; anything that depends on the rest
//! of the build is a [`WeaponPassive`].

use damage_core::{Element, EvalError, Evaluation, StatKind, Weapon, WeaponPassive};
use strum::IntoEnumIterator;

/// Timeless Dream: Eternal Stove. ATK +28% of ER above 100%, at most 80%.
#[derive(Clone, Copy, Debug, Default)]
pub struct EternalStove;

impl WeaponPassive for EternalStove {
    fn name(&self) -> &str {
        "Timeless Dream: Eternal Stove"
    }

    fn stat(&self, kind: StatKind, eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
        if kind != StatKind::AtkPercent {
            return Ok(0.0);
        }
        let excess = (eval.stat(StatKind::EnergyRecharge)? - 1.0).max(0.0);
        Ok((0.28 * excess).min(0.8))
    }
}

/// Shanty. Burst DMG +32%, Burst CRIT Rate +12%.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shanty;

impl WeaponPassive for Shanty {
    fn name(&self) -> &str {
        "Shanty"
    }

    fn stat(&self, kind: StatKind, _eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
        Ok(match kind {
            StatKind::BurstDmgBonus => 0.32,
            StatKind::BurstCritRateBonus => 0.12,
            _ => 0.0,
        })
    }
}

/// Mistsplitter's Edge, base part. Elemental DMG +12% for every element
/// except Physical.
#[derive(Clone, Copy, Debug, Default)]
pub struct MistsplitterEdge;

impl WeaponPassive for MistsplitterEdge {
    fn name(&self) -> &str {
        "Mistsplitter's Edge"
    }

    fn stat(&self, kind: StatKind, _eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
        let elemental = Element::iter()
            .filter(|&element| element != Element::Physical)
            .any(|element| StatKind::dmg_bonus(element) == kind);
        Ok(if elemental { 0.12 } else { 0.0 })
    }
}

pub fn engulfing_lightning() -> Weapon {
    Weapon::new("Engulfing Lightning", 608.0)
        .with_stat(StatKind::EnergyRecharge, 0.551)
        .with_passive(EternalStove)
}

pub fn the_catch() -> Weapon {
    Weapon::new("The Catch", 510.0)
        .with_stat(StatKind::EnergyRecharge, 0.459)
        .with_passive(Shanty)
}

pub fn mistsplitter_reforged() -> Weapon {
    Weapon::new("Mistsplitter Reforged", 674.0)
        .with_stat(StatKind::CritDamage, 0.441)
        .with_passive(MistsplitterEdge)
}

/// Looks a weapon up by its snake_case name.
pub fn by_name(name: &str) -> Result<Weapon, EvalError> {
    match name {
        "engulfing_lightning" => Ok(engulfing_lightning()),
        "the_catch" => Ok(the_catch()),
        "mistsplitter_reforged" => Ok(mistsplitter_reforged()),
        _ => Err(EvalError::unsupported("weapon", name)),
    }
}
