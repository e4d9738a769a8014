//! Damage multiplier pipeline.
//!
//! # Formula
//!
//! ```text
//! multiplier = dmg × crit × reaction × resistance × defense
//! damage     = atk × multiplier
//! ```
//!
//! Every stat read goes through the evaluation's cache, so the stages can
//! freely query overlapping stats.

use crate::config::CalcConfig;
use crate::error::EvalError;
use crate::eval::Evaluation;
use crate::stats::{DamageType, Element, HitType, StatKind};

use super::enemy::Enemy;
use super::reaction::{reaction_multiplier, resolve};

/// `1 + DMG% + element DMG% + hit-category DMG%`
pub fn dmg_multiplier(
    eval: &mut Evaluation<'_>,
    damage_type: DamageType,
    element: Element,
) -> Result<f64, EvalError> {
    Ok(1.0
        + eval.stat(StatKind::DmgBonus)?
        + eval.stat(StatKind::dmg_bonus(element))?
        + eval.stat(damage_type.dmg_bonus())?)
}

/// Crit stage of the pipeline.
///
/// - `Normal`: exactly 1, crit stats are not read
/// - `Critical`: `1 + crit damage`
/// - `Averaged`: `1 + clamp(crit rate, 0, 1) × crit damage`
///
/// Crit rate and damage include the hit-category bonuses. Crit damage is never
/// clamped.
pub fn crit_multiplier(
    eval: &mut Evaluation<'_>,
    damage_type: DamageType,
    hit_type: HitType,
) -> Result<f64, EvalError> {
    if hit_type == HitType::Normal {
        return Ok(1.0);
    }

    let crit_rate = eval.stat(StatKind::CritRate)? + eval.stat(damage_type.crit_rate_bonus())?;
    let crit_damage =
        eval.stat(StatKind::CritDamage)? + eval.stat(damage_type.crit_damage_bonus())?;

    Ok(crit_multiplier_for(hit_type, crit_rate, crit_damage))
}

/// Crit stage on already-resolved crit stats.
pub fn crit_multiplier_for(hit_type: HitType, crit_rate: f64, crit_damage: f64) -> f64 {
    match hit_type {
        HitType::Normal => 1.0,
        HitType::Critical => 1.0 + crit_damage,
        HitType::Averaged => 1.0 + crit_rate.clamp(0.0, 1.0) * crit_damage,
    }
}

/// Resistance stage: enemy resistance minus element and generic shred.
pub fn resistance_multiplier(
    eval: &mut Evaluation<'_>,
    element: Element,
    enemy: &Enemy,
) -> Result<f64, EvalError> {
    let shred = eval.stat(StatKind::res_shred(element))? + eval.stat(StatKind::ResShred)?;
    Ok(resistance_multiplier_for(enemy.resistance(element) - shred))
}

/// Resistance curve.
///
/// ```text
/// r < 0       →  1 - r/2
/// r < 0.75    →  1 - r
/// otherwise   →  1 / (4r + 1)
/// ```
///
/// Negative resistance increases damage. The pieces meet at 0 (both 1) and at
/// 0.75 (both 0.25).
pub fn resistance_multiplier_for(resistance: f64) -> f64 {
    if resistance < 0.0 {
        1.0 - resistance / 2.0
    } else if resistance < CalcConfig::RESISTANCE_BREAKPOINT {
        1.0 - resistance
    } else {
        1.0 / (4.0 * resistance + 1.0)
    }
}

/// Defense stage, with defense shred capped at 90%.
pub fn defense_multiplier(eval: &mut Evaluation<'_>, enemy: &Enemy) -> Result<f64, EvalError> {
    let def_shred = eval.stat(StatKind::DefShred)?;
    Ok(defense_multiplier_for(
        eval.profile().level(),
        enemy.level(),
        def_shred,
    ))
}

/// `(100 + attacker) / ((100 + attacker) + (100 + enemy) × (1 - min(0.9, shred)))`
pub fn defense_multiplier_for(attacker_level: f64, enemy_level: f64, def_shred: f64) -> f64 {
    let attacker = 100.0 + attacker_level;
    let defender = (100.0 + enemy_level) * (1.0 - def_shred.min(CalcConfig::DEF_SHRED_CAP));
    attacker / (attacker + defender)
}

/// Full hit multiplier.
///
/// The reaction stage only contributes for amplifying reactions; transformative
/// reactions are separate damage instances (see
/// [`transformative_damage`](super::reaction::transformative_damage)).
pub fn multiplier(
    eval: &mut Evaluation<'_>,
    damage_type: DamageType,
    element: Element,
    hit_type: HitType,
    enemy: &Enemy,
) -> Result<f64, EvalError> {
    let raw = dmg_multiplier(eval, damage_type, element)?
        * crit_multiplier(eval, damage_type, hit_type)?;
    let reaction = reaction_multiplier(eval, resolve(element, enemy))?;

    let res = resistance_multiplier(eval, element, enemy)?;
    let def = defense_multiplier(eval, enemy)?;

    Ok(raw * reaction * res * def)
}

/// ATK-scaled damage of one hit: `atk × multiplier`.
pub fn damage(
    eval: &mut Evaluation<'_>,
    damage_type: DamageType,
    element: Element,
    hit_type: HitType,
    enemy: &Enemy,
) -> Result<f64, EvalError> {
    let atk = eval.atk()?;
    Ok(atk * multiplier(eval, damage_type, element, hit_type, enemy)?)
}


#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Higher effective resistance never increases damage.
        #[test]
        fn prop_resistance_non_increasing(a in -2.0f64..4.0, b in -2.0f64..4.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(resistance_multiplier_for(low) >= resistance_multiplier_for(high) - 1e-12);
        }

        /// Averaged crit lies between a normal and a guaranteed crit.
        #[test]
        fn prop_averaged_between_normal_and_critical(rate in -1.0f64..3.0, cd in 0.0f64..5.0) {
            let averaged = crit_multiplier_for(HitType::Averaged, rate, cd);
            prop_assert!(averaged >= 1.0);
            prop_assert!(averaged <= crit_multiplier_for(HitType::Critical, rate, cd) + 1e-12);
        }

        /// Shred beyond the cap changes nothing.
        #[test]
        fn prop_defense_shred_cap(level in 1.0f64..100.0, enemy in 1.0f64..120.0, extra in 0.0f64..10.0) {
            let capped = defense_multiplier_for(level, enemy, CalcConfig::DEF_SHRED_CAP);
            let over = defense_multiplier_for(level, enemy, CalcConfig::DEF_SHRED_CAP + extra);
            prop_assert!((capped - over).abs() < 1e-12);
        }
    }
}
