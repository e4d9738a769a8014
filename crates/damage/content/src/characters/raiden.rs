//! Raiden Shogun.
//!
//! - Ascension: +32% Energy Recharge
//! - Passive: every point of ER above 100% grants 0.4% Electro DMG
//! - C2: the burst ignores 60% of the enemy's DEF
//!
//! Burst damage scales with Resolve stacks, which are a combat-time resource
//! and therefore part of the variant rather than the build.

use damage_core::{
    Character, CharacterProfile, DamageType, Element, Enemy, EvalError, Evaluation, HitType,
    Progression, StatKind, TalentCurve, Talents, combat,
};

/// Formulas Raiden can compute.
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
pub enum RaidenFormula {
    /// Initial hit of Transcendence: Baleful Omen.
    SkillInitial,
    /// Initial slash of Secret Art: Musou Shinsetsu.
    BurstInitial,
    /// Energy restored to the party by burst hits.
    BurstEnergyRestored,
}

impl RaidenFormula {
    pub fn parse(value: &str) -> Result<Self, EvalError> {
        value
            .parse()
            .map_err(|_| EvalError::unsupported("raiden formula", value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Raiden {
    profile: CharacterProfile,
    /// Resolve stacks consumed by the burst (0..=60).
    pub resolve: u32,
}

impl Raiden {
    pub const BASE_HP: f64 = 12907.0;
    pub const BASE_ATK: f64 = 337.0;
    pub const BASE_DEF: f64 = 789.0;
    pub const ASCENSION_ENERGY_RECHARGE: f64 = 0.32;
    pub const MAX_RESOLVE: u32 = 60;

    pub fn new(progression: Progression) -> Self {
        let profile =
            CharacterProfile::new("Raiden Shogun", Self::BASE_HP, Self::BASE_ATK, Self::BASE_DEF)
                .with_ascension(StatKind::EnergyRecharge, Self::ASCENSION_ENERGY_RECHARGE)
                .with_progression(progression);
        Self {
            profile,
            resolve: Self::MAX_RESOLVE,
        }
    }

    /// Sets the Resolve stack count, clamped to the maximum.
    #[must_use]
    pub fn with_resolve(mut self, resolve: u32) -> Self {
        self.resolve = resolve.min(Self::MAX_RESOLVE);
        self
    }

    fn progression(&self) -> &Progression {
        &self.profile.progression
    }

    /// ER above 100%, from the unmodified aggregate.
    fn excess_recharge(eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
        Ok((eval.base_stat(StatKind::EnergyRecharge)? - 1.0).max(0.0))
    }
}

impl Default for Raiden {
    fn default() -> Self {
        Self::new(Progression::default())
    }
}

impl Character for Raiden {
    fn profile(&self) -> &CharacterProfile {
        &self.profile
    }

    fn stat(&self, kind: StatKind, eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
        let stat = eval.base_stat(kind)?;

        Ok(match kind {
            StatKind::ElectroDmgBonus => stat + 0.4 * Self::excess_recharge(eval)?,
            StatKind::DefShred if self.progression().constellation >= 2 => stat + 0.6,
            _ => stat,
        })
    }
}

impl Talents for Raiden {
    type Formula = RaidenFormula;

    fn calculate(
        &self,
        formula: RaidenFormula,
        eval: &mut Evaluation<'_>,
        hit_type: HitType,
        enemy: &Enemy,
    ) -> Result<f64, EvalError> {
        match formula {
            RaidenFormula::SkillInitial => {
                let scaling =
                    self.talent_scaling(TalentCurve::Percentage, self.progression().skill_level)?;
                let damage =
                    combat::damage(eval, DamageType::Skill, Element::Electro, hit_type, enemy)?;
                Ok(1.172 * scaling * damage)
            }
            RaidenFormula::BurstInitial => {
                let scaling =
                    self.talent_scaling(TalentCurve::Percentage, self.progression().burst_level)?;
                let damage =
                    combat::damage(eval, DamageType::Burst, Element::Electro, hit_type, enemy)?;
                let resolve = f64::from(self.resolve);
                Ok((4.008 * scaling + 0.0389 * scaling * resolve) * damage)
            }
            RaidenFormula::BurstEnergyRestored => {
                let burst_level = f64::from(self.progression().burst_level);
                let per_hit = (1.6 + 0.1 * burst_level).min(2.5);
                Ok(5.0 * per_hit * (1.0 + 0.006 * Self::excess_recharge(eval)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use damage_core::{Artifact, ArtifactSlot, Build, evaluate};

    use super::*;
    use crate::sets::EmblemOfSeveredFate;
    use crate::weapons;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn base_stats_and_ascension() {
        let raiden = Raiden::default();
        let weapon = damage_core::Weapon::new("bare", 0.0);
        let build = Build::new(&weapon);
        let mut eval = Evaluation::new(&raiden, &build);

        assert!(close(eval.base_stat(StatKind::EnergyRecharge).unwrap(), 1.32));
        assert!(close(eval.atk().unwrap(), 337.0));
        assert!(close(eval.max_hp().unwrap(), 12907.0));
        assert!(close(eval.def().unwrap(), 789.0));
    }

    #[test]
    fn energy_recharge_feeds_electro_bonus() {
        let raiden = Raiden::default();
        let weapon = weapons::engulfing_lightning();
        let build = Build::new(&weapon);
        let mut eval = Evaluation::new(&raiden, &build);

        // 1.0 + 0.32 ascension + 0.551 weapon
        let electro = eval.stat(StatKind::ElectroDmgBonus).unwrap();
        assert!(close(electro, 0.4 * 0.871));
        assert_eq!(eval.base_stat(StatKind::ElectroDmgBonus), Ok(0.0));
    }

    #[test]
    fn skill_initial_end_to_end() {
        let raiden = Raiden::default();
        let weapon = weapons::engulfing_lightning();
        let build = Build::new(&weapon);
        let enemy = Enemy::new(90);

        let value = evaluate(
            &raiden,
            RaidenFormula::SkillInitial,
            &build,
            HitType::Normal,
            &enemy,
        )
        .unwrap();

        let excess = 0.871;
        let atk = (337.0 + 608.0) * (1.0 + 0.28 * excess);
        let dmg = 1.0 + 0.4 * excess;
        let expected = 1.172 * 1.8 * atk * dmg * 0.5;
        assert!(close(value, expected), "{value} != {expected}");
    }

    #[test]
    fn burst_scales_with_resolve() {
        let weapon = weapons::the_catch();
        let build = Build::new(&weapon);
        let enemy = Enemy::new(90);

        let full = evaluate(
            &Raiden::default(),
            RaidenFormula::BurstInitial,
            &build,
            HitType::Averaged,
            &enemy,
        )
        .unwrap();
        let empty = evaluate(
            &Raiden::default().with_resolve(0),
            RaidenFormula::BurstInitial,
            &build,
            HitType::Averaged,
            &enemy,
        )
        .unwrap();

        assert!(empty > 0.0);
        assert!(close(full / empty, (4.008 + 0.0389 * 60.0) / 4.008));
    }

    #[test]
    fn resolve_is_clamped() {
        assert_eq!(Raiden::default().with_resolve(200).resolve, 60);
    }

    #[test]
    fn constellation_two_shreds_defense() {
        let weapon = weapons::the_catch();
        let build = Build::new(&weapon);
        let enemy = Enemy::new(90);
        let c0 = Raiden::default();
        let c2 = Raiden::new(Progression::new().with_constellation(2));

        let low = evaluate(&c0, RaidenFormula::BurstInitial, &build, HitType::Normal, &enemy)
            .unwrap();
        let high = evaluate(&c2, RaidenFormula::BurstInitial, &build, HitType::Normal, &enemy)
            .unwrap();

        let ratio = (190.0 / (190.0 + 190.0 * 0.4)) / 0.5;
        assert!(close(high / low, ratio));
    }

    #[test]
    fn energy_restored_uses_burst_level_and_recharge() {
        let weapon = damage_core::Weapon::new("bare", 0.0);
        let emblem = std::sync::Arc::new(EmblemOfSeveredFate);
        let flower = Artifact::new(ArtifactSlot::Flower, emblem.clone());
        let plume = Artifact::new(ArtifactSlot::Plume, emblem);
        let build = Build::new(&weapon)
            .with_artifact(&flower)
            .with_artifact(&plume);
        let enemy = Enemy::new(90);

        let level_1 = Raiden::new(Progression::new().with_talents(10, 10, 1));
        let value = evaluate(
            &level_1,
            RaidenFormula::BurstEnergyRestored,
            &build,
            HitType::Normal,
            &enemy,
        )
        .unwrap();
        // 1.32 + 0.2 from the 2-piece
        assert!(close(value, 5.0 * 1.7 * (1.0 + 0.006 * 0.52)));

        let capped = evaluate(
            &Raiden::default(),
            RaidenFormula::BurstEnergyRestored,
            &build,
            HitType::Normal,
            &enemy,
        )
        .unwrap();
        assert!(close(capped, 5.0 * 2.5 * (1.0 + 0.006 * 0.52)));
    }

    #[test]
    fn formula_names_parse() {
        assert_eq!(
            RaidenFormula::parse("burst_initial"),
            Ok(RaidenFormula::BurstInitial)
        );
        assert_eq!(
            RaidenFormula::parse("SKILL_INITIAL"),
            Ok(RaidenFormula::SkillInitial)
        );
        assert!(matches!(
            RaidenFormula::parse("charged_attack"),
            Err(EvalError::UnsupportedVariant { .. })
        ));
    }
}
