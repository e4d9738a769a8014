//! Artifact set catalog.
//!
//! Each set returns its 2-piece effect when called with `count == 2` and its
//! 4-piece effect with `count == 4`; the aggregator sums both once four pieces
//! are equipped.

use std::sync::Arc;

use damage_core::{ArtifactSet, ArtifactSetId, EvalError, Evaluation, StatKind};

/// 2: Energy Recharge +20%. 4: Burst DMG +25% of Energy Recharge, at most 75%.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmblemOfSeveredFate;

impl EmblemOfSeveredFate {
    pub const ID: ArtifactSetId = ArtifactSetId("emblem_of_severed_fate");
}

impl ArtifactSet for EmblemOfSeveredFate {
    fn id(&self) -> ArtifactSetId {
        Self::ID
    }

    fn bonus(
        &self,
        kind: StatKind,
        eval: &mut Evaluation<'_>,
        count: u8,
    ) -> Result<f64, EvalError> {
        Ok(match (count, kind) {
            (2, StatKind::EnergyRecharge) => 0.2,
            (4, StatKind::BurstDmgBonus) => {
                (0.25 * eval.stat(StatKind::EnergyRecharge)?).min(0.75)
            }
            _ => 0.0,
        })
    }
}

/// 2: ATK +18%. 4: Normal Attack DMG +35%.
#[derive(Clone, Copy, Debug, Default)]
pub struct GladiatorsFinale;

impl GladiatorsFinale {
    pub const ID: ArtifactSetId = ArtifactSetId("gladiators_finale");
}

impl ArtifactSet for GladiatorsFinale {
    fn id(&self) -> ArtifactSetId {
        Self::ID
    }

    fn bonus(
        &self,
        kind: StatKind,
        _eval: &mut Evaluation<'_>,
        count: u8,
    ) -> Result<f64, EvalError> {
        Ok(match (count, kind) {
            (2, StatKind::AtkPercent) => 0.18,
            (4, StatKind::NormalDmgBonus) => 0.35,
            _ => 0.0,
        })
    }
}

/// 2: Electro DMG +15%. 4: Overloaded, Electro-Charged and Superconduct DMG +40%.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThunderingFury;

impl ThunderingFury {
    pub const ID: ArtifactSetId = ArtifactSetId("thundering_fury");
}

impl ArtifactSet for ThunderingFury {
    fn id(&self) -> ArtifactSetId {
        Self::ID
    }

    fn bonus(
        &self,
        kind: StatKind,
        _eval: &mut Evaluation<'_>,
        count: u8,
    ) -> Result<f64, EvalError> {
        Ok(match (count, kind) {
            (2, StatKind::ElectroDmgBonus) => 0.15,
            (
                4,
                StatKind::OverloadedDmgBonus
                | StatKind::ElectroChargedDmgBonus
                | StatKind::SuperconductDmgBonus,
            ) => 0.4,
            _ => 0.0,
        })
    }
}

/// 2: Pyro DMG +15%. 4: Overloaded and Burning DMG +40%, Vaporize and Melt DMG +15%.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrimsonWitchOfFlames;

impl CrimsonWitchOfFlames {
    pub const ID: ArtifactSetId = ArtifactSetId("crimson_witch_of_flames");
}

impl ArtifactSet for CrimsonWitchOfFlames {
    fn id(&self) -> ArtifactSetId {
        Self::ID
    }

    fn bonus(
        &self,
        kind: StatKind,
        _eval: &mut Evaluation<'_>,
        count: u8,
    ) -> Result<f64, EvalError> {
        Ok(match (count, kind) {
            (2, StatKind::PyroDmgBonus) => 0.15,
            (4, StatKind::OverloadedDmgBonus | StatKind::BurningDmgBonus) => 0.4,
            (4, StatKind::VaporizeDmgBonus | StatKind::MeltDmgBonus) => 0.15,
            _ => 0.0,
        })
    }
}

/// Looks a set up by its identifier.
pub fn by_id(id: &str) -> Result<Arc<dyn ArtifactSet>, EvalError> {
    let set: Arc<dyn ArtifactSet> = match id {
        "emblem_of_severed_fate" => Arc::new(EmblemOfSeveredFate),
        "gladiators_finale" => Arc::new(GladiatorsFinale),
        "thundering_fury" => Arc::new(ThunderingFury),
        "crimson_witch_of_flames" => Arc::new(CrimsonWitchOfFlames),
        _ => return Err(EvalError::unsupported("artifact set", id)),
    };
    Ok(set)
}
