/// Evaluation constants shared by the aggregator and the damage pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalcConfig;

impl CalcConfig {
    // ===== equipment layout =====
    /// Artifact slots per build (Flower, Plume, Sands, Goblet, Circlet).
    pub const ARTIFACT_SLOTS: usize = 5;
    /// Distinct artifact sets that can be active at once. One per slot.
    pub const MAX_ACTIVE_SETS: usize = Self::ARTIFACT_SLOTS;

    // ===== damage pipeline =====
    /// Defense shred stops taking effect beyond 90%.
    pub const DEF_SHRED_CAP: f64 = 0.9;
    /// Resistance above this value uses the diminishing `1 / (4r + 1)` curve.
    pub const RESISTANCE_BREAKPOINT: f64 = 0.75;
    /// Level at which the transformative level multiplier switches polynomials.
    pub const TRANSFORMATIVE_LEVEL_BRANCH: f64 = 60.0;

    // ===== character defaults =====
    pub const BASE_CRIT_RATE: f64 = 0.05;
    pub const BASE_CRIT_DAMAGE: f64 = 0.50;
    pub const BASE_ENERGY_RECHARGE: f64 = 1.00;
    pub const MAX_CONSTELLATION: u8 = 6;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_LEVEL: u32 = 90;
    pub const DEFAULT_TALENT_LEVEL: u8 = 10;
}

/// Character progression: level, talent levels and constellation.
///
/// This is the tunable part of a character identity. Catalog variants are built
/// from a `Progression`, which the content crate can load from TOML.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Progression {
    pub level: u32,
    pub attack_level: u8,
    pub skill_level: u8,
    pub burst_level: u8,
    /// Constellation tier, 0..=6.
    pub constellation: u8,
}

impl Progression {
    pub const fn new() -> Self {
        Self {
            level: CalcConfig::DEFAULT_LEVEL,
            attack_level: CalcConfig::DEFAULT_TALENT_LEVEL,
            skill_level: CalcConfig::DEFAULT_TALENT_LEVEL,
            burst_level: CalcConfig::DEFAULT_TALENT_LEVEL,
            constellation: 0,
        }
    }

    #[must_use]
    pub const fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub const fn with_talents(mut self, attack: u8, skill: u8, burst: u8) -> Self {
        self.attack_level = attack;
        self.skill_level = skill;
        self.burst_level = burst;
        self
    }

    /// Sets the constellation tier, clamped to 6.
    #[must_use]
    pub const fn with_constellation(mut self, constellation: u8) -> Self {
        self.constellation = if constellation > CalcConfig::MAX_CONSTELLATION {
            CalcConfig::MAX_CONSTELLATION
        } else {
            constellation
        };
        self
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
