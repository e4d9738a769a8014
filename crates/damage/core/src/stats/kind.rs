//! Closed enumerations that index the stat system.
//!
//! `StatKind` is the index space of every [`StatVector`](super::StatVector).
//! Percent kinds are stored as fractions (`0.466` for 46.6%), flat kinds as raw
//! amounts. A kind never switches between the two.

use strum::{EnumCount, IntoEnumIterator};

use crate::error::{EvalError, parse_variant};

/// Element of an attack, an aura, or a resistance entry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Physical,
    Pyro,
    Hydro,
    Cryo,
    Electro,
    Anemo,
    Geo,
    Dendro,
}

impl Element {
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Parses an element name, failing with `UnsupportedVariant`.
    pub fn parse(value: &str) -> Result<Self, EvalError> {
        parse_variant("element", value)
    }
}

/// Hit category of a damage instance.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DamageType {
    Normal,
    Charged,
    Plunge,
    Skill,
    Burst,
}

impl DamageType {
    pub fn parse(value: &str) -> Result<Self, EvalError> {
        parse_variant("damage type", value)
    }

    /// DMG bonus kind that applies only to this hit category.
    pub const fn dmg_bonus(self) -> StatKind {
        match self {
            Self::Normal => StatKind::NormalDmgBonus,
            Self::Charged => StatKind::ChargedDmgBonus,
            Self::Plunge => StatKind::PlungeDmgBonus,
            Self::Skill => StatKind::SkillDmgBonus,
            Self::Burst => StatKind::BurstDmgBonus,
        }
    }

    pub const fn crit_rate_bonus(self) -> StatKind {
        match self {
            Self::Normal => StatKind::NormalCritRateBonus,
            Self::Charged => StatKind::ChargedCritRateBonus,
            Self::Plunge => StatKind::PlungeCritRateBonus,
            Self::Skill => StatKind::SkillCritRateBonus,
            Self::Burst => StatKind::BurstCritRateBonus,
        }
    }

    pub const fn crit_damage_bonus(self) -> StatKind {
        match self {
            Self::Normal => StatKind::NormalCritDamageBonus,
            Self::Charged => StatKind::ChargedCritDamageBonus,
            Self::Plunge => StatKind::PlungeCritDamageBonus,
            Self::Skill => StatKind::SkillCritDamageBonus,
            Self::Burst => StatKind::BurstCritDamageBonus,
        }
    }
}

/// How crit is applied to a damage instance.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum HitType {
    /// Non-critical hit; crit stats are ignored.
    Normal,
    /// Guaranteed critical hit.
    Critical,
    /// Expected value over the crit chance.
    Averaged,
}

impl HitType {
    pub fn parse(value: &str) -> Result<Self, EvalError> {
        parse_variant("hit type", value)
    }
}

/// Every stat a character, weapon, artifact or set bonus can contribute to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    // ========================================================================
    // Base attributes
    // ========================================================================
    AtkFlat,
    AtkPercent,
    HpFlat,
    HpPercent,
    DefFlat,
    DefPercent,
    CritRate,
    CritDamage,
    EnergyRecharge,
    ElementalMastery,
    HealingBonus,

    // ========================================================================
    // Damage bonus
    // ========================================================================
    DmgBonus,
    PhysicalDmgBonus,
    PyroDmgBonus,
    HydroDmgBonus,
    CryoDmgBonus,
    ElectroDmgBonus,
    AnemoDmgBonus,
    GeoDmgBonus,
    DendroDmgBonus,

    // ========================================================================
    // Enemy debuffs
    // ========================================================================
    ResShred,
    PhysicalResShred,
    PyroResShred,
    HydroResShred,
    CryoResShred,
    ElectroResShred,
    AnemoResShred,
    GeoResShred,
    DendroResShred,
    DefShred,

    // ========================================================================
    // Per hit category
    // ========================================================================
    NormalDmgBonus,
    NormalCritRateBonus,
    NormalCritDamageBonus,
    ChargedDmgBonus,
    ChargedCritRateBonus,
    ChargedCritDamageBonus,
    PlungeDmgBonus,
    PlungeCritRateBonus,
    PlungeCritDamageBonus,
    SkillDmgBonus,
    SkillCritRateBonus,
    SkillCritDamageBonus,
    BurstDmgBonus,
    BurstCritRateBonus,
    BurstCritDamageBonus,

    // ========================================================================
    // Reactions
    // ========================================================================
    MeltDmgBonus,
    VaporizeDmgBonus,
    OverloadedDmgBonus,
    ShatterDmgBonus,
    ElectroChargedDmgBonus,
    SwirlDmgBonus,
    SuperconductDmgBonus,
    BurningDmgBonus,
}

impl StatKind {
    /// Total number of stat kinds.
    pub const COUNT: usize = <Self as EnumCount>::COUNT;

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Returns all stat kinds in declaration order.
    pub fn all() -> impl Iterator<Item = StatKind> {
        <Self as IntoEnumIterator>::iter()
    }

    pub fn parse(value: &str) -> Result<Self, EvalError> {
        parse_variant("stat kind", value)
    }

    /// DMG bonus kind for an element.
    pub const fn dmg_bonus(element: Element) -> Self {
        match element {
            Element::Physical => Self::PhysicalDmgBonus,
            Element::Pyro => Self::PyroDmgBonus,
            Element::Hydro => Self::HydroDmgBonus,
            Element::Cryo => Self::CryoDmgBonus,
            Element::Electro => Self::ElectroDmgBonus,
            Element::Anemo => Self::AnemoDmgBonus,
            Element::Geo => Self::GeoDmgBonus,
            Element::Dendro => Self::DendroDmgBonus,
        }
    }

    /// Resistance shred kind for an element.
    pub const fn res_shred(element: Element) -> Self {
        match element {
            Element::Physical => Self::PhysicalResShred,
            Element::Pyro => Self::PyroResShred,
            Element::Hydro => Self::HydroResShred,
            Element::Cryo => Self::CryoResShred,
            Element::Electro => Self::ElectroResShred,
            Element::Anemo => Self::AnemoResShred,
            Element::Geo => Self::GeoResShred,
            Element::Dendro => Self::DendroResShred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_categories_map_to_distinct_kinds() {
        let kinds: Vec<_> = DamageType::iter().map(DamageType::dmg_bonus).collect();
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(
            DamageType::Burst.crit_rate_bonus(),
            StatKind::BurstCritRateBonus
        );
    }

    #[test]
    fn element_kinds_follow_element_order() {
        for element in Element::iter() {
            let dmg = StatKind::dmg_bonus(element).as_index();
            let shred = StatKind::res_shred(element).as_index();
            assert_eq!(dmg - StatKind::PhysicalDmgBonus.as_index(), element.as_index());
            assert_eq!(shred - StatKind::PhysicalResShred.as_index(), element.as_index());
        }
    }

    #[test]
    fn parsing_rejects_unknown_text() {
        assert_eq!(HitType::parse("AVERAGED"), Ok(HitType::Averaged));
        assert_eq!(Element::parse("electro"), Ok(Element::Electro));
        assert_eq!(
            HitType::parse("glancing"),
            Err(EvalError::unsupported("hit type", "glancing"))
        );
        assert!(StatKind::parse("crit_damage").is_ok());
        assert!(DamageType::parse("ultimate").is_err());
    }

    #[test]
    fn every_kind_is_indexed() {
        assert_eq!(StatKind::all().count(), StatKind::COUNT);
        assert_eq!(StatKind::all().last().map(StatKind::as_index), Some(StatKind::COUNT - 1));
    }
}
