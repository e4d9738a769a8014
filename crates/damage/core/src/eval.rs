//! Stat-lookup facade for one build evaluation.
//!
//! An [`Evaluation`] ties a character, a build and a fresh [`StatCache`]
//! together for the duration of one top-level call (a talent formula, a stat
//! readout for display, ...). Every stat query made while answering that call
//! goes through it, so overlapping queries from the damage formula, the crit
//! step, set bonuses and weapon passives are computed once.
//!
//! Evaluations are never shared between builds. Drivers that evaluate many
//! candidates either create a new evaluation per candidate or recycle the
//! cache with [`Evaluation::into_cache`] / [`Evaluation::with_cache`].

use crate::character::{Character, CharacterProfile};
use crate::equipment::{Build, SetCounter};
use crate::error::EvalError;
use crate::stats::{StatCache, StatKind, StatLayer};

/// One character evaluated against one build.
pub struct Evaluation<'a> {
    character: &'a dyn Character,
    build: &'a Build<'a>,
    cache: StatCache,
}

impl<'a> Evaluation<'a> {
    pub fn new(character: &'a dyn Character, build: &'a Build<'a>) -> Self {
        Self {
            character,
            build,
            cache: StatCache::new(),
        }
    }

    /// Reuses a cache from a previous evaluation. The cache is cleared first.
    pub fn with_cache(
        character: &'a dyn Character,
        build: &'a Build<'a>,
        mut cache: StatCache,
    ) -> Self {
        cache.clear();
        Self {
            character,
            build,
            cache,
        }
    }

    /// Releases the cache for reuse with another build.
    pub fn into_cache(self) -> StatCache {
        self.cache
    }

    pub fn character(&self) -> &'a dyn Character {
        self.character
    }

    pub fn profile(&self) -> &'a CharacterProfile {
        self.character.profile()
    }

    pub fn build(&self) -> &'a Build<'a> {
        self.build
    }

    pub fn cache(&self) -> &StatCache {
        &self.cache
    }

    /// Resolves a stat, including the character variant's override.
    ///
    /// This is the lookup formulas, set bonuses and weapon passives use.
    pub fn stat(&mut self, kind: StatKind) -> Result<f64, EvalError> {
        if let Some(value) = self.cache.claim(StatLayer::Resolved, kind)? {
            return Ok(value);
        }
        let character = self.character;
        let result = character.stat(kind, self);
        self.cache.settle(StatLayer::Resolved, kind, result)
    }

    /// Resolves the additive aggregate of a stat, without the variant override.
    ///
    /// Character overrides call this and add to it.
    pub fn base_stat(&mut self, kind: StatKind) -> Result<f64, EvalError> {
        if let Some(value) = self.cache.claim(StatLayer::Aggregated, kind)? {
            return Ok(value);
        }
        let result = self.aggregate(kind);
        self.cache.settle(StatLayer::Aggregated, kind, result)
    }

    /// Sums every source of `kind`.
    ///
    /// Order: character vector, ascension, weapon stats, weapon passive, then
    /// per artifact in slot order its set bonus (with the running count of its
    /// set) followed by its own stats.
    fn aggregate(&mut self, kind: StatKind) -> Result<f64, EvalError> {
        let profile = self.character.profile();
        let build = self.build;

        let mut stat = profile.stats.get(kind);

        if let Some(ascension) = profile.ascension.filter(|a| a.kind == kind) {
            stat += ascension.value;
        }

        stat += build.weapon.stats.get(kind);

        if let Some(passive) = &build.weapon.passive {
            stat += passive.stat(kind, self)?;
        }

        let mut sets = SetCounter::new();
        for artifact in build.artifacts() {
            let count = sets.increment(artifact.set.id());
            stat += artifact.set.bonus(kind, self, count)?;
            stat += artifact.stats.get(kind);
        }

        Ok(stat)
    }

    // ===== derived totals =====

    /// Character base attack plus weapon base attack.
    pub fn base_atk(&self) -> f64 {
        self.profile().base_atk + self.build.weapon.base_atk
    }

    /// `base_atk × (1 + ATK%) + flat ATK`
    pub fn atk(&mut self) -> Result<f64, EvalError> {
        let percent = self.stat(StatKind::AtkPercent)?;
        let flat = self.stat(StatKind::AtkFlat)?;
        Ok(self.base_atk() * (1.0 + percent) + flat)
    }

    /// `base_hp × (1 + HP%) + flat HP`
    pub fn max_hp(&mut self) -> Result<f64, EvalError> {
        let percent = self.stat(StatKind::HpPercent)?;
        let flat = self.stat(StatKind::HpFlat)?;
        Ok(self.profile().base_hp * (1.0 + percent) + flat)
    }

    /// `base_def × (1 + DEF%) + flat DEF`
    pub fn def(&mut self) -> Result<f64, EvalError> {
        let percent = self.stat(StatKind::DefPercent)?;
        let flat = self.stat(StatKind::DefFlat)?;
        Ok(self.profile().base_def * (1.0 + percent) + flat)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::equipment::{
        Artifact, ArtifactSet, ArtifactSetId, ArtifactSlot, InertSet, Weapon, WeaponPassive,
    };

    fn profile() -> CharacterProfile {
        CharacterProfile::new("tester", 12907.0, 337.0, 789.0)
            .with_ascension(StatKind::EnergyRecharge, 0.32)
    }

    /// Records every (kind, count) pair it is asked about.
    struct RecordingSet {
        calls: Mutex<Vec<u8>>,
    }

    impl ArtifactSet for RecordingSet {
        fn id(&self) -> ArtifactSetId {
            ArtifactSetId("recording")
        }

        fn bonus(
            &self,
            kind: StatKind,
            _eval: &mut Evaluation<'_>,
            count: u8,
        ) -> Result<f64, EvalError> {
            if kind == StatKind::AtkPercent {
                self.calls.lock().map(|mut c| c.push(count)).ok();
            }
            Ok(if kind == StatKind::AtkPercent && count == 2 { 0.18 } else { 0.0 })
        }
    }

    /// Counts how often the aggregator asks it for a contribution.
    struct CountingPassive(Arc<AtomicUsize>);

    impl WeaponPassive for CountingPassive {
        fn name(&self) -> &str {
            "counting"
        }

        fn stat(&self, kind: StatKind, eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
            self.0.fetch_add(1, Ordering::Relaxed);
            match kind {
                StatKind::AtkPercent => {
                    let er = eval.stat(StatKind::EnergyRecharge)?;
                    Ok(((er - 1.0) * 0.28).min(0.8))
                }
                _ => Ok(0.0),
            }
        }
    }

    /// Reads the stat it contributes to.
    struct SelfReferentialPassive;

    impl WeaponPassive for SelfReferentialPassive {
        fn name(&self) -> &str {
            "broken"
        }

        fn stat(&self, kind: StatKind, eval: &mut Evaluation<'_>) -> Result<f64, EvalError> {
            match kind {
                StatKind::CritRate => eval.stat(StatKind::CritRate),
                _ => Ok(0.0),
            }
        }
    }

    #[test]
    fn empty_build_resolves_to_character_stats() {
        let character = profile();
        let weapon = Weapon::new("bare", 0.0);
        let build = Build::new(&weapon);
        let mut eval = Evaluation::new(&character, &build);

        for kind in StatKind::all() {
            let mut expected = character.stats.get(kind);
            if kind == StatKind::EnergyRecharge {
                expected += 0.32;
            }
            assert_eq!(eval.stat(kind), Ok(expected), "{kind}");
        }
        assert_eq!(eval.stat(StatKind::CritRate), Ok(0.05));
        assert_eq!(eval.stat(StatKind::CritDamage), Ok(0.5));
    }

    #[test]
    fn four_piece_set_sees_counts_in_slot_order() {
        let character = profile();
        let weapon = Weapon::new("bare", 0.0);
        let recording = Arc::new(RecordingSet {
            calls: Mutex::new(Vec::new()),
        });
        let other: Arc<dyn ArtifactSet> = Arc::new(InertSet(ArtifactSetId("other")));

        // Non-contiguous: Flower, Plume, Goblet, Circlet share the set.
        let flower = Artifact::new(ArtifactSlot::Flower, recording.clone());
        let plume = Artifact::new(ArtifactSlot::Plume, recording.clone());
        let sands = Artifact::new(ArtifactSlot::Sands, other);
        let goblet = Artifact::new(ArtifactSlot::Goblet, recording.clone());
        let circlet = Artifact::new(ArtifactSlot::Circlet, recording.clone());

        let build = Build::new(&weapon)
            .with_artifact(&circlet)
            .with_artifact(&sands)
            .with_artifact(&goblet)
            .with_artifact(&plume)
            .with_artifact(&flower);

        let mut eval = Evaluation::new(&character, &build);
        assert_eq!(eval.stat(StatKind::AtkPercent), Ok(0.18));

        let calls = recording.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_slot_does_not_reset_counting() {
        let character = profile();
        let weapon = Weapon::new("bare", 0.0);
        let recording = Arc::new(RecordingSet {
            calls: Mutex::new(Vec::new()),
        });
        let flower = Artifact::new(ArtifactSlot::Flower, recording.clone());
        let goblet = Artifact::new(ArtifactSlot::Goblet, recording.clone());

        let build = Build::new(&weapon)
            .with_artifact(&flower)
            .with_artifact(&goblet);
        let mut eval = Evaluation::new(&character, &build);

        assert_eq!(eval.stat(StatKind::AtkPercent), Ok(0.18));
        let calls = recording.calls.lock().unwrap().clone();
        assert_eq!(calls, vec![1, 2]);
    }

    #[test]
    fn repeated_lookups_are_computed_once() {
        let character = profile();
        let calls = Arc::new(AtomicUsize::new(0));
        let weapon = Weapon::new("engulfing", 608.0)
            .with_stat(StatKind::EnergyRecharge, 0.551)
            .with_passive(CountingPassive(calls.clone()));
        let build = Build::new(&weapon);
        let mut eval = Evaluation::new(&character, &build);

        let first = eval.stat(StatKind::AtkPercent);
        let second = eval.stat(StatKind::AtkPercent);
        assert_eq!(first, second);

        let expected = ((1.0 + 0.32 + 0.551 - 1.0) * 0.28_f64).min(0.8);
        assert!((first.unwrap() - expected).abs() < 1e-12);

        // AtkPercent and the EnergyRecharge it read: one passive call each.
        assert_eq!(calls.load(Ordering::Relaxed), 2);
        assert_eq!(eval.cache().len(StatLayer::Aggregated), 2);
        assert_eq!(eval.cache().len(StatLayer::Resolved), 2);
    }

    #[test]
    fn self_referential_contribution_is_rejected() {
        let character = profile();
        let weapon = Weapon::new("broken", 100.0).with_passive(SelfReferentialPassive);
        let build = Build::new(&weapon);
        let mut eval = Evaluation::new(&character, &build);

        assert_eq!(
            eval.stat(StatKind::CritRate),
            Err(EvalError::StatCycle(StatKind::CritRate))
        );
        // Unrelated stats still resolve.
        assert_eq!(eval.stat(StatKind::CritDamage), Ok(0.5));
    }

    #[test]
    fn recycled_cache_starts_empty() {
        let character = profile();
        let low = Weapon::new("low", 100.0).with_stat(StatKind::CritRate, 0.1);
        let high = Weapon::new("high", 100.0).with_stat(StatKind::CritRate, 0.3);

        let first = Build::new(&low);
        let mut eval = Evaluation::new(&character, &first);
        assert_eq!(eval.stat(StatKind::CritRate), Ok(0.05 + 0.1));
        let cache = eval.into_cache();

        let second = Build::new(&high);
        let mut eval = Evaluation::with_cache(&character, &second, cache);
        assert_eq!(eval.stat(StatKind::CritRate), Ok(0.05 + 0.3));
    }

    #[test]
    fn derived_totals_combine_percent_and_flat() {
        let character = profile();
        let weapon = Weapon::new("engulfing", 608.0);
        let set: Arc<dyn ArtifactSet> = Arc::new(InertSet(ArtifactSetId("x")));
        let plume = Artifact::new(ArtifactSlot::Plume, set.clone())
            .with_stat(StatKind::AtkFlat, 311.0);
        let sands = Artifact::new(ArtifactSlot::Sands, set)
            .with_stat(StatKind::AtkPercent, 0.466);
        let build = Build::new(&weapon).with_artifact(&plume).with_artifact(&sands);
        let mut eval = Evaluation::new(&character, &build);

        let atk = eval.atk().unwrap();
        assert!((atk - ((337.0 + 608.0) * 1.466 + 311.0)).abs() < 1e-9);
        assert_eq!(eval.max_hp(), Ok(12907.0));
        assert_eq!(eval.def(), Ok(789.0));
    }
}
