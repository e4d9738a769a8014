//! Deterministic stat aggregation and damage evaluation.
//!
//! `damage-core` turns a character and a build (weapon plus up to five
//! artifacts) into final stats and expected damage numbers. It exposes pure
//! APIs that search drivers, presentation layers and offline tools share.
//! Every stat query for one build flows through [`eval::Evaluation`], which
//! memoizes results for the duration of that evaluation.
//!
//! Concrete characters, weapons and artifact sets live in `damage-content`.
pub mod character;
pub mod combat;
pub mod config;
pub mod equipment;
pub mod error;
pub mod eval;
pub mod stats;

pub use character::{Ascension, Character, CharacterProfile, TalentCurve, Talents, evaluate};
pub use combat::{ElementalReaction, Enemy};
pub use config::{CalcConfig, Progression};
pub use equipment::{
    Artifact, ArtifactSet, ArtifactSetId, ArtifactSlot, Build, InertSet, SetCounter, Weapon,
    WeaponPassive,
};
pub use error::{CoreError, ErrorSeverity, EvalError};
pub use eval::Evaluation;
pub use stats::{DamageType, Element, HitType, StatCache, StatKind, StatLayer, StatVector};
