//! Combat math: enemies, elemental reactions and the damage multiplier pipeline.
//!
//! All functions are pure over an [`Evaluation`](crate::eval::Evaluation) and
//! an [`Enemy`]. They read stats through the evaluation and never mutate
//! anything else.

pub mod damage;
pub mod enemy;
pub mod reaction;

pub use damage::{
    crit_multiplier, crit_multiplier_for, damage, defense_multiplier, defense_multiplier_for,
    dmg_multiplier, multiplier, resistance_multiplier, resistance_multiplier_for,
};
pub use enemy::Enemy;
pub use reaction::{
    ElementalReaction, amplifying_mastery_bonus, reaction_multiplier, resolve,
    transformative_damage, transformative_level_multiplier, transformative_mastery_bonus,
};
