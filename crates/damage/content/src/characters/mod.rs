//! Playable character variants.

pub mod raiden;

pub use raiden::{Raiden, RaidenFormula};
