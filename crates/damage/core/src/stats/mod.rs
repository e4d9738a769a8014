//! Stat system.
//!
//! # Architecture
//!
//! ```text
//! [ StatKind / StatVector ]   closed index space, dense storage
//!      ↓
//! [ Aggregated (cached) ]     character + ascension + weapon + artifacts + set bonuses
//!      ↓
//! [ Resolved (cached) ]       character variant override on top of the aggregate
//! ```
//!
//! ## Principles
//!
//! 1. **Additive layering**: overrides add to the aggregate, never replace it
//! 2. **Per-evaluation memoization**: one [`StatCache`] per build evaluation
//! 3. **Deterministic**: pure functions, no I/O or randomness

pub mod cache;
pub mod kind;
pub mod vector;

pub use cache::{StatCache, StatLayer};
pub use kind::{DamageType, Element, HitType, StatKind};
pub use vector::StatVector;
