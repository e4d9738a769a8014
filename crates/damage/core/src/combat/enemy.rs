//! Opposing entity description.

use crate::stats::Element;

/// Enemy level, per-element resistances and current elemental aura.
///
/// Read-only input to an evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub level: u32,
    /// Resistance per element, indexed by [`Element::as_index`].
    pub resistances: [f64; Element::COUNT],
    /// Element currently applied to the enemy, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub affected_by: Option<Element>,
}

impl Enemy {
    /// Enemy with 0 resistance everywhere and no aura.
    pub const fn new(level: u32) -> Self {
        Self {
            level,
            resistances: [0.0; Element::COUNT],
            affected_by: None,
        }
    }

    /// Sets every resistance to the same value (builder pattern).
    #[must_use]
    pub const fn with_uniform_resistance(mut self, resistance: f64) -> Self {
        self.resistances = [resistance; Element::COUNT];
        self
    }

    #[must_use]
    pub const fn with_resistance(mut self, element: Element, resistance: f64) -> Self {
        self.resistances[element.as_index()] = resistance;
        self
    }

    #[must_use]
    pub const fn with_aura(mut self, element: Element) -> Self {
        self.affected_by = Some(element);
        self
    }

    #[inline]
    pub fn resistance(&self, element: Element) -> f64 {
        self.resistances[element.as_index()]
    }

    #[inline]
    pub fn level(&self) -> f64 {
        f64::from(self.level)
    }
}
