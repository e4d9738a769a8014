//! Dense stat storage indexed by [`StatKind`].

use super::kind::StatKind;

/// Fixed-size stat array covering every [`StatKind`].
///
/// Unset entries read as 0, so no kind is ever absent. Characters, weapons and
/// artifacts all carry one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatVector {
    values: [f64; StatKind::COUNT],
}

impl Default for StatVector {
    fn default() -> Self {
        Self::zero()
    }
}

impl StatVector {
    /// Creates a vector with every stat set to 0.
    pub const fn zero() -> Self {
        Self {
            values: [0.0; StatKind::COUNT],
        }
    }

    /// Builds a vector from `(kind, value)` pairs. Repeated kinds are summed.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (StatKind, f64)>) -> Self {
        let mut vector = Self::zero();
        for (kind, value) in pairs {
            vector.add(kind, value);
        }
        vector
    }

    #[inline]
    pub fn get(&self, kind: StatKind) -> f64 {
        self.values[kind.as_index()]
    }

    #[inline]
    pub fn add(&mut self, kind: StatKind, value: f64) {
        self.values[kind.as_index()] += value;
    }

    /// Adds a value (builder pattern).
    #[must_use]
    pub fn with(mut self, kind: StatKind, value: f64) -> Self {
        self.add(kind, value);
        self
    }

    /// Iterates over the entries that differ from 0.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (StatKind, f64)> + '_ {
        StatKind::all()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, value)| *value != 0.0)
    }
}

impl FromIterator<(StatKind, f64)> for StatVector {
    fn from_iter<I: IntoIterator<Item = (StatKind, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// Arrays this long have no serde impl; vectors travel as sparse maps instead.
#[cfg(feature = "serde")]
impl serde::Serialize for StatVector {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.iter_nonzero())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for StatVector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SparseVisitor;

        impl<'de> serde::de::Visitor<'de> for SparseVisitor {
            type Value = StatVector;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map from stat kind to value")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut vector = StatVector::zero();
                while let Some((kind, value)) = map.next_entry::<StatKind, f64>()? {
                    vector.add(kind, value);
                }
                Ok(vector)
            }
        }

        deserializer.deserialize_map(SparseVisitor)
    }
}
