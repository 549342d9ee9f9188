use std::fmt;

/// Dense index of a particle type inside a [`TypeRegistry`](super::types::TypeRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub(crate) usize);

impl TypeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type#{}", self.0)
    }
}

/// An unordered pair of particle types, stored in canonical `(lo, hi)` order.
///
/// `(A, B)` and `(B, A)` produce the same key, so a single entry serves both
/// orderings of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    lo: TypeId,
    hi: TypeId,
}

impl TypePair {
    pub fn new(a: TypeId, b: TypeId) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub fn types(&self) -> (TypeId, TypeId) {
        (self.lo, self.hi)
    }

    /// Position of this pair in a flat upper-triangular table.
    #[inline]
    pub fn flat_index(&self) -> usize {
        let hi = self.hi.index();
        hi * (hi + 1) / 2 + self.lo.index()
    }

    /// Number of distinct unordered pairs (including self pairs) for `num_types` types.
    pub fn count(num_types: usize) -> usize {
        num_types * (num_types + 1) / 2
    }

    /// Iterates every unordered pair for `num_types` types in flat-index order.
    pub fn all(num_types: usize) -> impl Iterator<Item = TypePair> {
        (0..num_types)
            .flat_map(|hi| (0..=hi).map(move |lo| TypePair::new(TypeId::new(lo), TypeId::new(hi))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_pair_is_symmetric() {
        let a = TypeId::new(0);
        let b = TypeId::new(3);
        assert_eq!(TypePair::new(a, b), TypePair::new(b, a));
        assert_eq!(
            TypePair::new(a, b).flat_index(),
            TypePair::new(b, a).flat_index()
        );
    }

    #[test]
    fn flat_indices_are_dense_and_unique() {
        let indices: Vec<usize> = TypePair::all(4).map(|p| p.flat_index()).collect();
        assert_eq!(indices, (0..TypePair::count(4)).collect::<Vec<_>>());
    }

    #[test]
    fn count_includes_self_pairs() {
        assert_eq!(TypePair::count(0), 0);
        assert_eq!(TypePair::count(1), 1);
        assert_eq!(TypePair::count(3), 6);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn index_survives_values_beyond_u32() {
        let index = u32::MAX as usize + 5;
        assert_eq!(TypeId::new(index).index(), index);
        assert_ne!(TypeId::new(index), TypeId::new(4));
    }

    #[test]
    fn display_uses_numeric_index() {
        assert_eq!(TypeId::new(7).to_string(), "type#7");
    }
}
