//! Index specifiers and their selection primitives.
//!
//! An [`Index`] describes one selection along one dimension of a container.
//! All positions are 1-based at the API boundary and converted to 0-based
//! offsets at the point of use; they are never stored pre-converted.

/// A single index specifier.
///
/// The seven kinds cover every selection the resolvers understand:
///
/// - [`Index::NoOp`]: identity, the container is returned unchanged
/// - [`Index::Omni`]: every position along one dimension
/// - [`Index::Uni`]: exactly one position
/// - [`Index::Multi`]: an ordered gather; positions may repeat or reorder
/// - [`Index::Min`]: the inclusive tail range `[lo, end]`
/// - [`Index::Max`]: the inclusive head range `[start, hi]`
/// - [`Index::MinMax`]: the inclusive range `[lo, hi]`, empty when `hi < lo`
///
/// Specifiers are transient: callers construct them per access and the
/// resolvers consume them immediately. They hold no container state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Index {
    /// Identity; no selection requested along this dimension.
    NoOp,
    /// Select every position along this dimension.
    Omni,
    /// Select the single 1-based position.
    Uni(isize),
    /// Gather the listed 1-based positions, preserving order and duplicates.
    Multi(Vec<isize>),
    /// Select `[lo, end]`, 1-based inclusive.
    Min(isize),
    /// Select `[start, hi]`, 1-based inclusive. `hi <= 0` selects nothing.
    Max(isize),
    /// Select `[lo, hi]`, 1-based inclusive. Empty when `hi < lo`.
    MinMax(isize, isize),
}

impl Index {
    /// Number of positions this specifier selects against a container of
    /// `extent` elements.
    ///
    /// The result is signed: `Min(lo)` with `lo > extent` yields a negative
    /// size, which the nested resolver turns into a range error on the lower
    /// bound. Empty `Max`/`MinMax` ranges yield 0, never an error.
    pub fn index_size(&self, extent: usize) -> isize {
        match *self {
            Index::NoOp | Index::Omni => extent as isize,
            Index::Uni(_) => 1,
            Index::Multi(ref ns) => ns.len() as isize,
            Index::Min(lo) => extent as isize - lo + 1,
            Index::Max(hi) => hi.max(0),
            Index::MinMax(lo, hi) => (hi - lo + 1).max(0),
        }
    }

    /// The 1-based source position selected for output slot `i`.
    ///
    /// Only meaningful for `i < index_size(extent)`; the caller iterates
    /// output slots in order and bounds-checks each returned position.
    pub fn position_at(&self, i: usize) -> isize {
        match *self {
            Index::NoOp | Index::Omni | Index::Max(_) => i as isize + 1,
            Index::Uni(n) => n,
            Index::Multi(ref ns) => ns[i],
            Index::Min(lo) | Index::MinMax(lo, _) => lo + i as isize,
        }
    }

    /// Whether this specifier leaves the container untouched.
    pub fn is_identity(&self) -> bool {
        matches!(self, Index::NoOp | Index::Omni)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_size() {
        assert_eq!(Index::NoOp.index_size(7), 7);
        assert_eq!(Index::Omni.index_size(7), 7);
        assert_eq!(Index::Uni(3).index_size(7), 1);
        assert_eq!(Index::Multi(vec![2, 2, 1]).index_size(7), 3);
        assert_eq!(Index::Min(3).index_size(7), 5);
        assert_eq!(Index::Min(9).index_size(7), -1);
        assert_eq!(Index::Max(4).index_size(7), 4);
        assert_eq!(Index::Max(0).index_size(7), 0);
        assert_eq!(Index::Max(-2).index_size(7), 0);
        assert_eq!(Index::MinMax(2, 5).index_size(7), 4);
        assert_eq!(Index::MinMax(5, 2).index_size(7), 0);
    }

    #[test]
    fn test_position_at() {
        assert_eq!(Index::Omni.position_at(0), 1);
        assert_eq!(Index::Omni.position_at(4), 5);
        assert_eq!(Index::Uni(3).position_at(0), 3);
        let m = Index::Multi(vec![4, 1, 1]);
        assert_eq!(m.position_at(0), 4);
        assert_eq!(m.position_at(2), 1);
        assert_eq!(Index::Min(3).position_at(2), 5);
        assert_eq!(Index::Max(4).position_at(1), 2);
        assert_eq!(Index::MinMax(2, 5).position_at(0), 2);
    }

    #[test]
    fn test_is_identity() {
        assert!(Index::NoOp.is_identity());
        assert!(Index::Omni.is_identity());
        assert!(!Index::Uni(1).is_identity());
        assert!(!Index::Max(0).is_identity());
    }
}
