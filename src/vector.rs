//! Resolution of a single index specifier against a dense vector.
//!
//! Contiguous selections (`Min`, `Max`, `MinMax`) come back as zero-copy
//! views; `Multi` is a gather and materializes; `Uni` yields the scalar.
//! Empty ranges are results, not errors: `MinMax` with `hi < lo` still
//! validates `lo` and returns a zero-length view anchored there, while
//! `Max` with a non-positive bound skips validation entirely because it
//! never references a real position. The asymmetry is deliberate and load
//! bearing for callers that probe with sentinel bounds.

use crate::bounds::check_range;
use crate::index::Index;
use crate::result::Resolved;
use crate::view::VectorView;
use crate::Result;

/// Resolve `idx` against the vector view `v`.
///
/// `name` is the diagnostic name of the container being indexed; it is
/// carried into any range error.
pub fn resolve<'a, T: Clone>(
    v: VectorView<'a, T>,
    name: &str,
    idx: &Index,
) -> Result<Resolved<'a, T>> {
    let n = v.len();
    match *idx {
        Index::NoOp | Index::Omni => Ok(Resolved::VecView(v)),
        Index::Uni(p) => {
            check_range("vector[uni] indexing", name, n, p)?;
            Ok(Resolved::Scalar(v.get(p as usize - 1).clone()))
        }
        Index::Multi(ref ns) => {
            for &p in ns {
                check_range("vector[multi] indexing", name, n, p)?;
            }
            let gathered: Vec<T> = ns.iter().map(|&p| v.get(p as usize - 1).clone()).collect();
            Ok(Resolved::VecOwned(gathered.into()))
        }
        Index::Min(lo) => {
            check_range("vector[min] indexing", name, n, lo)?;
            Ok(Resolved::VecView(v.tail(lo as usize - 1)))
        }
        Index::Max(hi) => {
            if hi > 0 {
                check_range("vector[max] indexing", name, n, hi)?;
                Ok(Resolved::VecView(v.head(hi as usize)))
            } else {
                Ok(Resolved::VecView(v.head(0)))
            }
        }
        Index::MinMax(lo, hi) => {
            check_range("vector[min_max] min indexing", name, n, lo)?;
            let start = lo as usize - 1;
            if hi >= lo {
                check_range("vector[min_max] max indexing", name, n, hi)?;
                Ok(Resolved::VecView(v.segment(start, (hi - lo + 1) as usize)))
            } else {
                Ok(Resolved::VecView(v.segment(start, 0)))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
