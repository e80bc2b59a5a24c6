//! Index-list resolution for dense numeric containers.
//!
//! This crate resolves heterogeneous sequences of index specifiers against
//! dense vectors, matrices, and arbitrarily nested sequences, producing the
//! narrowest possible result per combination: a single scalar, a non-owning
//! view aliasing the source, or a newly materialized container when the
//! selection reorders or repeats positions. Every referenced position is
//! bounds-checked with a per-call-site context label before any data is
//! read.
//!
//! # Core Types
//!
//! - [`Index`]: a single index specifier
//!   (`NoOp`/`Omni`/`Uni`/`Multi`/`Min`/`Max`/`MinMax`)
//! - [`Vector`] / [`Matrix`]: owned dense containers (matrices are
//!   column-major)
//! - [`VectorView`] / [`MatrixView`]: non-owning, possibly strided views
//! - [`Resolved`]: scalar / view / owned outcome of vector and matrix
//!   resolution
//! - [`Value`]: owned outcome of nested-sequence resolution
//! - [`Nested`]: recursive resolution over sequences of indexable elements
//!
//! # Resolution entry points
//!
//! - [`vector::resolve`]: one specifier against a 1-D view
//! - [`matrix::resolve_rows`] / [`matrix::resolve`]: one or two specifiers
//!   against a 2-D view
//! - [`Nested::resolve_ref`] / [`Nested::resolve_move`]: a specifier list
//!   against a nested sequence
//!
//! # Example
//!
//! ```rust
//! use dense_index::{matrix, Index, Matrix, Resolved};
//!
//! let m = Matrix::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
//!
//! // Row 2, columns 1..=2: a zero-copy strided view into the matrix.
//! let r = matrix::resolve(m.view(), "m", &Index::Uni(2), &Index::MinMax(1, 2))?;
//! match r {
//!     Resolved::VecView(row) => {
//!         assert_eq!(row.to_vector().as_slice(), &[4, 5]);
//!     }
//!     _ => unreachable!(),
//! }
//!
//! // Gathers reorder and repeat, so they materialize.
//! let r = matrix::resolve(m.view(), "m", &Index::Multi(vec![3, 3]), &Index::Omni)?;
//! assert!(!r.is_view());
//! # Ok::<(), dense_index::IndexError>(())
//! ```
//!
//! # Ownership and lifetimes
//!
//! View results borrow their source container, so the borrow checker
//! enforces that a view never outlives the data it aliases. Owned results
//! ([`Resolved::VecOwned`], [`Resolved::MatOwned`], every [`Value`]) carry
//! independent storage and may cross threads freely. The resolvers hold no
//! state between calls and never mutate their inputs.
//!
//! # Empty ranges are not errors
//!
//! A `MinMax` range with `max < min` and a `Max` bound `<= 0` resolve to
//! zero-length results. The two cases validate differently on purpose:
//! `MinMax` still checks its lower bound, `Max` checks nothing because a
//! non-positive bound never references a real position.

pub mod bounds;
mod index;
pub mod matrix;
mod nested;
mod result;
pub mod vector;
mod view;

pub use index::Index;
pub use nested::Nested;
pub use result::{Resolved, Value};
pub use view::{Matrix, MatrixView, Vector, VectorView};

// ============================================================================
// Error types
// ============================================================================

/// Errors raised during index resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// A 1-based position fell outside `[1, extent]`.
    ///
    /// `context` names the exact index-kind and dimension combination that
    /// failed (e.g. `"matrix[multi, uni] column indexing"`); `name` is the
    /// caller-supplied diagnostic name of the container.
    #[error("{context}: index {position} out of range for '{name}' (extent {extent})")]
    OutOfRange {
        context: &'static str,
        name: String,
        extent: usize,
        position: isize,
    },

    /// An index list kept selecting past the rank of the container.
    #[error("too many indexes for '{name}': container of rank {rank} given {given}")]
    TooManyIndexes {
        name: String,
        rank: usize,
        given: usize,
    },
}

/// Result type for index resolution.
pub type Result<T> = std::result::Result<T, IndexError>;
