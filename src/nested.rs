//! Recursive resolution of index lists against nested sequences.
//!
//! A nested sequence is a plain `Vec<E>` whose elements implement
//! [`Nested`]: scalars, [`Vector`]s, [`Matrix`]es, or deeper `Vec`s. The
//! head specifier is consumed against the sequence, each selected position
//! is validated, and the rest of the list recurses into the chosen
//! element(s). Results are always owned ([`Value`]): recursion moves or
//! copies elements, it never aliases the source.
//!
//! Every implementor has two forms. `resolve_ref` borrows the container and
//! clones whatever it extracts. `resolve_move` consumes the container and
//! moves elements out instead, except under a `Multi` head: a `Multi` may
//! select the same position twice, and the second read must still see the
//! element, so `Multi` always clones.

use crate::bounds::check_range;
use crate::index::Index;
use crate::result::Value;
use crate::view::{Matrix, Vector};
use crate::{matrix, vector};
use crate::{IndexError, Result};

/// A container (or scalar) that an index list can resolve against.
pub trait Nested<T>: Sized {
    /// Resolve against a borrowed container, cloning extracted data.
    fn resolve_ref(&self, name: &str, idxs: &[Index]) -> Result<Value<T>>;

    /// Resolve consuming the container, moving elements where safe.
    fn resolve_move(self, name: &str, idxs: &[Index]) -> Result<Value<T>>;
}

/// Indexes left over once a container's rank is used up must all be
/// identities; anything else is a rank misuse by the caller.
fn check_exhausted(name: &str, rank: usize, rest: &[Index]) -> Result<()> {
    if rest.iter().all(Index::is_identity) {
        Ok(())
    } else {
        Err(IndexError::TooManyIndexes {
            name: name.to_owned(),
            rank,
            given: rank + rest.len(),
        })
    }
}

// ============================================================================
// Scalars
// ============================================================================

macro_rules! impl_nested_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Nested<$ty> for $ty {
            fn resolve_ref(&self, name: &str, idxs: &[Index]) -> Result<Value<$ty>> {
                check_exhausted(name, 0, idxs)?;
                Ok(Value::Scalar(*self))
            }

            fn resolve_move(self, name: &str, idxs: &[Index]) -> Result<Value<$ty>> {
                check_exhausted(name, 0, idxs)?;
                Ok(Value::Scalar(self))
            }
        }
    )*};
}

impl_nested_scalar!(f64, f32, i64, i32, isize, usize);

// ============================================================================
// Dense leaves
// ============================================================================

impl<T: Clone> Nested<T> for Vector<T> {
    fn resolve_ref(&self, name: &str, idxs: &[Index]) -> Result<Value<T>> {
        match idxs.split_first() {
            None => Ok(Value::Vector(self.clone())),
            Some((idx, rest)) => {
                let r = vector::resolve(self.view(), name, idx)?;
                check_exhausted(name, 1, rest)?;
                Ok(r.into_value())
            }
        }
    }

    fn resolve_move(self, name: &str, idxs: &[Index]) -> Result<Value<T>> {
        self.resolve_ref(name, idxs)
    }
}

impl<T: Clone + 'static> Nested<T> for Matrix<T> {
    fn resolve_ref(&self, name: &str, idxs: &[Index]) -> Result<Value<T>> {
        match idxs.split_first() {
            None => Ok(Value::Matrix(self.clone())),
            Some((i1, rest)) => match rest.split_first() {
                None => Ok(matrix::resolve_rows(self.view(), name, i1)?.into_value()),
                Some((i2, rest2)) => {
                    let r = matrix::resolve(self.view(), name, i1, i2)?;
                    check_exhausted(name, 2, rest2)?;
                    Ok(r.into_value())
                }
            },
        }
    }

    fn resolve_move(self, name: &str, idxs: &[Index]) -> Result<Value<T>> {
        self.resolve_ref(name, idxs)
    }
}

// ============================================================================
// Sequences
// ============================================================================

impl<T, E: Nested<T>> Nested<T> for Vec<E> {
    fn resolve_ref(&self, name: &str, idxs: &[Index]) -> Result<Value<T>> {
        let Some((idx1, rest)) = idxs.split_first() else {
            let out: Result<Vec<_>> = self.iter().map(|e| e.resolve_ref(name, &[])).collect();
            return Ok(Value::Seq(out?));
        };
        let len = self.len();
        match *idx1 {
            Index::Uni(p) => {
                check_range("array[uni, ...] index", name, len, p)?;
                self[p as usize - 1].resolve_ref(name, rest)
            }
            _ => {
                let size = selection_size(idx1, name, len)?;
                if short_circuits_empty(idx1, size) {
                    return Ok(Value::Seq(Vec::new()));
                }
                let mut out = Vec::with_capacity(size);
                for i in 0..size {
                    let p = idx1.position_at(i);
                    check_range("array[..., ...] index", name, len, p)?;
                    out.push(self[p as usize - 1].resolve_ref(name, rest)?);
                }
                Ok(Value::Seq(out))
            }
        }
    }

    fn resolve_move(mut self, name: &str, idxs: &[Index]) -> Result<Value<T>> {
        let Some((idx1, rest)) = idxs.split_first() else {
            let out: Result<Vec<_>> =
                self.into_iter().map(|e| e.resolve_move(name, &[])).collect();
            return Ok(Value::Seq(out?));
        };
        let len = self.len();
        match *idx1 {
            Index::Uni(p) => {
                check_range("array[uni, ...] index", name, len, p)?;
                // Only this one element survives; order of the rest is moot.
                let elem = self.swap_remove(p as usize - 1);
                elem.resolve_move(name, rest)
            }
            Index::Multi(_) => self.resolve_ref(name, idxs),
            _ => {
                let size = selection_size(idx1, name, len)?;
                if short_circuits_empty(idx1, size) {
                    return Ok(Value::Seq(Vec::new()));
                }
                // Contiguous, duplicate-free selection: validate every
                // position, then move the selected elements out.
                for i in 0..size {
                    check_range("array[..., ...] index", name, len, idx1.position_at(i))?;
                }
                let start = idx1.position_at(0) as usize - 1;
                let out: Result<Vec<_>> = self
                    .into_iter()
                    .skip(start)
                    .take(size)
                    .map(|e| e.resolve_move(name, rest))
                    .collect();
                Ok(Value::Seq(out?))
            }
        }
    }
}

/// Non-negative selection size for a non-`Uni` head specifier.
///
/// A `Min` whose lower bound lies past the end is the only way the signed
/// size goes negative; report that bound as out of range.
fn selection_size(idx: &Index, name: &str, len: usize) -> Result<usize> {
    let size = idx.index_size(len);
    if size < 0 {
        check_range("array[..., ...] index", name, len, idx.position_at(0))?;
    }
    Ok(size.max(0) as usize)
}

/// `Max`/`MinMax` empty ranges produce an empty sequence without touching
/// any position, bounds included.
fn short_circuits_empty(idx: &Index, size: usize) -> bool {
    size == 0 && matches!(idx, Index::Max(_) | Index::MinMax(..))
}

// ============================================================================
// Tests
// ============================================================================
