//! Result sum types for index resolution.
//!
//! The vector and matrix resolvers return [`Resolved`], which keeps the
//! narrowest possible representation per selection: a scalar, a borrowed
//! view when the selection is contiguous, or an owned container when it is a
//! gather. The nested-sequence resolver returns [`Value`], which is always
//! owned because recursion through a sequence materializes its output.

use crate::view::{Matrix, MatrixView, Vector, VectorView};

/// Outcome of resolving one or two index specifiers against a dense vector
/// or matrix.
///
/// View variants borrow the source container for `'a`; owned variants have
/// independent lifetime. Callers match on the variant to learn which they
/// received.
#[derive(Debug)]
pub enum Resolved<'a, T> {
    /// A single element, by value.
    Scalar(T),
    /// Borrowed 1-D result (contiguous or strided, zero-copy).
    VecView(VectorView<'a, T>),
    /// Owned 1-D result (the selection was a gather).
    VecOwned(Vector<T>),
    /// Borrowed 2-D result (a block, zero-copy).
    MatView(MatrixView<'a, T>),
    /// Owned 2-D result (the selection was a gather).
    MatOwned(Matrix<T>),
}

impl<'a, T> Resolved<'a, T> {
    /// Whether this result aliases the source container.
    pub fn is_view(&self) -> bool {
        matches!(self, Resolved::VecView(_) | Resolved::MatView(_))
    }

    /// The scalar, when the result is one.
    pub fn scalar(&self) -> Option<&T> {
        match self {
            Resolved::Scalar(x) => Some(x),
            _ => None,
        }
    }
}

impl<T: Clone> Resolved<'_, T> {
    /// Detach from the source: copy any view variant into owned storage.
    ///
    /// The result borrows nothing and may outlive the source container.
    pub fn into_owned(self) -> Resolved<'static, T> {
        match self {
            Resolved::Scalar(x) => Resolved::Scalar(x),
            Resolved::VecView(v) => Resolved::VecOwned(v.to_vector()),
            Resolved::VecOwned(v) => Resolved::VecOwned(v),
            Resolved::MatView(m) => Resolved::MatOwned(m.to_matrix()),
            Resolved::MatOwned(m) => Resolved::MatOwned(m),
        }
    }

    /// Materialize a 1-D result. `None` for scalars and 2-D results.
    pub fn to_vector(&self) -> Option<Vector<T>> {
        match self {
            Resolved::VecView(v) => Some(v.to_vector()),
            Resolved::VecOwned(v) => Some(v.clone()),
            _ => None,
        }
    }

    /// Materialize a 2-D result. `None` for scalars and 1-D results.
    pub fn to_matrix(&self) -> Option<Matrix<T>> {
        match self {
            Resolved::MatView(m) => Some(m.to_matrix()),
            Resolved::MatOwned(m) => Some(m.clone()),
            _ => None,
        }
    }

    /// Convert into the owned [`Value`] representation used by the
    /// nested-sequence resolver.
    pub fn into_value(self) -> Value<T> {
        match self {
            Resolved::Scalar(x) => Value::Scalar(x),
            Resolved::VecView(v) => Value::Vector(v.to_vector()),
            Resolved::VecOwned(v) => Value::Vector(v),
            Resolved::MatView(m) => Value::Matrix(m.to_matrix()),
            Resolved::MatOwned(m) => Value::Matrix(m),
        }
    }
}

/// Owned outcome of resolving an index list against a nested sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Scalar(T),
    Vector(Vector<T>),
    Matrix(Matrix<T>),
    /// A sequence of resolved elements, one per selected position.
    Seq(Vec<Value<T>>),
}

impl<T> Value<T> {
    /// The scalar, when the result is one.
    pub fn scalar(&self) -> Option<&T> {
        match self {
            Value::Scalar(x) => Some(x),
            _ => None,
        }
    }

    /// The sequence, when the result is one.
    pub fn seq(&self) -> Option<&[Value<T>]> {
        match self {
            Value::Seq(xs) => Some(xs),
            _ => None,
        }
    }

    /// The vector, when the result is one.
    pub fn vector(&self) -> Option<&Vector<T>> {
        match self {
            Value::Vector(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
