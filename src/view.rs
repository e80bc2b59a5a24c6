//! Dense containers and their non-owning views.
//!
//! Two owned containers ([`Vector`], [`Matrix`]) and two borrowed views
//! ([`VectorView`], [`MatrixView`]). Views carry a lifetime tied to the
//! backing storage, so a view can never outlive its source. All sub-view
//! constructors (`head`/`tail`/`segment`, row/column blocks) are metadata
//! operations: they adjust offset and extents and never touch the data.
//!
//! [`Matrix`] storage is column-major: element `(i, j)` of a view lives at
//! `offset + i + j * col_stride`. A matrix row is therefore a strided
//! vector view and a matrix column a contiguous one.

use std::fmt;

// ============================================================================
// Owned containers
// ============================================================================

/// Owned dense 1-D container.
#[derive(Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at 0-based offset `i`.
    pub fn get(&self, i: usize) -> &T {
        &self.data[i]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Full view over the whole container.
    pub fn view(&self) -> VectorView<'_, T> {
        VectorView::from_slice(&self.data)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Owned dense 2-D container, column-major storage.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Build a `rows x cols` matrix from a generator called as `f(row, col)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for j in 0..cols {
            for i in 0..rows {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Build from column-major element storage.
    ///
    /// # Panics
    /// Panics when `data.len() != rows * cols`.
    pub fn from_col_major(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), rows * cols, "element count must match extents");
        Self { data, rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Element at 0-based `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> &T {
        assert!(i < self.rows && j < self.cols, "matrix position out of range");
        &self.data[i + j * self.rows]
    }

    /// Full view over the whole matrix.
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &self.data,
            offset: 0,
            rows: self.rows,
            cols: self.cols,
            col_stride: self.rows,
        }
    }
}

impl<T: Clone> Matrix<T> {
    /// Build from row slices. Ergonomic for tests and small literals.
    ///
    /// # Panics
    /// Panics when the rows have unequal lengths.
    pub fn from_rows(rows: &[&[T]]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        assert!(
            rows.iter().all(|r| r.len() == ncols),
            "rows must have equal lengths"
        );
        Self::from_fn(nrows, ncols, |i, j| rows[i][j].clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print as a list of rows despite the column-major storage.
        let mut outer = f.debug_list();
        for i in 0..self.rows {
            outer.entry(&(0..self.cols).map(|j| self.get(i, j)).collect::<Vec<_>>());
        }
        outer.finish()
    }
}

// ============================================================================
// VectorView
// ============================================================================

/// Non-owning, possibly strided 1-D view.
///
/// Element `i` lives at `data[offset + i * stride]`. A contiguous slice of a
/// vector has stride 1; a matrix row has the parent's column stride.
pub struct VectorView<'a, T> {
    data: &'a [T],
    offset: usize,
    len: usize,
    stride: usize,
}

impl<T> Copy for VectorView<'_, T> {}

impl<T> Clone for VectorView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> VectorView<'a, T> {
    pub(crate) fn new(data: &'a [T], offset: usize, len: usize, stride: usize) -> Self {
        debug_assert!(stride >= 1);
        debug_assert!(len == 0 || offset + (len - 1) * stride < data.len());
        Self {
            data,
            offset,
            len,
            stride,
        }
    }

    /// Contiguous view over a whole slice.
    pub fn from_slice(data: &'a [T]) -> Self {
        let len = data.len();
        Self {
            data,
            offset: 0,
            len,
            stride: 1,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance in elements between consecutive positions.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Element at 0-based offset `i`.
    pub fn get(&self, i: usize) -> &'a T {
        assert!(i < self.len, "vector position out of range");
        &self.data[self.offset + i * self.stride]
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        (0..self.len).map(move |i| self.get(i))
    }

    /// First `n` elements.
    pub fn head(&self, n: usize) -> Self {
        debug_assert!(n <= self.len);
        Self { len: n, ..*self }
    }

    /// Elements from 0-based `start` to the end.
    pub fn tail(&self, start: usize) -> Self {
        self.segment(start, self.len - start)
    }

    /// `n` elements starting at 0-based `start`.
    pub fn segment(&self, start: usize, n: usize) -> Self {
        debug_assert!(start + n <= self.len);
        Self {
            offset: self.offset + start * self.stride,
            len: n,
            ..*self
        }
    }
}

impl<T: Clone> VectorView<'_, T> {
    /// Materialize into an owned [`Vector`].
    pub fn to_vector(&self) -> Vector<T> {
        Vector::from(self.iter().cloned().collect::<Vec<_>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for VectorView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for VectorView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

// ============================================================================
// MatrixView
// ============================================================================

/// Non-owning 2-D view into column-major storage.
///
/// Element `(i, j)` lives at `data[offset + i + j * col_stride]`. Row and
/// column blocks shrink extents and shift the offset; `col_stride` always
/// stays the parent matrix's row count, so blocks of blocks compose.
pub struct MatrixView<'a, T> {
    data: &'a [T],
    offset: usize,
    rows: usize,
    cols: usize,
    col_stride: usize,
}

impl<T> Copy for MatrixView<'_, T> {}

impl<T> Clone for MatrixView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> MatrixView<'a, T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Element at 0-based `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> &'a T {
        assert!(i < self.rows && j < self.cols, "matrix position out of range");
        &self.data[self.offset + i + j * self.col_stride]
    }

    /// Row `i` as a strided vector view.
    pub fn row(&self, i: usize) -> VectorView<'a, T> {
        debug_assert!(i < self.rows);
        VectorView::new(self.data, self.offset + i, self.cols, self.col_stride)
    }

    /// Column `j` as a contiguous vector view.
    pub fn col(&self, j: usize) -> VectorView<'a, T> {
        debug_assert!(j < self.cols);
        VectorView::new(self.data, self.offset + j * self.col_stride, self.rows, 1)
    }

    /// `height x width` block with top-left corner at 0-based `(i, j)`.
    ///
    /// Degenerate blocks (zero height or width) are valid and keep the other
    /// extent, so callers can still query the non-degenerate dimension.
    pub fn block(&self, i: usize, j: usize, height: usize, width: usize) -> Self {
        debug_assert!(i + height <= self.rows && j + width <= self.cols);
        Self {
            offset: self.offset + i + j * self.col_stride,
            rows: height,
            cols: width,
            ..*self
        }
    }

    /// First `n` rows, all columns.
    pub fn top_rows(&self, n: usize) -> Self {
        self.block(0, 0, n, self.cols)
    }

    /// Last `n` rows, all columns.
    pub fn bottom_rows(&self, n: usize) -> Self {
        self.block(self.rows - n, 0, n, self.cols)
    }

    /// `n` rows starting at 0-based row `start`, all columns.
    pub fn middle_rows(&self, start: usize, n: usize) -> Self {
        self.block(start, 0, n, self.cols)
    }

    /// First `n` columns, all rows.
    pub fn left_cols(&self, n: usize) -> Self {
        self.block(0, 0, self.rows, n)
    }

    /// Last `n` columns, all rows.
    pub fn right_cols(&self, n: usize) -> Self {
        self.block(0, self.cols - n, self.rows, n)
    }

    /// `n` columns starting at 0-based column `start`, all rows.
    pub fn middle_cols(&self, start: usize, n: usize) -> Self {
        self.block(0, start, self.rows, n)
    }
}

impl<T: Clone> MatrixView<'_, T> {
    /// Materialize into an owned [`Matrix`].
    pub fn to_matrix(&self) -> Matrix<T> {
        Matrix::from_fn(self.rows, self.cols, |i, j| self.get(i, j).clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut outer = f.debug_list();
        for i in 0..self.rows {
            outer.entry(&(0..self.cols).map(|j| self.get(i, j)).collect::<Vec<_>>());
        }
        outer.finish()
    }
}

impl<T: PartialEq> PartialEq for MatrixView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && (0..self.rows)
                .all(|i| (0..self.cols).all(|j| self.get(i, j) == other.get(i, j)))
    }
}

// ============================================================================
// Tests
// ============================================================================
