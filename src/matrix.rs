//! Resolution of one or two index specifiers against a dense matrix.
//!
//! A single specifier selects rows over all columns. The two-specifier form
//! keeps the full (row kind x column kind) combination matrix in one match
//! so it stays auditable in one place. Most combinations reduce to "narrow
//! the columns, then recurse into the row selection": when the column
//! specifier is `Uni` the row logic is exactly the vector case applied to
//! that column, and when it is a contiguous range the row logic applies to
//! the column block. Only the gather pairs (`Uni`/`Multi`, `Multi`/`Uni`,
//! `Multi`/`Multi`) need bespoke two-dimensional handling, because neither
//! axis can be narrowed without splitting the bounds checks into two passes
//! anyway.
//!
//! Check order is row-major for the dedicated overloads and column-first
//! for the reductions; it never changes the result, only which diagnostic
//! fires first when several positions are invalid.

use crate::bounds::check_range;
use crate::index::Index;
use crate::result::Resolved;
use crate::vector;
use crate::view::{Matrix, MatrixView};
use crate::Result;

/// Resolve `row_idx` against the rows of `m`, keeping every column.
pub fn resolve_rows<'a, T: Clone>(
    m: MatrixView<'a, T>,
    name: &str,
    row_idx: &Index,
) -> Result<Resolved<'a, T>> {
    let nrows = m.rows();
    match *row_idx {
        Index::NoOp | Index::Omni => Ok(Resolved::MatView(m)),
        Index::Uni(p) => {
            check_range("matrix[uni] indexing", name, nrows, p)?;
            Ok(Resolved::VecView(m.row(p as usize - 1)))
        }
        Index::Multi(ref ns) => {
            for &p in ns {
                check_range("matrix[multi] row indexing", name, nrows, p)?;
            }
            let gathered = Matrix::from_fn(ns.len(), m.cols(), |i, j| {
                m.get(ns[i] as usize - 1, j).clone()
            });
            Ok(Resolved::MatOwned(gathered))
        }
        Index::Min(lo) => {
            check_range("matrix[min] row indexing", name, nrows, lo)?;
            Ok(Resolved::MatView(m.bottom_rows(nrows - (lo as usize - 1))))
        }
        Index::Max(hi) => {
            if hi > 0 {
                check_range("matrix[max] row indexing", name, nrows, hi)?;
                Ok(Resolved::MatView(m.top_rows(hi as usize)))
            } else {
                Ok(Resolved::MatView(m.top_rows(0)))
            }
        }
        Index::MinMax(lo, hi) => {
            check_range("matrix[min_max] min row indexing", name, nrows, lo)?;
            let start = lo as usize - 1;
            if hi >= lo {
                check_range("matrix[min_max] max row indexing", name, nrows, hi)?;
                Ok(Resolved::MatView(m.middle_rows(start, (hi - lo + 1) as usize)))
            } else {
                Ok(Resolved::MatView(m.middle_rows(start, 0)))
            }
        }
    }
}

/// Resolve a (row, column) specifier pair against `m`.
pub fn resolve<'a, T: Clone + 'static>(
    m: MatrixView<'a, T>,
    name: &str,
    row_idx: &Index,
    col_idx: &Index,
) -> Result<Resolved<'a, T>> {
    let nrows = m.rows();
    let ncols = m.cols();
    match (row_idx, col_idx) {
        // Identity column: the single-specifier row form.
        (_, Index::NoOp | Index::Omni) => resolve_rows(m, name, row_idx),

        (&Index::Uni(r), &Index::Uni(c)) => {
            check_range("matrix[uni, uni] row indexing", name, nrows, r)?;
            check_range("matrix[uni, uni] column indexing", name, ncols, c)?;
            Ok(Resolved::Scalar(
                m.get(r as usize - 1, c as usize - 1).clone(),
            ))
        }

        (&Index::Uni(r), Index::Multi(cs)) => {
            check_range("matrix[uni, multi] row indexing", name, nrows, r)?;
            for &c in cs {
                check_range("matrix[uni, multi] column indexing", name, ncols, c)?;
            }
            let row = m.row(r as usize - 1);
            let gathered: Vec<T> = cs.iter().map(|&c| row.get(c as usize - 1).clone()).collect();
            Ok(Resolved::VecOwned(gathered.into()))
        }

        (Index::Multi(rs), &Index::Uni(c)) => {
            check_range("matrix[multi, uni] column indexing", name, ncols, c)?;
            for &r in rs {
                check_range("matrix[multi, uni] row indexing", name, nrows, r)?;
            }
            let col = m.col(c as usize - 1);
            let gathered: Vec<T> = rs.iter().map(|&r| col.get(r as usize - 1).clone()).collect();
            Ok(Resolved::VecOwned(gathered.into()))
        }

        (Index::Multi(rs), Index::Multi(cs)) => {
            for &r in rs {
                check_range("matrix[multi, multi] row indexing", name, nrows, r)?;
            }
            for &c in cs {
                check_range("matrix[multi, multi] column indexing", name, ncols, c)?;
            }
            let gathered = Matrix::from_fn(rs.len(), cs.len(), |i, j| {
                m.get(rs[i] as usize - 1, cs[j] as usize - 1).clone()
            });
            Ok(Resolved::MatOwned(gathered))
        }

        // Dedicated block form so a degenerate range on one axis still keeps
        // the other axis' extent.
        (&Index::MinMax(rlo, rhi), &Index::MinMax(clo, chi)) => {
            check_range("matrix[min_max, min_max] min row indexing", name, nrows, rlo)?;
            check_range(
                "matrix[min_max, min_max] min column indexing",
                name,
                ncols,
                clo,
            )?;
            let r0 = rlo as usize - 1;
            let c0 = clo as usize - 1;
            let block = if rhi >= rlo && chi >= clo {
                check_range("matrix[min_max, min_max] max row indexing", name, nrows, rhi)?;
                check_range(
                    "matrix[min_max, min_max] max column indexing",
                    name,
                    ncols,
                    chi,
                )?;
                m.block(r0, c0, (rhi - rlo + 1) as usize, (chi - clo + 1) as usize)
            } else if rhi >= rlo {
                check_range("matrix[min_max, min_max] max row indexing", name, nrows, rhi)?;
                m.block(r0, c0, (rhi - rlo + 1) as usize, 0)
            } else if chi >= clo {
                check_range(
                    "matrix[min_max, min_max] max column indexing",
                    name,
                    ncols,
                    chi,
                )?;
                m.block(r0, c0, 0, (chi - clo + 1) as usize)
            } else {
                m.block(r0, c0, 0, 0)
            };
            Ok(Resolved::MatView(block))
        }

        // One column fixed: the row selection is exactly the vector case.
        (row, &Index::Uni(c)) => {
            check_range("matrix[..., uni] column indexing", name, ncols, c)?;
            vector::resolve(m.col(c as usize - 1), name, row)
        }

        // Gathered columns cannot stay a view; materialize, then recurse.
        (row, Index::Multi(cs)) => {
            for &c in cs {
                check_range("matrix[..., multi] column indexing", name, ncols, c)?;
            }
            let gathered = Matrix::from_fn(nrows, cs.len(), |i, j| {
                m.get(i, cs[j] as usize - 1).clone()
            });
            Ok(resolve_rows(gathered.view(), name, row)?.into_owned())
        }

        // Contiguous column ranges stay views; recurse on the block.
        (row, &Index::Min(clo)) => {
            check_range("matrix[..., min] column indexing", name, ncols, clo)?;
            resolve_rows(m.right_cols(ncols - (clo as usize - 1)), name, row)
        }

        (row, &Index::Max(chi)) => {
            if chi > 0 {
                check_range("matrix[..., max] column indexing", name, ncols, chi)?;
                resolve_rows(m.left_cols(chi as usize), name, row)
            } else {
                resolve_rows(m.left_cols(0), name, row)
            }
        }

        (row, &Index::MinMax(clo, chi)) => {
            check_range("matrix[..., min_max] min column indexing", name, ncols, clo)?;
            let start = clo as usize - 1;
            if chi >= clo {
                check_range("matrix[..., min_max] max column indexing", name, ncols, chi)?;
                resolve_rows(m.middle_cols(start, (chi - clo + 1) as usize), name, row)
            } else {
                resolve_rows(m.middle_cols(start, 0), name, row)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Matrix;
    use crate::IndexError;

    fn mat3() -> Matrix<i32> {
        Matrix::from_rows(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]])
    }

    fn expect_context(err: IndexError, want: &str) {
        match err {
            IndexError::OutOfRange { context, .. } => assert_eq!(context, want),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // ---- single (row) specifier ----

    #[test]
    fn test_rows_uni_is_row_view() {
        let m = mat3();
        let r = resolve_rows(m.view(), "m", &Index::Uni(2)).unwrap();
        assert!(r.is_view());
        assert_eq!(r.to_vector().unwrap().as_slice(), &[4, 5, 6]);
    }

    #[test]
    fn test_rows_multi_gathers_and_materializes() {
        let m = mat3();
        let r = resolve_rows(m.view(), "m", &Index::Multi(vec![3, 1, 3])).unwrap();
        assert!(!r.is_view());
        let out = r.to_matrix().unwrap();
        assert_eq!(
            out,
            Matrix::from_rows(&[&[7, 8, 9], &[1, 2, 3], &[7, 8, 9]])
        );
    }

    #[test]
    fn test_rows_range_views() {
        let m = mat3();
        let r = resolve_rows(m.view(), "m", &Index::Min(2)).unwrap();
        assert!(r.is_view());
        assert_eq!(
            r.to_matrix().unwrap(),
            Matrix::from_rows(&[&[4, 5, 6], &[7, 8, 9]])
        );

        let r = resolve_rows(m.view(), "m", &Index::Max(0)).unwrap();
        assert_eq!(r.to_matrix().unwrap().rows(), 0);

        let r = resolve_rows(m.view(), "m", &Index::MinMax(2, 1)).unwrap();
        let out = r.to_matrix().unwrap();
        assert_eq!(out.rows(), 0);
        assert_eq!(out.cols(), 3);
    }

    #[test]
    fn test_rows_error_labels() {
        let m = mat3();
        let err = resolve_rows(m.view(), "m", &Index::Uni(4)).unwrap_err();
        expect_context(err, "matrix[uni] indexing");
        let err = resolve_rows(m.view(), "m", &Index::Multi(vec![1, 0])).unwrap_err();
        expect_context(err, "matrix[multi] row indexing");
        let err = resolve_rows(m.view(), "m", &Index::MinMax(1, 5)).unwrap_err();
        expect_context(err, "matrix[min_max] max row indexing");
    }

    // ---- dedicated two-specifier forms ----

    #[test]
    fn test_uni_uni_scalar() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::Uni(3), &Index::Uni(1)).unwrap();
        assert_eq!(r.scalar(), Some(&7));
    }

    #[test]
    fn test_uni_uni_checks_row_before_column() {
        let m = mat3();
        let err = resolve(m.view(), "m", &Index::Uni(9), &Index::Uni(9)).unwrap_err();
        expect_context(err, "matrix[uni, uni] row indexing");
        let err = resolve(m.view(), "m", &Index::Uni(1), &Index::Uni(9)).unwrap_err();
        expect_context(err, "matrix[uni, uni] column indexing");
    }

    #[test]
    fn test_uni_multi_row_subset() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::Uni(2), &Index::Multi(vec![3, 3, 1])).unwrap();
        assert!(!r.is_view());
        assert_eq!(r.to_vector().unwrap().as_slice(), &[6, 6, 4]);
    }

    #[test]
    fn test_multi_uni_column_gather() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::Multi(vec![2, 1]), &Index::Uni(3)).unwrap();
        assert_eq!(r.to_vector().unwrap().as_slice(), &[6, 3]);
    }

    #[test]
    fn test_multi_uni_checks_column_first() {
        let m = mat3();
        let err = resolve(m.view(), "m", &Index::Multi(vec![9]), &Index::Uni(9)).unwrap_err();
        expect_context(err, "matrix[multi, uni] column indexing");
        let err = resolve(m.view(), "m", &Index::Multi(vec![9]), &Index::Uni(1)).unwrap_err();
        expect_context(err, "matrix[multi, uni] row indexing");
    }

    #[test]
    fn test_multi_multi_block_gather() {
        let m = mat3();
        let r = resolve(
            m.view(),
            "m",
            &Index::Multi(vec![3, 1]),
            &Index::Multi(vec![2, 2]),
        )
        .unwrap();
        assert_eq!(
            r.to_matrix().unwrap(),
            Matrix::from_rows(&[&[8, 8], &[2, 2]])
        );
    }

    // ---- block (min_max, min_max) ----

    #[test]
    fn test_min_max_block_view() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::MinMax(2, 3), &Index::MinMax(1, 2)).unwrap();
        assert!(r.is_view());
        assert_eq!(
            r.to_matrix().unwrap(),
            Matrix::from_rows(&[&[4, 5], &[7, 8]])
        );
    }

    #[test]
    fn test_min_max_block_one_empty_axis_keeps_other_extent() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::MinMax(1, 2), &Index::MinMax(3, 1)).unwrap();
        let out = r.to_matrix().unwrap();
        assert_eq!(out.rows(), 2);
        assert_eq!(out.cols(), 0);

        let r = resolve(m.view(), "m", &Index::MinMax(3, 2), &Index::MinMax(2, 3)).unwrap();
        let out = r.to_matrix().unwrap();
        assert_eq!(out.rows(), 0);
        assert_eq!(out.cols(), 2);
    }

    #[test]
    fn test_min_max_block_both_empty() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::MinMax(2, 1), &Index::MinMax(3, 2)).unwrap();
        let out = r.to_matrix().unwrap();
        assert_eq!(out.rows(), 0);
        assert_eq!(out.cols(), 0);
    }

    #[test]
    fn test_min_max_block_validates_mins_even_when_empty() {
        let m = mat3();
        let err = resolve(m.view(), "m", &Index::MinMax(9, 1), &Index::MinMax(1, 1)).unwrap_err();
        expect_context(err, "matrix[min_max, min_max] min row indexing");
        let err = resolve(m.view(), "m", &Index::MinMax(1, 0), &Index::MinMax(9, 1)).unwrap_err();
        expect_context(err, "matrix[min_max, min_max] min column indexing");
    }

    // ---- reductions ----

    #[test]
    fn test_range_rows_uni_col_is_column_view() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::MinMax(1, 2), &Index::Uni(2)).unwrap();
        assert!(r.is_view());
        assert_eq!(r.to_vector().unwrap().as_slice(), &[2, 5]);
    }

    #[test]
    fn test_omni_col_is_identity_on_that_axis() {
        let m = mat3();
        let direct = resolve_rows(m.view(), "m", &Index::Min(2)).unwrap();
        let via_omni = resolve(m.view(), "m", &Index::Min(2), &Index::Omni).unwrap();
        assert_eq!(direct.to_matrix(), via_omni.to_matrix());
    }

    #[test]
    fn test_range_rows_multi_cols_materializes() {
        let m = mat3();
        let r = resolve(
            m.view(),
            "m",
            &Index::MinMax(2, 3),
            &Index::Multi(vec![3, 1]),
        )
        .unwrap();
        assert!(!r.is_view());
        assert_eq!(
            r.to_matrix().unwrap(),
            Matrix::from_rows(&[&[6, 4], &[9, 7]])
        );
    }

    #[test]
    fn test_uni_row_col_range_is_row_sub_view() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::Uni(2), &Index::MinMax(1, 2)).unwrap();
        assert!(r.is_view());
        assert_eq!(r.to_vector().unwrap().as_slice(), &[4, 5]);
    }

    #[test]
    fn test_col_range_views_compose() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::MinMax(1, 2), &Index::Min(2)).unwrap();
        assert!(r.is_view());
        assert_eq!(
            r.to_matrix().unwrap(),
            Matrix::from_rows(&[&[2, 3], &[5, 6]])
        );

        let r = resolve(m.view(), "m", &Index::Omni, &Index::Max(0)).unwrap();
        let out = r.to_matrix().unwrap();
        assert_eq!(out.rows(), 3);
        assert_eq!(out.cols(), 0);
    }

    #[test]
    fn test_reduction_error_labels() {
        let m = mat3();
        let err = resolve(m.view(), "m", &Index::Omni, &Index::Uni(4)).unwrap_err();
        expect_context(err, "matrix[..., uni] column indexing");
        let err = resolve(m.view(), "m", &Index::Omni, &Index::Multi(vec![4])).unwrap_err();
        expect_context(err, "matrix[..., multi] column indexing");
        let err = resolve(m.view(), "m", &Index::Omni, &Index::Min(4)).unwrap_err();
        expect_context(err, "matrix[..., min] column indexing");
        let err = resolve(m.view(), "m", &Index::Omni, &Index::Max(4)).unwrap_err();
        expect_context(err, "matrix[..., max] column indexing");
        let err = resolve(m.view(), "m", &Index::Omni, &Index::MinMax(4, 4)).unwrap_err();
        expect_context(err, "matrix[..., min_max] min column indexing");
    }

    #[test]
    fn test_double_omni_identity() {
        let m = mat3();
        let r = resolve(m.view(), "m", &Index::Omni, &Index::Omni).unwrap();
        assert!(r.is_view());
        assert_eq!(r.to_matrix().unwrap(), m);
    }
}
