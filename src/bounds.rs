//! 1-based range validation.
//!
//! Every position a resolver touches goes through [`check_range`] before the
//! container is read. The `context` label names the exact index-kind and
//! dimension combination being checked so a failure is diagnosable per call
//! site (e.g. `"matrix[multi, uni] column indexing"`).

use crate::{IndexError, Result};

/// Validate a 1-based `position` against a container `extent`.
///
/// Succeeds iff `1 <= position <= extent`. On failure returns
/// [`IndexError::OutOfRange`] carrying the context label, the diagnostic
/// name of the container being indexed, the extent, and the offending
/// position.
pub fn check_range(
    context: &'static str,
    name: &str,
    extent: usize,
    position: isize,
) -> Result<()> {
    if position < 1 || position as usize > extent {
        return Err(IndexError::OutOfRange {
            context,
            name: name.to_owned(),
            extent,
            position,
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range() {
        assert!(check_range("vector[uni] indexing", "x", 5, 1).is_ok());
        assert!(check_range("vector[uni] indexing", "x", 5, 5).is_ok());
    }

    #[test]
    fn test_out_of_range() {
        for bad in [0, -3, 6] {
            let err = check_range("vector[uni] indexing", "x", 5, bad).unwrap_err();
            match err {
                IndexError::OutOfRange {
                    context,
                    name,
                    extent,
                    position,
                } => {
                    assert_eq!(context, "vector[uni] indexing");
                    assert_eq!(name, "x");
                    assert_eq!(extent, 5);
                    assert_eq!(position, bad);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_extent() {
        assert!(check_range("vector[uni] indexing", "x", 0, 1).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = check_range("vector[min] indexing", "alpha", 3, 7).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("vector[min] indexing"));
        assert!(msg.contains("alpha"));
        assert!(msg.contains('3'));
        assert!(msg.contains('7'));
    }
}
