use thiserror::Error;

/// Errors produced by the vecmath library.
///
/// Arithmetic never fails. Only element access and the geometry solvers
/// return errors, and the two kinds are kept apart so callers can branch
/// on them without looking at the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VecmathError {
    /// A matrix element was addressed outside `[0, 3] x [0, 3]`.
    #[error("matrix index ({row}, {col}) is out of range [0, 3]")]
    IndexOutOfRange { row: isize, col: isize },

    /// The input does not determine a unique solution.
    #[error("degenerate input: {0}")]
    Degenerate(&'static str),
}

impl VecmathError {
    /// Returns `true` for [`VecmathError::Degenerate`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate(_))
    }

    /// Returns `true` for [`VecmathError::IndexOutOfRange`].
    #[must_use]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

/// Convenience type alias for results using [`VecmathError`].
pub type Result<T> = std::result::Result<T, VecmathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinct() {
        let idx = VecmathError::IndexOutOfRange { row: -2, col: 0 };
        let deg = VecmathError::Degenerate("points are colinear");
        assert!(idx.is_index_error() && !idx.is_degenerate());
        assert!(deg.is_degenerate() && !deg.is_index_error());
    }

    #[test]
    fn messages() {
        let idx = VecmathError::IndexOutOfRange { row: 5, col: 1 };
        assert_eq!(
            idx.to_string(),
            "matrix index (5, 1) is out of range [0, 3]"
        );
        let deg = VecmathError::Degenerate("points are colinear");
        assert_eq!(deg.to_string(), "degenerate input: points are colinear");
    }
}
