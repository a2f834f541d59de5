//! Determinant by cofactor (Laplace) expansion along the first row
//!
//! This is the textbook recursive algorithm: O(n!) time, no pivoting. Each
//! level builds explicit minors, so results follow the exact sign pattern and
//! summation order of the expansion.

use mcalc_core::{Matrix, MatrixError};
use crate::helpers::check_square;

/// Determinant of a square matrix
pub fn determinant(m: &Matrix) -> Result<f64, MatrixError> {
    check_square(m)?;
    Ok(cofactor_expansion(m.data()))
}

fn cofactor_expansion(grid: &[Vec<f64>]) -> f64 {
    let n = grid.len();
    if n == 1 {
        return grid[0][0];
    }
    if n == 2 {
        return grid[0][0] * grid[1][1] - grid[0][1] * grid[1][0];
    }

    let mut det = 0.0;
    for col in 0..n {
        let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
        det += sign * grid[0][col] * cofactor_expansion(&minor(grid, 0, col));
    }
    det
}

/// Copy of `grid` without `skip_row` and `skip_col`, order preserved
pub(crate) fn minor(grid: &[Vec<f64>], skip_row: usize, skip_col: usize) -> Vec<Vec<f64>> {
    grid.iter()
        .enumerate()
        .filter(|&(i, _)| i != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != skip_col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcalc_core::ErrorKind;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_base_cases() {
        assert_eq!(determinant(&m(&[&[5.0]])).unwrap(), 5.0);
        assert_eq!(determinant(&m(&[&[1.0, 2.0], &[3.0, 4.0]])).unwrap(), -2.0);
    }

    #[test]
    fn test_singular() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        assert_eq!(determinant(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_three_by_three() {
        // 2(0·1 - 1·2) - 0 + 1(1·2 - 0·3) = -4 + 2
        let a = m(&[&[2.0, 0.0, 1.0], &[1.0, 0.0, 1.0], &[3.0, 2.0, 1.0]]);
        assert_eq!(determinant(&a).unwrap(), -2.0);
    }

    #[test]
    fn test_identity_and_diagonal() {
        let mut id = Matrix::zeros(5, 5).unwrap();
        for i in 0..5 {
            id.set(i, i, 1.0).unwrap();
        }
        assert_eq!(determinant(&id).unwrap(), 1.0);

        let mut diag = Matrix::zeros(4, 4).unwrap();
        for i in 0..4 {
            diag.set(i, i, (i + 1) as f64).unwrap();
        }
        assert_eq!(determinant(&diag).unwrap(), 24.0);
    }

    #[test]
    fn test_row_swap_flips_sign() {
        let a = m(&[&[1.0, 2.0, 0.0], &[0.0, 1.0, 3.0], &[4.0, 0.0, 1.0]]);
        let b = m(&[&[0.0, 1.0, 3.0], &[1.0, 2.0, 0.0], &[4.0, 0.0, 1.0]]);
        assert_eq!(determinant(&a).unwrap(), -determinant(&b).unwrap());
    }

    #[test]
    fn test_not_square() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let err = determinant(&a).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(err.to_string(), "determinant requires a square matrix, got 2×3");
    }

    #[test]
    fn test_minor() {
        let grid = vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ];
        assert_eq!(minor(&grid, 0, 1), vec![vec![4.0, 6.0], vec![7.0, 9.0]]);
        assert_eq!(minor(&grid, 2, 2), vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
    }
}
