//! Operation selector for callers that pick an operation at runtime

use mcalc_core::{Matrix, MatrixError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::{determinant, ops};

/// Every operation the engine offers, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Scale,
    Determinant,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Scale,
        Operation::Determinant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Scale => "scale",
            Operation::Determinant => "determinant",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Scale => "Multiplication by a scalar",
            Operation::Determinant => "Determinant of the first matrix",
        }
    }

    /// 1-based position in `ALL`
    pub fn menu_number(self) -> usize {
        Operation::ALL.iter().position(|&op| op == self).map_or(0, |i| i + 1)
    }

    /// Number of matrix operands
    pub fn operand_count(self) -> usize {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => 2,
            Operation::Scale | Operation::Determinant => 1,
        }
    }

    pub fn needs_scalar(self) -> bool {
        self == Operation::Scale
    }

    /// Run the operation on explicit operands
    ///
    /// `b` is required by the binary operations and ignored otherwise;
    /// `scalar` is required by `Scale` and ignored otherwise.
    pub fn apply(self, a: &Matrix, b: Option<&Matrix>, scalar: Option<f64>) -> Result<Outcome, MatrixError> {
        let second = || b.ok_or(MatrixError::MissingOperand { op: self.name(), operand: "second matrix" });

        match self {
            Operation::Add => ops::add(a, second()?).map(Outcome::Matrix),
            Operation::Subtract => ops::subtract(a, second()?).map(Outcome::Matrix),
            Operation::Multiply => ops::multiply(a, second()?).map(Outcome::Matrix),
            Operation::Scale => {
                let k = scalar.ok_or(MatrixError::MissingOperand { op: self.name(), operand: "scalar" })?;
                Ok(Outcome::Matrix(ops::multiply_by_scalar(a, k)))
            }
            Operation::Determinant => determinant::determinant(a).map(Outcome::Scalar),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized operation name or number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts a name (`"add"`, `"det"`, ...) or a menu number (`"1"`-`"5"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return n.checked_sub(1)
                .and_then(|i| Operation::ALL.get(i).copied())
                .ok_or_else(|| UnknownOperation(s.to_string()));
        }
        match s.to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            "multiply" | "mul" | "matmul" | "*" => Ok(Operation::Multiply),
            "scale" => Ok(Operation::Scale),
            "determinant" | "det" => Ok(Operation::Determinant),
            _ => Err(UnknownOperation(s.to_string())),
        }
    }
}

/// Result of an operation: a matrix or a single number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Outcome {
    Matrix(Matrix),
    Scalar(f64),
}

impl Outcome {
    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Outcome::Matrix(m) => Some(m),
            Outcome::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Outcome::Scalar(x) => Some(*x),
            Outcome::Matrix(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcalc_core::ErrorKind;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("5".parse::<Operation>().unwrap(), Operation::Determinant);
        assert_eq!(" det ".parse::<Operation>().unwrap(), Operation::Determinant);
        assert_eq!("MULTIPLY".parse::<Operation>().unwrap(), Operation::Multiply);
        assert!("0".parse::<Operation>().is_err());
        assert!("6".parse::<Operation>().is_err());
        assert_eq!("divide".parse::<Operation>().unwrap_err().to_string(), "unknown operation 'divide'");
    }

    #[test]
    fn test_menu_numbers_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.menu_number().to_string().parse::<Operation>().unwrap(), op);
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_apply() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[2.0, 0.0], &[1.0, 2.0]]);

        let out = Operation::Multiply.apply(&a, Some(&b), None).unwrap();
        assert_eq!(out.as_matrix(), Some(&m(&[&[4.0, 4.0], &[10.0, 8.0]])));

        let out = Operation::Scale.apply(&a, None, Some(-2.0)).unwrap();
        assert_eq!(out, Outcome::Matrix(m(&[&[-2.0, -4.0], &[-6.0, -8.0]])));

        // Determinant uses only the first operand
        let out = Operation::Determinant.apply(&a, Some(&b), None).unwrap();
        assert_eq!(out.as_scalar(), Some(-2.0));
    }

    #[test]
    fn test_apply_missing_operands() {
        let a = m(&[&[1.0]]);
        let err = Operation::Add.apply(&a, None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Operand);
        assert_eq!(err.to_string(), "add: missing second matrix");

        let err = Operation::Scale.apply(&a, Some(&a), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Operand);
    }

    #[test]
    fn test_apply_propagates_errors() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(Operation::Subtract.apply(&a, Some(&b), None).unwrap_err().kind(), ErrorKind::Dimension);
        assert_eq!(Operation::Determinant.apply(&a, None, None).unwrap_err().kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_value(Outcome::Scalar(-2.0)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "scalar", "value": -2.0}));

        let json = serde_json::to_value(Outcome::Matrix(m(&[&[1.0, 2.0]]))).unwrap();
        assert_eq!(json["type"], "matrix");
        assert_eq!(json["value"]["data"], serde_json::json!([[1.0, 2.0]]));
        assert_eq!(json["value"]["rows"], 1);
    }
}
