use serde::{Deserialize, Serialize};

use crate::errors::{Result, SolverError};

/// Sentido de optimización del problema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    #[serde(rename = "maximization")]
    Maximization,
    #[serde(rename = "minimization")]
    Minimization,
}

/// Operador relacional de una restricción
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintOp {
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl ConstraintOp {
    /// Operador resultante de multiplicar la restricción por −1
    pub fn flip(self) -> Self {
        match self {
            ConstraintOp::Le => ConstraintOp::Ge,
            ConstraintOp::Ge => ConstraintOp::Le,
            ConstraintOp::Eq => ConstraintOp::Eq,
        }
    }
}

/// Problema de Programación Lineal en forma de entrada
///
/// ```text
/// max/min  z = C · x
/// s.a.     LI · x  (<=|>=|=)  LD
///          x >= 0
/// ```
///
/// Los nombres de campo en el JSON son los del adaptador externo:
/// `problem_type`, `C`, `LI`, `LD`, `O`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpProblem {
    /// `"maximization"` o `"minimization"`
    #[serde(rename = "problem_type")]
    pub sense: Sense,

    /// Coeficientes de la función objetivo (n elementos)
    #[serde(rename = "C")]
    pub objective: Vec<f64>,

    /// Matriz de restricciones (m filas × n columnas)
    #[serde(rename = "LI")]
    pub constraints: Vec<Vec<f64>>,

    /// Lado derecho (m elementos)
    #[serde(rename = "LD")]
    pub rhs: Vec<f64>,

    /// Operadores relacionales (m elementos)
    #[serde(rename = "O")]
    pub operators: Vec<ConstraintOp>,
}

impl LpProblem {
    /// Número de variables de decisión
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Número de restricciones
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Verificar la forma del problema antes de cualquier pivoteo
    pub fn validate(&self) -> Result<()> {
        let n = self.objective.len();
        let m = self.constraints.len();

        for (i, row) in self.constraints.iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::ConstraintWidth {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
        }

        if self.rhs.len() != m {
            return Err(SolverError::RhsLength {
                expected: m,
                got: self.rhs.len(),
            });
        }

        if self.operators.len() != m {
            return Err(SolverError::OperatorLength {
                expected: m,
                got: self.operators.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LpProblem {
        LpProblem {
            sense: Sense::Maximization,
            objective: vec![3.0, 5.0],
            constraints: vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![3.0, 2.0]],
            rhs: vec![4.0, 12.0, 18.0],
            operators: vec![ConstraintOp::Le, ConstraintOp::Le, ConstraintOp::Le],
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_constraint_width() {
        let mut problem = sample();
        problem.constraints[1] = vec![1.0];
        assert_eq!(
            problem.validate(),
            Err(SolverError::ConstraintWidth {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_validate_rhs_length() {
        let mut problem = sample();
        problem.rhs.pop();
        assert_eq!(
            problem.validate(),
            Err(SolverError::RhsLength {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_validate_operator_length() {
        let mut problem = sample();
        problem.operators.push(ConstraintOp::Ge);
        assert_eq!(
            problem.validate(),
            Err(SolverError::OperatorLength {
                expected: 3,
                got: 4
            })
        );
    }

    #[test]
    fn test_flip() {
        assert_eq!(ConstraintOp::Le.flip(), ConstraintOp::Ge);
        assert_eq!(ConstraintOp::Ge.flip(), ConstraintOp::Le);
        assert_eq!(ConstraintOp::Eq.flip(), ConstraintOp::Eq);
    }
}
