use tabulex_types::matrix::Matrix;

use super::problem::{ConstraintOp, LpProblem, Sense};
use super::variable::Variable;
use crate::errors::Result;

/// Problema estandarizado, listo para armar un tableau
///
/// El cuerpo tiene una columna por variable en orden fijo: decisión,
/// holguras, excesos, artificiales. `basis[i]` es la variable básica
/// inicial de la fila `i`.
#[derive(Debug, Clone)]
pub struct StandardForm {
    /// Cuerpo de restricciones (m × k)
    pub body: Matrix,

    /// Lado derecho, ya no negativo
    pub rhs: Vec<f64>,

    /// Objetivo interno (negado si el problema es de minimización)
    pub objective: Vec<f64>,

    /// Una etiqueta por columna del cuerpo
    pub var_names: Vec<Variable>,

    /// Variable básica inicial por fila
    pub basis: Vec<Variable>,

    /// Hay artificiales: se requiere Fase 1
    pub needs_phase1: bool,
}

/// Estandarizar el problema de entrada
///
/// 1. Si `LD[i] < 0`, se multiplica la fila por −1 y se invierte el operador.
/// 2. Si el problema minimiza, se niega el objetivo (la Fase 2 siempre maximiza).
/// 3. Por operador: `<=` agrega holgura; `>=` agrega exceso y artificial;
///    `=` agrega artificial. Las artificiales fuerzan la Fase 1.
pub fn standardize(problem: &LpProblem) -> Result<StandardForm> {
    problem.validate()?;

    let n = problem.num_vars();
    let m = problem.num_constraints();

    let mut a = problem.constraints.clone();
    let mut b = problem.rhs.clone();
    let mut ops = problem.operators.clone();

    for i in 0..m {
        if b[i] < 0.0 {
            b[i] = -b[i];
            for coeff in &mut a[i] {
                *coeff = -*coeff;
            }
            ops[i] = ops[i].flip();
        }
    }

    let mut objective = problem.objective.clone();
    if problem.sense == Sense::Minimization {
        for c in &mut objective {
            *c = -*c;
        }
    }

    let num_slack = ops.iter().filter(|op| matches!(op, ConstraintOp::Le)).count();
    let num_surplus = ops.iter().filter(|op| matches!(op, ConstraintOp::Ge)).count();
    let num_artificial = ops
        .iter()
        .filter(|op| matches!(op, ConstraintOp::Ge | ConstraintOp::Eq))
        .count();
    let k = n + num_slack + num_surplus + num_artificial;

    let mut body = Matrix::zeros(m, k);
    for i in 0..m {
        for j in 0..n {
            body.data[i * k + j] = a[i][j];
        }
    }

    // Cursores de columna por bloque de variables auxiliares
    let mut slack_col = n;
    let mut surplus_col = n + num_slack;
    let mut artificial_col = n + num_slack + num_surplus;

    let mut slack_names = Vec::with_capacity(num_slack);
    let mut surplus_names = Vec::with_capacity(num_surplus);
    let mut artificial_names = Vec::with_capacity(num_artificial);

    let mut basis = Vec::with_capacity(m);
    let mut needs_phase1 = false;

    for (i, op) in ops.iter().enumerate() {
        match op {
            ConstraintOp::Le => {
                body.data[i * k + slack_col] = 1.0;
                slack_names.push(Variable::Slack(i + 1));
                basis.push(Variable::Slack(i + 1));
                slack_col += 1;
            }
            ConstraintOp::Ge => {
                needs_phase1 = true;
                body.data[i * k + surplus_col] = -1.0;
                surplus_names.push(Variable::Surplus(i + 1));
                surplus_col += 1;
                body.data[i * k + artificial_col] = 1.0;
                artificial_names.push(Variable::Artificial(i + 1));
                basis.push(Variable::Artificial(i + 1));
                artificial_col += 1;
            }
            ConstraintOp::Eq => {
                needs_phase1 = true;
                body.data[i * k + artificial_col] = 1.0;
                artificial_names.push(Variable::Artificial(i + 1));
                basis.push(Variable::Artificial(i + 1));
                artificial_col += 1;
            }
        }
    }

    let mut var_names: Vec<Variable> = (1..=n).map(Variable::Decision).collect();
    var_names.extend(slack_names);
    var_names.extend(surplus_names);
    var_names.extend(artificial_names);

    Ok(StandardForm {
        body,
        rhs: b,
        objective,
        var_names,
        basis,
        needs_phase1,
    })
}
