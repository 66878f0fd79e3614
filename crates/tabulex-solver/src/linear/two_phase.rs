use std::collections::BTreeMap;

use super::problem::{LpProblem, Sense};
use super::simplex::{run_iterations, LoopStatus, Phase};
use super::snapshot::{round6, TableauSnapshot};
use super::solution::{Solution, SolveResult, SolveStatus};
use super::standardize::{standardize, StandardForm};
use super::tableau::{Tableau, TOL};
use super::variable::Variable;
use crate::errors::Result;

/// Resolver un problema de programación lineal con el Simplex tabular
///
/// Si la estandarización introdujo artificiales se corre la Fase 1
/// (minimizar la suma de artificiales) y, de ser factible, la Fase 2
/// sobre el objetivo verdadero; si no, una sola pasada. El historial de
/// tablas acumula todas las iteraciones de ambas fases con numeración
/// continua.
///
/// Los estados `infactible`, `no acotado` y `max_iterations_reached` son
/// resultados terminales, no errores: solo las violaciones de forma de la
/// entrada producen `Err`.
///
/// # Ejemplo
///
/// ```
/// use tabulex_solver::{two_phase_solve, ConstraintOp, LpProblem, Sense, SolveStatus};
///
/// // max z = 3x₁ + 5x₂
/// // s.a. x₁ <= 4; 2x₂ <= 12; 3x₁ + 2x₂ <= 18
/// let problem = LpProblem {
///     sense: Sense::Maximization,
///     objective: vec![3.0, 5.0],
///     constraints: vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![3.0, 2.0]],
///     rhs: vec![4.0, 12.0, 18.0],
///     operators: vec![ConstraintOp::Le, ConstraintOp::Le, ConstraintOp::Le],
/// };
///
/// let result = two_phase_solve(&problem).unwrap();
/// assert_eq!(result.status, SolveStatus::Optimal);
/// let solution = result.solution.unwrap();
/// assert!((solution.objective_value - 36.0).abs() < 1e-6);
/// ```
pub fn solve(problem: &LpProblem) -> Result<SolveResult> {
    let form = standardize(problem)?;
    let mut history: Vec<TableauSnapshot> = Vec::new();

    let (mut tableau, phase, iter_offset) = if form.needs_phase1 {
        let mut phase1 = build_phase1_tableau(&form);

        match run_iterations(&mut phase1, Phase::One, 0, &mut history) {
            LoopStatus::Optimal => {}
            LoopStatus::Unbounded => {
                return Ok(SolveResult {
                    status: SolveStatus::Unbounded,
                    tableaux: history,
                    solution: None,
                });
            }
            LoopStatus::IterationCap => {
                return Ok(SolveResult {
                    status: SolveStatus::IterationCap,
                    tableaux: history,
                    solution: None,
                });
            }
        }

        // Las artificiales deben quedar en cero; un residuo es infactibilidad
        if phase1.objective_value().abs() > TOL {
            return Ok(SolveResult {
                status: SolveStatus::Infeasible,
                tableaux: history,
                solution: None,
            });
        }

        let offset = history.len();
        (build_phase2_tableau(&phase1, &form), Phase::Two, offset)
    } else {
        (build_single_phase_tableau(&form), Phase::Single, 0)
    };

    match run_iterations(&mut tableau, phase, iter_offset, &mut history) {
        LoopStatus::Optimal => {}
        LoopStatus::Unbounded => {
            return Ok(SolveResult {
                status: SolveStatus::Unbounded,
                tableaux: history,
                solution: None,
            });
        }
        LoopStatus::IterationCap => {
            return Ok(SolveResult {
                status: SolveStatus::IterationCap,
                tableaux: history,
                solution: None,
            });
        }
    }

    let solution = extract_solution(&tableau, problem.sense);
    Ok(SolveResult {
        status: SolveStatus::Optimal,
        tableaux: history,
        solution: Some(solution),
    })
}

/// Filas de restricción `[cuerpo | LD]` del tableau inicial
fn constraint_rows(form: &StandardForm) -> Vec<Vec<f64>> {
    let m = form.rhs.len();
    let k = form.var_names.len();

    let mut rows = Vec::with_capacity(m + 1);
    for i in 0..m {
        let start = i * k;
        let mut row = form.body.data[start..start + k].to_vec();
        row.push(form.rhs[i]);
        rows.push(row);
    }
    rows
}

/// Tableau de Fase 1: minimizar la suma de artificiales
fn build_phase1_tableau(form: &StandardForm) -> Tableau {
    let m = form.rhs.len();
    let k = form.var_names.len();

    let mut data = constraint_rows(form);

    let mut objective_row = vec![0.0; k + 1];
    for (j, var) in form.var_names.iter().enumerate() {
        if var.is_artificial() {
            objective_row[j] = 1.0;
        }
    }
    data.push(objective_row);

    let mut tableau = Tableau {
        data,
        var_names: form.var_names.clone(),
        basis: form.basis.clone(),
    };

    // Forma canónica: anular el costo reducido de cada artificial básica
    for i in 0..m {
        if tableau.basis[i].is_artificial() {
            for j in 0..=k {
                tableau.data[m][j] -= tableau.data[i][j];
            }
        }
    }

    tableau
}

/// Tableau de pasada única para problemas sin artificiales
fn build_single_phase_tableau(form: &StandardForm) -> Tableau {
    let k = form.var_names.len();

    let mut data = constraint_rows(form);

    let mut objective_row = vec![0.0; k + 1];
    for (j, &coeff) in form.objective.iter().enumerate() {
        objective_row[j] = -coeff;
    }
    data.push(objective_row);

    Tableau {
        data,
        var_names: form.var_names.clone(),
        basis: form.basis.clone(),
    }
}

/// Tableau de Fase 2 a partir del tableau final de Fase 1
///
/// Las columnas artificiales se eliminan en bloque; una artificial
/// degenerada puede seguir listada en la base y se ignora tanto aquí
/// como en la extracción.
fn build_phase2_tableau(phase1: &Tableau, form: &StandardForm) -> Tableau {
    let m = phase1.num_constraints();
    let rhs_col = phase1.var_names.len();

    let keep: Vec<usize> = (0..phase1.var_names.len())
        .filter(|&j| !phase1.var_names[j].is_artificial())
        .collect();
    let var_names: Vec<Variable> = keep.iter().map(|&j| phase1.var_names[j]).collect();
    let k = var_names.len();

    let mut data = Vec::with_capacity(m + 1);
    for i in 0..m {
        let mut row: Vec<f64> = keep.iter().map(|&j| phase1.data[i][j]).collect();
        row.push(phase1.data[i][rhs_col]);
        data.push(row);
    }

    // Objetivo verdadero: las columnas de decisión van primero y conservan
    // sus índices tras eliminar artificiales
    let mut objective_row = vec![0.0; k + 1];
    for (j, &coeff) in form.objective.iter().enumerate() {
        objective_row[j] = -coeff;
    }
    data.push(objective_row);

    let mut tableau = Tableau {
        data,
        var_names,
        basis: phase1.basis.clone(),
    };

    // Restaurar la forma canónica respecto a la base heredada
    for i in 0..m {
        if let Some(col) = tableau.column_of(tableau.basis[i]) {
            let coeff = tableau.data[m][col];
            if coeff.abs() > TOL {
                for j in 0..=k {
                    tableau.data[m][j] -= coeff * tableau.data[i][j];
                }
            }
        }
    }

    tableau
}

/// Extraer la solución etiquetada del tableau óptimo
fn extract_solution(tableau: &Tableau, sense: Sense) -> Solution {
    let m = tableau.num_constraints();
    let rhs_col = tableau.var_names.len();

    let raw = tableau.objective_value();
    let objective_value = match sense {
        Sense::Minimization => -raw,
        Sense::Maximization => raw,
    };

    let mut variables = BTreeMap::new();
    for var in &tableau.var_names {
        if !var.is_artificial() {
            variables.insert(var.to_string(), 0.0);
        }
    }
    for i in 0..m {
        let label = tableau.basis[i].to_string();
        if let Some(value) = variables.get_mut(&label) {
            *value = round6(tableau.data[i][rhs_col]);
        }
    }

    Solution {
        objective_value,
        variables,
    }
}
