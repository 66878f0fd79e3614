// Forma JSON del resultado: vocabulario del adaptador externo

use serde_json::{json, Value};
use tabulex_solver::{two_phase_solve, ConstraintOp, LpProblem, Sense, SolveResult, SolveStatus};

fn sample_problem() -> LpProblem {
    LpProblem {
        sense: Sense::Maximization,
        objective: vec![3.0, 5.0],
        constraints: vec![vec![1.0, 0.0], vec![0.0, 2.0], vec![3.0, 2.0]],
        rhs: vec![4.0, 12.0, 18.0],
        operators: vec![ConstraintOp::Le, ConstraintOp::Le, ConstraintOp::Le],
    }
}

#[test]
fn test_request_vocabulary_is_accepted() {
    let payload = r#"{
        "problem_type": "maximization",
        "C": [3, 5],
        "LI": [[1, 0], [0, 2], [3, 2]],
        "LD": [4, 12, 18],
        "O": ["<=", "<=", "<="]
    }"#;

    let problem: LpProblem = serde_json::from_str(payload).unwrap();
    assert_eq!(problem, sample_problem());

    let minimization = r#"{
        "problem_type": "minimization",
        "C": [2, 3],
        "LI": [[1, -1], [3, 2]],
        "LD": [2, 12],
        "O": [">=", "<="]
    }"#;

    let problem: LpProblem = serde_json::from_str(minimization).unwrap();
    assert_eq!(problem.sense, Sense::Minimization);
    assert_eq!(problem.operators, vec![ConstraintOp::Ge, ConstraintOp::Le]);
}

#[test]
fn test_status_literals_are_exact() {
    assert_eq!(
        serde_json::to_value(SolveStatus::Optimal).unwrap(),
        json!("optimo")
    );
    assert_eq!(
        serde_json::to_value(SolveStatus::Infeasible).unwrap(),
        json!("infactible")
    );
    assert_eq!(
        serde_json::to_value(SolveStatus::Unbounded).unwrap(),
        json!("no acotado")
    );
    assert_eq!(
        serde_json::to_value(SolveStatus::IterationCap).unwrap(),
        json!("max_iterations_reached")
    );
}

#[test]
fn test_optimal_result_shape() {
    let result = two_phase_solve(&sample_problem()).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["status"], json!("optimo"));
    assert_eq!(value["solucion"]["valor_optimo"], json!(36.0));
    assert_eq!(value["solucion"]["variables"]["x1"], json!(2.0));
    assert_eq!(value["solucion"]["variables"]["x2"], json!(6.0));

    let tables = value["tablas"].as_array().unwrap();
    assert!(!tables.is_empty());

    let first = &tables[0];
    assert_eq!(first["titulo"], json!("Fase 0 - Iteración 1"));
    assert_eq!(first["headers"][0], json!("Base"));
    assert_eq!(
        first["headers"].as_array().unwrap().last().unwrap(),
        &json!("LD (RHS)")
    );

    // Las filas son arreglos planos: etiqueta seguida de números
    let row = first["filas"][0].as_array().unwrap();
    assert_eq!(row[0], json!("s1"));
    assert!(row[1..].iter().all(Value::is_number));

    let objective_row = first["fila_obj"].as_array().unwrap();
    assert_eq!(objective_row[0], json!("Z"));
    assert_eq!(objective_row[1], json!(-3.0));
}

#[test]
fn test_terminal_states_have_null_solution() {
    let infeasible = two_phase_solve(&LpProblem {
        sense: Sense::Maximization,
        objective: vec![2.0, 3.0],
        constraints: vec![vec![1.0, 1.0], vec![1.0, 1.0]],
        rhs: vec![2.0, 5.0],
        operators: vec![ConstraintOp::Le, ConstraintOp::Ge],
    })
    .unwrap();

    let value = serde_json::to_value(&infeasible).unwrap();
    assert_eq!(value["status"], json!("infactible"));
    assert!(value["solucion"].is_null());
}

#[test]
fn test_result_round_trip() {
    let result = two_phase_solve(&sample_problem()).unwrap();

    let text = serde_json::to_string(&result).unwrap();
    let parsed: SolveResult = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, result);
}

#[test]
fn test_two_phase_result_round_trip() {
    let result = two_phase_solve(&LpProblem {
        sense: Sense::Minimization,
        objective: vec![4.0, 1.0],
        constraints: vec![vec![3.0, 1.0], vec![4.0, 3.0], vec![1.0, 2.0]],
        rhs: vec![3.0, 6.0, 4.0],
        operators: vec![ConstraintOp::Eq, ConstraintOp::Ge, ConstraintOp::Le],
    })
    .unwrap();

    let text = serde_json::to_string(&result).unwrap();
    let parsed: SolveResult = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, result);
}
