use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::snapshot::TableauSnapshot;

/// Estado terminal de una resolución
///
/// Los literales en serie son parte del contrato externo y deben
/// preservarse tal cual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    #[serde(rename = "optimo")]
    Optimal,
    #[serde(rename = "infactible")]
    Infeasible,
    #[serde(rename = "no acotado")]
    Unbounded,
    #[serde(rename = "max_iterations_reached")]
    IterationCap,
}

impl SolveStatus {
    /// Literal del contrato externo
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "optimo",
            SolveStatus::Infeasible => "infactible",
            SolveStatus::Unbounded => "no acotado",
            SolveStatus::IterationCap => "max_iterations_reached",
        }
    }
}

/// Solución óptima extraída del tableau final
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Valor de z, con el signo revertido para minimización
    #[serde(rename = "valor_optimo")]
    pub objective_value: f64,

    /// Valor por etiqueta: decisión y holguras/excesos, cero si no básica
    pub variables: BTreeMap<String, f64>,
}

/// Resultado completo: estado, historial de tablas y solución
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub status: SolveStatus,

    /// Instantáneas en orden temporal estricto, ambas fases incluidas
    #[serde(rename = "tablas")]
    pub tableaux: Vec<TableauSnapshot>,

    /// Presente solo cuando `status` es `optimo`
    #[serde(rename = "solucion")]
    pub solution: Option<Solution>,
}
