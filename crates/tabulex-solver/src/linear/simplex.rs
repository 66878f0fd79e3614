use super::snapshot::TableauSnapshot;
use super::tableau::Tableau;

/// Límite de iteraciones para cortar ciclos por degeneración
pub const MAX_ITERATIONS: usize = 50;

/// Fase del algoritmo, usada en los títulos de las instantáneas
///
/// `Single` es la pasada única de los problemas sin artificiales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Single,
    One,
    Two,
}

impl Phase {
    pub fn label(self) -> u8 {
        match self {
            Phase::Single => 0,
            Phase::One => 1,
            Phase::Two => 2,
        }
    }
}

/// Resultado del bucle de pivoteo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Optimal,
    Unbounded,
    IterationCap,
}

/// Ejecutar el bucle de iteraciones del Simplex sobre un tableau dado
///
/// Cada iteración agrega una instantánea al historial antes de decidir:
/// la última instantánea de una corrida óptima es el tableau final. El
/// desplazamiento `iter_offset` mantiene la numeración continua entre
/// fases.
pub fn run_iterations(
    tableau: &mut Tableau,
    phase: Phase,
    iter_offset: usize,
    history: &mut Vec<TableauSnapshot>,
) -> LoopStatus {
    for iteration in 1..=MAX_ITERATIONS {
        let title = format!(
            "Fase {} - Iteración {}",
            phase.label(),
            iteration + iter_offset
        );
        history.push(TableauSnapshot::capture(tableau, title));

        // 1. Comprobar optimalidad
        if tableau.is_optimal() {
            return LoopStatus::Optimal;
        }

        // 2. Variable entrante: costo reducido más negativo
        let entering = tableau.find_entering_variable();

        // 3. Variable saliente por razón mínima; sin candidata => no acotado
        let leaving = match tableau.find_leaving_variable(entering) {
            Some(row) => row,
            None => return LoopStatus::Unbounded,
        };

        // 4. Pivoteo de Gauss-Jordan
        tableau.pivot(entering, leaving);
    }

    LoopStatus::IterationCap
}
