use super::variable::Variable;

/// Tolerancia uniforme para comparaciones de punto flotante
pub const TOL: f64 = 1e-9;

/// Tableau del método Simplex
///
/// ```text
///        x₁  x₂  s₁  s₂  s₃ | LD
/// s₁  [  1   0   1   0   0 |  4 ]
/// s₂  [  0   2   0   1   0 | 12 ]
/// s₃  [  3   2   0   0   1 | 18 ]
///     [---------------------+----]
/// z   [ -3  -5   0   0   0 |  0 ]
/// ```
///
/// La última fila es la fila objetivo (costos reducidos más el valor
/// actual de z, con el signo acarreado); la última columna es el LD.
#[derive(Debug, Clone)]
pub struct Tableau {
    /// Datos del tableau ((m+1) filas × (k+1) columnas)
    pub data: Vec<Vec<f64>>,

    /// Una etiqueta por columna de valores
    pub var_names: Vec<Variable>,

    /// Variable básica actual por fila de restricción
    pub basis: Vec<Variable>,
}

impl Tableau {
    /// Número de filas de restricción
    pub fn num_constraints(&self) -> usize {
        self.data.len() - 1
    }

    /// Verificar si la solución actual es óptima
    ///
    /// Óptimo cuando ningún costo reducido es menor que −TOL.
    pub fn is_optimal(&self) -> bool {
        let m = self.num_constraints();
        self.data[m][..self.var_names.len()]
            .iter()
            .all(|&coeff| coeff >= -TOL)
    }

    /// Columna de la variable entrante: el costo reducido más negativo
    ///
    /// Empates se resuelven por el índice de columna más bajo. Se asume
    /// que el llamador ya descartó la optimalidad.
    pub fn find_entering_variable(&self) -> usize {
        let objective_row = &self.data[self.num_constraints()];
        let mut entering = 0;
        for j in 1..self.var_names.len() {
            if objective_row[j] < objective_row[entering] {
                entering = j;
            }
        }
        entering
    }

    /// Fila de la variable saliente (test de razón mínima)
    ///
    /// Solo participan filas con coeficiente mayor que TOL en la columna
    /// entrante; empates se resuelven por el índice de fila más bajo.
    /// `None` significa problema no acotado.
    pub fn find_leaving_variable(&self, entering: usize) -> Option<usize> {
        let m = self.num_constraints();
        let rhs_col = self.var_names.len();

        let mut min_ratio = f64::INFINITY;
        let mut leaving = None;

        for i in 0..m {
            let coeff = self.data[i][entering];
            if coeff > TOL {
                let ratio = self.data[i][rhs_col] / coeff;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    leaving = Some(i);
                }
            }
        }

        leaving
    }

    /// Pivoteo de Gauss-Jordan sobre (fila saliente, columna entrante)
    pub fn pivot(&mut self, entering: usize, leaving: usize) {
        let total_cols = self.var_names.len() + 1;

        self.basis[leaving] = self.var_names[entering];

        // Normalizar la fila pivote
        let pivot_element = self.data[leaving][entering];
        for j in 0..total_cols {
            self.data[leaving][j] /= pivot_element;
        }

        // Anular la columna entrante en las demás filas, incluida la fila z
        for i in 0..self.data.len() {
            if i != leaving {
                let factor = self.data[i][entering];
                for j in 0..total_cols {
                    self.data[i][j] -= factor * self.data[leaving][j];
                }
            }
        }
    }

    /// Valor objetivo actual (esquina inferior derecha)
    pub fn objective_value(&self) -> f64 {
        let m = self.num_constraints();
        self.data[m][self.var_names.len()]
    }

    /// Índice de columna de una variable, si sigue presente
    pub fn column_of(&self, var: Variable) -> Option<usize> {
        self.var_names.iter().position(|&v| v == var)
    }
}
