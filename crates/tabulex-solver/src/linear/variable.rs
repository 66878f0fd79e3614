use std::fmt;

/// Variable de un tableau Simplex
///
/// Cada variante lleva el índice 1-based de la restricción que la originó
/// (o la posición de la variable de decisión). La etiqueta textual se usa
/// solo en la frontera de E/S: `x1`, `s2`, `e3`, `a4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// Variable de decisión (`xᵢ`)
    Decision(usize),
    /// Variable de holgura (`sᵢ`)
    Slack(usize),
    /// Variable de exceso (`eᵢ`)
    Surplus(usize),
    /// Variable artificial (`aᵢ`)
    Artificial(usize),
}

impl Variable {
    pub fn is_decision(self) -> bool {
        matches!(self, Variable::Decision(_))
    }

    pub fn is_artificial(self) -> bool {
        matches!(self, Variable::Artificial(_))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Decision(i) => write!(f, "x{}", i),
            Variable::Slack(i) => write!(f, "s{}", i),
            Variable::Surplus(i) => write!(f, "e{}", i),
            Variable::Artificial(i) => write!(f, "a{}", i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Variable::Decision(1).to_string(), "x1");
        assert_eq!(Variable::Slack(2).to_string(), "s2");
        assert_eq!(Variable::Surplus(3).to_string(), "e3");
        assert_eq!(Variable::Artificial(4).to_string(), "a4");
    }

    #[test]
    fn test_predicates() {
        assert!(Variable::Decision(1).is_decision());
        assert!(Variable::Artificial(1).is_artificial());
        assert!(!Variable::Slack(1).is_artificial());
        assert!(!Variable::Surplus(1).is_decision());
    }
}
