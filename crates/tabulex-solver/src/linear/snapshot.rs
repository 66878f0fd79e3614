use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::tableau::Tableau;

/// Redondeo de presentación a seis decimales
///
/// Solo se aplica a instantáneas y a la solución final; el tableau vivo
/// nunca se redondea.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Fila de una instantánea: etiqueta de base seguida de los valores
///
/// En JSON se representa como un arreglo plano: `["s1", 1.0, 0.0, ..., 4.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub label: String,
    pub values: Vec<f64>,
}

impl Serialize for SnapshotRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(&self.label)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for SnapshotRow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = SnapshotRow;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence with a label followed by numbers")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<SnapshotRow, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let label: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut values = Vec::new();
                while let Some(value) = seq.next_element::<f64>()? {
                    values.push(value);
                }
                Ok(SnapshotRow { label, values })
            }
        }

        deserializer.deserialize_seq(RowVisitor)
    }
}

/// Instantánea inmutable de un tableau, redondeada para presentación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableauSnapshot {
    /// Fase e iteración, p. ej. `"Fase 1 - Iteración 2"`
    #[serde(rename = "titulo")]
    pub title: String,

    /// `Base`, una etiqueta por columna, `LD (RHS)`
    pub headers: Vec<String>,

    /// Una fila por restricción
    #[serde(rename = "filas")]
    pub rows: Vec<SnapshotRow>,

    /// Fila objetivo, etiquetada `Z`
    #[serde(rename = "fila_obj")]
    pub objective_row: SnapshotRow,
}

impl TableauSnapshot {
    /// Capturar el estado actual de un tableau sin modificarlo
    pub fn capture(tableau: &Tableau, title: String) -> Self {
        let mut headers = Vec::with_capacity(tableau.var_names.len() + 2);
        headers.push("Base".to_string());
        headers.extend(tableau.var_names.iter().map(|v| v.to_string()));
        headers.push("LD (RHS)".to_string());

        let m = tableau.num_constraints();
        let rows = (0..m)
            .map(|i| SnapshotRow {
                label: tableau.basis[i].to_string(),
                values: tableau.data[i].iter().map(|&v| round6(v)).collect(),
            })
            .collect();

        let objective_row = SnapshotRow {
            label: "Z".to_string(),
            values: tableau.data[m].iter().map(|&v| round6(v)).collect(),
        };

        TableauSnapshot {
            title,
            headers,
            rows,
            objective_row,
        }
    }
}
