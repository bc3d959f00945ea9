//! Pairwise earnings comparison between selected careers.

use serde::{Deserialize, Serialize};

use crate::career::CareerSelection;

/// One cell of the comparison matrix.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ratio", rename_all = "snake_case")]
pub enum ComparisonCell {
    /// A career compared against itself.
    Diagonal,
    /// Row earnings divided by column earnings (column floored at 1).
    Ratio(f64),
}

impl ComparisonCell {
    pub fn ratio(self) -> Option<f64> {
        match self {
            ComparisonCell::Diagonal => None,
            ComparisonCell::Ratio(r) => Some(r),
        }
    }
}

impl core::fmt::Display for ComparisonCell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ComparisonCell::Diagonal => f.write_str("-"),
            ComparisonCell::Ratio(r) => write!(f, "{r:.2}x"),
        }
    }
}

/// Square matrix of relative earning potential, rows and columns in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMatrix {
    pub careers: Vec<String>,
    pub cells: Vec<Vec<ComparisonCell>>,
}

impl ComparisonMatrix {
    pub fn get(&self, row: &str, col: &str) -> Option<ComparisonCell> {
        let i = self.careers.iter().position(|c| c == row)?;
        let j = self.careers.iter().position(|c| c == col)?;
        Some(self.cells[i][j])
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }
}

/// Build the comparison matrix. The denominator is `max(1, earnings)` so a zero
/// earning never divides by zero.
pub fn pairwise_comparison(selection: &CareerSelection) -> ComparisonMatrix {
    let rows = selection.as_slice();
    let careers = rows.iter().map(|c| c.name.clone()).collect();

    let cells = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            rows.iter()
                .enumerate()
                .map(|(j, col)| {
                    if i == j {
                        ComparisonCell::Diagonal
                    } else {
                        let denom = col.base_earning.amount().max(1.0);
                        ComparisonCell::Ratio(row.base_earning.amount() / denom)
                    }
                })
                .collect()
        })
        .collect();

    ComparisonMatrix { careers, cells }
}
