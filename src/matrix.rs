//! Binary Matrix Module
//!
//! Dense 0/1 matrix storage shared by the permutation builder and the
//! incidence matrix constructor.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Row-major 0/1 matrix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl BinaryMatrix {
    /// All-zero matrix of the given shape
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BinaryMatrix {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// n×n identity
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.set(i, i);
        }
        m
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Cell value (0 or 1). Panics when out of bounds, like slice indexing.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col]
    }

    /// Set a cell to 1
    pub fn set(&mut self, row: usize, col: usize) {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) out of bounds");
        self.cells[row * self.cols + col] = 1;
    }

    /// Set a run of cells in one row to 1
    pub fn fill_row(&mut self, row: usize, cols: Range<usize>) {
        for col in cols {
            self.set(row, col);
        }
    }

    /// Set a run of cells in one column to 1
    pub fn fill_column(&mut self, col: usize, rows: Range<usize>) {
        for row in rows {
            self.set(row, col);
        }
    }

    /// Copy `block` into this matrix with its top-left corner at (row, col)
    pub fn place_block(&mut self, row: usize, col: usize, block: &BinaryMatrix) {
        assert!(
            row + block.rows <= self.rows && col + block.cols <= self.cols,
            "block {}x{} does not fit at ({row}, {col})",
            block.rows,
            block.cols
        );
        for r in 0..block.rows {
            let dst = (row + r) * self.cols + col;
            self.cells[dst..dst + block.cols].copy_from_slice(block.row(r));
        }
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Nested `Vec` copy, convenient for comparisons and JSON output
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Column indices holding a 1 in the given row
    pub fn support(&self, row: usize) -> Vec<usize> {
        self.row(row)
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 1)
            .map(|(c, _)| c)
            .collect()
    }

    /// Row indices holding a 1 in the given column
    pub fn column_support(&self, col: usize) -> Vec<usize> {
        (0..self.rows).filter(|&r| self.get(r, col) == 1).collect()
    }

    pub fn row_weight(&self, row: usize) -> usize {
        self.row(row).iter().filter(|&&v| v == 1).count()
    }

    pub fn column_weight(&self, col: usize) -> usize {
        (0..self.rows).filter(|&r| self.get(r, col) == 1).count()
    }

    /// Total number of 1 cells
    pub fn count_ones(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 1).count()
    }

    /// M·Mᵗ as a row-major `rows × rows` vector.
    ///
    /// Entry (a, b) counts the columns where rows a and b both hold a 1.
    /// Accumulated per column over the pairs of rows in that column's
    /// support, so sparse matrices cost far less than a dense product.
    pub fn gram(&self) -> Vec<u32> {
        let n = self.rows;
        let mut product = vec![0u32; n * n];
        for col in 0..self.cols {
            let support = self.column_support(col);
            for &a in &support {
                for &b in &support {
                    product[a * n + b] += 1;
                }
            }
        }
        product
    }
}

impl fmt::Display for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let cells: Vec<String> = self.row(r).iter().map(|v| v.to_string()).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
