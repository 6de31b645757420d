//! Prime-Power Kernel Tables
//!
//! Precomputed permutation grids for the prime-power orders whose planes
//! cannot come from the cyclic formula. Cell `[i - 1][j - 1]` is the
//! permutation for kernel block (i, j), i, j >= 1; blocks in row or column 0
//! are the identity and are not stored.
//!
//! The entries come from translation by products in GF(4) = GF(2)[x]/(x²+x+1)
//! and GF(8) = GF(2)[x]/(x³+x+1): with field elements numbered by their bit
//! pattern, cell (i, j) maps point k+1 to (k ⊕ i·j)+1.
//!
//! These are not the tables published with the Paige & Wexler construction.
//! They produce a valid plane of the same order, isomorphic to the published
//! one, but the block entries (and so individual matrix cells) differ. Compare
//! planes up to relabelling, or against M·Mᵗ = n·I + J, not cell by cell.
//!
//! Only these two orders are supported. Other prime powers (9, 16, 25, ...)
//! are rejected rather than approximated.

/// Kernel permutations for order 4
const KERNEL_ORDER_4: [[[u8; 4]; 3]; 3] = [
    [[2, 1, 4, 3], [3, 4, 1, 2], [4, 3, 2, 1]],
    [[3, 4, 1, 2], [4, 3, 2, 1], [2, 1, 4, 3]],
    [[4, 3, 2, 1], [2, 1, 4, 3], [3, 4, 1, 2]],
];

/// Kernel permutations for order 8
#[rustfmt::skip]
const KERNEL_ORDER_8: [[[u8; 8]; 7]; 7] = [
    [[2, 1, 4, 3, 6, 5, 8, 7], [3, 4, 1, 2, 7, 8, 5, 6], [4, 3, 2, 1, 8, 7, 6, 5], [5, 6, 7, 8, 1, 2, 3, 4],
     [6, 5, 8, 7, 2, 1, 4, 3], [7, 8, 5, 6, 3, 4, 1, 2], [8, 7, 6, 5, 4, 3, 2, 1]],
    [[3, 4, 1, 2, 7, 8, 5, 6], [5, 6, 7, 8, 1, 2, 3, 4], [7, 8, 5, 6, 3, 4, 1, 2], [4, 3, 2, 1, 8, 7, 6, 5],
     [2, 1, 4, 3, 6, 5, 8, 7], [8, 7, 6, 5, 4, 3, 2, 1], [6, 5, 8, 7, 2, 1, 4, 3]],
    [[4, 3, 2, 1, 8, 7, 6, 5], [7, 8, 5, 6, 3, 4, 1, 2], [6, 5, 8, 7, 2, 1, 4, 3], [8, 7, 6, 5, 4, 3, 2, 1],
     [5, 6, 7, 8, 1, 2, 3, 4], [2, 1, 4, 3, 6, 5, 8, 7], [3, 4, 1, 2, 7, 8, 5, 6]],
    [[5, 6, 7, 8, 1, 2, 3, 4], [4, 3, 2, 1, 8, 7, 6, 5], [8, 7, 6, 5, 4, 3, 2, 1], [7, 8, 5, 6, 3, 4, 1, 2],
     [3, 4, 1, 2, 7, 8, 5, 6], [6, 5, 8, 7, 2, 1, 4, 3], [2, 1, 4, 3, 6, 5, 8, 7]],
    [[6, 5, 8, 7, 2, 1, 4, 3], [2, 1, 4, 3, 6, 5, 8, 7], [5, 6, 7, 8, 1, 2, 3, 4], [3, 4, 1, 2, 7, 8, 5, 6],
     [8, 7, 6, 5, 4, 3, 2, 1], [4, 3, 2, 1, 8, 7, 6, 5], [7, 8, 5, 6, 3, 4, 1, 2]],
    [[7, 8, 5, 6, 3, 4, 1, 2], [8, 7, 6, 5, 4, 3, 2, 1], [2, 1, 4, 3, 6, 5, 8, 7], [6, 5, 8, 7, 2, 1, 4, 3],
     [4, 3, 2, 1, 8, 7, 6, 5], [3, 4, 1, 2, 7, 8, 5, 6], [5, 6, 7, 8, 1, 2, 3, 4]],
    [[8, 7, 6, 5, 4, 3, 2, 1], [6, 5, 8, 7, 2, 1, 4, 3], [3, 4, 1, 2, 7, 8, 5, 6], [2, 1, 4, 3, 6, 5, 8, 7],
     [7, 8, 5, 6, 3, 4, 1, 2], [5, 6, 7, 8, 1, 2, 3, 4], [4, 3, 2, 1, 8, 7, 6, 5]],
];

#[derive(Debug, Clone, Copy)]
enum Grid {
    Order4(&'static [[[u8; 4]; 3]; 3]),
    Order8(&'static [[[u8; 8]; 7]; 7]),
}

/// Permutation grid for one supported prime-power order
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    order: usize,
    grid: Grid,
}

impl Kernel {
    pub fn order(&self) -> usize {
        self.order
    }

    /// Permutation for kernel block (row + 1, col + 1), as 1-indexed images
    pub fn permutation(&self, row: usize, col: usize) -> Option<&'static [u8]> {
        match self.grid {
            Grid::Order4(g) => g.get(row)?.get(col).map(|p| &p[..]),
            Grid::Order8(g) => g.get(row)?.get(col).map(|p| &p[..]),
        }
    }
}

/// All tabulated orders, ascending
static KERNELS: [Kernel; 2] = [
    Kernel { order: 4, grid: Grid::Order4(&KERNEL_ORDER_4) },
    Kernel { order: 8, grid: Grid::Order8(&KERNEL_ORDER_8) },
];

/// Kernel table for `order`, if one is tabulated
pub fn kernel_for(order: usize) -> Option<&'static Kernel> {
    KERNELS.iter().find(|k| k.order == order)
}

/// Orders with a kernel table, ascending
pub fn supported_prime_powers() -> Vec<usize> {
    KERNELS.iter().map(|k| k.order).collect()
}
