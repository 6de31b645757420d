//! Design Verification
//!
//! Checks a square 0/1 matrix against the incidence conditions of a
//! projective plane of order n. By Bruck & Ryser (1949) the defining
//! identity is M·Mᵗ = n·I + J; the weight and intersection checks are
//! reported separately so a failure says which property broke.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::PlaneError;
use crate::kernels;
use crate::matrix::BinaryMatrix;
use crate::numeric::is_prime;
use crate::plane::{compute_incidence_matrix, plane_size};

/// Outcome of checking one matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesignReport {
    pub order: usize,
    pub size: usize,
    /// Every row has exactly n + 1 ones
    pub row_weights_ok: bool,
    /// Every column has exactly n + 1 ones
    pub column_weights_ok: bool,
    /// Every pair of distinct rows shares exactly one column
    pub pairwise_intersections_ok: bool,
    /// M·Mᵗ = n·I + J
    pub bruck_ryser_ok: bool,
}

impl DesignReport {
    pub fn is_valid(&self) -> bool {
        self.row_weights_ok
            && self.column_weights_ok
            && self.pairwise_intersections_ok
            && self.bruck_ryser_ok
    }
}

/// Check `matrix` as the incidence matrix of a plane of order `order`
pub fn check_design(matrix: &BinaryMatrix, order: usize) -> DesignReport {
    let size = plane_size(order);
    let shaped = matrix.is_square() && matrix.rows() == size;
    if !shaped {
        return DesignReport {
            order,
            size,
            row_weights_ok: false,
            column_weights_ok: false,
            pairwise_intersections_ok: false,
            bruck_ryser_ok: false,
        };
    }

    let weight = order + 1;
    let gram = matrix.gram();
    let pairwise_intersections_ok = (0..size)
        .all(|a| (0..size).all(|b| a == b || gram[a * size + b] == 1));

    DesignReport {
        order,
        size,
        row_weights_ok: (0..size).all(|r| matrix.row_weight(r) == weight),
        column_weights_ok: (0..size).all(|c| matrix.column_weight(c) == weight),
        pairwise_intersections_ok,
        bruck_ryser_ok: gram_is_design(&gram, size, order),
    }
}

/// True when M·Mᵗ = n·I + J exactly
pub fn satisfies_bruck_ryser(matrix: &BinaryMatrix, order: usize) -> bool {
    let size = plane_size(order);
    matrix.is_square()
        && matrix.rows() == size
        && gram_is_design(&matrix.gram(), size, order)
}

fn gram_is_design(gram: &[u32], size: usize, order: usize) -> bool {
    gram.iter().enumerate().all(|(idx, &v)| {
        let expected = if idx / size == idx % size { order + 1 } else { 1 };
        v as usize == expected
    })
}

/// Primes up to `max_order`, then every tabulated prime power up to it
pub fn testable_orders(max_order: usize) -> Vec<usize> {
    let mut orders: Vec<usize> = (2..=max_order).filter(|&n| is_prime(n as i64)).collect();
    orders.extend(kernels::supported_prime_powers().into_iter().filter(|&n| n <= max_order));
    orders
}

/// Build and check each order in parallel. Reports come back in input order.
pub fn sweep(orders: &[usize]) -> Result<Vec<DesignReport>, PlaneError> {
    log::info!("verifying {} orders", orders.len());
    orders
        .par_iter()
        .map(|&order| -> Result<DesignReport, PlaneError> {
            let matrix = compute_incidence_matrix(order as i64)?;
            let report = check_design(&matrix, order);
            log::debug!("order {}: valid={}", order, report.is_valid());
            Ok(report)
        })
        .collect()
}
