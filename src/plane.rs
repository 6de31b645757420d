//! Projective Plane Module
//!
//! Builds the canonical incidence matrix of a finite projective plane of
//! order n (Paige & Wexler, 1953). Rows are lines, columns are points.
//!
//! Layout for size = n² + n + 1:
//! - line 0 holds points 0..=n
//! - lines 0..=n all pass through point 0
//! - line k (1 <= k <= n) holds the k-th run of n points after point n;
//!   dually point k lies on the k-th run of n lines after line n
//! - the remaining n² × n² corner is an n × n grid of n × n permutation
//!   blocks, the identity along the top block row and left block column

use rayon::prelude::*;

use crate::error::PlaneError;
use crate::kernels::{self, Kernel};
use crate::matrix::BinaryMatrix;
use crate::numeric;
use crate::permutation::Permutation;

/// Largest incidence matrix, in cells, the constructor will allocate (1 GiB)
pub const MAX_CELLS: usize = 1 << 30;

/// Number of points (= number of lines) in a plane of the given order.
/// Saturates at `usize::MAX`.
pub fn plane_size(order: usize) -> usize {
    checked_plane_size(order).unwrap_or(usize::MAX)
}

/// n² + n + 1, or `None` when it does not fit in a `usize`
pub fn checked_plane_size(order: usize) -> Option<usize> {
    order.checked_mul(order)?.checked_add(order)?.checked_add(1)
}

/// How the kernel blocks of a plane are generated
#[derive(Debug, Clone, Copy)]
enum KernelSource {
    /// Cyclic shifts, valid for prime orders
    Cyclic,
    /// Tabulated permutations for a supported prime power
    Table(&'static Kernel),
}

impl KernelSource {
    fn for_order(order: i64) -> Result<(usize, Self), PlaneError> {
        if numeric::is_prime(order) {
            return Ok((order as usize, KernelSource::Cyclic));
        }
        usize::try_from(order)
            .ok()
            .and_then(kernels::kernel_for)
            .map(|k| (k.order(), KernelSource::Table(k)))
            .ok_or_else(|| PlaneError::InvalidOrder {
                order,
                supported: kernels::supported_prime_powers(),
            })
    }

    /// Permutation matrix for kernel block (i, j)
    fn block(&self, order: usize, i: usize, j: usize) -> Result<BinaryMatrix, PlaneError> {
        if i == 0 || j == 0 {
            return Ok(BinaryMatrix::identity(order));
        }
        let permutation = match self {
            KernelSource::Cyclic => Permutation::cyclic(order, 1 + i * j)?,
            KernelSource::Table(kernel) => {
                let images = kernel
                    .permutation(i - 1, j - 1)
                    .ok_or(PlaneError::MissingKernel { order, row: i - 1, col: j - 1 })?;
                Permutation::new(images)?
            }
        };
        Ok(permutation.to_matrix())
    }
}

/// Whether kernel blocks are built on the calling thread or across rayon's pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Serial,
    Parallel,
}

impl Strategy {
    /// Parallel once `order` reaches `threshold`
    pub fn for_order(order: usize, threshold: usize) -> Self {
        if order >= threshold {
            Strategy::Parallel
        } else {
            Strategy::Serial
        }
    }
}

/// Compute the canonical incidence matrix of the plane of the given order.
///
/// `order` must be prime or one of the tabulated prime powers (4, 8);
/// anything else, including zero and negatives, is `InvalidOrder`. Valid
/// orders whose matrix would exceed [`MAX_CELLS`] are `TooLarge`.
///
/// ```
/// use dobble_planes::plane::compute_incidence_matrix;
///
/// let m = compute_incidence_matrix(2).unwrap();
/// assert_eq!(m.rows(), 7);
/// assert_eq!(m.support(0), vec![0, 1, 2]);
/// ```
pub fn compute_incidence_matrix(order: i64) -> Result<BinaryMatrix, PlaneError> {
    compute_incidence_matrix_with(order, Strategy::Serial)
}

/// [`compute_incidence_matrix`] with an explicit block strategy.
/// Both strategies produce identical matrices.
pub fn compute_incidence_matrix_with(
    order: i64,
    strategy: Strategy,
) -> Result<BinaryMatrix, PlaneError> {
    let (n, source) = KernelSource::for_order(order)?;
    let size = checked_plane_size(n)
        .filter(|&size| size.checked_mul(size).map_or(false, |cells| cells <= MAX_CELLS))
        .ok_or(PlaneError::TooLarge { order, limit: MAX_CELLS })?;
    log::debug!("building incidence matrix: order={}, size={}, strategy={:?}", n, size, strategy);

    let mut matrix = BinaryMatrix::zeros(size, size);

    // Line 0 and point 0
    matrix.fill_row(0, 0..n + 1);
    matrix.fill_column(0, 0..n + 1);

    // Lines 1..=n split the remaining n² points into runs of n, and dually
    let mut start = n + 1;
    for block in 1..=n {
        let stop = start + n;
        matrix.fill_row(block, start..stop);
        matrix.fill_column(block, start..stop);
        start = stop;
    }

    let cells: Vec<(usize, usize)> = (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect();
    let blocks: Vec<BinaryMatrix> = match strategy {
        Strategy::Serial => cells
            .iter()
            .map(|&(i, j)| source.block(n, i, j))
            .collect::<Result<Vec<_>, PlaneError>>()?,
        Strategy::Parallel => cells
            .par_iter()
            .map(|&(i, j)| source.block(n, i, j))
            .collect::<Result<Vec<_>, PlaneError>>()?,
    };

    for (&(i, j), block) in cells.iter().zip(&blocks) {
        matrix.place_block(n + 1 + i * n, n + 1 + j * n, block);
    }

    Ok(matrix)
}

/// A finite projective plane with line/point lookups
#[derive(Debug, Clone)]
pub struct ProjectivePlane {
    order: usize,
    incidence: BinaryMatrix,

    /// Sorted point ids on each line
    line_to_points: Vec<Vec<usize>>,

    /// Sorted line ids through each point
    point_to_lines: Vec<Vec<usize>>,
}

impl ProjectivePlane {
    /// Construct the plane of the given order
    pub fn new(order: i64) -> Result<Self, PlaneError> {
        Self::with_strategy(order, Strategy::Serial)
    }

    pub fn with_strategy(order: i64, strategy: Strategy) -> Result<Self, PlaneError> {
        let incidence = compute_incidence_matrix_with(order, strategy)?;
        let size = incidence.rows();
        let line_to_points = (0..size).map(|line| incidence.support(line)).collect();
        let point_to_lines = (0..size).map(|point| incidence.column_support(point)).collect();

        Ok(ProjectivePlane {
            order: order as usize,
            incidence,
            line_to_points,
            point_to_lines,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of points (= number of lines)
    pub fn size(&self) -> usize {
        self.incidence.rows()
    }

    pub fn incidence(&self) -> &BinaryMatrix {
        &self.incidence
    }

    /// Points on a line
    pub fn points_on_line(&self, line: usize) -> &[usize] {
        &self.line_to_points[line]
    }

    /// Lines through a point
    pub fn lines_through_point(&self, point: usize) -> &[usize] {
        &self.point_to_lines[point]
    }

    /// The unique point shared by two distinct lines
    pub fn intersection_point(&self, l1: usize, l2: usize) -> Option<usize> {
        if l1 == l2 {
            return None;
        }
        first_common(self.line_to_points.get(l1)?, self.line_to_points.get(l2)?)
    }

    /// The unique line through two distinct points
    pub fn line_through_points(&self, p1: usize, p2: usize) -> Option<usize> {
        if p1 == p2 {
            return None;
        }
        first_common(self.point_to_lines.get(p1)?, self.point_to_lines.get(p2)?)
    }
}

/// First value present in both sorted slices
fn first_common(a: &[usize], b: &[usize]) -> Option<usize> {
    let (mut x, mut y) = (0, 0);
    while x < a.len() && y < b.len() {
        match a[x].cmp(&b[y]) {
            std::cmp::Ordering::Less => x += 1,
            std::cmp::Ordering::Greater => y += 1,
            std::cmp::Ordering::Equal => return Some(a[x]),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_size() {
        assert_eq!(plane_size(2), 7);
        assert_eq!(plane_size(3), 13);
        assert_eq!(plane_size(7), 57);
    }

    #[test]
    fn test_fano_plane() {
        let m = compute_incidence_matrix(2).unwrap();
        assert_eq!(
            m.to_rows(),
            vec![
                vec![1, 1, 1, 0, 0, 0, 0],
                vec![1, 0, 0, 1, 1, 0, 0],
                vec![1, 0, 0, 0, 0, 1, 1],
                vec![0, 1, 0, 1, 0, 1, 0],
                vec![0, 1, 0, 0, 1, 0, 1],
                vec![0, 0, 1, 1, 0, 0, 1],
                vec![0, 0, 1, 0, 1, 1, 0],
            ]
        );
    }

    #[test]
    fn test_rejects_unsupported_orders() {
        for order in [0, 1, -7, 6, 9, 14] {
            assert!(
                matches!(compute_incidence_matrix(order), Err(PlaneError::InvalidOrder { .. })),
                "accepted order {}",
                order
            );
        }
    }

    #[test]
    fn test_checked_plane_size() {
        assert_eq!(checked_plane_size(7), Some(57));
        assert_eq!(checked_plane_size(usize::MAX), None);
        assert_eq!(plane_size(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_large_primes_are_too_large() {
        // 100_003² overflows a 64-bit cell count; 10_007 fits but exceeds the limit
        for order in [100_003, 10_007] {
            assert_eq!(
                compute_incidence_matrix(order),
                Err(PlaneError::TooLarge { order, limit: MAX_CELLS })
            );
        }
        // order 181 is the first prime past the limit
        assert!(compute_incidence_matrix(181).is_err());
        assert!(ProjectivePlane::new(100_003).is_err());
    }

    #[test]
    fn test_invalid_order_lists_prime_powers() {
        match compute_incidence_matrix(6) {
            Err(PlaneError::InvalidOrder { order, supported }) => {
                assert_eq!(order, 6);
                assert_eq!(supported, vec![4, 8]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_border_blocks_are_identity() {
        let n = 5;
        let m = compute_incidence_matrix(n as i64).unwrap();
        for i in 0..n {
            // block (i, 0) and (0, i)
            for r in 0..n {
                assert_eq!(m.get(n + 1 + i * n + r, n + 1 + r), 1);
                assert_eq!(m.get(n + 1 + r, n + 1 + i * n + r), 1);
            }
        }
    }

    #[test]
    fn test_strategies_agree() {
        for order in [3, 4, 7, 8, 11] {
            assert_eq!(
                compute_incidence_matrix_with(order, Strategy::Serial).unwrap(),
                compute_incidence_matrix_with(order, Strategy::Parallel).unwrap()
            );
        }
    }

    #[test]
    fn test_strategy_threshold() {
        assert_eq!(Strategy::for_order(7, 16), Strategy::Serial);
        assert_eq!(Strategy::for_order(17, 16), Strategy::Parallel);
    }

    #[test]
    fn test_order_7_plane() {
        let plane = ProjectivePlane::new(7).unwrap();
        assert_eq!(plane.size(), 57);
        for line in 0..57 {
            assert_eq!(plane.points_on_line(line).len(), 8);
            assert_eq!(plane.lines_through_point(line).len(), 8);
        }
    }

    #[test]
    fn test_intersections() {
        let plane = ProjectivePlane::new(3).unwrap();
        let n = plane.size();
        for l1 in 0..n {
            for l2 in 0..n {
                match plane.intersection_point(l1, l2) {
                    None => assert_eq!(l1, l2),
                    Some(p) => {
                        assert!(plane.points_on_line(l1).contains(&p));
                        assert!(plane.points_on_line(l2).contains(&p));
                    }
                }
            }
        }
        assert_eq!(plane.intersection_point(0, 1), Some(0));
        assert_eq!(plane.intersection_point(0, n), None);
    }

    #[test]
    fn test_line_through_points() {
        let plane = ProjectivePlane::new(4).unwrap();
        let n = plane.size();
        for p1 in 0..n {
            for p2 in (p1 + 1)..n {
                let line = plane.line_through_points(p1, p2).unwrap();
                assert!(plane.lines_through_point(p1).contains(&line));
                assert!(plane.lines_through_point(p2).contains(&line));
            }
        }
        assert_eq!(plane.line_through_points(5, 5), None);
    }

    #[test]
    fn test_first_common() {
        assert_eq!(first_common(&[1, 4, 9], &[2, 4, 8]), Some(4));
        assert_eq!(first_common(&[1, 3], &[2, 4]), None);
    }
}
