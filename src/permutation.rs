//! Permutation Matrix Builder
//!
//! Permutations are stored 1-indexed: entry `i` is the image of point `i + 1`.
//! The matrix of a permutation has its single 1 in row `i` at column
//! `images[i] - 1`.

use crate::error::{PermutationDefect, PlaneError};
use crate::matrix::BinaryMatrix;

/// A validated bijection on 1..=n
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    images: Vec<usize>,
}

impl Permutation {
    /// Validate a sequence as a permutation of 1..=len.
    ///
    /// Fails on an empty sequence, on any value outside 1..=len, and on
    /// repeated values.
    pub fn new<T>(values: &[T]) -> Result<Self, PlaneError>
    where
        T: Copy + Into<i64>,
    {
        let len = values.len();
        if len == 0 {
            return Err(PermutationDefect::Empty.into());
        }

        let mut seen = vec![false; len];
        let mut images = Vec::with_capacity(len);
        for &v in values {
            let value: i64 = v.into();
            if value < 1 || value as u64 > len as u64 {
                return Err(PermutationDefect::OutOfRange { value, len }.into());
            }
            let slot = &mut seen[value as usize - 1];
            if *slot {
                return Err(PermutationDefect::Duplicate { value }.into());
            }
            *slot = true;
            images.push(value as usize);
        }

        Ok(Permutation { images })
    }

    /// The identity on 1..=n
    pub fn identity(n: usize) -> Self {
        Permutation {
            images: (1..=n).collect(),
        }
    }

    /// Cyclic shift of 1..=n starting at `leading_entry`:
    /// `leading_entry, leading_entry + 1, ..., n, 1, ...`
    ///
    /// `leading_entry` is taken mod n, with a residue of 0 standing for n.
    pub fn cyclic(n: usize, leading_entry: usize) -> Result<Self, PlaneError> {
        let images: Vec<i64> = (0..n)
            .map(|k| match (k + leading_entry) % n {
                0 => n as i64,
                r => r as i64,
            })
            .collect();
        Self::new(&images)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[usize] {
        &self.images
    }

    pub fn to_matrix(&self) -> BinaryMatrix {
        let n = self.images.len();
        let mut m = BinaryMatrix::zeros(n, n);
        for (row, &image) in self.images.iter().enumerate() {
            m.set(row, image - 1);
        }
        m
    }
}

/// Build the n×n permutation matrix of a 1-indexed permutation
pub fn build_permutation_matrix(permutation: &[i64]) -> Result<BinaryMatrix, PlaneError> {
    Ok(Permutation::new(permutation)?.to_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_permutation_matrix() {
        let m = build_permutation_matrix(&[2, 4, 1, 3]).unwrap();
        assert_eq!(
            m.to_rows(),
            vec![
                vec![0, 1, 0, 0],
                vec![0, 0, 0, 1],
                vec![1, 0, 0, 0],
                vec![0, 0, 1, 0],
            ]
        );
    }

    #[test]
    fn test_rejects_malformed_sequences() {
        let bad: [&[i64]; 6] = [
            &[1, 1, 3, 4, 5],
            &[1, 2, 2, 3, 4],
            &[4, 1, 2],
            &[0, 1, 2, 3, 4],
            &[2, 1, 4],
            &[],
        ];
        for seq in bad {
            assert!(
                matches!(build_permutation_matrix(seq), Err(PlaneError::InvalidPermutation(_))),
                "accepted {:?}",
                seq
            );
        }
    }

    #[test]
    fn test_defect_details() {
        assert_eq!(
            Permutation::new::<i64>(&[]),
            Err(PlaneError::InvalidPermutation(PermutationDefect::Empty))
        );
        assert_eq!(
            Permutation::new(&[1i64, 1, 3]),
            Err(PlaneError::InvalidPermutation(PermutationDefect::Duplicate { value: 1 }))
        );
        assert_eq!(
            Permutation::new(&[4i64, 1, 2]),
            Err(PlaneError::InvalidPermutation(PermutationDefect::OutOfRange { value: 4, len: 3 }))
        );
    }

    #[test]
    fn test_accepts_table_bytes() {
        let p = Permutation::new(&[3u8, 1, 2]).unwrap();
        assert_eq!(p.images(), &[3, 1, 2]);
    }

    #[test]
    fn test_cyclic() {
        assert_eq!(Permutation::cyclic(5, 3).unwrap().images(), &[3, 4, 5, 1, 2]);
        assert_eq!(Permutation::cyclic(5, 5).unwrap().images(), &[5, 1, 2, 3, 4]);
        assert_eq!(Permutation::cyclic(5, 1).unwrap(), Permutation::identity(5));
        assert_eq!(Permutation::cyclic(2, 2).unwrap().images(), &[2, 1]);
    }

    #[test]
    fn test_identity_matrix() {
        assert_eq!(Permutation::identity(4).to_matrix(), BinaryMatrix::identity(4));
    }
}
