//! Finite Projective Planes for Matching-Card Decks
//!
//! Builds the incidence matrix of a finite projective plane of order n: a
//! square 0/1 matrix of size n² + n + 1 in which every row and column has
//! n + 1 ones and any two rows share exactly one column. Read as a deck,
//! rows are cards, columns are symbols, and any two cards have exactly one
//! symbol in common.
//!
//! # Overview
//!
//! - [`numeric`]: integer / prime / prime-power classification
//! - [`permutation`]: permutation matrices from 1-indexed permutations
//! - [`kernels`]: tabulated permutation grids for orders 4 and 8
//! - [`plane`]: the incidence matrix constructor and plane queries
//! - [`verify`]: design checks (M·Mᵗ = n·I + J)
//! - [`deck`]: card and symbol tables built from a plane
//!
//! Supported orders are the primes, via the cyclic construction of Paige &
//! Wexler (1953), plus the prime powers 4 and 8 from the kernel tables.
//! Every other order is rejected.
//!
//! # Quick Start
//!
//! ```rust
//! use dobble_planes::prelude::*;
//!
//! let matrix = compute_incidence_matrix(7).unwrap();
//! assert_eq!(matrix.rows(), 57);
//! assert!(satisfies_bruck_ryser(&matrix, 7));
//!
//! let deck = build_deck(&DeckConfig::classic()).unwrap();
//! assert_eq!(deck.num_cards(), 57);
//! assert_eq!(deck.cards[0].symbols.len(), 8);
//! ```

pub mod config;
pub mod deck;
pub mod error;
pub mod kernels;
pub mod matrix;
pub mod numeric;
pub mod permutation;
pub mod plane;
pub mod verify;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::DeckConfig;
    pub use crate::deck::{build_deck, Card, DeckLayout, SymbolLabel};
    pub use crate::error::{ConfigError, DeckError, PermutationDefect, PlaneError};
    pub use crate::matrix::BinaryMatrix;
    pub use crate::numeric::{is_integer, is_prime, is_prime_power, Numeric};
    pub use crate::permutation::{build_permutation_matrix, Permutation};
    pub use crate::plane::{
        compute_incidence_matrix, compute_incidence_matrix_with, plane_size, ProjectivePlane,
        Strategy,
    };
    pub use crate::verify::{check_design, satisfies_bruck_ryser, sweep, DesignReport};
}

pub use permutation::build_permutation_matrix;
pub use plane::compute_incidence_matrix;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Plane order needed for a deck with `symbols_per_card` symbols on each card
pub fn order_for_symbols_per_card(symbols_per_card: usize) -> Option<usize> {
    symbols_per_card.checked_sub(1)
}

/// True when a deck with `symbols_per_card` symbols per card can be built
pub fn is_supported_deck(symbols_per_card: usize) -> bool {
    order_for_symbols_per_card(symbols_per_card).map_or(false, |order| {
        i64::try_from(order).map_or(false, numeric::is_prime) || kernels::kernel_for(order).is_some()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_decks() {
        assert!(is_supported_deck(3));
        assert!(is_supported_deck(5)); // order 4
        assert!(is_supported_deck(8));
        assert!(is_supported_deck(9)); // order 8
        assert!(!is_supported_deck(0));
        assert!(!is_supported_deck(1));
        assert!(!is_supported_deck(7));
        assert!(!is_supported_deck(10)); // order 9 is not tabulated
        assert!(!is_supported_deck(usize::MAX));
    }

    #[test]
    fn test_order_for_symbols_per_card() {
        assert_eq!(order_for_symbols_per_card(8), Some(7));
        assert_eq!(order_for_symbols_per_card(0), None);
    }
}
