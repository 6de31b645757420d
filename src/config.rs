//! Deck Configuration Module
//!
//! Parameters for laying out a deck from a projective plane. Loaded from and
//! saved to TOML; every field has a default so partial files are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::plane::{checked_plane_size, Strategy};

/// Complete deck configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Deck name, used as the layout title
    pub name: String,
    /// Symbols printed on every card. Must be one more than a supported
    /// order: a prime, or one of the tabulated prime powers (4, 8)
    pub emojis_per_card: usize,
    /// Symbol identities, bound to plane points in order.
    /// Empty means generate placeholders
    pub symbols: Vec<String>,
    /// Orders at or above this build kernel blocks in parallel
    pub parallel_threshold: usize,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            name: "my-dobble-deck".to_string(),
            emojis_per_card: 8, // order 7, 57 cards
            symbols: Vec::new(),
            parallel_threshold: 16,
        }
    }
}

impl DeckConfig {
    /// Plane order for this deck (may be invalid; checked at build time).
    /// Counts beyond `i64` saturate to `i64::MAX`, which is never a valid order.
    pub fn order(&self) -> i64 {
        i64::try_from(self.emojis_per_card).map_or(i64::MAX, |k| k - 1)
    }

    /// Number of cards, which equals the number of distinct symbols.
    /// `None` when the count does not fit in a `usize`.
    pub fn num_cards(&self) -> Option<usize> {
        match self.emojis_per_card {
            0 => Some(0),
            k => checked_plane_size(k - 1),
        }
    }

    pub fn strategy(&self) -> Strategy {
        Strategy::for_order(self.emojis_per_card.saturating_sub(1), self.parallel_threshold)
    }

    /// Three symbols per card (Fano plane, 7 cards)
    pub fn small() -> Self {
        DeckConfig {
            emojis_per_card: 3,
            ..Default::default()
        }
    }

    /// Eight symbols per card, the size of the retail game
    pub fn classic() -> Self {
        DeckConfig {
            emojis_per_card: 8,
            ..Default::default()
        }
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let toml_str = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&toml_str)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_count() {
        assert_eq!(DeckConfig::default().num_cards(), Some(57));
        assert_eq!(DeckConfig::small().num_cards(), Some(7));
        let empty = DeckConfig { emojis_per_card: 0, ..Default::default() };
        assert_eq!(empty.num_cards(), Some(0));
        assert_eq!(empty.order(), -1);
    }

    #[test]
    fn test_huge_symbol_counts_do_not_wrap() {
        let huge = DeckConfig { emojis_per_card: usize::MAX, ..Default::default() };
        assert_eq!(huge.order(), i64::MAX);
        assert_eq!(huge.num_cards(), None);

        let config: DeckConfig = toml::from_str("emojis_per_card = 9223372036854775807\n").unwrap();
        assert_eq!(config.order(), i64::MAX - 1);
        assert_eq!(config.num_cards(), None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DeckConfig = toml::from_str("emojis_per_card = 5\n").unwrap();
        assert_eq!(config.emojis_per_card, 5);
        assert_eq!(config.name, "my-dobble-deck");
        assert!(config.symbols.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = DeckConfig {
            symbols: vec!["anchor".into(), "cactus".into()],
            ..DeckConfig::small()
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let recovered: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, recovered);
    }

    #[test]
    fn test_strategy_follows_threshold() {
        assert_eq!(DeckConfig::classic().strategy(), Strategy::Serial);
        let big = DeckConfig { emojis_per_card: 18, ..Default::default() };
        assert_eq!(big.strategy(), Strategy::Parallel);
    }
}
