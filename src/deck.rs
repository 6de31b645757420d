//! Deck Layout
//!
//! Turns an incidence matrix into a deck: card r carries the symbols bound
//! to the points on line r. Symbol k is bound to point k and labelled k + 1.
//! Any two cards therefore share exactly one symbol.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::DeckConfig;
use crate::error::DeckError;
use crate::plane::compute_incidence_matrix_with;

/// One card and the symbols printed on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub index: usize,
    pub symbols: Vec<String>,
}

/// A symbol and its 1-based label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolLabel {
    pub symbol: String,
    pub label: usize,
}

/// Full deck: card → symbols, and symbol → label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckLayout {
    pub name: String,
    pub emojis_per_card: usize,
    pub cards: Vec<Card>,
    pub symbols: Vec<SymbolLabel>,
}

impl DeckLayout {
    pub fn num_cards(&self) -> usize {
        self.cards.len()
    }

    /// The symbol two distinct cards have in common
    pub fn common_symbol(&self, a: usize, b: usize) -> Option<&str> {
        if a == b {
            return None;
        }
        let other = &self.cards.get(b)?.symbols;
        self.cards
            .get(a)?
            .symbols
            .iter()
            .find(|s| other.contains(s))
            .map(String::as_str)
    }

    /// Label of a symbol, if it is in the deck
    pub fn label_of(&self, symbol: &str) -> Option<usize> {
        self.symbols
            .iter()
            .find(|s| s.symbol == symbol)
            .map(|s| s.label)
    }
}

/// Placeholder identities `symbol-001`, `symbol-002`, ...
pub fn placeholder_symbols(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("symbol-{:03}", i)).collect()
}

/// Lay out the deck described by `config`
pub fn build_deck(config: &DeckConfig) -> Result<DeckLayout, DeckError> {
    let incidence = compute_incidence_matrix_with(config.order(), config.strategy())?;
    let needed = incidence.rows();

    let mut symbols = if config.symbols.is_empty() {
        placeholder_symbols(needed)
    } else {
        config.symbols.clone()
    };
    if symbols.len() < needed {
        return Err(DeckError::NotEnoughSymbols {
            needed,
            provided: symbols.len(),
        });
    }
    if symbols.len() > needed {
        log::warn!(
            "{} symbols provided, deck needs {}; using the first {}",
            symbols.len(),
            needed,
            needed
        );
        symbols.truncate(needed);
    }
    let mut seen = HashSet::with_capacity(needed);
    if let Some(symbol) = symbols.iter().find(|&s| !seen.insert(s.as_str())) {
        return Err(DeckError::DuplicateSymbol { symbol: symbol.clone() });
    }

    let cards = (0..needed)
        .map(|index| Card {
            index,
            symbols: incidence
                .support(index)
                .into_iter()
                .map(|point| symbols[point].clone())
                .collect(),
        })
        .collect();

    let symbols = symbols
        .into_iter()
        .enumerate()
        .map(|(point, symbol)| SymbolLabel { symbol, label: point + 1 })
        .collect();

    log::info!("laid out deck '{}': {} cards", config.name, needed);

    Ok(DeckLayout {
        name: config.name.clone(),
        emojis_per_card: config.emojis_per_card,
        cards,
        symbols,
    })
}
