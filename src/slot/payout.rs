use super::{Draw, Symbol};
use std::collections::HashMap;

/// Multipliers applied to the wager for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PayoutRule {
    pub full: u64,
    pub partial: u64,
}

impl PayoutRule {
    pub fn new(full: u64, partial: u64) -> PayoutRule {
        PayoutRule { full, partial }
    }
}

/// Which line of the row paid, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match {
    Full(Symbol),
    Leading(Symbol),
    Trailing(Symbol),
    None,
}

#[derive(Debug, Clone, Default)]
pub struct PayoutTable {
    rules: HashMap<Symbol, PayoutRule>,
}

impl PayoutTable {
    pub fn new() -> PayoutTable {
        PayoutTable::default()
    }

    pub fn with_rule(mut self, symbol: &str, rule: PayoutRule) -> PayoutTable {
        self.rules.insert(Symbol::new(symbol), rule);
        self
    }

    /// The rule for a symbol. Unknown symbols pay nothing.
    pub fn rule(&self, symbol: &Symbol) -> PayoutRule {
        self.rules.get(symbol).copied().unwrap_or_default()
    }

    /// Finds the line that pays. A full row beats the leading pair,
    /// which beats the trailing pair.
    pub fn classify(draw: &Draw) -> Match {
        let row = draw.symbols();
        let first = match row.first() {
            Some(first) => first,
            None => return Match::None,
        };
        if row.iter().all(|s| s == first) {
            return Match::Full(first.clone());
        }
        if row[0] == row[1] {
            return Match::Leading(row[0].clone());
        }
        let n = row.len();
        if row[n - 2] == row[n - 1] {
            return Match::Trailing(row[n - 1].clone());
        }
        Match::None
    }

    pub fn multiplier(&self, m: &Match) -> u64 {
        match m {
            Match::Full(s) => self.rule(s).full,
            Match::Leading(s) | Match::Trailing(s) => self.rule(s).partial,
            Match::None => 0,
        }
    }

    pub fn payout(&self, draw: &Draw, wager: u64) -> u64 {
        self.multiplier(&PayoutTable::classify(draw))
            .saturating_mul(wager)
    }
}

impl PayoutTable {
    /// Multipliers of the classic machine.
    pub fn classic() -> PayoutTable {
        PayoutTable::new()
            .with_rule("🍒", PayoutRule::new(3, 2))
            .with_rule("🍉", PayoutRule::new(4, 3))
            .with_rule("🥭", PayoutRule::new(5, 4))
            .with_rule("🔔", PayoutRule::new(10, 5))
            .with_rule("⭐", PayoutRule::new(20, 10))
    }
}
