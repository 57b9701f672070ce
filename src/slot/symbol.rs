use std::fmt;

/// One face of a reel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: &str) -> Symbol {
        Symbol(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Symbol {
        Symbol::new(s)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The row of symbols produced by a single spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    symbols: Vec<Symbol>,
}

impl Draw {
    pub fn new(symbols: Vec<Symbol>) -> Draw {
        Draw { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl<'a> From<&[&'a str]> for Draw {
    fn from(row: &[&'a str]) -> Draw {
        Draw::new(row.iter().map(|s| Symbol::new(s)).collect())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Draw {
    fn from(row: [&'a str; N]) -> Draw {
        Draw::from(&row[..])
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let row: Vec<&str> = self.symbols.iter().map(Symbol::as_str).collect();
        write!(f, "{}", row.join(" | "))
    }
}
