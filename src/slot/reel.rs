use super::{Draw, Error, Symbol};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use tracing::trace;

type Result<T> = std::result::Result<T, Error>;

/// The faces of a reel and how often each one comes up.
#[derive(Debug, Clone)]
pub struct Reel {
    symbols: Vec<Symbol>,
    index: WeightedIndex<u32>,
}

impl Reel {
    /// Every symbol equally likely.
    pub fn new(symbols: &[&str]) -> Result<Reel> {
        Reel::weighted(symbols.iter().map(|s| (*s, 1)))
    }

    pub fn weighted<'a, I>(faces: I) -> Result<Reel>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let (symbols, weights): (Vec<Symbol>, Vec<u32>) = faces
            .into_iter()
            .map(|(s, w)| (Symbol::new(s), w))
            .unzip();
        if symbols.is_empty() {
            return Err(error!(EmptyReel));
        }
        let index = match WeightedIndex::new(&weights) {
            Ok(index) => index,
            Err(_) => {
                return Err(error!(InvalidWeights; "AT LEAST ONE WEIGHT MUST BE POSITIVE"));
            }
        };
        Ok(Reel { symbols, index })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Symbol {
        self.symbols[self.index.sample(rng)].clone()
    }
}

/// The five faces of the classic machine.
pub const DEFAULT_SYMBOLS: [&str; 5] = ["🍒", "🍉", "🥭", "🔔", "⭐"];

impl Default for Reel {
    fn default() -> Reel {
        Reel::new(&DEFAULT_SYMBOLS).expect("default reel is non-empty")
    }
}

/// Anything that can produce the row for a spin.
pub trait DrawSource {
    fn draw(&mut self, length: usize) -> Result<Draw>;
}

/// Spins a reel with a random number generator. Positions are
/// independent, so the same symbol can land more than once.
pub struct Resolver<R: Rng> {
    reel: Reel,
    rng: R,
}

impl<R: Rng> Resolver<R> {
    pub fn new(reel: Reel, rng: R) -> Resolver<R> {
        Resolver { reel, rng }
    }
}

impl<R: Rng> DrawSource for Resolver<R> {
    fn draw(&mut self, length: usize) -> Result<Draw> {
        if length == 0 {
            return Err(error!(InvalidLength; "A SPIN NEEDS AT LEAST ONE REEL"));
        }
        let symbols: Vec<Symbol> = (0..length)
            .map(|_| self.reel.sample(&mut self.rng))
            .collect();
        let draw = Draw::new(symbols);
        trace!(%draw, "resolved draw");
        Ok(draw)
    }
}
