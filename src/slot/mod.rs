/*!
# Rust Slot Module

This Rust module holds the pieces of a spin that don't depend on a
session: symbols, reels, the paytable, and parsing of player input.

*/

#[macro_use]
mod error;
mod input;
mod payout;
mod reel;
mod symbol;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::ErrorCode;
pub use input::{parse_amount, parse_answer};
pub use payout::{Match, PayoutRule, PayoutTable};
pub use reel::{DrawSource, Reel, Resolver, DEFAULT_SYMBOLS};
pub use symbol::{Draw, Symbol};
