/*!
## Rust Machine Module

This Rust module holds the playable machines and the balance they
wager against. Machines are driven one `Event` at a time and never
do their own I/O.

*/

mod config;
mod event;
mod guess;
mod runtime;
mod session;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use event::{Event, Machine};
pub use guess::{Guess, GUESS_PROMPT};
pub use runtime::{Round, Runtime, CONTINUE_PROMPT, WAGER_PROMPT};
pub use session::{Session, Stats};
