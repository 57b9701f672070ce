//! # Rust Slots
//!
//! A three reel slot machine for the terminal.
//!
//! Linux, MacOS, and Windows require [Rust](https://www.rust-lang.org/tools/install)
//! then `cargo run --release` from a checkout.
//!
//! Begin by opening a terminal and running the executable. If you get the
//! following, you have achieved success.
//! ```text
//! ==========================
//!    Welcome to Rust Slots
//!    Symbols: 🍒 🍉 🥭 🔔 ⭐
//! ==========================
//! Current balance: $100
//! Place your bet amount: █
//! ```
//!
//! The same terminal also plays a number guessing game with `--game guess`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod mach;
pub mod slot;
pub mod term;
