use crate::slot::Error;

/// What a machine wants the terminal to do next.
#[derive(Debug)]
pub enum Event {
    Print(String),
    /// Like `Print`, but good news.
    Win(String),
    /// Show the prompt, read a line, and hand it to `enter`.
    Input(String),
    Error(Error),
    Stopped,
}

/// A game the terminal can drive. Machines never touch I/O; they
/// answer `execute` with one event at a time.
pub trait Machine {
    /// Hands over a line read in response to `Event::Input`.
    /// Returns false if the machine wasn't waiting for one.
    fn enter(&mut self, line: &str) -> bool;

    fn execute(&mut self) -> Event;

    /// End of input or CTRL-C. A round in flight still completes.
    fn interrupt(&mut self);
}
