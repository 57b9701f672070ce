/*!
## Rust Terminal Module

Connects a machine to a line editor. The machine decides what happens
next; this module only prints and reads.

*/

use crate::error;
use crate::mach::{Event, Machine};
use crate::slot::Error;
use ansi_term::Colour;
use linefeed::{Interface, ReadResult, Signal, Terminal};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// What came back from asking the player for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Input(String),
    Interrupted,
    Closed,
}

/// Where a machine's prompts and output go.
pub trait Console {
    fn input(&mut self, prompt: &str) -> io::Result<Line>;

    fn print(&mut self, s: &str) -> io::Result<()>;

    fn print_win(&mut self, s: &str) -> io::Result<()> {
        self.print(s)
    }

    fn print_error(&mut self, error: &Error) -> io::Result<()> {
        self.print(&format!("?{}\n", error))
    }
}

impl<T: Terminal> Console for Interface<T> {
    fn input(&mut self, prompt: &str) -> io::Result<Line> {
        self.set_prompt(prompt)?;
        Ok(match self.read_line()? {
            ReadResult::Input(string) => {
                if !string.trim().is_empty() {
                    self.add_history_unique(string.clone());
                }
                Line::Input(string)
            }
            ReadResult::Signal(Signal::Interrupt) => {
                self.set_buffer("")?;
                self.lock_reader().cancel_read_line()?;
                Line::Interrupted
            }
            ReadResult::Signal(_) | ReadResult::Eof => Line::Closed,
        })
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        self.write_fmt(format_args!("{}", s))
    }

    fn print_win(&mut self, s: &str) -> io::Result<()> {
        self.write_fmt(format_args!("{}\n", Colour::Green.bold().paint(s.trim_end())))
    }

    fn print_error(&mut self, error: &Error) -> io::Result<()> {
        self.write_fmt(format_args!(
            "{}\n",
            Colour::Red.bold().paint(format!("?{}", error))
        ))
    }
}

pub fn main(machine: &mut dyn Machine) -> io::Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        warn!(%error, "CTRL-C handler not installed");
    }
    let mut interface = Interface::new("slots")?;
    interface.set_report_signal(Signal::Interrupt, true);
    drive(&mut interface, machine, &interrupted)
}

/// Runs `machine` until it stops. A closed or interrupted input ends
/// the session the same way quitting does.
pub fn drive<C, M>(console: &mut C, machine: &mut M, interrupted: &AtomicBool) -> io::Result<()>
where
    C: Console + ?Sized,
    M: Machine + ?Sized,
{
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            debug!("interrupted");
            machine.interrupt();
        }
        match machine.execute() {
            Event::Print(s) => console.print(&s)?,
            Event::Win(s) => console.print_win(&s)?,
            Event::Error(e) => console.print_error(&e)?,
            Event::Input(prompt) => match console.input(&prompt)? {
                Line::Input(s) => {
                    machine.enter(&s);
                }
                Line::Interrupted => {
                    debug!("interrupted at prompt");
                    console.print("\n")?;
                    machine.interrupt();
                }
                Line::Closed => {
                    debug!("{}", error!(InputStreamClosed));
                    console.print("\n")?;
                    machine.interrupt();
                }
            },
            Event::Stopped => break,
        }
    }
    Ok(())
}
