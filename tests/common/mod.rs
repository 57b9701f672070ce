use slots::mach::{Config, Machine, Runtime};
use slots::slot::{Draw, DrawSource, Error};
use slots::term::{drive, Console, Line};
use std::collections::VecDeque;
use std::io;
use std::sync::atomic::AtomicBool;

/// Plays back typed lines and records everything shown.
pub struct Script {
    pub lines: VecDeque<String>,
    pub out: String,
    /// What the player does once the lines run out.
    pub last: Line,
}

impl Script {
    pub fn new(lines: &[&str]) -> Script {
        Script {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            out: String::new(),
            last: Line::Closed,
        }
    }

    /// Presses CTRL-C after the last line instead of closing input.
    pub fn interrupted(lines: &[&str]) -> Script {
        Script {
            last: Line::Interrupted,
            ..Script::new(lines)
        }
    }
}

impl Console for Script {
    fn input(&mut self, prompt: &str) -> io::Result<Line> {
        self.out.push_str(prompt);
        Ok(match self.lines.pop_front() {
            Some(line) => {
                self.out.push_str(&line);
                self.out.push('\n');
                Line::Input(line)
            }
            None => self.last.clone(),
        })
    }

    fn print(&mut self, s: &str) -> io::Result<()> {
        self.out.push_str(s);
        Ok(())
    }
}

pub struct Rigged(pub VecDeque<Draw>);

impl DrawSource for Rigged {
    fn draw(&mut self, _length: usize) -> Result<Draw, Error> {
        Ok(self.0.pop_front().expect("ran out of rigged rows"))
    }
}

pub fn rigged(balance: u64, rows: &[[&str; 3]]) -> Runtime {
    let config = Config {
        balance,
        ..Config::default()
    };
    let rows = rows.iter().map(|r| Draw::from(*r)).collect();
    Runtime::with_source(config, Box::new(Rigged(rows))).unwrap()
}

/// Plays `lines` into `machine` and returns the whole transcript.
pub fn exec<M: Machine>(machine: &mut M, lines: &[&str]) -> String {
    let mut script = Script::new(lines);
    let interrupted = AtomicBool::new(false);
    drive(&mut script, machine, &interrupted).unwrap();
    script.out
}
