use crate::mach::{Config, Event, Runtime};
use crate::slot::{Draw, DrawSource, Error};
use std::collections::VecDeque;


/// Hands out fixed rows, then fails.
struct Rigged(VecDeque<Draw>);

impl DrawSource for Rigged {
    fn draw(&mut self, _length: usize) -> Result<Draw, Error> {
        self.0.pop_front().ok_or_else(|| crate::error!(EmptyReel))
    }
}

fn rigged(balance: u64, rows: &[[&str; 3]]) -> Runtime {
    let config = Config {
        balance,
        ..Config::default()
    };
    let rows = rows.iter().map(|r| Draw::from(*r)).collect();
    Runtime::with_source(config, Box::new(Rigged(rows))).unwrap()
}

/// Runs until the machine wants input or stops.
fn run(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Print(ps) | Event::Win(ps) => s.push_str(&ps),
            Event::Error(e) => s.push_str(&format!("?{}\n", e)),
            Event::Input(prompt) => {
                s.push_str(&prompt);
                break;
            }
            Event::Stopped => break,
        }
    }
    s
}
