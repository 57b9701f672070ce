use super::{Event, Machine};
use crate::error;
use crate::slot::{parse_amount, Error};
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, Error>;

pub const GUESS_PROMPT: &str = "Enter your guess: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Welcome,
    Guessing,
    Revealed,
    Stopped,
}

/// ## Number guessing
///
/// The player keeps guessing a secret number, told only whether each
/// guess was too low or too high, until they find it.
pub struct Guess {
    min: i64,
    max: i64,
    secret: i64,
    attempts: u32,
    state: State,
    entered: Option<String>,
}

impl Guess {
    pub fn new<R: Rng + ?Sized>(min: i64, max: i64, rng: &mut R) -> Result<Guess> {
        if min > max {
            return Err(error!(InvalidRange; "MINIMUM IS ABOVE MAXIMUM"));
        }
        let secret = rng.gen_range(min..=max);
        Guess::with_secret(min, max, secret)
    }

    pub fn with_secret(min: i64, max: i64, secret: i64) -> Result<Guess> {
        if min > max || secret < min || secret > max {
            return Err(error!(InvalidRange));
        }
        Ok(Guess {
            min,
            max,
            secret,
            attempts: 0,
            state: State::Welcome,
            entered: None,
        })
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_stopped(&self) -> bool {
        self.state == State::Stopped
    }

    fn guess(&mut self, line: &str) -> Event {
        let n = match parse_amount(line) {
            Ok(n) => n,
            Err(e) => return Event::Error(e),
        };
        self.attempts += 1;
        debug!(guess = n, attempts = self.attempts, "guess");
        match n.cmp(&self.secret) {
            Ordering::Less => Event::Print("TOO LOW! Try again.\n".to_string()),
            Ordering::Greater => Event::Print("TOO HIGH! Try again.\n".to_string()),
            Ordering::Equal => {
                info!(attempts = self.attempts, "number guessed");
                self.state = State::Stopped;
                Event::Win(format!(
                    "CORRECT! The number was {}\nTotal attempts: {}\n",
                    self.secret, self.attempts
                ))
            }
        }
    }
}

impl Machine for Guess {
    fn enter(&mut self, line: &str) -> bool {
        if self.state == State::Guessing {
            self.entered = Some(line.to_string());
            true
        } else {
            false
        }
    }

    fn execute(&mut self) -> Event {
        match self.state {
            State::Welcome => {
                self.state = State::Guessing;
                Event::Print(format!(
                    "Welcome to the Number Guessing Game!\nGuess a number between {} and {}\n",
                    self.min, self.max
                ))
            }
            State::Guessing => match self.entered.take() {
                Some(line) => self.guess(&line),
                None => Event::Input(GUESS_PROMPT.to_string()),
            },
            State::Revealed => {
                self.state = State::Stopped;
                Event::Print(format!(
                    "The number was {}. Attempts: {}\n",
                    self.secret, self.attempts
                ))
            }
            State::Stopped => Event::Stopped,
        }
    }

    fn interrupt(&mut self) {
        if self.state != State::Stopped {
            self.entered = None;
            self.state = State::Revealed;
        }
    }
}
