use super::{Config, Event, Machine, Session};
use crate::error;
use crate::slot::{
    parse_amount, parse_answer, Draw, DrawSource, Error, Match, PayoutTable, Resolver,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, Error>;

pub const WAGER_PROMPT: &str = "Place your bet amount: ";
pub const CONTINUE_PROMPT: &str = "Do you want to play again? (Y/N): ";

/// The outcome of one spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub wager: u64,
    pub draw: Draw,
    pub line: Match,
    pub payout: u64,
}

#[derive(Debug)]
enum State {
    Welcome,
    Balance,
    AwaitingWager,
    Resolving(u64),
    Reporting(Round),
    AwaitingContinue,
    Terminated,
    Stopped,
}

/// ## Slot session
///
/// Drives one session from the welcome banner to the final balance.
/// Call `execute` until it returns `Event::Stopped`. Whenever it returns
/// `Event::Input`, read a line and give it to `enter` first.
pub struct Runtime {
    session: Session,
    table: PayoutTable,
    source: Box<dyn DrawSource>,
    reels: usize,
    symbols: String,
    state: State,
    entered: Option<String>,
    interrupted: bool,
    last_round: Option<Round>,
}

impl Runtime {
    /// A session spinning the configured reel with an entropy-seeded RNG.
    pub fn new(config: Config) -> Result<Runtime> {
        let resolver = Resolver::new(config.reel.clone(), StdRng::from_entropy());
        Runtime::with_source(config, Box::new(resolver))
    }

    /// A session whose rows come from `source` instead of the configured reel.
    pub fn with_source(config: Config, source: Box<dyn DrawSource>) -> Result<Runtime> {
        if config.reels == 0 {
            return Err(error!(InvalidLength; "A SPIN NEEDS AT LEAST ONE REEL"));
        }
        let symbols: Vec<String> = config
            .reel
            .symbols()
            .iter()
            .map(|s| s.to_string())
            .collect();
        Ok(Runtime {
            session: Session::new(config.balance),
            table: config.table,
            source,
            reels: config.reels,
            symbols: symbols.join(" "),
            state: State::Welcome,
            entered: None,
            interrupted: false,
            last_round: None,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn last_round(&self) -> Option<&Round> {
        self.last_round.as_ref()
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.state, State::Stopped)
    }

    pub fn enter(&mut self, line: &str) -> bool {
        match self.state {
            State::AwaitingWager | State::AwaitingContinue => {
                self.entered = Some(line.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn interrupt(&mut self) {
        self.interrupted = true;
        if let State::AwaitingWager | State::AwaitingContinue = self.state {
            self.entered = None;
            self.state = State::Terminated;
        }
    }

    pub fn execute(&mut self) -> Event {
        let state = std::mem::replace(&mut self.state, State::Stopped);
        match state {
            State::Welcome => {
                info!(
                    balance = self.session.balance(),
                    reels = self.reels,
                    "session started"
                );
                self.state = State::Balance;
                Event::Print(format!(
                    "==========================\n   Welcome to Rust Slots\n   Symbols: {}\n==========================\n",
                    self.symbols
                ))
            }
            State::Balance => {
                if self.interrupted || self.session.is_exhausted() {
                    self.state = State::Terminated;
                    return self.execute();
                }
                self.state = State::AwaitingWager;
                Event::Print(format!("Current balance: ${}\n", self.session.balance()))
            }
            State::AwaitingWager => {
                let line = match self.entered.take() {
                    Some(line) => line,
                    None => {
                        self.state = State::AwaitingWager;
                        return Event::Input(WAGER_PROMPT.to_string());
                    }
                };
                match self.wager(&line) {
                    Ok(wager) => {
                        self.state = State::Resolving(wager);
                        self.execute()
                    }
                    Err(e) => {
                        debug!(input = line.trim(), error = %e, "wager rejected");
                        self.state = State::Balance;
                        Event::Error(e)
                    }
                }
            }
            State::Resolving(wager) => match self.source.draw(self.reels) {
                Ok(draw) => {
                    let line = PayoutTable::classify(&draw);
                    let payout = self.table.payout(&draw, wager);
                    debug!(wager, %draw, ?line, payout, "round resolved");
                    let text = format!(
                        "Spinning...\n**************\n {}\n**************\n",
                        draw
                    );
                    self.state = State::Reporting(Round {
                        wager,
                        draw,
                        line,
                        payout,
                    });
                    Event::Print(text)
                }
                Err(e) => {
                    tracing::error!(error = %e, "draw failed");
                    self.session.refund(wager);
                    self.state = State::Terminated;
                    Event::Error(e)
                }
            },
            State::Reporting(round) => {
                self.session.apply_payout(round.payout);
                let event = if round.payout > 0 {
                    Event::Win(format!("You won ${}!\n", round.payout))
                } else {
                    Event::Print("Sorry, you lost this round!\n".to_string())
                };
                self.last_round = Some(round);
                self.state = if self.interrupted || self.session.is_exhausted() {
                    State::Terminated
                } else {
                    State::AwaitingContinue
                };
                event
            }
            State::AwaitingContinue => match self.entered.take() {
                Some(line) => {
                    self.state = if parse_answer(&line) {
                        State::Balance
                    } else {
                        State::Terminated
                    };
                    self.execute()
                }
                None => {
                    self.state = State::AwaitingContinue;
                    Event::Input(CONTINUE_PROMPT.to_string())
                }
            },
            State::Terminated => {
                let stats = self.session.stats();
                info!(
                    balance = self.session.balance(),
                    rounds = stats.rounds,
                    wagered = stats.wagered,
                    paid = stats.paid,
                    "session ended"
                );
                let mut s = format!(
                    "GAME OVER! Your final balance is ${}\n",
                    self.session.balance()
                );
                if stats.rounds > 0 {
                    s.push_str(&format!(
                        "Rounds: {}  Wagered: ${}  Won: ${}  Biggest win: ${}\n",
                        stats.rounds, stats.wagered, stats.paid, stats.biggest_win
                    ));
                }
                Event::Print(s)
            }
            State::Stopped => Event::Stopped,
        }
    }

    fn wager(&mut self, line: &str) -> Result<u64> {
        let amount = parse_amount(line)?;
        self.session.apply_wager(amount)?;
        Ok(amount as u64)
    }
}

impl Machine for Runtime {
    fn enter(&mut self, line: &str) -> bool {
        Runtime::enter(self, line)
    }

    fn execute(&mut self) -> Event {
        Runtime::execute(self)
    }

    fn interrupt(&mut self) {
        Runtime::interrupt(self)
    }
}
