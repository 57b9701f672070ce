use crate::error;
use crate::slot::Error;

type Result<T> = std::result::Result<T, Error>;

/// Running totals for the end-of-session report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub rounds: u64,
    pub wagered: u64,
    pub paid: u64,
    pub biggest_win: u64,
}

/// The player's money. The balance only goes down through a wager
/// that fits inside it, so it can never go negative.
#[derive(Debug, Clone)]
pub struct Session {
    balance: u64,
    stats: Stats,
}

impl Session {
    pub fn new(balance: u64) -> Session {
        Session {
            balance,
            stats: Stats::default(),
        }
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn is_exhausted(&self) -> bool {
        self.balance == 0
    }

    pub fn apply_wager(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(error!(InvalidWager; "BET MUST BE GREATER THAN 0"));
        }
        let amount = amount as u64;
        if amount > self.balance {
            return Err(error!(InvalidWager; "INSUFFICIENT FUNDS"));
        }
        self.balance -= amount;
        self.stats.rounds += 1;
        self.stats.wagered = self.stats.wagered.saturating_add(amount);
        Ok(())
    }

    /// Undoes a wager whose round could not be resolved.
    pub fn refund(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.stats.rounds = self.stats.rounds.saturating_sub(1);
        self.stats.wagered = self.stats.wagered.saturating_sub(amount);
    }

    pub fn apply_payout(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.stats.paid = self.stats.paid.saturating_add(amount);
        self.stats.biggest_win = self.stats.biggest_win.max(amount);
    }
}
