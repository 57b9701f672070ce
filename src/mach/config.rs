use crate::slot::{PayoutTable, Reel};

/// Everything needed to start a slot session.
#[derive(Debug, Clone)]
pub struct Config {
    pub balance: u64,
    pub reels: usize,
    pub reel: Reel,
    pub table: PayoutTable,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            balance: 100,
            reels: 3,
            reel: Reel::default(),
            table: PayoutTable::classic(),
        }
    }
}
