use crate::slot::{Draw, Match, PayoutRule, PayoutTable};


fn draw(row: &[&str]) -> Draw {
    Draw::from(row)
}

fn table() -> PayoutTable {
    PayoutTable::new()
        .with_rule("A", PayoutRule::new(10, 2))
        .with_rule("B", PayoutRule::new(20, 3))
        .with_rule("C", PayoutRule::new(30, 5))
}
