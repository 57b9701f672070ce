use super::Error;

type Result<T> = std::result::Result<T, Error>;

/// Reads a whole number from a line of player input.
///
/// Signs are kept so that zero and negative bets reach the wager
/// check instead of being reported as malformed. Numbers too large
/// for an `i64` clamp to the nearest bound.
pub fn parse_amount(s: &str) -> Result<i64> {
    let s = s.trim();
    let digits = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error!(MalformedInput; "ENTER A WHOLE NUMBER"));
    }
    match s.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) if s.starts_with('-') => Ok(i64::MIN),
        Err(_) => Ok(i64::MAX),
    }
}

/// True only for a yes. Anything else, including an empty line, is a no.
pub fn parse_answer(s: &str) -> bool {
    let s = s.trim();
    s.eq_ignore_ascii_case("Y") || s.eq_ignore_ascii_case("YES")
}
