mod common;
use common::*;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logged(level: Level, lines: &[&str]) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let mut r = rigged(100, &[["🍒", "🍉", "🥭"]]);
        exec(&mut r, lines);
    });
    let bytes = capture.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_refused_bets_are_quiet_by_default() {
    assert_eq!(logged(Level::WARN, &["150", "abc", "10", "n"]), "");
}

#[test]
fn test_refused_bets_logged_when_verbose() {
    let log = logged(Level::DEBUG, &["150", "abc", "10", "n"]);
    assert_eq!(log.matches("wager rejected").count(), 2);
    assert!(log.contains("round resolved"));
}
