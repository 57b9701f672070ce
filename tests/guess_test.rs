mod common;
use common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use slots::mach::{Event, Guess, Machine, GUESS_PROMPT};

#[test]
fn test_guess_to_the_answer() {
    let mut g = Guess::with_secret(1, 100, 37).unwrap();
    let out = exec(&mut g, &["50", "25", "37", "99"]);
    assert_eq!(
        out,
        "Welcome to the Number Guessing Game!\n\
         Guess a number between 1 and 100\n\
         Enter your guess: 50\n\
         TOO HIGH! Try again.\n\
         Enter your guess: 25\n\
         TOO LOW! Try again.\n\
         Enter your guess: 37\n\
         CORRECT! The number was 37\n\
         Total attempts: 3\n"
    );
    assert_eq!(g.attempts(), 3);
    assert!(g.is_stopped());
}

#[test]
fn test_malformed_guess_reprompts() {
    let mut g = Guess::with_secret(1, 10, 4).unwrap();
    let out = exec(&mut g, &["four", "4"]);
    assert!(out.contains("?MALFORMED INPUT; ENTER A WHOLE NUMBER\n"));
    assert_eq!(out.matches(GUESS_PROMPT).count(), 2);
    assert_eq!(g.attempts(), 1);
}

#[test]
fn test_give_up_reveals() {
    let mut g = Guess::with_secret(1, 10, 7).unwrap();
    let out = exec(&mut g, &["3"]);
    assert!(out.ends_with("Enter your guess: \nThe number was 7. Attempts: 1\n"));
}

#[test]
fn test_binary_search_always_wins() {
    let mut rng = StdRng::seed_from_u64(100);
    for _ in 0..20 {
        let mut g = Guess::new(1, 100, &mut rng).unwrap();
        let (mut lo, mut hi) = (1, 100);
        let mut mid = 0;
        loop {
            match g.execute() {
                Event::Input(_) => {
                    mid = (lo + hi) / 2;
                    assert!(g.enter(&mid.to_string()));
                }
                Event::Print(s) if s.starts_with("TOO LOW") => lo = mid + 1,
                Event::Print(s) if s.starts_with("TOO HIGH") => hi = mid - 1,
                Event::Print(_) => {}
                Event::Win(s) => assert!(s.contains(&format!("The number was {}", mid))),
                Event::Error(e) => panic!("{}", e),
                Event::Stopped => break,
            }
        }
        assert!(g.attempts() <= 7);
    }
}
