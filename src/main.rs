use clap::{ArgAction, Parser, ValueEnum};
use slots::mach::{Config, Guess, Runtime};
use std::error::Error;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting balance in dollars
    #[arg(short, long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(1..))]
    balance: u64,

    /// Reels per spin
    #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..=16))]
    reels: u64,

    #[arg(short, long, value_enum, default_value_t = Game::Slots)]
    game: Game,

    /// Largest number the guessing game picks
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(i64).range(1..))]
    max: i64,

    /// Log to stderr, repeat for more detail
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Game {
    Slots,
    Guess,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .init();

    match play(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn play(args: &Args) -> Result<(), Box<dyn Error>> {
    match args.game {
        Game::Slots => {
            let config = Config {
                balance: args.balance,
                reels: args.reels as usize,
                ..Config::default()
            };
            let mut runtime = Runtime::new(config)?;
            slots::term::main(&mut runtime)?;
        }
        Game::Guess => {
            let mut guess = Guess::new(1, args.max, &mut rand::thread_rng())?;
            slots::term::main(&mut guess)?;
        }
    }
    Ok(())
}
