use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use poker_hands::deck::Deck;
use poker_hands::input::read_hands;
use poker_hands::report::{render_table, CardStyle};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Rank five-card poker hands and pick the winner")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Print suits as letters instead of unicode symbols.
    #[clap(long, global = true)]
    ascii: bool,
    /// Raise the log level (-v info, -vv debug, -vvv trace).
    #[clap(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read hands from a file: 5 cards (one hand) or 10 cards (two hands) per line.
    File {
        /// Path of the hands file.
        path: PathBuf,
    },
    /// Deal hands from a shuffled deck.
    Deal {
        /// Number of hands to deal.
        #[clap(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
        hands: u8,
        /// Seed for a reproducible shuffle.
        #[clap(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug)]
enum Source {
    File(PathBuf),
    Deal { hands: usize, seed: Option<u64> },
}

#[derive(Debug)]
struct Config {
    source: Source,
    style: CardStyle,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match cli.command {
            Command::File { path } => Source::File(path),
            Command::Deal { hands, seed } => Source::Deal { hands: hands as usize, seed },
        };
        let style = if cli.ascii { CardStyle::Ascii } else { CardStyle::Symbols };
        Config { source, style }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();
}

fn run(config: Config) -> Result<()> {
    match config.source {
        Source::File(path) => {
            let file =
                File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;
            let lines = read_hands(BufReader::new(file))?;
            info!("read {} line(s) from {}", lines.len(), path.display());
            for line in lines {
                println!("Line {}", line.number);
                println!("{}", render_table(&line.hands, config.style));
            }
        }
        Source::Deal { hands, seed } => {
            let mut deck = Deck::standard();
            match seed {
                Some(seed) => deck.shuffle_seeded(seed),
                None => deck.shuffle_with(&mut rand::rng()),
            }
            let dealt = deck.deal_hands(hands)?;
            info!("dealt {hands} hands, {} cards left", deck.len());
            print!("{}", render_table(&dealt, config.style));
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(Config::from(cli))
}
