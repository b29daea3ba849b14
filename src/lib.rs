//! poker-hands: five-card poker hand ranking and comparison
//!
//! Goals:
//! - Classify any five cards into one of ten categories, High Card through Royal Flush
//! - A total order over hands, so a winner (or a tie) can be picked among any number of them
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_hands::evaluator::Category;
//! use poker_hands::hand::Hand;
//! use poker_hands::showdown::{showdown, Showdown};
//!
//! let hands = [
//!     Hand::new(["2H", "2D", "3C", "3S", "3H"]).unwrap(),
//!     Hand::new(["KH", "TH", "8H", "6H", "3H"]).unwrap(),
//! ];
//! assert_eq!(hands[0].ranking(), Category::FullHouse);
//! assert_eq!(hands[1].ranking(), Category::Flush);
//! assert_eq!(showdown(&hands), Some(Showdown::Winner { index: 0 }));
//! ```
//!
//! ## CLI
//! Rank the hands in a file, or deal a few from a shuffled deck:
//! ```sh
//! cargo run --bin poker-hands -- file hands.txt
//! cargo run --bin poker-hands -- deal --hands 4 --seed 7
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod input;
pub mod report;
pub mod showdown;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
