//! Line-oriented hand source.
//!
//! Each non-blank line holds whitespace-separated card identifiers: five for a
//! single hand, or ten for two hands played against each other.
//!
//! ```
//! use poker_hands::input::read_hands;
//!
//! let text = "8C TS KC 9H 4S 7D 2S 5D 3S AC\n\n5C AD 5D AC 9C\n";
//! let lines = read_hands(text.as_bytes()).unwrap();
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].hands.len(), 2);
//! assert_eq!(lines[1].number, 3);
//! ```

use crate::hand::{Hand, HandError};
use log::debug;
use std::io::BufRead;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LineError {
    #[error("expected 5 or 10 cards, got {0}")]
    CardCount(usize),
    #[error(transparent)]
    Hand(#[from] HandError),
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum InputError {
    #[error("line {line}: {source}")]
    Line { line: usize, source: LineError },
    #[error("failed to read hands: {0}")]
    Io(#[from] std::io::Error),
}

/// Hands parsed from one input line.
#[derive(Debug, Clone)]
pub struct HandLine {
    /// 1-based line number in the source.
    pub number: usize,
    pub hands: Vec<Hand>,
}

/// Split one line into one or two hands.
pub fn parse_line(line: &str) -> Result<Vec<Hand>, LineError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 5 && tokens.len() != 10 {
        return Err(LineError::CardCount(tokens.len()));
    }
    tokens.chunks(5).map(|ids| Hand::new(ids).map_err(LineError::from)).collect()
}

/// Read every non-blank line of `reader`. Stops at the first malformed line.
pub fn read_hands<R: BufRead>(reader: R) -> Result<Vec<HandLine>, InputError> {
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let number = i + 1;
        let hands = parse_line(&line).map_err(|source| InputError::Line { line: number, source })?;
        debug!("line {number}: {} hand(s)", hands.len());
        out.push(HandLine { number, hands });
    }
    Ok(out)
}
