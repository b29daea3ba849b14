use crate::cards::{parse_cards, Card, CardParseError};
use crate::evaluator::{self, evaluate_five, Category, Evaluation};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand needs exactly five cards, got {0}")]
    InvalidHandSize(usize),
    #[error(transparent)]
    Card(#[from] CardParseError),
}

/// Five cards, kept sorted by rank descending, with the ranking fixed at construction.
///
/// Equality and ordering follow hand strength, so two hands holding the same
/// ranks in different suits compare equal.
///
/// ```
/// use poker_hands::evaluator::Category;
/// use poker_hands::hand::Hand;
///
/// let hand = Hand::new(["2H", "2D", "3C", "3S", "3H"]).unwrap();
/// assert_eq!(hand.ranking(), Category::FullHouse);
/// assert_eq!(hand.to_string(), "3H 3C 3S 2H 2D");
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    evaluation: Evaluation,
}

impl Hand {
    /// Build a hand from exactly five card identifiers such as `"AS"` or `"10D"`.
    pub fn new<I, S>(identifiers: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: Vec<S> = identifiers.into_iter().collect();
        if ids.len() != 5 {
            return Err(HandError::InvalidHandSize(ids.len()));
        }
        let cards = ids.iter().map(|id| Card::parse(id.as_ref())).collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(&cards)
    }

    pub fn from_cards(cards: &[Card]) -> Result<Self, HandError> {
        let five: [Card; 5] =
            cards.try_into().map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self::from_array(five))
    }

    pub fn from_array(cards: [Card; 5]) -> Self {
        Self { evaluation: evaluate_five(&cards) }
    }

    pub fn ranking(&self) -> Category {
        self.evaluation.category
    }

    /// Cards by rank, highest first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.evaluation.sorted_cards
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Cards followed by the ranking, e.g. `A♠ K♠ Q♠ J♠ T♠ (Royal Flush)`.
    pub fn describe(&self) -> String {
        let cards: Vec<String> = self.cards().iter().map(|c| c.symbolic()).collect();
        format!("{} ({})", cards.join(" "), self.ranking())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cards: Vec<String> = self.cards().iter().map(Card::to_string).collect();
        f.write_str(&cards.join(" "))
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s)?;
        Self::from_cards(&cards)
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        evaluator::compare(self, other)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}
