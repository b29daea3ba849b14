use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: requested {requested} cards, {remaining} left")]
    Exhausted { requested: usize, remaining: usize },
}

/// A standard 52-card deck. Nothing is shuffled implicitly; the caller picks the randomness.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal `count` five-card hands off the top. Leaves the deck untouched on error.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(54);
    /// let hands = deck.deal_hands(2).unwrap();
    /// assert_eq!(hands.len(), 2);
    /// assert_eq!(deck.len(), 42);
    /// ```
    pub fn deal_hands(&mut self, count: usize) -> Result<Vec<Hand>, DeckError> {
        // Saturates for absurd counts, which can never be met anyway
        let requested = count.saturating_mul(5);
        if requested > self.cards.len() {
            return Err(DeckError::Exhausted { requested, remaining: self.cards.len() });
        }

        let mut hands = Vec::with_capacity(count);
        for _ in 0..count {
            let start = self.cards.len() - 5;
            let five: [Card; 5] = std::array::from_fn(|i| self.cards[start + i]);
            self.cards.truncate(start);
            hands.push(Hand::from_array(five));
        }
        Ok(hands)
    }
}
