use crate::cards::Card;
use crate::evaluator::compare_explained;
use crate::hand::Hand;
use crate::showdown::{showdown, Showdown};

/// How cards are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStyle {
    /// Rank letter plus a unicode suit symbol, e.g. `A♠`.
    #[default]
    Symbols,
    /// Plain identifiers, e.g. `AS`.
    Ascii,
}

pub fn format_hand(hand: &Hand, style: CardStyle) -> String {
    let cards: Vec<String> = hand
        .cards()
        .iter()
        .map(|c| match style {
            CardStyle::Symbols => c.symbolic(),
            CardStyle::Ascii => Card::to_string(c),
        })
        .collect();
    format!("{}\t({})", cards.join("\t"), hand.ranking())
}

/// One row per hand, then the outcome. Two-hand tables also say what decided it.
pub fn render_table(hands: &[Hand], style: CardStyle) -> String {
    let mut out: String = hands
        .iter()
        .enumerate()
        .map(|(i, hand)| format!("Player {}:\t{}\n", i + 1, format_hand(hand, style)))
        .collect();

    match showdown(hands) {
        None => {}
        Some(Showdown::Winner { index }) => {
            out.push_str(&format!("Winner: Player {}", index + 1));
            if let [a, b] = hands {
                let (winner, loser) = if index == 0 { (a, b) } else { (b, a) };
                out.push_str(&format!(" ({})", compare_explained(winner, loser).tiebreak));
            }
            out.push('\n');
        }
        Some(Showdown::Tie { indices }) => {
            let players: Vec<String> = indices.iter().map(|i| format!("Player {}", i + 1)).collect();
            out.push_str(&format!("Tie: {}\n", players.join(", ")));
        }
    }
    out
}
