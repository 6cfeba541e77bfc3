//! Card parsing from compact tokens (e.g., "AS", "2C", "JR")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (rank_ch, suit_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r, s),
            _ => return Err(parse_error(s)),
        };
        // Jokers reuse the 'J' rank character with a colour instead of a suit.
        match (rank_ch, suit_ch) {
            ('J', 'R') => {
                return Card::new(Suit::RedJoker, Rank::Joker).ok_or_else(|| parse_error(s))
            }
            ('J', 'B') => {
                return Card::new(Suit::BlackJoker, Rank::Joker).ok_or_else(|| parse_error(s))
            }
            _ => {}
        }
        let rank = match rank_ch {
            '2' => Rank::Two,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(parse_error(s)),
        };
        let suit = match suit_ch {
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            _ => return Err(parse_error(s)),
        };
        Card::new(suit, rank).ok_or_else(|| parse_error(s))
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordinary_and_joker_tokens() {
        let cards = try_parse_cards(["2S", "QD", "AH", "JR", "JB", "JC"]).unwrap();
        assert_eq!(cards[0].rank, Rank::Two);
        assert_eq!(cards[1].suit, Suit::Diamonds);
        assert_eq!(cards[2].rank, Rank::Ace);
        assert!(cards[3].is_joker() && cards[3].suit == Suit::RedJoker);
        assert!(cards[4].is_joker() && cards[4].suit == Suit::BlackJoker);
        assert_eq!(cards[5].rank, Rank::Jack);
    }

    #[test]
    fn rejects_unknown_tokens() {
        for bad in ["", "9S", "2X", "AS ", "ASS", "QR"] {
            let err = bad.parse::<Card>().unwrap_err();
            assert_eq!(err.kind(), Some(&ValidationKind::ParseCard), "token {bad:?}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let card: Card = "KC".parse().unwrap();
        assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
    }
}
