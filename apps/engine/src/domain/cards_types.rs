//! Core card-related types: Card, CardId, Rank, Suit

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    /// Colour of the red joker. Never a trump suit.
    RedJoker,
    /// Colour of the black joker. Never a trump suit.
    BlackJoker,
}

impl Suit {
    /// The four ordinary suits in canonical deck order.
    pub const ORDINARY: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Joker colours in canonical deck order.
    pub const JOKERS: [Suit; 2] = [Suit::RedJoker, Suit::BlackJoker];

    pub fn is_joker_colour(self) -> bool {
        matches!(self, Suit::RedJoker | Suit::BlackJoker)
    }

    /// Single-character token used by the card text form.
    pub fn token(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::RedJoker => 'R',
            Suit::BlackJoker => 'B',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    Joker,
}

impl Rank {
    /// Ranks of an ordinary suit in canonical deck order.
    pub const ORDINARY: [Rank; 6] = [
        Rank::Two,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn token(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            Rank::Joker => 'J',
        }
    }
}

/// Identity of a card within one deck: its position in canonical order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CardId(pub u8);

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    /// Build the card for a suit/rank pair, assigning its canonical id.
    ///
    /// Returns `None` for impossible pairs: a joker rank on an ordinary suit
    /// or an ordinary rank on a joker colour.
    pub fn new(suit: Suit, rank: Rank) -> Option<Card> {
        let id = match (suit, rank) {
            (Suit::RedJoker, Rank::Joker) => Suit::ORDINARY.len() * Rank::ORDINARY.len(),
            (Suit::BlackJoker, Rank::Joker) => Suit::ORDINARY.len() * Rank::ORDINARY.len() + 1,
            (_, Rank::Joker) => return None,
            (s, _) if s.is_joker_colour() => return None,
            (s, r) => {
                let suit_pos = Suit::ORDINARY.iter().position(|x| *x == s)?;
                let rank_pos = Rank::ORDINARY.iter().position(|x| *x == r)?;
                suit_pos * Rank::ORDINARY.len() + rank_pos
            }
        };
        Some(Card {
            id: CardId(id as u8),
            suit,
            rank,
        })
    }

    pub fn is_joker(&self) -> bool {
        self.rank == Rank::Joker
    }
}

// Note: Ord on Card is only for stable sorting of hands in canonical deck order.
// Do not use it for beat resolution; trump and jokers are handled in cards_logic.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.token())
    }
}
