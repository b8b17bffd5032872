use super::rank::Rank;
use super::suit::Suit;

/// A card identity encoded as a single byte.
///
/// The 52 identities are bijectively mapped to `0..52` by
/// `suit * 13 + rank`, which is exactly the position of that card's
/// count in the shoe input. Clubs come first, ace to king, then
/// diamonds, hearts and spades.
///
/// In a multi-deck shoe several physical cards share one identity.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % crate::NUM_RANKS as u8)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / crate::NUM_RANKS as u8)
    }
    /// Every identity in ascending index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..crate::NUM_CARDS as u8).map(Self)
    }
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// (Suit, Rank) isomorphism
impl From<(Suit, Rank)> for Card {
    fn from((s, r): (Suit, Rank)) -> Self {
        Self(u8::from(s) * crate::NUM_RANKS as u8 + u8::from(r))
    }
}
impl From<Card> for (Suit, Rank) {
    fn from(c: Card) -> Self {
        (c.suit(), c.rank())
    }
}

/// u8 isomorphism
/// A♣ K♣ A♦ K♠
/// 0  12 13 51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < crate::NUM_CARDS, "invalid card u8: {}", n);
        Self(n)
    }
}

impl From<Card> for usize {
    fn from(c: Card) -> usize {
        c.index()
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().chars().collect::<Vec<char>>().as_slice() {
            [r, s] => {
                let rank = Rank::try_from(r.to_string().as_str())?;
                let suit = Suit::try_from(s.to_string().as_str())?;
                Ok(Card::from((suit, rank)))
            }
            _ => Err("2 characters".into()),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
