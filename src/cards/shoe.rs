use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::NUM_CARDS;

/// The not-yet-dealt cards, as a remaining count per card identity.
///
/// Counts may exceed one in multi-deck shoes. A Shoe is built once per
/// request at the validation boundary and only read afterwards; removal
/// analysis works on scratch copies obtained from [`Shoe::without`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Shoe([u32; NUM_CARDS]);

impl Shoe {
    pub fn empty() -> Self {
        Self([0; NUM_CARDS])
    }
    /// A fresh shoe of `decks` complete decks.
    pub fn standard(decks: u32) -> Self {
        Self([decks; NUM_CARDS])
    }

    /// Remaining units of one identity.
    pub fn count(&self, card: Card) -> u32 {
        self.0[card.index()]
    }
    /// N, the number of physical cards left.
    pub fn size(&self) -> u64 {
        self.0.iter().map(|&n| n as u64).sum()
    }
    /// Remaining units of a rank across all four suits.
    pub fn ranked(&self, rank: Rank) -> u64 {
        Suit::all()
            .into_iter()
            .map(|suit| Card::from((suit, rank)))
            .map(|card| self.count(card) as u64)
            .sum()
    }
    pub fn counts(&self) -> &[u32; NUM_CARDS] {
        &self.0
    }

    pub fn add(&mut self, card: Card) {
        self.0[card.index()] += 1;
    }
    /// Take one unit of an identity out of the shoe.
    /// Returns false, leaving the shoe untouched, if none remain.
    pub fn remove(&mut self, card: Card) -> bool {
        match self.0[card.index()] {
            0 => false,
            _ => {
                self.0[card.index()] -= 1;
                true
            }
        }
    }
    /// A scratch copy with one unit of `card` removed.
    pub fn without(&self, card: Card) -> Option<Self> {
        let mut copy = *self;
        copy.remove(card).then_some(copy)
    }

    /// Validate raw tokens into a Shoe.
    ///
    /// At least 52 tokens are required and only the first 52 are read.
    /// Every token must be an integer and no count may be negative.
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> anyhow::Result<Self> {
        anyhow::ensure!(
            tokens.len() >= NUM_CARDS,
            "need {} integers, got {}",
            NUM_CARDS,
            tokens.len()
        );
        let counts = tokens
            .iter()
            .take(NUM_CARDS)
            .map(|token| token.as_ref())
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| anyhow::anyhow!("non-integer '{}'", token))
            })
            .collect::<anyhow::Result<Vec<i64>>>()?;
        Self::try_from(counts.as_slice())
    }
}

impl From<[u32; NUM_CARDS]> for Shoe {
    fn from(counts: [u32; NUM_CARDS]) -> Self {
        Self(counts)
    }
}
impl From<Shoe> for [u32; NUM_CARDS] {
    fn from(shoe: Shoe) -> Self {
        shoe.0
    }
}

/// integer validation boundary
impl TryFrom<&[i64]> for Shoe {
    type Error = anyhow::Error;
    fn try_from(counts: &[i64]) -> Result<Self, Self::Error> {
        anyhow::ensure!(
            counts.len() >= NUM_CARDS,
            "need {} integers, got {}",
            NUM_CARDS,
            counts.len()
        );
        let mut shoe = Self::empty();
        for (i, &n) in counts.iter().take(NUM_CARDS).enumerate() {
            anyhow::ensure!(n >= 0, "negative count at index {}", i);
            shoe.0[i] = u32::try_from(n)
                .map_err(|_| anyhow::anyhow!("count out of range at index {}", i))?;
        }
        Ok(shoe)
    }
}

/// whitespace-separated counts
impl TryFrom<&str> for Shoe {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(&s.split_whitespace().collect::<Vec<&str>>())
    }
}

/// Vec<Card> injection, one unit per listed card
impl From<Vec<Card>> for Shoe {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().fold(Self::empty(), |mut shoe, card| {
            shoe.add(card);
            shoe
        })
    }
}

/// renders as the 52 counts it was parsed from
impl std::fmt::Display for Shoe {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let counts = self
            .0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", counts)
    }
}
