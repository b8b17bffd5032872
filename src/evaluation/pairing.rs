use crate::Utility;
use crate::cards::Card;

/// Perfect Pairs outcome of the player's first two cards.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Pairing {
    Perfect = 0,
    Coloured = 1,
    Mixed = 2,
    Lose = 3,
}

impl Pairing {
    pub const fn all() -> [Self; 4] {
        [Self::Perfect, Self::Coloured, Self::Mixed, Self::Lose]
    }
    pub const fn payout(&self) -> Utility {
        match self {
            Self::Perfect => crate::PAYOUT_PERFECT_PAIR,
            Self::Coloured => crate::PAYOUT_COLOURED_PAIR,
            Self::Mixed => crate::PAYOUT_MIXED_PAIR,
            Self::Lose => crate::PAYOUT_LOSE,
        }
    }
}

/// two-card classification
impl From<(Card, Card)> for Pairing {
    fn from((a, b): (Card, Card)) -> Self {
        match (a.rank() == b.rank(), a.suit(), b.suit()) {
            (false, _, _) => Self::Lose,
            (true, x, y) if x == y => Self::Perfect,
            (true, x, y) if x.is_red() == y.is_red() => Self::Coloured,
            (true, _, _) => Self::Mixed,
        }
    }
}

impl From<Pairing> for usize {
    fn from(p: Pairing) -> usize {
        p as usize
    }
}

impl std::fmt::Display for Pairing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Perfect => write!(f, "Perfect Pair"),
            Self::Coloured => write!(f, "Coloured Pair"),
            Self::Mixed => write!(f, "Mixed Pair"),
            Self::Lose => write!(f, "Lose"),
        }
    }
}
