use crate::Utility;

/// 21+3 outcome of the player's two cards plus the dealer's up card.
///
/// Variants are declared from the highest priority down, so the derived
/// ordering puts the best-paying hand first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    SuitedTrips = 0,
    StraightFlush = 1,
    Trips = 2,
    Straight = 3,
    Flush = 4,
    Lose = 5,
}

impl Category {
    pub const fn all() -> [Self; 6] {
        [
            Self::SuitedTrips,
            Self::StraightFlush,
            Self::Trips,
            Self::Straight,
            Self::Flush,
            Self::Lose,
        ]
    }
    pub const fn payout(&self) -> Utility {
        match self {
            Self::SuitedTrips => crate::PAYOUT_SUITED_TRIPS,
            Self::StraightFlush => crate::PAYOUT_STRAIGHT_FLUSH,
            Self::Trips => crate::PAYOUT_TRIPS,
            Self::Straight => crate::PAYOUT_STRAIGHT,
            Self::Flush => crate::PAYOUT_FLUSH,
            Self::Lose => crate::PAYOUT_LOSE,
        }
    }
}

impl From<Category> for usize {
    fn from(c: Category) -> usize {
        c as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::SuitedTrips => write!(f, "SuitedTrips"),
            Self::StraightFlush => write!(f, "StraightFlush"),
            Self::Trips => write!(f, "Trips"),
            Self::Straight => write!(f, "Straight"),
            Self::Flush => write!(f, "Flush"),
            Self::Lose => write!(f, "Lose"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paytable_follows_priority() {
        let payouts = Category::all().map(|c| c.payout());
        assert!(payouts.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(Category::Lose.payout(), -1.0);
    }

    #[test]
    fn bucket_indices() {
        for (i, category) in Category::all().into_iter().enumerate() {
            assert_eq!(usize::from(category), i);
        }
    }
}
