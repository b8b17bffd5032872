use super::category::Category;
use crate::cards::Card;
use crate::cards::Rank;

/// A lazy classifier for a three-card 21+3 hand.
///
/// Categories are searched from the highest priority down and the first
/// hit wins, so a hand satisfying several conditions (three identical
/// cards are also trips and also a flush) is always scored at the best one.
pub struct Classifier([Card; 3]);
impl From<[Card; 3]> for Classifier {
    fn from(cards: [Card; 3]) -> Self {
        Self(cards)
    }
}

impl Classifier {
    pub fn find_category(&self) -> Category {
        None.or_else(|| self.find_suited_trips())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_trips())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_flush())
            .unwrap_or(Category::Lose)
    }

    fn find_suited_trips(&self) -> Option<Category> {
        (self.is_same_rank() && self.is_same_suit()).then_some(Category::SuitedTrips)
    }
    fn find_straight_flush(&self) -> Option<Category> {
        (self.is_straight() && self.is_same_suit()).then_some(Category::StraightFlush)
    }
    fn find_trips(&self) -> Option<Category> {
        self.is_same_rank().then_some(Category::Trips)
    }
    fn find_straight(&self) -> Option<Category> {
        self.is_straight().then_some(Category::Straight)
    }
    fn find_flush(&self) -> Option<Category> {
        self.is_same_suit().then_some(Category::Flush)
    }

    fn is_same_rank(&self) -> bool {
        let [a, b, c] = self.0;
        a.rank() == b.rank() && b.rank() == c.rank()
    }
    fn is_same_suit(&self) -> bool {
        let [a, b, c] = self.0;
        a.suit() == b.suit() && b.suit() == c.suit()
    }
    fn is_straight(&self) -> bool {
        let [a, b, c] = self.0;
        is_straight(a.rank(), b.rank(), c.rank())
    }
}

/// Three ranks in sequence, ace low (A-2-3) or ace high (Q-K-A).
/// Nothing wraps around the ace, so K-A-2 is not a straight.
pub fn is_straight(a: Rank, b: Rank, c: Rank) -> bool {
    let mut v = [a.value(), b.value(), c.value()];
    v.sort_unstable();
    match v {
        [1, 12, 13] => true,
        [lo, mid, hi] => lo + 1 == mid && mid + 1 == hi,
    }
}

/// three-card classification
impl From<[Card; 3]> for Category {
    fn from(cards: [Card; 3]) -> Self {
        Classifier::from(cards).find_category()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn hand(s: &str) -> [Card; 3] {
        s.split_whitespace()
            .map(|c| Card::try_from(c).unwrap())
            .collect::<Vec<Card>>()
            .try_into()
            .unwrap()
    }

    #[test]
    fn ace_high_straight() {
        assert!(is_straight(Rank::Queen, Rank::King, Rank::Ace));
        assert_eq!(Category::from(hand("Qc Kd Ah")), Category::Straight);
    }

    #[test]
    fn ace_low_straight() {
        assert!(is_straight(Rank::Three, Rank::Ace, Rank::Two));
        assert_eq!(Category::from(hand("3s Ac 2c")), Category::Straight);
    }

    #[test]
    fn no_wraparound() {
        assert!(!is_straight(Rank::King, Rank::Ace, Rank::Two));
        assert_eq!(Category::from(hand("Kc Ad 2h")), Category::Lose);
    }

    #[test]
    fn middle_straight() {
        assert!(is_straight(Rank::Nine, Rank::Jack, Rank::Ten));
        assert!(!is_straight(Rank::Nine, Rank::Jack, Rank::Queen));
        assert!(!is_straight(Rank::Nine, Rank::Nine, Rank::Ten));
    }

    #[test]
    fn suited_trips_outranks_trips_and_flush() {
        let card = Card::from((Suit::Heart, Rank::Eight));
        assert_eq!(Category::from([card, card, card]), Category::SuitedTrips);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(Category::from(hand("Jh Qh Kh")), Category::StraightFlush);
        assert_eq!(Category::from(hand("Ad Qd Kd")), Category::StraightFlush);
    }

    #[test]
    fn trips() {
        assert_eq!(Category::from(hand("5c 5d 5c")), Category::Trips);
        assert_eq!(Category::from(hand("5c 5d 5h")), Category::Trips);
    }

    #[test]
    fn flush() {
        assert_eq!(Category::from(hand("2s 9s Ks")), Category::Flush);
        assert_eq!(Category::from(hand("2s 2s Ks")), Category::Flush);
    }

    #[test]
    fn lose() {
        assert_eq!(Category::from(hand("2s 9d Ks")), Category::Lose);
        assert_eq!(Category::from(hand("2s 2d Ks")), Category::Lose);
    }

    #[test]
    fn single_deck_combinations() {
        let mut tally = [0usize; 6];
        for i in 0..52u8 {
            for j in i + 1..52u8 {
                for k in j + 1..52u8 {
                    let cards = [Card::from(i), Card::from(j), Card::from(k)];
                    tally[usize::from(Category::from(cards))] += 1;
                }
            }
        }
        assert_eq!(tally, [0, 48, 52, 720, 1096, 20184]);
    }
}
