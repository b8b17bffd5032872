use super::distribution::Distribution;
use super::wager::SideBet;
use crate::Probability;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Shoe;
use crate::evaluation::Category;

/// Exact 21+3 odds for the player's two cards and the dealer's up card.
///
/// The three cards are an ordered draw without replacement. The ordered
/// triple (c1, c2, c3) has weight `n[c1] * (n[c2] - [c2 = c1]) * (n[c3] - [c3 = c1] - [c3 = c2])`
/// out of `N * (N - 1) * (N - 2)`. The category only depends on the
/// unordered hand and each hand is reached by all six of its orderings,
/// so one fixed draw order yields the right distribution.
///
/// This is the expensive sweep: 52³ triples regardless of N.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwentyOnePlusThree(Distribution<6>);

impl TwentyOnePlusThree {
    pub fn suited_trips(&self) -> Probability {
        self.0.mass()[usize::from(Category::SuitedTrips)]
    }
    pub fn straight_flush(&self) -> Probability {
        self.0.mass()[usize::from(Category::StraightFlush)]
    }
    pub fn trips(&self) -> Probability {
        self.0.mass()[usize::from(Category::Trips)]
    }
    pub fn straight(&self) -> Probability {
        self.0.mass()[usize::from(Category::Straight)]
    }
    pub fn flush(&self) -> Probability {
        self.0.mass()[usize::from(Category::Flush)]
    }
    pub fn lose(&self) -> Probability {
        self.0.mass()[usize::from(Category::Lose)]
    }
}

impl SideBet for TwentyOnePlusThree {
    const NAME: &'static str = "21+3";
    const KEYS: &'static [&'static str] = &[
        "p_suited_trips",
        "p_straight_flush",
        "p_trips",
        "p_straight",
        "p_flush",
        "p_lose",
    ];

    fn compute(shoe: &Shoe) -> Option<Self> {
        let n = shoe.size();
        if n < 3 {
            log::debug!("21+3 undefined with {} cards", n);
            return None;
        }
        let n = n as Probability;
        let denom = n * (n - 1.) * (n - 2.);
        let mut dist = Distribution::<6>::default();
        for c1 in Card::all() {
            let n1 = shoe.count(c1);
            if n1 == 0 {
                continue;
            }
            for c2 in Card::all() {
                let n2 = shoe.count(c2) - overlap(c2, &[c1]);
                if n2 == 0 {
                    continue;
                }
                for c3 in Card::all() {
                    let n3 = shoe.count(c3) - overlap(c3, &[c1, c2]);
                    if n3 == 0 {
                        continue;
                    }
                    let w = n1 as Probability * n2 as Probability * n3 as Probability;
                    let category = Category::from([c1, c2, c3]);
                    dist.witness(usize::from(category), category.payout(), w);
                }
            }
        }
        Some(Self(
            dist.divide(denom).settle(usize::from(Category::Lose)),
        ))
    }
    fn ev(&self) -> Utility {
        self.0.ev()
    }
    fn buckets(&self) -> Vec<Probability> {
        vec![
            self.suited_trips(),
            self.straight_flush(),
            self.trips(),
            self.straight(),
            self.flush(),
            self.lose(),
        ]
    }
}

/// Units of `card` already taken by earlier draws.
fn overlap(card: Card, drawn: &[Card]) -> u32 {
    drawn.iter().filter(|&&c| c == card).count() as u32
}
