use super::distribution::Distribution;
use super::wager::SideBet;
use crate::Probability;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Shoe;
use crate::evaluation::Pairing;

/// Exact Perfect Pairs odds for the player's first two cards.
///
/// The two cards are an ordered draw without replacement: the pair of
/// identities (a, b) has probability `n[a] * (n[b] - [a = b]) / (N * (N - 1))`.
/// Every unordered hand is reached by both of its orderings, so the ordered
/// sum is already the correct distribution over hands, including two
/// units of one identity in a multi-deck shoe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectPairs(Distribution<4>);

impl PerfectPairs {
    pub fn perfect(&self) -> Probability {
        self.0.mass()[usize::from(Pairing::Perfect)]
    }
    pub fn coloured(&self) -> Probability {
        self.0.mass()[usize::from(Pairing::Coloured)]
    }
    pub fn mixed(&self) -> Probability {
        self.0.mass()[usize::from(Pairing::Mixed)]
    }
    pub fn lose(&self) -> Probability {
        self.0.mass()[usize::from(Pairing::Lose)]
    }
}

impl SideBet for PerfectPairs {
    const NAME: &'static str = "Perfect Pairs";
    const KEYS: &'static [&'static str] = &["p_perfect", "p_coloured", "p_mixed", "p_lose"];

    /// Fixed 52 x 52 sweep in ascending identity order, whatever N is.
    fn compute(shoe: &Shoe) -> Option<Self> {
        let n = shoe.size();
        if n < 2 {
            log::debug!("perfect pairs undefined with {} cards", n);
            return None;
        }
        let n = n as Probability;
        let denom = n * (n - 1.);
        let mut dist = Distribution::<4>::default();
        for a in Card::all() {
            let na = shoe.count(a);
            if na == 0 {
                continue;
            }
            for b in Card::all() {
                let nb = shoe.count(b) - if a == b { 1 } else { 0 };
                if nb == 0 {
                    continue;
                }
                let p = (na as Probability * nb as Probability) / denom;
                let pairing = Pairing::from((a, b));
                dist.witness(usize::from(pairing), pairing.payout(), p);
            }
        }
        Some(Self(dist.settle(usize::from(Pairing::Lose))))
    }
    fn ev(&self) -> Utility {
        self.0.ev()
    }
    fn buckets(&self) -> Vec<Probability> {
        vec![self.perfect(), self.coloured(), self.mixed(), self.lose()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    #[test]
    fn fresh_deck_closed_form() {
        // one card per identity: each card has exactly one same-colour
        // partner and two other-colour partners among the 51 left
        let pp = PerfectPairs::compute(&Shoe::standard(1)).unwrap();
        assert_eq!(pp.perfect(), 0.);
        assert!((pp.coloured() - 1. / 51.).abs() < 1e-12);
        assert!((pp.mixed() - 2. / 51.).abs() < 1e-12);
        assert!((pp.lose() - 48. / 51.).abs() < 1e-12);
        assert!((pp.ev() - -24. / 51.).abs() < 1e-12);
        assert!((pp.ev() * 100. - -47.058823529411764).abs() < 1e-10);
    }

    #[test]
    fn buckets_partition() {
        for shoe in [Shoe::standard(1), Shoe::standard(6), Shoe::standard(8)] {
            let pp = PerfectPairs::compute(&shoe).unwrap();
            assert!((pp.buckets().iter().sum::<Probability>() - 1.).abs() < 1e-9);
        }
        let mut shoe = Shoe::standard(2);
        Card::all().step_by(3).for_each(|c| {
            shoe.remove(c);
        });
        let pp = PerfectPairs::compute(&shoe).unwrap();
        assert!((pp.buckets().iter().sum::<Probability>() - 1.).abs() < 1e-9);
    }

    #[test]
    fn single_card_is_undefined() {
        let shoe = Shoe::from(vec![Card::from(30)]);
        assert_eq!(PerfectPairs::compute(&shoe), None);
        assert_eq!(PerfectPairs::compute(&Shoe::empty()), None);
    }

    #[test]
    fn two_identical_cards_always_pair() {
        let ace = Card::from((Suit::Club, Rank::Ace));
        let pp = PerfectPairs::compute(&Shoe::from(vec![ace, ace])).unwrap();
        assert_eq!(pp.perfect(), 1.);
        assert_eq!(pp.coloured(), 0.);
        assert_eq!(pp.mixed(), 0.);
        assert_eq!(pp.lose(), 0.);
        assert_eq!(pp.ev() * 100., 2500.);
    }

    #[test]
    fn deterministic() {
        let shoe = Shoe::standard(6);
        assert_eq!(
            PerfectPairs::compute(&shoe),
            PerfectPairs::compute(&shoe)
        );
    }
}
