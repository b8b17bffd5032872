use super::wager::SideBet;
use crate::NUM_CARDS;
use crate::NUM_RANKS;
use crate::Probability;
use crate::Utility;
use crate::cards::Card;
use crate::cards::Rank;
use crate::cards::Shoe;
use crate::cards::Suit;
use rayon::prelude::*;

/// Effect of removing one more card of a rank, suit unknown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    rank: Rank,
    valid: bool,
    delta: Option<Utility>,
}

impl Effect {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    /// False when no card of this rank is left to remove.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
    /// Expected change in EV per unit stake.
    /// None when the rank is depleted or the base EV is undefined.
    pub fn delta(&self) -> Option<Utility> {
        self.delta
    }
    /// Expected change in EV as a percentage of stake.
    pub fn pct(&self) -> Option<Utility> {
        self.delta.map(|d| d * 100.)
    }
}

/// Per-rank effect of removal for one side bet.
///
/// Every identity still in the shoe is removed once from its own scratch
/// copy and the engine is rerun, one independent rayon task per identity.
/// The rank entry is the average of those EV deltas, weighted by how many
/// units of each suit remain within the rank. That is the expected impact
/// when the next card out is known to be of this rank but its suit is not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eor([Effect; NUM_RANKS]);

impl Eor {
    /// Effect of removal against the engine's own EV on this shoe.
    pub fn of<B: SideBet>(shoe: &Shoe) -> Self {
        let base = B::compute(shoe).map(|b| b.ev());
        Self::compute::<B>(shoe, base)
    }

    /// Effect of removal against a precomputed base EV.
    /// An undefined base makes every rank's delta undefined.
    pub fn compute<B: SideBet>(shoe: &Shoe, base: Option<Utility>) -> Self {
        let removed = Self::removals::<B>(shoe);
        Self(Rank::all().map(|rank| Self::aggregate(shoe, base, &removed, rank)))
    }

    pub fn get(&self, rank: Rank) -> &Effect {
        &self.0[u8::from(rank) as usize]
    }
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.0.iter()
    }

    /// Post-removal EV for every identity, indexed like the shoe.
    /// None where the identity is absent or the smaller shoe is undefined.
    fn removals<B: SideBet>(shoe: &Shoe) -> Vec<Option<Utility>> {
        (0..NUM_CARDS as u8)
            .into_par_iter()
            .map(Card::from)
            .map(|card| {
                let ev = shoe
                    .without(card)
                    .and_then(|scratch| B::compute(&scratch))
                    .map(|b| b.ev());
                log::trace!("{} without {}: {:?}", B::NAME, card, ev);
                ev
            })
            .collect()
    }

    fn aggregate(
        shoe: &Shoe,
        base: Option<Utility>,
        removed: &[Option<Utility>],
        rank: Rank,
    ) -> Effect {
        let total = shoe.ranked(rank);
        if total == 0 {
            return Effect {
                rank,
                valid: false,
                delta: None,
            };
        }
        let delta = base.map(|base| {
            Suit::all()
                .into_iter()
                .map(|suit| Card::from((suit, rank)))
                .filter(|&card| shoe.count(card) > 0)
                .filter_map(|card| {
                    removed[card.index()].map(|ev| (shoe.count(card), ev))
                })
                .fold(0., |e, (n, ev)| {
                    e + (n as Probability / total as Probability) * (ev - base)
                })
        });
        Effect {
            rank,
            valid: true,
            delta,
        }
    }
}
