use super::eor::Eor;
use super::pairs::PerfectPairs;
use super::twentyone::TwentyOnePlusThree;
use crate::Probability;
use crate::Utility;
use crate::cards::Shoe;

/// An exact side bet engine.
///
/// Engines are pure functions of the shoe: no shared state, safe to run
/// from any thread, and identical output for identical input.
/// `None` means the shoe holds too few cards to settle the bet.
pub trait SideBet: Sized + Send {
    /// Report block heading.
    const NAME: &'static str;
    /// Report keys of the probability buckets, in [`SideBet::buckets`] order.
    const KEYS: &'static [&'static str];

    fn compute(shoe: &Shoe) -> Option<Self>;
    /// Expected profit per unit stake.
    fn ev(&self) -> Utility;
    fn buckets(&self) -> Vec<Probability>;
}

/// Runtime selection between the two engines.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Bet {
    PerfectPairs,
    TwentyOnePlusThree,
}

impl Bet {
    pub const fn all() -> [Self; 2] {
        [Self::PerfectPairs, Self::TwentyOnePlusThree]
    }
    pub fn ev(&self, shoe: &Shoe) -> Option<Utility> {
        match self {
            Self::PerfectPairs => PerfectPairs::compute(shoe).map(|b| b.ev()),
            Self::TwentyOnePlusThree => TwentyOnePlusThree::compute(shoe).map(|b| b.ev()),
        }
    }
    pub fn eor(&self, shoe: &Shoe, base: Option<Utility>) -> Eor {
        match self {
            Self::PerfectPairs => Eor::compute::<PerfectPairs>(shoe, base),
            Self::TwentyOnePlusThree => Eor::compute::<TwentyOnePlusThree>(shoe, base),
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PerfectPairs => PerfectPairs::NAME,
            Self::TwentyOnePlusThree => TwentyOnePlusThree::NAME,
        }
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
