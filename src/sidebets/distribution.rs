use crate::Probability;
use crate::Utility;

/// Probability mass over N mutually exclusive outcome buckets,
/// plus the expected profit accumulated alongside it.
///
/// Mass is witnessed in enumeration order; callers that accumulate raw
/// draw weights divide once at the end. [`Distribution::settle`] then
/// folds any normalization residual into the catch-all losing bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution<const N: usize> {
    ev: Utility,
    mass: [Probability; N],
}

impl<const N: usize> Default for Distribution<N> {
    fn default() -> Self {
        Self {
            ev: 0.,
            mass: [0.; N],
        }
    }
}

impl<const N: usize> Distribution<N> {
    pub fn ev(&self) -> Utility {
        self.ev
    }
    pub fn mass(&self) -> &[Probability; N] {
        &self.mass
    }
    pub fn total(&self) -> Probability {
        self.mass.iter().sum()
    }

    /// Record `weight` landing in `bucket`, which pays `payout`.
    pub fn witness(&mut self, bucket: usize, payout: Utility, weight: Probability) {
        self.mass[bucket] += weight;
        self.ev += weight * payout;
    }

    /// Turn accumulated raw weights into probabilities.
    pub fn divide(mut self, denom: Probability) -> Self {
        self.mass.iter_mut().for_each(|p| *p /= denom);
        self.ev /= denom;
        self
    }

    /// Fold floating residual into the losing bucket once it exceeds tolerance.
    pub fn settle(mut self, lose: usize) -> Self {
        let total = self.total();
        if (total - 1.).abs() > crate::NORMALIZATION_TOLERANCE {
            self.mass[lose] += 1. - total;
        }
        self
    }
}
