//! Exact odds for the Perfect Pairs and 21+3 blackjack side bets.
//!
//! Given the remaining composition of a shoe, every ordered draw is
//! enumerated and weighted by its exact probability. Nothing is sampled.
//!
//! ## Modules
//!
//! - [`cards`]: card identities and the Shoe of remaining counts
//! - [`evaluation`]: outcome categories for two- and three-card draws
//! - [`sidebets`]: the two engines, effect of removal and report assembly
//! - [`protocol`]: the text command surface wrapped around the engines
pub mod cards;
pub mod evaluation;
#[cfg(feature = "cli")]
pub mod protocol;
pub mod sidebets;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Expected profit per unit stake.
pub type Utility = f64;
/// Bucket masses and draw weights.
pub type Probability = f64;

// ============================================================================
// SHOE GEOMETRY
// ============================================================================
/// Suits per deck, in input order: clubs, diamonds, hearts, spades.
pub const NUM_SUITS: usize = 4;
/// Ranks per suit, in input order: A 2 3 4 5 6 7 8 9 T J Q K.
pub const NUM_RANKS: usize = 13;
/// Distinct card identities.
pub const NUM_CARDS: usize = NUM_SUITS * NUM_RANKS;

// ============================================================================
// PAYTABLES
// Profit per unit stake. A losing bet returns -1.
// ============================================================================
/// Perfect Pairs: same rank, same suit.
pub const PAYOUT_PERFECT_PAIR: Utility = 25.0;
/// Perfect Pairs: same rank, same colour, different suit.
pub const PAYOUT_COLOURED_PAIR: Utility = 12.0;
/// Perfect Pairs: same rank, different colour.
pub const PAYOUT_MIXED_PAIR: Utility = 6.0;
/// 21+3: three identical cards.
pub const PAYOUT_SUITED_TRIPS: Utility = 100.0;
/// 21+3: three suited cards in sequence.
pub const PAYOUT_STRAIGHT_FLUSH: Utility = 40.0;
/// 21+3: three of a rank, not all suited.
pub const PAYOUT_TRIPS: Utility = 30.0;
/// 21+3: three in sequence, not all suited.
pub const PAYOUT_STRAIGHT: Utility = 10.0;
/// 21+3: three suited, not in sequence.
pub const PAYOUT_FLUSH: Utility = 5.0;
/// Any side bet that does not hit.
pub const PAYOUT_LOSE: Utility = -1.0;

// ============================================================================
// NUMERICS
// ============================================================================
/// Bucket sums further than this from 1 have the residual folded into "lose".
pub const NORMALIZATION_TOLERANCE: Probability = 1e-9;
/// Decimal places when rendering report values.
pub const REPORT_PRECISION: usize = 12;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// stdout is reserved for protocol responses.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}

/// Chainable application, mostly for threading values through closures.
pub trait Pipe: Sized {
    fn pipe<F, R>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}
impl<T> Pipe for T {}
