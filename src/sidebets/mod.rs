pub mod distribution;
pub use distribution::*;

pub mod eor;
pub use eor::*;

pub mod pairs;
pub use pairs::*;

pub mod report;
pub use report::*;

pub mod twentyone;
pub use twentyone::*;

pub mod wager;
pub use wager::*;
