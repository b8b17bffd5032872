pub mod card;
pub use card::*;

pub mod rank;
pub use rank::*;

pub mod shoe;
pub use shoe::*;

pub mod suit;
pub use suit::*;
