pub mod category;
pub use category::*;

pub mod classifier;
pub use classifier::*;

pub mod pairing;
pub use pairing::*;
