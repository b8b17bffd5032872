pub mod args;
pub use args::*;

pub mod cli;
pub use cli::*;

pub mod desk;
pub use desk::*;

pub mod query;
pub use query::*;

pub mod request;
pub use request::*;
