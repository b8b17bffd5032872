use clap::Subcommand;

/// Command grammar shared by argv and the line loop.
///
/// Counts stay raw strings so that [`crate::cards::Shoe::parse`] owns
/// validation and its error messages.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Query {
    #[command(
        name = "SIDE",
        alias = "side",
        about = "Exact odds and EV of both side bets for a shoe"
    )]
    Side {
        #[arg(allow_hyphen_values = true, num_args = 0..)]
        counts: Vec<String>,
    },
    #[command(
        name = "EOR",
        alias = "eor",
        about = "Per-rank effect of removal for both side bets"
    )]
    Eor {
        #[arg(allow_hyphen_values = true, num_args = 0..)]
        counts: Vec<String>,
    },
    #[command(name = "HELP", alias = "help", about = "List the commands")]
    Help,
}
