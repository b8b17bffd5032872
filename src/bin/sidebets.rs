//! Side Bet Binary
//!
//! `sidebets SIDE <52 counts>` answers once and exits.
//! With no command, answers one command per stdin line.
//!
//! Options: --json, --threads <n>, --log <level>

use clap::Parser;
use sidebets::protocol::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    sidebets::log(args.log);
    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }
    match args.query.clone() {
        Some(query) => Ok(print!("{}", Request::try_from(query)?.respond(args.format()))),
        None => CLI::new(args.format()).run(),
    }
}
