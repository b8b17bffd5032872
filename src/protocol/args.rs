use super::query::Query;
use super::request::Format;
use clap::Parser;

/// Binary flags. A trailing command runs once and exits;
/// without one the binary reads commands from stdin.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None, disable_help_subcommand = true)]
pub struct Args {
    /// Worker threads for the effect-of-removal fan-out.
    #[arg(long)]
    pub threads: Option<usize>,
    /// Log level on stderr.
    #[arg(long, default_value = "warn")]
    pub log: log::LevelFilter,
    /// Render reports as one JSON object.
    #[arg(long)]
    pub json: bool,
    #[command(subcommand)]
    pub query: Option<Query>,
}

impl Args {
    pub fn format(&self) -> Format {
        match self.json {
            true => Format::Json,
            false => Format::Lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["sidebets"]).unwrap();
        assert_eq!(args.threads, None);
        assert_eq!(args.log, log::LevelFilter::Warn);
        assert_eq!(args.format(), Format::Lines);
        assert_eq!(args.query, None);
    }

    #[test]
    fn one_shot() {
        let args = Args::try_parse_from(["sidebets", "--json", "--threads", "2", "side", "1", "-1"])
            .unwrap();
        assert_eq!(args.threads, Some(2));
        assert_eq!(args.format(), Format::Json);
        assert_eq!(
            args.query,
            Some(Query::Side {
                counts: vec!["1".to_string(), "-1".to_string()]
            })
        );
    }

    #[test]
    fn help_is_a_command() {
        let args = Args::try_parse_from(["sidebets", "HELP"]).unwrap();
        assert_eq!(args.query, Some(Query::Help));
    }
}
