use super::desk::Desk;
use super::query::Query;
use super::request::Format;
use super::request::Rejection;
use super::request::Request;
use crate::Pipe;
use clap::Parser;
use std::io::BufRead;
use std::io::Write;

/// One line of stdin, parsed with the same grammar as argv.
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct Prompt {
    #[command(subcommand)]
    query: Query,
}

/// Line loop: one command per line in, one response out.
pub struct CLI {
    desk: Desk,
    format: Format,
}

impl CLI {
    pub fn new(format: Format) -> Self {
        Self {
            desk: Desk::open(),
            format,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("reading commands from stdin");
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        for input in stdin.lock().lines() {
            let input = input?;
            if input.trim().is_empty() {
                continue;
            }
            stdout.write_all(self.handle(&input)?.as_bytes())?;
            stdout.flush()?;
        }
        log::info!("stdin closed");
        Ok(())
    }

    /// Response to one input line. Rejected input is answered, not raised;
    /// only a failed desk is an error.
    pub fn handle(&self, input: &str) -> anyhow::Result<String> {
        match Prompt::try_parse_from(input.split_whitespace()) {
            Err(_) => Ok(format!("{}\n", Rejection::UnknownCommand)),
            Ok(Prompt { query }) => match Request::try_from(query) {
                Err(e) => {
                    log::warn!("rejected input: {}", e);
                    Ok(format!("{}\n", Rejection::BadInput(e.to_string())))
                }
                Ok(request) => request.pipe(|r| self.desk.submit(r, self.format)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(n: usize, value: &str) -> String {
        vec![value; n].join(" ")
    }

    #[test]
    fn unknown_command() {
        let cli = CLI::new(Format::Lines);
        for input in ["HIT 1 2 3", "quit", "--json"] {
            assert_eq!(
                cli.handle(input).unwrap(),
                "{\"mode\":\"error\",\"error\":\"unknown_command\"}\n"
            );
        }
    }

    #[test]
    fn help_either_case() {
        let cli = CLI::new(Format::Lines);
        assert_eq!(cli.handle("HELP").unwrap(), cli.handle("help").unwrap());
        assert!(cli.handle("HELP").unwrap().starts_with("SIDE <52 counts>"));
    }

    #[test]
    fn bad_input_keeps_going() {
        let cli = CLI::new(Format::Lines);
        let short = cli.handle(&format!("SIDE {}", counts(51, "1"))).unwrap();
        assert!(short.contains("\"error\":\"bad_input\""));
        assert!(short.contains("need 52 integers"));
        let negative = cli.handle(&format!("SIDE -1 {}", counts(51, "1"))).unwrap();
        assert!(negative.contains("negative count at index 0"));
        let word = cli.handle(&format!("EOR x {}", counts(51, "1"))).unwrap();
        assert!(word.contains("non-integer 'x'"));
        let good = cli.handle(&format!("side {}", counts(52, "1"))).unwrap();
        assert!(good.starts_with("Perfect Pairs\nev_pct -47.058823529412\n"));
    }

    #[test]
    fn json_format() {
        let cli = CLI::new(Format::Json);
        let response = cli.handle(&format!("SIDE {}", counts(52, "0"))).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&response).unwrap();
        assert_eq!(value["Perfect Pairs"]["ev_pct"], serde_json::Value::Null);
        assert_eq!(value["21+3"]["p_lose"], serde_json::Value::Null);
    }
}
