use super::query::Query;
use crate::cards::Shoe;
use crate::sidebets::EorReport;
use crate::sidebets::Line;
use crate::sidebets::Report;
use crate::sidebets::json;
use crate::sidebets::text;

/// Usage lines printed by `HELP`.
pub const USAGE: [&str; 2] = ["SIDE <52 counts>", "EOR <52 counts>"];

/// How a response is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `key value` lines under each bet heading.
    #[default]
    Lines,
    /// One JSON object keyed by bet heading.
    Json,
}

/// A command whose input has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Side(Shoe),
    Eor(Shoe),
    Help,
}

impl TryFrom<Query> for Request {
    type Error = anyhow::Error;
    fn try_from(query: Query) -> Result<Self, Self::Error> {
        match query {
            Query::Side { counts } => Ok(Self::Side(Shoe::parse(&counts)?)),
            Query::Eor { counts } => Ok(Self::Eor(Shoe::parse(&counts)?)),
            Query::Help => Ok(Self::Help),
        }
    }
}

impl Request {
    /// Full response text, newline terminated.
    pub fn respond(&self, format: Format) -> String {
        match self {
            Self::Side(shoe) => render(&Report::from(shoe).lines(), format),
            Self::Eor(shoe) => render(&EorReport::from(shoe).lines(), format),
            Self::Help => match format {
                Format::Lines => USAGE.map(|usage| format!("{}\n", usage)).concat(),
                Format::Json => format!(
                    "{}\n",
                    serde_json::json!({ "mode": "help", "usage": USAGE })
                ),
            },
        }
    }
}

fn render(lines: &[Line], format: Format) -> String {
    match format {
        Format::Lines => text(lines),
        Format::Json => format!("{}\n", json(lines)),
    }
}

/// Input the line loop refuses. Always rendered as a JSON line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnknownCommand,
    BadInput(String),
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let value = match self {
            Self::UnknownCommand => serde_json::json!({
                "mode": "error",
                "error": "unknown_command",
            }),
            Self::BadInput(detail) => serde_json::json!({
                "mode": "error",
                "error": "bad_input",
                "detail": detail,
            }),
        };
        write!(f, "{}", value)
    }
}
