use super::eor::Eor;
use super::pairs::PerfectPairs;
use super::twentyone::TwentyOnePlusThree;
use super::wager::Bet;
use super::wager::SideBet;
use crate::Utility;
use crate::cards::Shoe;

/// One rendered report line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// Block heading, e.g. `Perfect Pairs`.
    Heading(&'static str),
    /// `key value`, or `key null` when undefined.
    Number(String, Option<f64>),
    /// `key depleted` for a rank with no cards left.
    Depleted(String),
}

impl Line {
    fn number(key: &str, value: Option<f64>) -> Self {
        Self::Number(key.to_string(), value.filter(|v| v.is_finite()))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Heading(name) => write!(f, "{}", name),
            Self::Number(key, None) => write!(f, "{} null", key),
            Self::Number(key, Some(v)) => write!(f, "{} {:.*}", key, crate::REPORT_PRECISION, v),
            Self::Depleted(key) => write!(f, "{} depleted", key),
        }
    }
}

/// Both side bets evaluated against one shoe.
///
/// The only entry point the outer command layer needs: hand it a
/// validated shoe, get back an ordered list of key/value lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pairs: Option<PerfectPairs>,
    twentyone: Option<TwentyOnePlusThree>,
}

impl Report {
    pub fn pairs(&self) -> Option<&PerfectPairs> {
        self.pairs.as_ref()
    }
    pub fn twentyone(&self) -> Option<&TwentyOnePlusThree> {
        self.twentyone.as_ref()
    }
    pub fn lines(&self) -> Vec<Line> {
        std::iter::empty::<Line>()
            .chain(block(self.pairs.as_ref()))
            .chain(block(self.twentyone.as_ref()))
            .collect()
    }
}

/// EV as a percentage of stake, then each bucket.
/// An undefined bet renders every value as null.
fn block<B: SideBet>(bet: Option<&B>) -> Vec<Line> {
    let ev = bet.map(|b| b.ev() * 100.);
    let buckets = bet.map(|b| b.buckets());
    std::iter::once(Line::Heading(B::NAME))
        .chain(std::iter::once(Line::number("ev_pct", ev)))
        .chain(B::KEYS.iter().enumerate().map(|(i, key)| {
            Line::number(key, buckets.as_ref().map(|buckets| buckets[i]))
        }))
        .collect()
}

impl From<&Shoe> for Report {
    fn from(shoe: &Shoe) -> Self {
        let start = std::time::Instant::now();
        let report = Self {
            pairs: PerfectPairs::compute(shoe),
            twentyone: TwentyOnePlusThree::compute(shoe),
        };
        log::debug!(
            "report for {} cards in {:?}",
            shoe.size(),
            start.elapsed()
        );
        report
    }
}

/// Effect-of-removal tables for both side bets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EorReport {
    pairs: (Option<Utility>, Eor),
    twentyone: (Option<Utility>, Eor),
}

impl EorReport {
    pub fn get(&self, bet: Bet) -> &Eor {
        match bet {
            Bet::PerfectPairs => &self.pairs.1,
            Bet::TwentyOnePlusThree => &self.twentyone.1,
        }
    }
    pub fn lines(&self) -> Vec<Line> {
        std::iter::empty::<Line>()
            .chain(table(Bet::PerfectPairs, self.pairs))
            .chain(table(Bet::TwentyOnePlusThree, self.twentyone))
            .collect()
    }
}

/// Base EV, then the per-rank EV change in percent.
fn table(bet: Bet, (base, eor): (Option<Utility>, Eor)) -> Vec<Line> {
    std::iter::once(Line::Heading(bet.name()))
        .chain(std::iter::once(Line::number(
            "ev_pct",
            base.map(|b| b * 100.),
        )))
        .chain(eor.iter().map(|effect| {
            let key = format!("eor_{}", effect.rank());
            match effect.is_valid() {
                true => Line::number(&key, effect.pct()),
                false => Line::Depleted(key),
            }
        }))
        .collect()
}

impl From<&Shoe> for EorReport {
    fn from(shoe: &Shoe) -> Self {
        let start = std::time::Instant::now();
        let [pairs, twentyone] = Bet::all().map(|bet| {
            let base = bet.ev(shoe);
            (base, bet.eor(shoe, base))
        });
        log::debug!(
            "eor for {} cards in {:?}",
            shoe.size(),
            start.elapsed()
        );
        Self { pairs, twentyone }
    }
}

/// Render lines as text, one per row.
pub fn text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| format!("{}\n", line))
        .collect::<String>()
}

/// Render lines as one JSON object keyed by block heading.
/// Undefined values become JSON null.
pub fn json(lines: &[Line]) -> serde_json::Value {
    let mut root = serde_json::Map::new();
    let mut heading = "";
    for line in lines {
        match line {
            Line::Heading(name) => {
                heading = *name;
                root.insert(heading.to_string(), serde_json::json!({}));
            }
            Line::Number(key, value) => {
                if let Some(block) = root.get_mut(heading).and_then(|b| b.as_object_mut()) {
                    block.insert(key.clone(), serde_json::json!(value));
                }
            }
            Line::Depleted(key) => {
                if let Some(block) = root.get_mut(heading).and_then(|b| b.as_object_mut()) {
                    block.insert(key.clone(), serde_json::json!("depleted"));
                }
            }
        }
    }
    serde_json::Value::Object(root)
}
