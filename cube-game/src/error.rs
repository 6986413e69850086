//! Error types for record parsing and aggregation

use thiserror::Error;

/// Failure to parse a single game record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameParseError {
    /// The `Game <id>:` header is missing or its id is not a decimal number
    #[error("malformed header: {reason}")]
    MalformedHeader { reason: &'static str },
    /// A cube names a color outside the closed color set
    #[error("unknown color `{name}`")]
    UnknownColor { name: String },
    /// A cube token is not `<count> <color>` or its count is not numeric
    #[error("malformed cube `{token}`: {reason}")]
    MalformedCube { token: String, reason: &'static str },
    /// A draw-set segment between `;` delimiters holds no cubes
    #[error("draw-set {index} is empty")]
    EmptySegment { index: usize },
}

/// A parse failure tied to the input line that caused it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {source} (in `{line}`)")]
pub struct LineError {
    /// 1-based position of the line in the input sequence
    pub line_number: usize,
    /// The offending line, verbatim
    pub line: String,
    #[source]
    pub source: GameParseError,
}

/// Error type for aggregating a sequence of records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// A single record failed to parse
    #[error(transparent)]
    Line(#[from] LineError),
    /// Several records failed to parse (collect-all policy)
    #[error("{} records failed to parse", .0.len())]
    Multiple(Vec<LineError>),
    /// A running total no longer fits in 64 bits
    ///
    /// `failures` holds the malformed lines seen alongside it, in line order.
    #[error("running total overflowed at line {line_number} ({} malformed records)", .failures.len())]
    Overflow {
        line_number: usize,
        failures: Vec<LineError>,
    },
}

impl AggregateError {
    /// Every line failure carried by this error, in input order
    pub fn line_errors(&self) -> &[LineError] {
        match self {
            AggregateError::Line(e) => std::slice::from_ref(e),
            AggregateError::Multiple(v) => v,
            AggregateError::Overflow { failures, .. } => failures,
        }
    }

    pub(crate) fn from_failures(mut failures: Vec<LineError>) -> Option<Self> {
        match failures.len() {
            0 => None,
            1 => failures.pop().map(AggregateError::Line),
            _ => Some(AggregateError::Multiple(failures)),
        }
    }
}

/// Error type for reading capacity tables from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// An entry was not of the form `<color>=<count>`
    #[error("expected `<color>=<count>`, got `{0}`")]
    MissingSeparator(String),
    /// The color is not one of the closed set
    #[error(transparent)]
    Color(#[from] GameParseError),
    /// The count is not a non-negative integer
    #[error("invalid capacity `{value}` for {color}")]
    InvalidCount { color: String, value: String },
}
