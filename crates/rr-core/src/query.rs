//! Query tokenization and classification.
//!
//! A query is split on runs of whitespace and classified exactly once into
//! a tagged variant; the generators dispatch on the variant instead of
//! re-parsing tokens or unwinding through failed parses.

/// A classified roll query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollRequest {
    /// Empty query: perform the configured default roll.
    Default,
    /// One integer token `N`: roll a number from 1 to N.
    SingleInteger(i64),
    /// Two integer tokens `A B`: roll a number between A and B.
    IntegerPair(i64, i64),
    /// Any other token sequence: pick one of the tokens as a label.
    Labels(Vec<String>),
}

impl RollRequest {
    /// Classify a raw query string.
    ///
    /// Integer parsing accepts an optional leading sign and digits only;
    /// anything else selects the label interpretation. Three or more
    /// tokens are always labels, even when every token is numeric.
    pub fn classify(query: &str) -> Self {
        let tokens: Vec<&str> = query.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Self::Default,
            [single] => match parse_integer(single) {
                Some(n) => Self::SingleInteger(n),
                None => Self::Labels(vec![(*single).to_string()]),
            },
            [first, second] => match (parse_integer(first), parse_integer(second)) {
                (Some(a), Some(b)) => Self::IntegerPair(a, b),
                _ => Self::Labels(vec![(*first).to_string(), (*second).to_string()]),
            },
            many => Self::Labels(many.iter().map(|t| (*t).to_string()).collect()),
        }
    }
}

/// Strict signed-integer parse: optional sign, digits, nothing else.
fn parse_integer(token: &str) -> Option<i64> {
    token.parse().ok()
}
