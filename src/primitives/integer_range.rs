use super::{scan_integer, Primitive, RawMatch, RawValue};

/// `integer <symbol> integer`, default symbol `..`.
#[derive(Debug, Clone)]
pub struct IntegerRange {
    precedence: i32,
    symbol: String,
}

impl IntegerRange {
    pub fn new(precedence: i32, symbol: impl Into<String>) -> Self {
        Self {
            precedence,
            symbol: symbol.into(),
        }
    }
}

impl Default for IntegerRange {
    fn default() -> Self {
        Self::new(10, "..")
    }
}

impl Primitive for IntegerRange {
    fn name(&self) -> &'static str {
        "integer_range"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (first_len, first) = scan_integer(input)?;
        let rest = &input[first_len..];
        let rest = rest.strip_prefix(self.symbol.as_str())?;
        let (second_len, second) = scan_integer(rest)?;

        let total = first_len + self.symbol.len() + second_len;
        Some(RawMatch::new(total, RawValue::IntRange(first, second)))
    }
}
