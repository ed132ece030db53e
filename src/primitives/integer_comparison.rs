use super::{scan_integer, Primitive, RawMatch, RawValue};

/// The comparison symbol matched by [`IntegerComparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompOp {
    Lt,
    Le,
    Gt,
    Ge,
}

/// `(<=|>=|<|>) integer`. The two-character forms are tried first so
/// `<=` is never cut short as `<`.
#[derive(Debug, Clone)]
pub struct IntegerComparison {
    precedence: i32,
}

impl IntegerComparison {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for IntegerComparison {
    fn default() -> Self {
        Self::new(9)
    }
}

const SYMBOLS: &[(&str, CompOp)] = &[
    ("<=", CompOp::Le),
    (">=", CompOp::Ge),
    ("<", CompOp::Lt),
    (">", CompOp::Gt),
];

impl Primitive for IntegerComparison {
    fn name(&self) -> &'static str {
        "integer_comparison"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        for (symbol, op) in SYMBOLS {
            if let Some(rest) = input.strip_prefix(symbol) {
                if let Some((len, n)) = scan_integer(rest) {
                    return Some(RawMatch::new(
                        symbol.len() + len,
                        RawValue::Comparison(*op, n),
                    ));
                }
            }
        }
        None
    }
}
