use super::{scan_integer, Primitive, RawMatch, RawValue};

/// `[0-9]+`, parsed as a signed integer.
#[derive(Debug, Clone)]
pub struct Integer {
    precedence: i32,
}

impl Integer {
    pub fn new(precedence: i32) -> Self {
        Self { precedence }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::new(6)
    }
}

impl Primitive for Integer {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let (len, n) = scan_integer(input)?;
        Some(RawMatch::new(len, RawValue::Integer(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_digits() {
        let m = Integer::default().try_match("127 rest").unwrap();
        assert_eq!(m.len, 3);
        assert_eq!(m.value, RawValue::Integer(127));
    }

    #[test]
    fn rejects_non_digit() {
        assert!(Integer::default().try_match("abc").is_none());
    }
}
