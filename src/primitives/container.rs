use super::{scan_integer, scan_quoted, scan_word, Primitive, RawMatch, RawValue, SIMPLE_WORD_EXTRA};
use crate::term::value::ContainerItem;

/// `"[" value ("," value)* ","? "]"` where `value` is `integer |
/// partial_string | quoted_string`, longest match wins. Trailing
/// delimiter before the closing bracket is allowed.
#[derive(Debug, Clone)]
pub struct Container {
    precedence: i32,
    delim: char,
}

impl Container {
    pub fn new(precedence: i32, delim: char) -> Self {
        Self { precedence, delim }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(8, ',')
    }
}

fn skip_ws(s: &str) -> &str {
    s.trim_start_matches(|c: char| c.is_whitespace())
}

/// Try `integer`, `partial_string`, `quoted_string` in that order,
/// keeping whichever consumes the most input.
fn match_element(input: &str) -> Option<(usize, ContainerItem)> {
    let mut best: Option<(usize, ContainerItem)> = None;

    if let Some((len, n)) = scan_integer(input) {
        best = Some((len, ContainerItem::Int(n)));
    }
    if let Some((len, word)) = scan_word(input, SIMPLE_WORD_EXTRA, true) {
        if best.as_ref().map(|(l, _)| len > *l).unwrap_or(true) {
            best = Some((len, ContainerItem::PartialString(word)));
        }
    }
    if let Some((len, body)) = scan_quoted(input) {
        let item = if body.contains('*') {
            ContainerItem::PartialString(body)
        } else {
            ContainerItem::ExactString(body)
        };
        if best.as_ref().map(|(l, _)| len > *l).unwrap_or(true) {
            best = Some((len, item));
        }
    }

    best
}

impl Primitive for Container {
    fn name(&self) -> &'static str {
        "container"
    }

    fn precedence(&self) -> i32 {
        self.precedence
    }

    fn try_match(&self, input: &str) -> Option<RawMatch> {
        let mut pos = 0usize;
        if !input.starts_with('[') {
            return None;
        }
        pos += 1;

        let mut items = Vec::new();
        loop {
            let trimmed = skip_ws(&input[pos..]);
            pos += input[pos..].len() - trimmed.len();

            if input[pos..].starts_with(']') {
                break;
            }

            let (len, item) = match_element(&input[pos..])?;
            items.push(item);
            pos += len;

            let trimmed = skip_ws(&input[pos..]);
            pos += input[pos..].len() - trimmed.len();

            if input[pos..].starts_with(self.delim) {
                pos += self.delim.len_utf8();
                let trimmed = skip_ws(&input[pos..]);
                pos += input[pos..].len() - trimmed.len();
            } else {
                break;
            }
        }

        if !input[pos..].starts_with(']') {
            return None;
        }
        pos += 1;

        Some(RawMatch::new(pos, RawValue::Container(items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_mixed_list() {
        let m = Container::default().try_match("[a,b,c]").unwrap();
        assert_eq!(m.len, 7);
        assert_eq!(
            m.value,
            RawValue::Container(vec![
                ContainerItem::PartialString("a".into()),
                ContainerItem::PartialString("b".into()),
                ContainerItem::PartialString("c".into()),
            ])
        );
    }

    #[test]
    fn allows_trailing_delimiter() {
        let m = Container::default().try_match("[1,2,]").unwrap();
        assert_eq!(m.len, 6);
    }

    #[test]
    fn empty_without_closing_bracket_fails() {
        assert!(Container::default().try_match("[a,b").is_none());
    }

    #[test]
    fn integers_become_int_items() {
        let m = Container::default().try_match("[1,2,3]").unwrap();
        assert_eq!(
            m.value,
            RawValue::Container(vec![
                ContainerItem::Int(1),
                ContainerItem::Int(2),
                ContainerItem::Int(3),
            ])
        );
    }
}
