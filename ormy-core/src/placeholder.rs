use std::{
    fmt::{self, Display},
    ops::Range,
};

/// A parameter slot inside a statement template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `$1`, `$2`, ... bound by the 1-based position of the parameter.
    Ordinal(usize),
    /// `:identifier` bound by name.
    Named(String),
}

impl Placeholder {
    pub fn kind(&self) -> &'static str {
        match self {
            Placeholder::Ordinal(..) => "ordinal",
            Placeholder::Named(..) => "named",
        }
    }

    pub fn is_ordinal(&self) -> bool {
        matches!(self, Placeholder::Ordinal(..))
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Placeholder::Named(..))
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Ordinal(ordinal) => write!(f, "${ordinal}"),
            Placeholder::Named(name) => write!(f, ":{name}"),
        }
    }
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Iterator over the whole-token placeholders of a statement, in order.
///
/// The digit run after `$` and the identifier run after `:` are always
/// maximal, so `$1` is never found inside `$10` and `:id` never inside `:identity`.
/// A token immediately followed by another token character (`$1a`) is not a
/// placeholder. `::` is a cast operator and never starts a named placeholder,
/// and neither does a colon inside a `'...'` string literal. Ordinal
/// placeholders are found inside string literals too.
pub struct Placeholders<'s> {
    input: &'s str,
    position: usize,
    quoted: bool,
}

impl<'s> Placeholders<'s> {
    pub fn new(input: &'s str) -> Self {
        Self {
            input,
            position: 0,
            quoted: false,
        }
    }

    fn run_end(&self, start: usize, predicate: impl Fn(char) -> bool) -> usize {
        self.input[start..]
            .char_indices()
            .find(|(_, c)| !predicate(*c))
            .map_or(self.input.len(), |(i, _)| start + i)
    }
}

impl Iterator for Placeholders<'_> {
    type Item = (Range<usize>, Placeholder);

    fn next(&mut self) -> Option<Self::Item> {
        while self.position < self.input.len() {
            let rest = &self.input[self.position..];
            let Some(offset) = rest.find(['$', ':', '\'']) else {
                self.position = self.input.len();
                return None;
            };
            let start = self.position + offset;
            let body = start + 1;
            if self.input[start..].starts_with('\'') {
                // `''` toggles twice, so escaped quotes need no special case
                self.quoted = !self.quoted;
                self.position = body;
            } else if self.input[start..].starts_with('$') {
                let end = self.run_end(body, |c| c.is_ascii_digit());
                let whole = end > body && !self.input[end..].starts_with(is_token_char);
                self.position = self.run_end(end, is_token_char).max(body);
                if whole {
                    if let Ok(ordinal) = self.input[body..end].parse::<usize>() {
                        return Some((start..end, Placeholder::Ordinal(ordinal)));
                    }
                }
            } else if self.quoted {
                self.position = body;
            } else {
                if self.input[body..].starts_with(':') {
                    self.position = self.run_end(body, |c| c == ':');
                    continue;
                }
                let starts_identifier = self.input[body..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphabetic() || c == '_');
                if !starts_identifier {
                    self.position = body;
                    continue;
                }
                let end = self.run_end(body, is_token_char);
                self.position = end;
                return Some((
                    start..end,
                    Placeholder::Named(self.input[body..end].to_owned()),
                ));
            }
        }
        None
    }
}

pub fn placeholders(input: &str) -> Placeholders<'_> {
    Placeholders::new(input)
}

/// Rebuilds `input` replacing each placeholder for which `replace` returns a
/// literal. Replacements are written once and never scanned again.
pub(crate) fn substitute<'r>(
    input: &str,
    found: &[(Range<usize>, Placeholder)],
    mut replace: impl FnMut(&Placeholder) -> Option<&'r str>,
) -> String {
    let mut out = String::with_capacity(input.len() + found.len() * 8);
    let mut position = 0;
    for (range, placeholder) in found {
        if let Some(literal) = replace(placeholder) {
            out.push_str(&input[position..range.start]);
            out.push_str(literal);
            position = range.end;
        }
    }
    out.push_str(&input[position..]);
    out
}
