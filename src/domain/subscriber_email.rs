use std::fmt;

/// Checks the `local@domain.suffix` shape: a single `@`, no whitespace, and a
/// dot after the `@` with at least one character on each side of it.
///
/// No DNS or deliverability checks are made. Callers trim the input first.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(is_form_whitespace) {
        return false;
    }

    let Some((local, host)) = s.split_once('@') else {
        return false;
    };

    if local.is_empty() || host.contains('@') {
        return false;
    }

    host.char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < host.len())
}

/// Whitespace as a browser form sees it: Unicode `White_Space` without NEL
/// (U+0085), plus the byte order mark (U+FEFF).
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if !is_valid_email(&s) {
            return Err(format!("{} is not a valid subscriber email.", s));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        SubscriberEmail::parse(value)
    }
}

impl fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
