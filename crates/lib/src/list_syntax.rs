//! Textual list syntax.
//!
//! Keyed lists are stored and displayed as lists in a simple brace-grouped
//! syntax:
//!
//! - elements are separated by whitespace
//! - `{...}` groups an element verbatim; braces nest, and a backslash keeps the
//!   following character out of the brace count
//! - `"..."` groups an element with backslash substitution
//! - anything else is a bare word, also with backslash substitution
//!
//! [`split`] parses a list into its elements and [`merge`] builds a list from
//! elements, quoting each one so that `split(&merge(xs)) == xs`.
//!
//! ```
//! use keylist::list_syntax::{merge, split};
//!
//! let text = merge(["name", "John Smith", ""]);
//! assert_eq!(text, "name {John Smith} {}");
//! assert_eq!(split(&text).unwrap(), vec!["name", "John Smith", ""]);
//! ```

use std::borrow::Cow;

use thiserror::Error;

/// Errors produced while splitting malformed list text.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListSyntaxError {
    /// A `{` was never closed
    #[error("unmatched open brace in list")]
    UnmatchedBrace,

    /// A `"` was never closed
    #[error("unmatched open quote in list")]
    UnmatchedQuote,

    /// A closing brace was followed by something other than whitespace
    #[error("list element in braces followed by \"{found}\" instead of space")]
    TrailingAfterBrace { found: String },

    /// A closing quote was followed by something other than whitespace
    #[error("list element in quotes followed by \"{found}\" instead of space")]
    TrailingAfterQuote { found: String },
}

// Conversion from ListSyntaxError to the main Error type
impl From<ListSyntaxError> for crate::Error {
    fn from(err: ListSyntaxError) -> Self {
        crate::Error::ListSyntax(err)
    }
}

/// Returns true for the characters that separate list elements.
pub fn is_list_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Characters that force an element to be quoted.
fn is_special(c: char) -> bool {
    is_list_space(c) || matches!(c, '{' | '}' | '[' | ']' | '$' | ';' | '"' | '\\')
}

/// Splits list text into its elements.
///
/// # Errors
///
/// Fails on unbalanced braces or quotes, and when a braced or quoted element
/// runs directly into the next one.
pub fn split(text: &str) -> Result<Vec<String>, ListSyntaxError> {
    let mut scanner = Scanner::new(text);
    let mut elements = Vec::new();

    loop {
        scanner.skip_space();
        let element = match scanner.peek() {
            None => break,
            Some('{') => {
                scanner.bump();
                scanner.braced()?
            }
            Some('"') => {
                scanner.bump();
                scanner.quoted()?
            }
            Some(_) => scanner.bare(),
        };
        elements.push(element);
    }

    Ok(elements)
}

/// Quotes a single element so that [`split`] yields it back unchanged.
///
/// Elements without special characters are returned as-is. Elements with
/// balanced braces are wrapped in braces; everything else is backslash-escaped.
///
/// ```
/// use keylist::list_syntax::quote;
///
/// assert_eq!(quote("plain"), "plain");
/// assert_eq!(quote(""), "{}");
/// assert_eq!(quote("two words"), "{two words}");
/// assert_eq!(quote("open{"), "open\\{");
/// ```
pub fn quote(element: &str) -> Cow<'_, str> {
    if element.is_empty() {
        return Cow::Borrowed("{}");
    }
    if !element.contains(is_special) {
        return Cow::Borrowed(element);
    }
    if can_brace(element) {
        return Cow::Owned(format!("{{{element}}}"));
    }
    Cow::Owned(escape(element))
}

/// Builds list text from elements, quoting each as needed.
pub fn merge<I, S>(elements: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&quote(element.as_ref()));
    }
    out
}

/// Whether wrapping `element` in braces reads back the same characters.
fn can_brace(element: &str) -> bool {
    let mut depth = 0usize;
    let mut chars = element.chars();
    while let Some(c) = chars.next() {
        match c {
            // A trailing backslash would escape the closing brace.
            '\\' => {
                if chars.next().is_none() {
                    return false;
                }
            }
            '{' => depth += 1,
            '}' => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    depth == 0
}

fn escape(element: &str) -> String {
    let mut out = String::with_capacity(element.len() * 2);
    for c in element.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\x0b' => out.push_str("\\v"),
            '\x0c' => out.push_str("\\f"),
            c if is_special(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_space(&mut self) {
        while self.peek().is_some_and(is_list_space) {
            self.bump();
        }
    }

    /// The word starting at the current position, for error messages.
    fn next_word(&self) -> String {
        self.src[self.pos..]
            .split(is_list_space)
            .next()
            .unwrap_or_default()
            .to_string()
    }

    fn at_separator(&self) -> bool {
        self.peek().is_none_or(is_list_space)
    }

    /// Reads a braced element; the opening brace is already consumed.
    fn braced(&mut self) -> Result<String, ListSyntaxError> {
        let start = self.pos;
        let mut depth = 1usize;
        while let Some(c) = self.bump() {
            match c {
                '\\' => {
                    self.bump();
                }
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        let body = &self.src[start..self.pos - 1];
                        if !self.at_separator() {
                            return Err(ListSyntaxError::TrailingAfterBrace {
                                found: self.next_word(),
                            });
                        }
                        return Ok(body.to_string());
                    }
                }
                _ => {}
            }
        }
        Err(ListSyntaxError::UnmatchedBrace)
    }

    /// Reads a quoted element; the opening quote is already consumed.
    fn quoted(&mut self) -> Result<String, ListSyntaxError> {
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(ListSyntaxError::UnmatchedQuote),
                Some('"') => {
                    if !self.at_separator() {
                        return Err(ListSyntaxError::TrailingAfterQuote {
                            found: self.next_word(),
                        });
                    }
                    return Ok(out);
                }
                Some('\\') => self.backslash(&mut out),
                Some(c) => out.push(c),
            }
        }
    }

    fn bare(&mut self) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if is_list_space(c) {
                break;
            }
            self.bump();
            if c == '\\' {
                self.backslash(&mut out);
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Substitutes one backslash sequence; the backslash is already consumed.
    fn backslash(&mut self, out: &mut String) {
        let Some(c) = self.bump() else {
            out.push('\\');
            return;
        };
        match c {
            'a' => out.push('\x07'),
            'b' => out.push('\x08'),
            'f' => out.push('\x0c'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'v' => out.push('\x0b'),
            'x' => match self.hex_digits(2) {
                Some(code) => out.push(to_char(code)),
                None => out.push('x'),
            },
            'u' => match self.hex_digits(4) {
                Some(code) => out.push(to_char(code)),
                None => out.push('u'),
            },
            '0'..='7' => {
                let mut code = c.to_digit(8).unwrap_or_default();
                for _ in 0..2 {
                    match self.peek().and_then(|d| d.to_digit(8)) {
                        Some(digit) => {
                            self.bump();
                            code = code * 8 + digit;
                        }
                        None => break,
                    }
                }
                out.push(to_char(code & 0xff));
            }
            '\n' => {
                while matches!(self.peek(), Some(' ' | '\t')) {
                    self.bump();
                }
                out.push(' ');
            }
            other => out.push(other),
        }
    }

    fn hex_digits(&mut self, max: usize) -> Option<u32> {
        let mut code = 0;
        let mut count = 0;
        while count < max {
            match self.peek().and_then(|c| c.to_digit(16)) {
                Some(digit) => {
                    self.bump();
                    code = code * 16 + digit;
                    count += 1;
                }
                None => break,
            }
        }
        (count > 0).then_some(code)
    }
}

fn to_char(code: u32) -> char {
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}
