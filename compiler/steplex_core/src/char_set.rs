//! Character sets for `accept`/`accept_run`, and predicates for step authors.
//!
//! Nothing here touches the cursor. The engine itself never calls the
//! predicates; they exist so that grammars do not each reinvent them.

use std::ops::RangeInclusive;

/// ASCII decimal digits, for `accept_run(DIGITS)`.
pub const DIGITS: &str = "0123456789";

/// ASCII hexadecimal digits in both cases.
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

/// Horizontal and vertical ASCII whitespace.
pub const WHITESPACE: &str = " \t\r\n";

/// A set of code points the cursor can test membership against.
pub trait CharSet {
    fn contains_char(&self, c: char) -> bool;
}

impl CharSet for char {
    #[inline]
    fn contains_char(&self, c: char) -> bool {
        *self == c
    }
}

/// Any character of the string is a member.
impl CharSet for &str {
    #[inline]
    fn contains_char(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl<const N: usize> CharSet for [char; N] {
    #[inline]
    fn contains_char(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl CharSet for &[char] {
    #[inline]
    fn contains_char(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl CharSet for RangeInclusive<char> {
    #[inline]
    fn contains_char(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl CharSet for fn(char) -> bool {
    #[inline]
    fn contains_char(&self, c: char) -> bool {
        self(c)
    }
}

/// ASCII letter or digit. Non-ASCII letters are not alphanumeric here.
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space or tab. Line breaks are left to the grammar.
#[inline]
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}
