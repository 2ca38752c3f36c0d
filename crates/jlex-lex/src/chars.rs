//! Character classes used by the recognizers.
//!
//! Classification is ASCII-only: identifiers are `[A-Za-z_][A-Za-z0-9_]*`
//! and anything outside ASCII is left to the invalid-character fallback.

/// Returns true if `c` can start an identifier.
///
/// # Example
///
/// ```
/// use jlex_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
///
/// # Example
///
/// ```
/// use jlex_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue('+'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true for whitespace skipped between tokens.
///
/// Space, tab, form feed, carriage return and line feed.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

/// Converts a hex digit to its value.
///
/// # Example
///
/// ```
/// use jlex_lex::chars::hex_digit_to_value;
///
/// assert_eq!(hex_digit_to_value('0'), Some(0));
/// assert_eq!(hex_digit_to_value('a'), Some(10));
/// assert_eq!(hex_digit_to_value('F'), Some(15));
/// assert_eq!(hex_digit_to_value('g'), None);
/// ```
#[inline]
pub fn hex_digit_to_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Parses exactly four hex digits into a character, as used by `\uXXXX`.
///
/// Surrogate code points are rejected since they are not valid `char`s.
///
/// # Example
///
/// ```
/// use jlex_lex::chars::parse_unicode_escape;
///
/// assert_eq!(parse_unicode_escape("0041"), Some('A'));
/// assert_eq!(parse_unicode_escape("00e9"), Some('é'));
/// assert_eq!(parse_unicode_escape("D800"), None);
/// assert_eq!(parse_unicode_escape("41"), None);
/// ```
pub fn parse_unicode_escape(hex: &str) -> Option<char> {
    if hex.len() != 4 {
        return None;
    }
    let mut value = 0u32;
    for c in hex.chars() {
        value = value * 16 + hex_digit_to_value(c)?;
    }
    char::from_u32(value)
}
