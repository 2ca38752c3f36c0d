//! Keyword sets and language profiles.
//!
//! The identifier recognizer classifies a name as a keyword purely by
//! membership in the active [`KeywordSet`]. The built-in sets are created
//! once and shared for the lifetime of the process.

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Reserved words of the Java profile.
///
/// Includes the literal words `true`, `false` and `null`, and `String`,
/// which the fixtures treat as a keyword.
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "String",
];

/// Reserved words of the C profile (C11).
pub const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

/// A set of words classified as keywords.
///
/// # Example
///
/// ```
/// use jlex_lex::KeywordSet;
///
/// let java = KeywordSet::java();
/// assert!(java.contains("class"));
/// assert!(java.contains("String"));
/// assert!(!java.contains("struct"));
///
/// let custom: KeywordSet = ["let", "fn"].into_iter().collect();
/// assert!(custom.contains("fn"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<Box<str>>,
}

impl KeywordSet {
    /// Creates an empty set; every name is then an identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in Java keyword set.
    pub fn java() -> &'static KeywordSet {
        static JAVA: OnceLock<KeywordSet> = OnceLock::new();
        JAVA.get_or_init(|| JAVA_KEYWORDS.iter().copied().collect())
    }

    /// The built-in C keyword set.
    pub fn c() -> &'static KeywordSet {
        static C: OnceLock<KeywordSet> = OnceLock::new();
        C.get_or_init(|| C_KEYWORDS.iter().copied().collect())
    }

    /// Returns true if `word` is a keyword. Matching is case-sensitive.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Adds a word; returns false if it was already present.
    pub fn insert(&mut self, word: impl Into<Box<str>>) -> bool {
        self.words.insert(word.into())
    }

    /// Removes a word; returns true if it was present.
    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the keywords in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| &**w)
    }
}

impl<S: Into<Box<str>>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<Box<str>>> Extend<S> for KeywordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

/// Language whose keyword set the lexer uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Java reserved words.
    #[default]
    Java,
    /// C11 reserved words.
    C,
}

impl Profile {
    /// Built-in keyword set of the profile.
    pub fn keywords(self) -> &'static KeywordSet {
        match self {
            Profile::Java => KeywordSet::java(),
            Profile::C => KeywordSet::c(),
        }
    }

    /// Lowercase name, as written in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Profile::Java => "java",
            Profile::C => "c",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_set_complete() {
        let java = KeywordSet::java();
        assert_eq!(java.len(), JAVA_KEYWORDS.len());
        for word in ["public", "class", "static", "void", "return", "true", "null", "String"] {
            assert!(java.contains(word), "{word} should be a keyword");
        }
    }

    #[test]
    fn test_case_sensitive() {
        let java = KeywordSet::java();
        assert!(java.contains("String"));
        assert!(!java.contains("string"));
        assert!(!java.contains("Class"));
    }

    #[test]
    fn test_c_set() {
        let c = KeywordSet::c();
        assert!(c.contains("struct"));
        assert!(c.contains("_Bool"));
        assert!(!c.contains("class"));
        assert_eq!(c.len(), C_KEYWORDS.len());
    }

    #[test]
    fn test_builtin_sets_are_shared() {
        assert!(std::ptr::eq(KeywordSet::java(), Profile::Java.keywords()));
        assert!(std::ptr::eq(KeywordSet::c(), Profile::C.keywords()));
    }

    #[test]
    fn test_insert_remove() {
        let mut set = KeywordSet::new();
        assert!(set.is_empty());
        assert!(set.insert("record"));
        assert!(!set.insert("record"));
        set.extend(["var", "yield"]);
        assert_eq!(set.len(), 3);
        assert!(set.remove("var"));
        assert!(!set.contains("var"));
        let mut words: Vec<_> = set.iter().collect();
        words.sort_unstable();
        assert_eq!(words, vec!["record", "yield"]);
    }

    #[test]
    fn test_profile_names() {
        assert_eq!(Profile::default(), Profile::Java);
        assert_eq!(Profile::C.name(), "c");
    }
}
