//! Lexer configuration.
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```toml
//! keep_comments = false
//! tab_width = 4
//! profile = "java"
//! extra_keywords = ["var", "record"]
//! max_source_len = 1048576
//! ```

use std::borrow::Cow;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::keywords::{KeywordSet, Profile};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "jlex.toml";

/// Options controlling how source text is tokenized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LexerConfig {
    /// Surface comments as `Comment` tokens instead of trivia.
    #[serde(default)]
    pub keep_comments: bool,

    /// Distance between tab stops for column tracking.
    #[serde(default = "default_tab_width")]
    pub tab_width: u32,

    /// Language whose keyword set is used.
    #[serde(default)]
    pub profile: Profile,

    /// Replaces the profile's keyword set entirely when present.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,

    /// Added on top of the profile (or replacement) keyword set.
    #[serde(default)]
    pub extra_keywords: Vec<String>,

    /// Upper bound on accepted source length in bytes.
    #[serde(default)]
    pub max_source_len: Option<usize>,
}

fn default_tab_width() -> u32 {
    crate::cursor::DEFAULT_TAB_WIDTH
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keep_comments: false,
            tab_width: default_tab_width(),
            profile: Profile::default(),
            keywords: None,
            extra_keywords: Vec::new(),
            max_source_len: None,
        }
    }
}

impl LexerConfig {
    /// Configuration using the given profile and otherwise default options.
    pub fn for_profile(profile: Profile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    /// Sets whether comments are surfaced as tokens.
    pub fn keep_comments(mut self, keep: bool) -> Self {
        self.keep_comments = keep;
        self
    }

    /// Sets the tab stop width.
    pub fn tab_width(mut self, width: u32) -> Self {
        self.tab_width = width;
        self
    }

    /// Sets the source length limit.
    pub fn max_source_len(mut self, limit: usize) -> Self {
        self.max_source_len = Some(limit);
        self
    }

    /// Adds a word to the keyword set.
    pub fn extra_keyword(mut self, word: impl Into<String>) -> Self {
        self.extra_keywords.push(word.into());
        self
    }

    /// Parses and validates a TOML configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use jlex_lex::{LexerConfig, Profile};
    ///
    /// let config = LexerConfig::from_toml_str("profile = \"c\"\ntab_width = 8").unwrap();
    /// assert_eq!(config.profile, Profile::C);
    /// assert_eq!(config.tab_width, 8);
    /// assert!(!config.keep_comments);
    /// ```
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: LexerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            profile = config.profile.name(),
            "loaded lexer config"
        );
        Ok(config)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> ConfigResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Checks field ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tab_width == 0 {
            return Err(ConfigError::Invalid("tab_width must be at least 1".to_string()));
        }
        if self.max_source_len == Some(0) {
            return Err(ConfigError::Invalid(
                "max_source_len must be at least 1".to_string(),
            ));
        }
        if let Some(word) = self
            .keywords
            .iter()
            .flatten()
            .chain(&self.extra_keywords)
            .find(|w| !is_valid_keyword(w))
        {
            return Err(ConfigError::Invalid(format!(
                "keyword `{}` is not a valid identifier",
                word
            )));
        }
        Ok(())
    }

    /// Keyword set described by this configuration.
    ///
    /// Borrows the built-in profile set unless the configuration customizes
    /// it.
    ///
    /// # Example
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use jlex_lex::LexerConfig;
    ///
    /// let config = LexerConfig::default();
    /// assert!(matches!(config.keyword_set(), Cow::Borrowed(_)));
    ///
    /// let config = LexerConfig::default().extra_keyword("var");
    /// assert!(config.keyword_set().contains("var"));
    /// ```
    pub fn keyword_set(&self) -> Cow<'static, KeywordSet> {
        if self.keywords.is_none() && self.extra_keywords.is_empty() {
            return Cow::Borrowed(self.profile.keywords());
        }

        let mut set: KeywordSet = match &self.keywords {
            Some(words) => words.iter().map(String::as_str).collect(),
            None => self.profile.keywords().clone(),
        };
        set.extend(self.extra_keywords.iter().map(String::as_str));
        Cow::Owned(set)
    }
}

fn is_valid_keyword(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(crate::chars::is_ident_start)
        && chars.all(crate::chars::is_ident_continue)
}
