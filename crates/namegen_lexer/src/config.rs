//! Configuration for the lexer.

/// Letters of the Czech alphabet beyond ASCII, both cases.
pub const CZECH_LETTERS: &str = "áčďéěíňóřšťúůýžÁČĎÉĚÍŇÓŘŠŤÚŮÝŽ";

/// Configuration for the lexer.
#[derive(Clone, Debug)]
pub struct LexerConfig {
    /// Letters accepted in addition to ASCII letters and [`CZECH_LETTERS`].
    pub extra_letters: Vec<char>,

    /// Upper bound on alternative token sequences for one name. A name with
    /// more is rejected with `TooAmbiguous` rather than cut short.
    pub max_alternatives: usize,

    /// Whether segment readings are cached between calls.
    pub cache: bool,

    /// Most segments kept in the cache; a full cache is emptied before the
    /// next insertion.
    pub cache_capacity: usize,

    /// Longest all-uppercase segment still read as an abbreviation.
    pub abbreviation_max_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            extra_letters: Vec::new(),
            max_alternatives: 1024,
            cache: true,
            cache_capacity: 4096,
            abbreviation_max_len: 4,
        }
    }
}

impl LexerConfig {
    /// Creates a configuration that does not cache segment readings.
    #[must_use]
    pub fn uncached() -> Self {
        Self {
            cache: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that also accepts common Latin letters used in
    /// foreign names (German, Slovak, Polish).
    #[must_use]
    pub fn central_european() -> Self {
        Self {
            extra_letters: "äöüßľĺŕôłńśźżąęÄÖÜĽĹŔÔŁŃŚŹŻĄĘ".chars().collect(),
            ..Self::default()
        }
    }

    /// Builder method to accept more letters.
    #[must_use]
    pub fn with_extra_letters(mut self, letters: impl IntoIterator<Item = char>) -> Self {
        self.extra_letters.extend(letters);
        self
    }

    /// Builder method to set the alternative limit.
    #[must_use]
    pub fn with_max_alternatives(mut self, max: usize) -> Self {
        self.max_alternatives = max.max(1);
        self
    }

    /// Builder method to enable or disable caching.
    #[must_use]
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    /// Builder method to bound the readings cache.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity.max(1);
        self
    }

    /// Builder method to set the abbreviation length limit.
    #[must_use]
    pub fn with_abbreviation_max_len(mut self, len: usize) -> Self {
        self.abbreviation_max_len = len;
        self
    }

    /// Returns true if `c` is a letter of the configured alphabet.
    #[must_use]
    pub fn is_letter(&self, c: char) -> bool {
        c.is_ascii_alphabetic() || CZECH_LETTERS.contains(c) || self.extra_letters.contains(&c)
    }
}
