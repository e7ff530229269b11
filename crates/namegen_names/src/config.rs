//! Configuration for name analysis.

/// Configuration for [`Name`](crate::Name) analysis and the grammar filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameConfig {
    /// Whether a name without a bound type tries the guessed type first.
    ///
    /// Guessing only changes the order grammars are tried in, never whether
    /// a name is accepted.
    pub guess_type: bool,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self { guess_type: true }
    }
}

impl NameConfig {
    /// Creates a configuration that tries name types in declared order.
    #[must_use]
    pub fn without_guessing() -> Self {
        Self { guess_type: false }
    }

    /// Builder method to enable or disable type guessing.
    #[must_use]
    pub fn with_guess_type(mut self, guess_type: bool) -> Self {
        self.guess_type = guess_type;
        self
    }
}
