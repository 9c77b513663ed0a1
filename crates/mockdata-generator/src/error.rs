//! Error type for template resolution.

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Placeholder names a function the engine has no generator for
    #[error("Unknown generator function: {0}")]
    UnknownFunction(String),

    /// Arguments with the wrong arity or types
    #[error("Invalid arguments to {function}(): {reason}")]
    BadArguments {
        /// Function the bad call named
        function: &'static str,
        /// What was wrong with the arguments
        reason: String,
    },

    /// `index()` resolved outside of any repeat block
    #[error("index() used outside of a repeat block")]
    IndexOutsideRepeat,
}

impl GeneratorError {
    /// Shorthand for a [`GeneratorError::BadArguments`].
    pub(crate) fn bad_arguments(function: &'static str, reason: impl Into<String>) -> Self {
        Self::BadArguments {
            function,
            reason: reason.into(),
        }
    }
}
