use thiserror::Error;

/// Raised when a recognizer is set up with parameters that do not describe a k-testable
/// language. This is the only error that can occur, classifying a word never fails.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The window size `k` has to be at least one.
    #[error("window size must be at least 1, but k = {0} was given")]
    InvalidWindow(usize),
}

impl ConfigurationError {
    /// Verifies that `k` is a usable window size and passes it through if so.
    pub fn check_window(k: usize) -> Result<usize, Self> {
        if k < 1 {
            Err(Self::InvalidWindow(k))
        } else {
            Ok(k)
        }
    }
}
